//! Geographic bounding box of a track

use crate::{Result, ThumbnailError, Track};

/// Minimal axis-aligned box containing every point of a track, in degrees
///
/// A box is degenerate when one of its extents is zero, which happens for single-point
/// tracks and for tracks running exactly along a parallel or meridian. Degenerate boxes
/// are valid; [`crate::Projector`] centers the collapsed axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Bounds {
    /// Compute the tight bounds of a track
    ///
    /// # Errors
    /// [`ThumbnailError::EmptyTrack`] when the track has no points.
    pub fn from_track(track: &Track) -> Result<Self> {
        let first = track.first().ok_or(ThumbnailError::EmptyTrack)?;

        let bounds = track.points()[1..].iter().fold(
            Bounds {
                min_lat: first.lat,
                max_lat: first.lat,
                min_lon: first.lon,
                max_lon: first.lon,
            },
            |b, p| Bounds {
                min_lat: b.min_lat.min(p.lat),
                max_lat: b.max_lat.max(p.lat),
                min_lon: b.min_lon.min(p.lon),
                max_lon: b.max_lon.max(p.lon),
            },
        );

        tracing::debug!(?bounds, "Computed track bounds");
        Ok(bounds)
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// True when either extent is zero
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lat_span() == 0.0 || self.lon_span() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint;

    fn track(coords: &[(f64, f64)]) -> Track {
        Track::new(
            coords
                .iter()
                .map(|&(lat, lon)| GeoPoint::new(lat, lon))
                .collect(),
        )
    }

    #[test]
    fn test_bounds_are_tight() {
        let t = track(&[(51.5, -0.2), (51.7, -0.1), (51.6, -0.3), (51.4, 0.0)]);
        let b = Bounds::from_track(&t).unwrap();

        assert_eq!(b.min_lat, 51.4);
        assert_eq!(b.max_lat, 51.7);
        assert_eq!(b.min_lon, -0.3);
        assert_eq!(b.max_lon, 0.0);

        for p in t.points() {
            assert!((b.min_lat..=b.max_lat).contains(&p.lat));
            assert!((b.min_lon..=b.max_lon).contains(&p.lon));
        }
        // Every edge is touched by at least one point
        assert!(t.points().iter().any(|p| p.lat == b.min_lat));
        assert!(t.points().iter().any(|p| p.lat == b.max_lat));
        assert!(t.points().iter().any(|p| p.lon == b.min_lon));
        assert!(t.points().iter().any(|p| p.lon == b.max_lon));
        assert!(!b.is_degenerate());
    }

    #[test]
    fn test_empty_track_fails() {
        let err = Bounds::from_track(&Track::default()).unwrap_err();
        assert!(matches!(err, ThumbnailError::EmptyTrack));
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let b = Bounds::from_track(&track(&[(5.0, 5.0)])).unwrap();
        assert_eq!(b.lat_span(), 0.0);
        assert_eq!(b.lon_span(), 0.0);
        assert!(b.is_degenerate());
    }

    #[test]
    fn test_flat_latitude_is_degenerate() {
        let b = Bounds::from_track(&track(&[(10.0, 1.0), (10.0, 3.0)])).unwrap();
        assert_eq!(b.lat_span(), 0.0);
        assert_eq!(b.lon_span(), 2.0);
        assert!(b.is_degenerate());
    }
}
