//! Track extraction from parsed GPX documents
//!
//! Only the first segment of the first track is used. Waypoints, routes, timestamps,
//! elevation and extensions are ignored.

use crate::{Result, ThumbnailError};
use geo::{Distance, Haversine, Point};
use std::io::Read;

/// One recorded track sample in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<Point<f64>> for GeoPoint {
    /// GPX points store longitude as x and latitude as y
    #[inline]
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<GeoPoint> for Point<f64> {
    #[inline]
    fn from(point: GeoPoint) -> Self {
        Point::new(point.lon, point.lat)
    }
}

/// Parse raw GPX text into a document
///
/// Malformed XML and missing or non-numeric `lat`/`lon` attributes are reported as
/// [`ThumbnailError::GpxParse`]. So is a `<gpx>` root without a `version` attribute,
/// which the `gpx` crate requires.
pub fn read_gpx<R: Read>(reader: R) -> Result<gpx::Gpx> {
    #[cfg(feature = "profiling")]
    profiling::scope!("track::read_gpx");

    Ok(gpx::read(reader)?)
}

/// Ordered sequence of points defining the drawing order of a thumbnail
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    points: Vec<GeoPoint>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Track {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Extract the first segment of the first track, preserving document order
    ///
    /// # Errors
    /// [`ThumbnailError::MissingElement`] when the document has no track or the first
    /// track has no segment. An empty segment is not an error here; it produces an
    /// empty track that [`crate::Bounds::from_track`] rejects.
    pub fn from_gpx(gpx: &gpx::Gpx) -> Result<Self> {
        let track = gpx
            .tracks
            .first()
            .ok_or(ThumbnailError::MissingElement("trk"))?;
        let segment = track
            .segments
            .first()
            .ok_or(ThumbnailError::MissingElement("trkseg"))?;

        if gpx.tracks.len() > 1 {
            tracing::warn!(
                "Ignoring {} additional track(s), only the first is rendered",
                gpx.tracks.len() - 1
            );
        }
        if track.segments.len() > 1 {
            tracing::warn!(
                "Ignoring {} additional segment(s) of the first track",
                track.segments.len() - 1
            );
        }

        let points: Vec<GeoPoint> = segment
            .points
            .iter()
            .map(|waypoint| GeoPoint::from(waypoint.point()))
            .collect();

        tracing::debug!("Extracted {} track points", points.len());
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    /// Total great-circle length in meters
    pub fn distance_meters(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| Haversine.distance(Point::from(pair[0]), Point::from(pair[1])))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpx::{Gpx, TrackSegment, Waypoint};

    fn create_test_waypoint(lat: f64, lon: f64) -> Waypoint {
        Waypoint::new(Point::new(lon, lat))
    }

    fn create_test_gpx(segments: Vec<Vec<(f64, f64)>>) -> Gpx {
        let mut gpx = Gpx::default();
        let mut track = gpx::Track::default();
        for coords in segments {
            let mut segment = TrackSegment::default();
            for (lat, lon) in coords {
                segment.points.push(create_test_waypoint(lat, lon));
            }
            track.segments.push(segment);
        }
        gpx.tracks.push(track);
        gpx
    }

    #[test]
    fn test_extract_preserves_order() {
        let gpx = create_test_gpx(vec![vec![
            (51.5074, -0.1278),
            (51.5076, -0.1276),
            (51.5072, -0.1280),
        ]]);
        let track = Track::from_gpx(&gpx).unwrap();

        assert_eq!(track.len(), 3);
        assert_eq!(track.first(), Some(GeoPoint::new(51.5074, -0.1278)));
        assert_eq!(track.points()[1], GeoPoint::new(51.5076, -0.1276));
        assert_eq!(track.last(), Some(GeoPoint::new(51.5072, -0.1280)));
    }

    #[test]
    fn test_only_first_segment_is_used() {
        let gpx = create_test_gpx(vec![vec![(1.0, 2.0)], vec![(3.0, 4.0), (5.0, 6.0)]]);
        let track = Track::from_gpx(&gpx).unwrap();

        assert_eq!(track.points(), &[GeoPoint::new(1.0, 2.0)]);
    }

    #[test]
    fn test_missing_track_fails() {
        let err = Track::from_gpx(&Gpx::default()).unwrap_err();
        assert!(matches!(err, ThumbnailError::MissingElement("trk")));
    }

    #[test]
    fn test_missing_segment_fails() {
        let gpx = create_test_gpx(vec![]);
        let err = Track::from_gpx(&gpx).unwrap_err();
        assert!(matches!(err, ThumbnailError::MissingElement("trkseg")));
    }

    #[test]
    fn test_empty_segment_gives_empty_track() {
        let gpx = create_test_gpx(vec![vec![]]);
        let track = Track::from_gpx(&gpx).unwrap();
        assert!(track.is_empty());
    }

    #[test]
    fn test_read_gpx_parses_attributes() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk><trkseg>
    <trkpt lat="10.5" lon="-20.25"><ele>12</ele></trkpt>
  </trkseg></trk>
</gpx>"#;
        let gpx = read_gpx(xml.as_bytes()).unwrap();
        let track = Track::from_gpx(&gpx).unwrap();
        assert_eq!(track.points(), &[GeoPoint::new(10.5, -20.25)]);
    }

    #[test]
    fn test_read_gpx_rejects_non_numeric_coordinate() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk><trkseg><trkpt lat="north" lon="1.0"></trkpt></trkseg></trk>
</gpx>"#;
        let err = read_gpx(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, ThumbnailError::GpxParse(_)));
    }

    #[test]
    fn test_read_gpx_requires_version() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx creator="test">
  <trk><trkseg><trkpt lat="1.0" lon="2.0"></trkpt></trkseg></trk>
</gpx>"#;
        let err = read_gpx(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, ThumbnailError::GpxParse(_)));
    }

    #[test]
    fn test_distance() {
        let track = Track::new(vec![
            GeoPoint::new(51.5074, -0.1278),
            GeoPoint::new(51.5076, -0.1276),
            GeoPoint::new(51.5078, -0.1274),
        ]);
        let distance = track.distance_meters();
        // Points around London a few tens of meters apart
        assert!(distance > 0.0);
        assert!(distance < 1000.0);

        assert_eq!(Track::new(vec![GeoPoint::new(0.0, 0.0)]).distance_meters(), 0.0);
    }
}
