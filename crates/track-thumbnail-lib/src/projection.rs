//! Linear projection from geographic coordinates to canvas pixels
//!
//! Longitude maps to x over `[padding, size - padding]` and latitude maps to y over the
//! same range inverted, so north is up. This is a plain linear stretch per axis, not a
//! map projection.

use crate::{Bounds, GeoPoint, Track};

/// Pixel-space coordinate, origin top-left, y growing downward
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps points within a [`Bounds`] onto a padded square canvas
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    bounds: Bounds,
    size: f64,
    padding: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Projector {
    pub fn new(bounds: Bounds, canvas_size: u32, padding: u32) -> Self {
        Self {
            bounds,
            size: f64::from(canvas_size),
            padding: f64::from(padding),
        }
    }

    /// Project one point
    ///
    /// An axis with zero extent (single point, or a track along a parallel or meridian)
    /// maps every point to the canvas midline instead of dividing by zero.
    #[inline]
    pub fn project(&self, point: GeoPoint) -> CanvasPoint {
        let b = &self.bounds;
        CanvasPoint {
            x: self.scale(point.lon - b.min_lon, b.lon_span()),
            y: self.scale(b.max_lat - point.lat, b.lat_span()),
        }
    }

    /// Project every point of a track, keeping its order
    pub fn project_track(&self, track: &Track) -> Vec<CanvasPoint> {
        track.points().iter().map(|&p| self.project(p)).collect()
    }

    #[inline]
    fn scale(&self, offset: f64, span: f64) -> f64 {
        // False for zero and NaN spans alike
        if span > 0.0 {
            self.padding + offset / span * (self.size - 2.0 * self.padding)
        } else {
            self.size / 2.0
        }
    }
}
