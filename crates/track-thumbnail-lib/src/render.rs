//! Route rasterization
//!
//! Draw order is fixed: background, polyline, start marker, end marker. Markers are drawn
//! last so they stay visible on top of the line.

use crate::{CanvasPoint, Color, Result, Style, ThumbnailError};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Square raster surface a single thumbnail is drawn on
#[derive(Debug)]
pub struct Canvas {
    pub(crate) pixmap: Pixmap,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(size: u32, background: Color) -> Result<Self> {
        let mut pixmap = Pixmap::new(size, size).ok_or_else(|| {
            ThumbnailError::InvalidConfig(format!("cannot allocate a {size}x{size} canvas"))
        })?;
        pixmap.fill(background.to_skia());
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Straight-alpha color of a pixel, `None` when out of range
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }
}

/// Draws a projected track onto a [`Canvas`]
pub struct RouteRenderer<'a> {
    style: &'a Style,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl<'a> RouteRenderer<'a> {
    pub fn new(style: &'a Style) -> Self {
        Self { style }
    }

    /// Render the route, overwriting whatever the canvas held before
    ///
    /// `points` must be non-empty. A single point produces only the (coinciding) start and
    /// end markers, without a line.
    pub fn render(&self, canvas: &mut Canvas, points: &[CanvasPoint]) {
        let pixmap = &mut canvas.pixmap;
        pixmap.fill(self.style.background.to_skia());

        let (Some(start), Some(end)) = (points.first(), points.last()) else {
            tracing::warn!("No points to render, canvas left with background only");
            return;
        };

        if points.len() >= 2 {
            self.draw_line(pixmap, points);
        }

        self.draw_marker(pixmap, *start);
        self.draw_marker(pixmap, *end);
    }

    fn draw_line(&self, pixmap: &mut Pixmap, points: &[CanvasPoint]) {
        let mut paint = Paint::default();
        paint.set_color(self.style.line_color.to_skia());
        paint.anti_alias = true;

        let stroke = Stroke {
            width: self.style.line_width,
            ..Stroke::default()
        };

        let mut pb = PathBuilder::new();
        pb.move_to(points[0].x as f32, points[0].y as f32);
        for point in &points[1..] {
            pb.line_to(point.x as f32, point.y as f32);
        }

        match pb.finish() {
            Some(path) => {
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
            None => tracing::debug!("Route collapsed to a point, skipping line"),
        }
    }

    fn draw_marker(&self, pixmap: &mut Pixmap, center: CanvasPoint) {
        let mut paint = Paint::default();
        paint.set_color(self.style.marker_color.to_skia());
        paint.anti_alias = true;

        if let Some(circle) = PathBuilder::from_circle(
            center.x as f32,
            center.y as f32,
            self.style.marker_radius,
        ) {
            pixmap.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}
