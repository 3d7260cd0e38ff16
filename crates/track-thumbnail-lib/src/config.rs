//! Rendering configuration
//!
//! All defaults used across the pipeline are defined here and passed explicitly to each
//! stage, so the projector and renderer can be used on their own with custom sizes.

use crate::{Result, ThumbnailError};
use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) RGBA8 color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts `#rrggbb`, `#rrggbbaa` or one of a few CSS color names
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => return Ok(Color::BLACK),
            "white" => return Ok(Color::WHITE),
            "red" => return Ok(Color::RED),
            "green" => return Ok(Color::GREEN),
            "blue" => return Ok(Color::BLUE),
            _ => {}
        }

        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("unknown color '{s}', expected a name or #rrggbb[aa]"))?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(format!("invalid hex color '{s}', expected #rrggbb or #rrggbbaa"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| format!("invalid hex digits in color '{s}'"))
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Colors and stroke geometry of a thumbnail
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Canvas fill applied before drawing. Default: black
    pub background: Color,
    /// Polyline color. Default: white
    pub line_color: Color,
    /// Polyline stroke width in pixels. Default: 2
    pub line_width: f32,
    /// Start and end marker color. Default: red
    pub marker_color: Color,
    /// Start and end marker radius in pixels. Default: 5
    pub marker_radius: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            line_color: Color::WHITE,
            line_width: 2.0,
            marker_color: Color::RED,
            marker_radius: 5.0,
        }
    }
}

/// Configuration shared by every pipeline stage
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Width and height of the square canvas in pixels. Default: 256
    pub canvas_size: u32,
    /// Empty margin kept on all four sides, in pixels. Default: 20
    pub padding: u32,
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_size: 256,
            padding: 20,
            style: Style::default(),
        }
    }
}

impl Config {
    /// Reject configurations that cannot produce a drawable canvas
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(ThumbnailError::InvalidConfig(
                "canvas size must be positive".to_string(),
            ));
        }
        if u64::from(self.padding) * 2 >= u64::from(self.canvas_size) {
            return Err(ThumbnailError::InvalidConfig(format!(
                "padding {} leaves no drawable area on a {}px canvas",
                self.padding, self.canvas_size
            )));
        }
        let style = &self.style;
        if style.background.a != 255 {
            return Err(ThumbnailError::InvalidConfig(format!(
                "background {} must be opaque",
                style.background
            )));
        }
        if !(style.line_width.is_finite() && style.line_width > 0.0) {
            return Err(ThumbnailError::InvalidConfig(format!(
                "line width must be positive, got {}",
                style.line_width
            )));
        }
        if !(style.marker_radius.is_finite() && style.marker_radius > 0.0) {
            return Err(ThumbnailError::InvalidConfig(format!(
                "marker radius must be positive, got {}",
                style.marker_radius
            )));
        }
        Ok(())
    }
}
