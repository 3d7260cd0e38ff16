//! Track Thumbnail Library - GPX Track to PNG Preview Pipeline
//!
//! This library turns a recorded GPS track into a small square raster image showing the
//! route's shape, with a marker at the start and end points. It is meant for previews where
//! rendering a full map would be overkill.
//!
//! # Architecture
//!
//! The pipeline is strictly linear, each stage consuming the complete output of the previous:
//!
//! - **[`Track`]**: ordered points extracted from the first segment of the first GPX track
//! - **[`Bounds`]**: tight geographic bounding box of the track
//! - **[`Projector`]**: linear lat/lon to pixel mapping with uniform padding
//! - **[`RouteRenderer`]**: draws the polyline and endpoint markers onto a [`Canvas`]
//! - **[`write_png`]**: atomic PNG output
//!
//! [`convert`] chains all of them for a single file, and [`convert_many`] runs independent
//! conversions in parallel.
//!
//! # Example
//!
//! ```no_run
//! use track_thumbnail_lib::{Config, convert};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! convert("ride.gpx".as_ref(), "ride.png".as_ref(), &Config::default())?;
//! # Ok(())
//! # }
//! ```

mod bounds;
mod config;
mod export;
mod pipeline;
mod projection;
mod render;
mod track;

// Public API exports
pub use bounds::Bounds;
pub use config::{Color, Config, Style};
pub use export::write_png;
pub use pipeline::{ConvertJob, convert, convert_many, render_gpx};
pub use projection::{CanvasPoint, Projector};
pub use render::{Canvas, RouteRenderer};
pub use track::{GeoPoint, Track, read_gpx};

use std::path::PathBuf;

/// Broad failure categories reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed XML or missing track/segment/point structure
    Parse,
    /// The extracted track has no points
    EmptyInput,
    /// Input could not be read or output could not be written
    Io,
    /// Rejected rendering configuration
    Config,
}

/// Error types for the thumbnail pipeline
#[derive(Debug, thiserror::Error)]
pub enum ThumbnailError {
    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error("Missing GPX element: {0}")]
    MissingElement(&'static str),

    #[error("Empty track")]
    EmptyTrack,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    PngEncode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ThumbnailError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThumbnailError::GpxParse(_) | ThumbnailError::MissingElement(_) => ErrorKind::Parse,
            ThumbnailError::EmptyTrack => ErrorKind::EmptyInput,
            ThumbnailError::Io(_) | ThumbnailError::PngEncode(_) => ErrorKind::Io,
            ThumbnailError::InvalidConfig(_) => ErrorKind::Config,
        }
    }
}

/// A pipeline failure together with the file it concerns
#[derive(Debug, thiserror::Error)]
#[error("{}: {source}", .path.display())]
pub struct ConvertError {
    /// Input path for parse and read failures, output path for write failures
    pub path: PathBuf,
    #[source]
    pub source: ThumbnailError,
}

impl ConvertError {
    pub fn new(path: impl Into<PathBuf>, source: ThumbnailError) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

pub type Result<T> = std::result::Result<T, ThumbnailError>;
