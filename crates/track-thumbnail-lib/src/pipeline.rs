//! End-to-end conversion from GPX files to PNG thumbnails

use crate::{
    Bounds, Canvas, Config, ConvertError, Projector, Result, RouteRenderer, ThumbnailError, Track,
    read_gpx, write_png,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// One input/output pair for [`convert_many`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConvertJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Render an already parsed GPX document onto a fresh canvas
pub fn render_gpx(gpx: &gpx::Gpx, config: &Config) -> Result<Canvas> {
    #[cfg(feature = "profiling")]
    profiling::scope!("pipeline::render_gpx");

    config.validate()?;

    let track = Track::from_gpx(gpx)?;
    let bounds = Bounds::from_track(&track)?;
    let points = Projector::new(bounds, config.canvas_size, config.padding).project_track(&track);

    let mut canvas = Canvas::new(config.canvas_size, config.style.background)?;
    RouteRenderer::new(&config.style).render(&mut canvas, &points);

    tracing::debug!(
        "Rendered {} points ({:.2} km) onto {}px canvas",
        track.len(),
        track.distance_meters() / 1000.0,
        config.canvas_size
    );
    Ok(canvas)
}

/// Convert one GPX file into a PNG thumbnail
///
/// On success the output file exists and is complete. On failure no output is written and
/// an existing file at `output` is left untouched. Errors carry the input path for read,
/// parse and empty-track failures, and the output path for encode and write failures.
pub fn convert(
    input: &Path,
    output: &Path,
    config: &Config,
) -> std::result::Result<(), ConvertError> {
    #[cfg(feature = "profiling")]
    profiling::scope!("pipeline::convert");

    let at_input = |e: ThumbnailError| ConvertError::new(input, e);
    let at_output = |e: ThumbnailError| ConvertError::new(output, e);

    let canvas = {
        let file = File::open(input).map_err(|e| at_input(e.into()))?;
        let gpx = read_gpx(BufReader::new(file)).map_err(at_input)?;
        render_gpx(&gpx, config).map_err(at_input)?
    };

    let bytes = canvas.encode_png().map_err(at_output)?;
    write_png(&bytes, output).map_err(at_output)?;

    tracing::debug!("{} -> {}", input.display(), output.display());
    Ok(())
}

/// Run independent conversions in parallel
///
/// Results are returned in job order. Callers must make sure outputs are distinct.
pub fn convert_many(
    jobs: &[ConvertJob],
    config: &Config,
) -> Vec<std::result::Result<(), ConvertError>> {
    #[cfg(feature = "profiling")]
    profiling::scope!("pipeline::convert_many");

    jobs.par_iter()
        .map(|job| convert(&job.input, &job.output, config))
        .collect()
}
