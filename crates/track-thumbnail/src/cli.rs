use clap::{CommandFactory, Parser, error::ErrorKind};
use std::collections::HashSet;
use std::path::PathBuf;
use track_thumbnail_lib::{Color, Config, ConvertJob, Style};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// Track Thumbnail - Render GPX tracks into small PNG previews
///
/// Converts a single file with `track-thumbnail <INPUT> <OUTPUT>`, or many files in
/// parallel with `track-thumbnail --out-dir <DIR> <INPUT>...`.
pub struct Cli {
    /// Input GPX file followed by output PNG file, or only inputs when --out-dir is given
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Directory receiving one `<input-stem>.png` per input
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Width and height of the thumbnail in pixels
    #[arg(long, default_value_t = 256)]
    pub size: u32,

    /// Empty margin around the route in pixels
    #[arg(long, default_value_t = 20)]
    pub padding: u32,

    /// Route line width in pixels
    #[arg(long, default_value_t = 2.0)]
    pub line_width: f32,

    /// Start and end marker radius in pixels
    #[arg(long, default_value_t = 5.0)]
    pub marker_radius: f32,

    /// Background color (name or #rrggbb[aa])
    #[arg(long, default_value = "black")]
    pub background: Color,

    /// Route line color (name or #rrggbb[aa])
    #[arg(long, default_value = "white")]
    pub line_color: Color,

    /// Start and end marker color (name or #rrggbb[aa])
    #[arg(long, default_value = "red")]
    pub marker_color: Color,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            canvas_size: self.size,
            padding: self.padding,
            style: Style {
                background: self.background,
                line_color: self.line_color,
                line_width: self.line_width,
                marker_color: self.marker_color,
                marker_radius: self.marker_radius,
            },
        }
    }

    /// Pair inputs with outputs, rejecting ambiguous or colliding invocations
    pub fn jobs(&self) -> Result<Vec<ConvertJob>, clap::Error> {
        let Some(out_dir) = &self.out_dir else {
            return match self.paths.as_slice() {
                [input, output] => Ok(vec![ConvertJob::new(input, output)]),
                _ => Err(Self::command().error(
                    ErrorKind::WrongNumberOfValues,
                    "expected <INPUT> <OUTPUT>, use --out-dir to convert several files",
                )),
            };
        };

        let mut seen = HashSet::new();
        self.paths
            .iter()
            .map(|input| {
                let stem = input.file_stem().ok_or_else(|| {
                    Self::command().error(
                        ErrorKind::InvalidValue,
                        format!("'{}' has no file name", input.display()),
                    )
                })?;
                let mut file_name = stem.to_os_string();
                file_name.push(".png");
                let output = out_dir.join(file_name);
                if !seen.insert(output.clone()) {
                    return Err(Self::command().error(
                        ErrorKind::ArgumentConflict,
                        format!(
                            "several inputs would be written to '{}'",
                            output.display()
                        ),
                    ));
                }
                Ok(ConvertJob::new(input, output))
            })
            .collect()
    }
}
