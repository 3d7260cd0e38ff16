//! PNG output
//!
//! Files are written next to their destination under a temporary name and renamed into
//! place only once fully written and synced, so a failed write never leaves a truncated
//! image behind and never clobbers an existing one.

use crate::{Canvas, Result, ThumbnailError};
use std::io::Write;
use std::path::Path;

impl Canvas {
    /// Encode the canvas as an RGBA PNG
    ///
    /// The output carries no timestamps, so identical canvases always encode to identical
    /// bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        #[cfg(feature = "profiling")]
        profiling::scope!("export::encode_png");

        self.pixmap
            .encode_png()
            .map_err(|e| ThumbnailError::PngEncode(e.to_string()))
    }
}

/// Atomically create or replace `path` with `bytes`
///
/// Returns only after the data has been flushed to disk and the file renamed into place.
pub fn write_png(bytes: &[u8], path: &Path) -> Result<()> {
    #[cfg(feature = "profiling")]
    profiling::scope!("export::write_png");

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Removed on drop if anything below fails
    let mut tmp = tempfile::Builder::new()
        .prefix(".thumbnail-")
        .suffix(".png.tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ThumbnailError::Io(e.error))?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CanvasPoint, RouteRenderer, Style};

    fn rendered_canvas() -> Canvas {
        let style = Style::default();
        let mut canvas = Canvas::new(32, style.background).unwrap();
        RouteRenderer::new(&style).render(
            &mut canvas,
            &[CanvasPoint::new(4.0, 28.0), CanvasPoint::new(28.0, 4.0)],
        );
        canvas
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = rendered_canvas().encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = rendered_canvas().encode_png().unwrap();
        let b = rendered_canvas().encode_png().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_png_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"stale").unwrap();

        let bytes = rendered_canvas().encode_png().unwrap();
        write_png(&bytes, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), bytes);
        // No temporary files left next to the output
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_png_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let err = write_png(b"data", &path).unwrap_err();
        assert!(matches!(err, ThumbnailError::Io(_)));
        assert!(!path.exists());
    }
}
