//! Output format selection and atomic file writing.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageResult, RgbaImage};
use imgcat_common::RenderError;
use tempfile::NamedTempFile;
use tracing::info;

/// Encoding chosen from the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    /// Alpha is dropped on encode.
    Jpeg { quality: u8 },
}

impl OutputFormat {
    /// `.png`, `.jpg` and `.jpeg` (any case) are recognised.
    pub fn from_path(path: &Path, quality: u8) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("jpg" | "jpeg") => Ok(OutputFormat::Jpeg { quality }),
            _ => Err(RenderError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Encode `canvas` into `writer`.
pub fn encode<W: Write>(canvas: &RgbaImage, format: OutputFormat, writer: W) -> ImageResult<()> {
    match format {
        OutputFormat::Png => canvas.write_with_encoder(PngEncoder::new(writer)),
        OutputFormat::Jpeg { quality } => {
            let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, quality))
        }
    }
}

/// Encode `canvas` to `path`.
///
/// The image is written to a temporary file next to `path` and renamed into
/// place only once encoding succeeded, so a failure never leaves a partial
/// output behind.
pub fn write_output(
    canvas: &RgbaImage,
    path: &Path,
    format: OutputFormat,
) -> Result<(), RenderError> {
    let encode_error = |reason: String| RenderError::Encode {
        path: path.to_path_buf(),
        reason,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| encode_error(e.to_string()))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        encode(canvas, format, &mut writer).map_err(|e| encode_error(e.to_string()))?;
        writer.flush().map_err(|e| encode_error(e.to_string()))?;
    }

    tmp.persist(path)
        .map_err(|e| encode_error(e.error.to_string()))?;

    info!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "wrote output"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checkerboard() -> RgbaImage {
        RgbaImage::from_fn(6, 4, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([10, 200, 30, 255])
            } else {
                Rgba([250, 5, 90, 128])
            }
        })
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out.png"), 90).unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.JPG"), 75).unwrap(),
            OutputFormat::Jpeg { quality: 75 }
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("dir/out.jpeg"), 90).unwrap(),
            OutputFormat::Jpeg { quality: 90 }
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        for name in ["out.bmp", "out", "out.png.txt"] {
            let err = OutputFormat::from_path(Path::new(name), 90).unwrap_err();
            assert!(matches!(err, RenderError::UnsupportedFormat(_)), "{name}");
        }
    }

    #[test]
    fn png_round_trip_is_lossless() {
        let canvas = checkerboard();
        let mut bytes = Vec::new();
        encode(&canvas, OutputFormat::Png, &mut bytes).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, canvas);
    }

    #[test]
    fn png_encoding_is_deterministic() {
        let canvas = checkerboard();
        let mut first = Vec::new();
        let mut second = Vec::new();
        encode(&canvas, OutputFormat::Png, &mut first).unwrap();
        encode(&canvas, OutputFormat::Png, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn jpeg_keeps_dimensions() {
        let canvas = checkerboard();
        let mut bytes = Vec::new();
        encode(&canvas, OutputFormat::Jpeg { quality: 90 }, &mut bytes).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (6, 4));
    }

    #[test]
    fn write_output_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_output(&checkerboard(), &path, OutputFormat::Png).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded, checkerboard());
        // Only the output remains in the directory.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn failed_encode_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        // PNG cannot encode a zero-sized image.
        let result = write_output(&RgbaImage::new(0, 0), &path, OutputFormat::Png);
        assert!(matches!(result, Err(RenderError::Encode { .. })));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_directory_is_an_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let result = write_output(&checkerboard(), &path, OutputFormat::Png);
        assert!(matches!(result, Err(RenderError::Encode { .. })));
    }
}
