//! Decoding inputs and drawing them onto the canvas.

use std::path::Path;

use image::{imageops, DynamicImage, ImageReader, RgbaImage};
use imgcat_common::{CompositePolicy, RenderError};
use imgcat_layout::Placement;
use tracing::{debug, warn};

/// Decode the image at `path`, detecting the format from its contents.
pub fn decode(path: &Path) -> Result<DynamicImage, RenderError> {
    let decode_error = |reason: String| RenderError::Decode {
        path: path.to_path_buf(),
        reason,
    };
    ImageReader::open(path)
        .map_err(|e| decode_error(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))
}

/// Copy one cell out of `source` into `canvas` at `placement.dest`.
///
/// The copied region starts at `placement.source` and is clipped to the
/// source image; canvas pixels outside the clipped region are untouched.
pub fn blit(
    canvas: &mut RgbaImage,
    source: &DynamicImage,
    placement: &Placement,
    policy: CompositePolicy,
) -> Result<(), RenderError> {
    let dest = placement.dest;
    if dest.x1 > canvas.width() || dest.y1 > canvas.height() {
        return Err(RenderError::Draw {
            index: placement.index,
            reason: format!(
                "destination {dest} exceeds canvas {}x{}",
                canvas.width(),
                canvas.height()
            ),
        });
    }

    let origin = placement.source;
    let tile = source
        .crop_imm(origin.x, origin.y, dest.width(), dest.height())
        .to_rgba8();
    if tile.dimensions() != (dest.width(), dest.height()) {
        warn!(
            index = placement.index,
            source = %format!("{}x{}", source.width(), source.height()),
            copied = %format!("{}x{}", tile.width(), tile.height()),
            "source image smaller than cell, copying the overlapping part"
        );
    }

    let (x, y) = (i64::from(dest.x0), i64::from(dest.y0));
    match policy {
        CompositePolicy::Overwrite => imageops::replace(canvas, &tile, x, y),
        CompositePolicy::Overlay => imageops::overlay(canvas, &tile, x, y),
    }
    Ok(())
}

/// Decodes each input and draws it with a fixed [`CompositePolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor {
    pub policy: CompositePolicy,
}

impl Compositor {
    pub fn new(policy: CompositePolicy) -> Self {
        Self { policy }
    }

    /// Decode `path` and draw it onto `canvas`. The decoded image is dropped
    /// before returning.
    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        placement: &Placement,
        path: &Path,
    ) -> Result<(), RenderError> {
        let source = decode(path)?;
        debug!(
            index = placement.index,
            file = %path.display(),
            dest = %placement.dest,
            policy = %self.policy,
            "drawing"
        );
        blit(canvas, &source, placement, self.policy)
    }
}
