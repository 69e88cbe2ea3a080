use image::RgbaImage;
use imgcat_common::{Color, RenderError, Size};

const BYTES_PER_PIXEL: u64 = 4;

/// Allocate the destination buffer, filled with `background`.
///
/// Sizes whose byte count does not fit in memory are reported instead of
/// aborting the process.
pub fn new_canvas(size: Size, background: Color) -> Result<RgbaImage, RenderError> {
    let too_large = || RenderError::CanvasTooLarge {
        width: size.width,
        height: size.height,
    };

    let len = u64::from(size.width)
        .checked_mul(u64::from(size.height))
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .and_then(|bytes| usize::try_from(bytes).ok())
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or_else(too_large)?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| too_large())?;
    let pixel = background.to_array();
    buf.extend(pixel.iter().copied().cycle().take(len));

    RgbaImage::from_raw(size.width, size.height, buf).ok_or_else(too_large)
}
