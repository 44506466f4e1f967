use std::convert::TryFrom;
use std::path::Path;

use image::{GrayImage, Luma};
use log::info;

use crate::error::{Error, Result};
use crate::renderer::PixelBuffer;

/// Converts `buffer` to an 8 bit grayscale image, drawing every logical pixel
/// as a `scale x scale` square.
pub fn to_image(buffer: &PixelBuffer, scale: u32) -> Result<GrayImage> {
    let invalid = || Error::InvalidDimensions {
        width: buffer.width().saturating_mul(scale as usize),
        height: buffer.height().saturating_mul(scale as usize),
    };
    if scale == 0 {
        return Err(invalid());
    }

    let width = u32::try_from(buffer.width())
        .ok()
        .and_then(|w| w.checked_mul(scale))
        .ok_or_else(invalid)?;
    let height = u32::try_from(buffer.height())
        .ok()
        .and_then(|h| h.checked_mul(scale))
        .ok_or_else(invalid)?;

    Ok(GrayImage::from_fn(width, height, |x, y| {
        let pixel = buffer.get((x / scale) as usize, (y / scale) as usize);
        Luma([pixel.into()])
    }))
}

/// Writes `buffer` to `path`, the format picked from the file extension.
pub fn save<P: AsRef<Path>>(buffer: &PixelBuffer, path: P, scale: u32) -> Result<()> {
    let path = path.as_ref();
    let image = to_image(buffer, scale)?;
    image.save(path)?;
    info!(
        "wrote {}x{} maze image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
