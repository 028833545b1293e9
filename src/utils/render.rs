/// Raster and text rendering of a finished module grid
use std::path::Path;

use image::{GrayImage, Luma};

use crate::models::QRCode;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rendering failures
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Each module needs at least one pixel
    #[error("box size must be greater than zero")]
    ZeroBoxSize,
    /// The grid does not fit the image dimension type
    #[error("image of {0} pixels per side is too large")]
    TooLarge(usize),
    /// Writing the image failed
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Grayscale image with `box_size` pixels per module, quiet zone included
pub fn to_image(qr: &QRCode, box_size: u32) -> Result<GrayImage, RenderError> {
    if box_size == 0 {
        return Err(RenderError::ZeroBoxSize);
    }
    let modules = qr.size();
    let side = modules
        .checked_mul(box_size as usize)
        .filter(|&s| s <= u32::MAX as usize)
        .ok_or(RenderError::TooLarge(modules.saturating_mul(box_size as usize)))?;

    let bitmap = qr.bitmap();
    let side = side as u32;
    Ok(GrayImage::from_fn(side, side, |x, y| {
        let row = (y / box_size) as usize;
        let col = (x / box_size) as usize;
        if bitmap[row][col] { DARK } else { LIGHT }
    }))
}

/// Two characters per module, one line per row, quiet zone included
pub fn to_text(qr: &QRCode) -> String {
    let bitmap = qr.bitmap();
    let mut out = String::with_capacity(bitmap.len() * (bitmap.len() * 2 * 3 + 1));
    for row in &bitmap {
        for &dark in row {
            out.push_str(if dark { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// Render and write a PNG file
pub fn save_png<P: AsRef<Path>>(qr: &QRCode, box_size: u32, path: P) -> Result<(), RenderError> {
    to_image(qr, box_size)?.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
