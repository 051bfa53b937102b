use std::path::Path;

use ndarray::Array2;

use crate::error::Result;
use crate::frame::LumaFrame;

/// Load an image file and convert it to 8-bit luminance.
///
/// Color sources are desaturated with the imaging library's standard
/// perceptual weighting; grayscale sources pass through unchanged.
pub fn load_luma(path: &Path) -> Result<LumaFrame> {
    let img = image::open(path)?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();

    // GrayImage is already row-major, one byte per pixel.
    let data = Array2::from_shape_vec((h as usize, w as usize), gray.into_raw())
        .expect("buffer size matches dimensions");

    Ok(LumaFrame::new(data))
}
