use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitsForgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FITS file: {0}")]
    InvalidFits(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unsupported BITPIX: {0}")]
    UnsupportedBitpix(i64),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, FitsForgeError>;
