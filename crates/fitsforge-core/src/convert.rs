use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::io::fits::FitsHeader;
use crate::io::fits_writer::FitsWriter;
use crate::io::image_io::load_luma;

/// Record of one completed conversion.
#[derive(Clone, Debug)]
pub struct Converted {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Convert a single JPEG (or any decodable image) into a single-HDU FITS file.
///
/// The destination is overwritten if it already exists. Exactly one file is
/// written; nothing else is modified.
pub fn convert_to_fits(input: &Path, output: &Path) -> Result<Converted> {
    let frame = load_luma(input)?;
    let width = frame.width() as u32;
    let height = frame.height() as u32;
    debug!("decoded {} ({}x{})", input.display(), width, height);

    let header = FitsHeader::new_u8(width, height);
    let mut writer = FitsWriter::create(output, &header)?;
    writer.write_image(&frame)?;
    writer.finalize()?;
    debug!("wrote {}", output.display());

    Ok(Converted {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
    })
}
