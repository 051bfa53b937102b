use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::frame::LumaFrame;
use crate::io::fits::{format_record, FitsHeader, FITS_BLOCK_SIZE};

/// Writes a single-HDU FITS file at the raw byte level.
///
/// Creating the writer truncates any existing file at the path.
pub struct FitsWriter {
    writer: BufWriter<File>,
    header: FitsHeader,
    data_bytes_written: usize,
}

impl FitsWriter {
    /// Create the output file and write the primary header block.
    pub fn create(path: &Path, header: &FitsHeader) -> Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_header(&mut writer, header)?;
        Ok(Self {
            writer,
            header: header.clone(),
            data_bytes_written: 0,
        })
    }

    /// Write the image as the primary data array, row-major.
    pub fn write_image(&mut self, frame: &LumaFrame) -> Result<()> {
        let raw = frame.data.as_slice().expect("frame data is standard layout");
        debug_assert_eq!(raw.len(), self.header.data_byte_size());
        self.writer.write_all(raw)?;
        self.data_bytes_written += raw.len();
        Ok(())
    }

    /// Zero-pad the data to a block boundary, then flush and close the file.
    pub fn finalize(mut self) -> Result<()> {
        let remainder = self.data_bytes_written % FITS_BLOCK_SIZE;
        if remainder != 0 {
            let padding = vec![0u8; FITS_BLOCK_SIZE - remainder];
            self.writer.write_all(&padding)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn write_header(w: &mut impl Write, header: &FitsHeader) -> Result<()> {
    let bitpix = header.bitpix.to_string();
    let naxis1 = header.width.to_string();
    let naxis2 = header.height.to_string();

    let records = [
        format_record("SIMPLE", Some("T")),
        format_record("BITPIX", Some(bitpix.as_str())),
        format_record("NAXIS", Some("2")),
        format_record("NAXIS1", Some(naxis1.as_str())),
        format_record("NAXIS2", Some(naxis2.as_str())),
        format_record("END", None),
    ];

    let mut written = 0;
    for record in &records {
        w.write_all(record)?;
        written += record.len();
    }

    // Header blocks are padded with ASCII spaces, data blocks with zeros.
    let remainder = written % FITS_BLOCK_SIZE;
    if remainder != 0 {
        let padding = vec![b' '; FITS_BLOCK_SIZE - remainder];
        w.write_all(&padding)?;
    }
    Ok(())
}
