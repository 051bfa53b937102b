use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use ndarray::Array2;

use crate::error::{FitsForgeError, Result};

/// FITS files are organized in fixed-size blocks.
pub const FITS_BLOCK_SIZE: usize = 2880;
/// Each header record is one fixed-width ASCII card.
pub const FITS_RECORD_SIZE: usize = 80;

const RECORDS_PER_BLOCK: usize = FITS_BLOCK_SIZE / FITS_RECORD_SIZE;

/// Primary HDU header for a 2-D image.
#[derive(Clone, Debug)]
pub struct FitsHeader {
    pub bitpix: i64,
    pub width: u32,
    pub height: u32,
}

impl FitsHeader {
    /// Header for an 8-bit unsigned image of the given dimensions.
    pub fn new_u8(width: u32, height: u32) -> Self {
        Self {
            bitpix: 8,
            width,
            height,
        }
    }

    /// Bytes per pixel sample (BITPIX counts bits, negative for floats).
    pub fn bytes_per_sample(&self) -> usize {
        self.bitpix.unsigned_abs() as usize / 8
    }

    /// Total bytes in the data array, before block padding.
    pub fn data_byte_size(&self) -> usize {
        let pixels = (self.width as usize)
            .checked_mul(self.height as usize)
            .expect("image dimensions too large");
        pixels
            .checked_mul(self.bytes_per_sample())
            .expect("data size calculation overflow")
    }
}

/// Format one 80-byte header record.
///
/// Keyword goes left-justified in the first 8 columns; fixed-format values
/// are right-justified so they end at column 30.
pub(crate) fn format_record(keyword: &str, value: Option<&str>) -> [u8; FITS_RECORD_SIZE] {
    let mut record = [b' '; FITS_RECORD_SIZE];
    let kw = keyword.as_bytes();
    let kw_len = kw.len().min(8);
    record[..kw_len].copy_from_slice(&kw[..kw_len]);

    if let Some(value) = value {
        record[8] = b'=';
        let bytes = value.as_bytes();
        let start = 30usize.saturating_sub(bytes.len()).max(10);
        let len = bytes.len().min(FITS_RECORD_SIZE - start);
        record[start..start + len].copy_from_slice(&bytes[..len]);
    }
    record
}

/// Memory-mapped FITS file reader.
///
/// Understands single-HDU primary images, which is all the writer in this
/// crate produces.
#[derive(Debug)]
pub struct FitsReader {
    mmap: Mmap,
    pub header: FitsHeader,
    data_start: usize,
}

impl FitsReader {
    /// Open a FITS file and parse its primary header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < FITS_BLOCK_SIZE {
            return Err(FitsForgeError::InvalidFits(
                "File too small for FITS header".into(),
            ));
        }
        if &mmap[..6] != b"SIMPLE" {
            return Err(FitsForgeError::InvalidFits("Missing SIMPLE keyword".into()));
        }

        let (header, data_start) = parse_header(&mmap)?;

        let expected_data_size = data_start + header.data_byte_size();
        if mmap.len() < expected_data_size {
            return Err(FitsForgeError::InvalidFits(format!(
                "File truncated: expected at least {} bytes, got {}",
                expected_data_size,
                mmap.len()
            )));
        }

        Ok(Self {
            mmap,
            header,
            data_start,
        })
    }

    /// Read the primary data array as an 8-bit image.
    pub fn read_image(&self) -> Result<Array2<u8>> {
        if self.header.bitpix != 8 {
            return Err(FitsForgeError::UnsupportedBitpix(self.header.bitpix));
        }
        let h = self.header.height as usize;
        let w = self.header.width as usize;
        let raw = &self.mmap[self.data_start..self.data_start + w * h];

        Ok(Array2::from_shape_vec((h, w), raw.to_vec())
            .expect("buffer size matches dimensions"))
    }
}

fn parse_header(buf: &[u8]) -> Result<(FitsHeader, usize)> {
    let mut bitpix: Option<i64> = None;
    let mut naxis: Option<i64> = None;
    let mut naxis1: Option<i64> = None;
    let mut naxis2: Option<i64> = None;
    let mut end_record: Option<usize> = None;

    for i in 0..buf.len() / FITS_RECORD_SIZE {
        let offset = i * FITS_RECORD_SIZE;
        let record = &buf[offset..offset + FITS_RECORD_SIZE];
        let keyword = std::str::from_utf8(&record[..8])
            .map_err(|_| FitsForgeError::InvalidFits("Non-ASCII header record".into()))?
            .trim_end();

        if keyword == "END" {
            end_record = Some(i);
            break;
        }

        // Blank, COMMENT and HISTORY records carry no value indicator.
        if &record[8..10] != b"= " {
            continue;
        }

        let value = record_value(&record[10..]);
        match keyword {
            "SIMPLE" => {
                if value != "T" {
                    return Err(FitsForgeError::InvalidFits(
                        "SIMPLE keyword is not T".into(),
                    ));
                }
            }
            "BITPIX" => bitpix = Some(parse_int(keyword, &value)?),
            "NAXIS" => naxis = Some(parse_int(keyword, &value)?),
            "NAXIS1" => naxis1 = Some(parse_int(keyword, &value)?),
            "NAXIS2" => naxis2 = Some(parse_int(keyword, &value)?),
            _ => {}
        }
    }

    let end_record =
        end_record.ok_or_else(|| FitsForgeError::InvalidFits("Missing END keyword".into()))?;

    let bitpix = bitpix.ok_or_else(|| missing("BITPIX"))?;
    let naxis = naxis.ok_or_else(|| missing("NAXIS"))?;
    if naxis != 2 {
        return Err(FitsForgeError::InvalidFits(format!(
            "Unsupported NAXIS: {naxis} (expected 2)"
        )));
    }
    let width = dimension("NAXIS1", naxis1.ok_or_else(|| missing("NAXIS1"))?)?;
    let height = dimension("NAXIS2", naxis2.ok_or_else(|| missing("NAXIS2"))?)?;

    if width == 0 || height == 0 {
        return Err(FitsForgeError::InvalidDimensions { width, height });
    }

    // Data begins at the next block boundary after the block holding END.
    let data_start = (end_record / RECORDS_PER_BLOCK + 1) * FITS_BLOCK_SIZE;

    Ok((
        FitsHeader {
            bitpix,
            width,
            height,
        },
        data_start,
    ))
}

/// Extract the value text from a record's value field, dropping any
/// trailing `/ comment`.
fn record_value(field: &[u8]) -> String {
    let text = String::from_utf8_lossy(field);
    let value = text.split_once('/').map_or(text.as_ref(), |(v, _)| v);
    value.trim().to_string()
}

fn parse_int(keyword: &str, value: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| {
        FitsForgeError::InvalidFits(format!("Malformed {keyword} value: {value:?}"))
    })
}

fn dimension(keyword: &str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| FitsForgeError::InvalidFits(format!("Malformed {keyword} value: {value}")))
}

fn missing(keyword: &str) -> FitsForgeError {
    FitsForgeError::InvalidFits(format!("Missing {keyword} keyword"))
}
