use std::path::Path;

use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};

/// Write a small grayscale JPEG with a deterministic gradient pattern.
pub fn write_gray_jpeg(path: &Path, width: u32, height: u32) {
    let img = GrayImage::from_fn(width, height, |x, y| Luma([(x * 7 + y * 13) as u8]));
    img.save_with_format(path, ImageFormat::Jpeg)
        .expect("write JPEG");
}

/// Write a small RGB JPEG.
pub fn write_rgb_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 11) as u8, (y * 17) as u8, ((x + y) * 5) as u8])
    });
    img.save_with_format(path, ImageFormat::Jpeg)
        .expect("write JPEG");
}

/// Build a minimal single-HDU FITS byte stream by hand.
///
/// `data` is appended after the header block and zero-padded to a 2880-byte
/// boundary, exactly as a conforming writer would lay it out.
pub fn build_synthetic_fits(width: usize, height: usize, bitpix: i64, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    push_record(&mut buf, "SIMPLE", Some("T"));
    push_record(&mut buf, "BITPIX", Some(&bitpix.to_string()));
    push_record(&mut buf, "NAXIS", Some("2"));
    push_record(&mut buf, "NAXIS1", Some(&width.to_string()));
    push_record(&mut buf, "NAXIS2", Some(&height.to_string()));
    push_record(&mut buf, "END", None);
    while buf.len() % 2880 != 0 {
        buf.push(b' ');
    }

    buf.extend_from_slice(data);
    while buf.len() % 2880 != 0 {
        buf.push(0);
    }
    buf
}

/// Append one 80-byte header record, value right-justified to column 30.
pub fn push_record(buf: &mut Vec<u8>, keyword: &str, value: Option<&str>) {
    let mut record = [b' '; 80];
    record[..keyword.len()].copy_from_slice(keyword.as_bytes());
    if let Some(value) = value {
        record[8] = b'=';
        let bytes = value.as_bytes();
        let start = 30 - bytes.len();
        record[start..30].copy_from_slice(bytes);
    }
    buf.extend_from_slice(&record);
}

/// Write a FITS buffer to a temporary file and return the temp file handle.
///
/// The file stays alive as long as the returned `NamedTempFile` is not dropped.
pub fn write_test_fits(data: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(data).expect("write FITS data");
    f.flush().expect("flush");
    f
}
