use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::convert::{convert_to_fits, Converted};
use crate::error::{FitsForgeError, Result};

/// One conversion that did not complete.
#[derive(Debug)]
pub struct Failed {
    pub input: PathBuf,
    pub error: FitsForgeError,
}

/// Outcome of a directory batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<Converted>,
    pub failed: Vec<Failed>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Convert every `.jpg` file in `input_dir` into a FITS file in `output_dir`.
///
/// The output directory is created if missing, parents included. Matching is
/// case-insensitive on the `jpg` extension; other entries are skipped
/// silently. Entries are processed in file-name order. A failed conversion is
/// recorded in the report and does not abort the remaining files;
/// `on_converted` runs once per success.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    mut on_converted: impl FnMut(&Converted),
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let mut inputs: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_jpg_extension(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();

    let mut report = BatchReport::default();
    for input in inputs {
        let file_name = input
            .file_name()
            .expect("directory entries have file names");
        let output = output_dir.join(file_name).with_extension("fits");

        match convert_to_fits(&input, &output) {
            Ok(converted) => {
                on_converted(&converted);
                report.converted.push(converted);
            }
            Err(error) => {
                warn!("failed to convert {}: {}", input.display(), error);
                report.failed.push(Failed { input, error });
            }
        }
    }

    Ok(report)
}

fn has_jpg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg"))
}
