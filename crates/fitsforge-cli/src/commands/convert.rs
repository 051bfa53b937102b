use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fitsforge_core::batch::convert_directory;
use tracing::debug;

use crate::summary::print_batch_summary;

#[derive(Args)]
pub struct ConvertArgs {
    /// Input folder containing JPEG images
    pub input_folder: PathBuf,

    /// Output folder for FITS files (created if missing)
    pub output_folder: PathBuf,
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let report = convert_directory(&args.input_folder, &args.output_folder, |c| {
        println!("Converted {} to {}", c.input.display(), c.output.display());
    })?;
    debug!(
        "batch finished: {} converted, {} failed",
        report.converted.len(),
        report.failed.len()
    );

    print_batch_summary(&report);

    if !report.failed.is_empty() {
        anyhow::bail!(
            "{} of {} conversions failed",
            report.failed.len(),
            report.total()
        );
    }
    Ok(())
}
