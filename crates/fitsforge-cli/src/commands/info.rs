use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fitsforge_core::io::fits::FitsReader;

#[derive(Args)]
pub struct InfoArgs {
    /// Input FITS file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let reader = FitsReader::open(&args.file)?;
    let header = &reader.header;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", header.width, header.height);
    println!("BITPIX:      {}", header.bitpix);

    let total_mb = header.data_byte_size() as f64 / (1024.0 * 1024.0);
    println!("Data size:   {:.1} MB", total_mb);

    Ok(())
}
