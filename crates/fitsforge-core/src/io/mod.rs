pub mod fits;
pub mod fits_writer;
pub mod image_io;
