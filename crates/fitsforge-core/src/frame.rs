use ndarray::Array2;

/// A single 8-bit luminance image.
#[derive(Clone, Debug)]
pub struct LumaFrame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
}

impl LumaFrame {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}
