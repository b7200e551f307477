#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total cell capacity of a raster with these dimensions.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
