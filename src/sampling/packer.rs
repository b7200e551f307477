use image::{Rgb, RgbImage};

use crate::models::Dimensions;

/// Catalog element that can land in an 8-bit RGB raster cell.
pub trait PixelSample: Copy {
    fn to_pixel(self) -> Rgb<u8>;
}

impl PixelSample for [u8; 3] {
    fn to_pixel(self) -> Rgb<u8> {
        Rgb(self)
    }
}

impl PixelSample for [f64; 3] {
    // Real-valued samples are quantized here and nowhere earlier:
    // a truncating cast per channel, never a round.
    fn to_pixel(self) -> Rgb<u8> {
        Rgb([self[0] as u8, self[1] as u8, self[2] as u8])
    }
}

/// Pack the catalog into a raster of the given dimensions in row-major
/// order, one deterministic pass.
///
/// A short catalog leaves the remaining cells at the default fill,
/// black; a long catalog is cut at capacity and the excess discarded.
pub fn pack<T: PixelSample>(catalog: &[T], dims: Dimensions) -> RgbImage {
    let width = dims.width as usize;

    RgbImage::from_fn(dims.width, dims.height, |x, y| {
        let index = y as usize * width + x as usize;
        match catalog.get(index) {
            Some(sample) => sample.to_pixel(),
            None => Rgb([0, 0, 0]),
        }
    })
}
