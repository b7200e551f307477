use colorcube::sampling::{channels, cube};
use image::{Rgb, RgbImage};

/// Full quantized catalog behind a grid sampling with the given step count,
/// in the pipeline's enumeration order.
pub fn grid_catalog(steps: u32) -> Vec<[u8; 3]> {
    let axis = channels::evenly_spaced_u8(steps);
    cube::expand(&axis, &axis, &axis)
}

/// Real-valued catalog behind a uniform sampling with the given step count,
/// before shuffling.
pub fn uniform_catalog(steps: u32) -> Vec<[f64; 3]> {
    let axis = channels::evenly_spaced(steps);
    cube::expand(&axis, &axis, &axis)
}

/// Quantize a real-valued triple the way the packer does.
pub fn quantize(triple: [f64; 3]) -> [u8; 3] {
    [triple[0] as u8, triple[1] as u8, triple[2] as u8]
}

/// Pixel at a row-major index of the raster.
pub fn pixel_at(image: &RgbImage, index: usize) -> Rgb<u8> {
    let x = (index % image.width() as usize) as u32;
    let y = (index / image.width() as usize) as u32;
    *image.get_pixel(x, y)
}
