use crate::models::Dimensions;

/// Smallest near-square raster that holds `pixel_count` cells.
///
/// Width is the ceiling of the square root, height the ceiling of the
/// rows still needed at that width, so capacity never exceeds the
/// requirement by more than one partial row. `pixel_count` must be at
/// least 1.
pub fn plan_raster(pixel_count: usize) -> Dimensions {
    let width = ceil_sqrt(pixel_count);
    let height = pixel_count.div_ceil(width);
    Dimensions::new(width as u32, height as u32)
}

/// Per-channel step count for a sampling of at least `pixel_count`
/// triples: the smallest S with S^3 >= `pixel_count`, so the expanded
/// cube always covers the raster before truncation.
pub fn steps_for_pixels(pixel_count: usize) -> u32 {
    let mut steps = (pixel_count as f64).cbrt() as usize; // floor, give or take an ulp
    while cube(steps) < pixel_count as u128 {
        steps += 1;
    }
    while steps > 1 && cube(steps - 1) >= pixel_count as u128 {
        steps -= 1;
    }
    steps as u32
}

// Smallest w with w * w >= n, which equals ceil(sqrt(n)). The float
// estimate only seeds the search; the comparisons are exact.
fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while square(root) < n as u128 {
        root += 1;
    }
    while root > 1 && square(root - 1) >= n as u128 {
        root -= 1;
    }
    root
}

fn square(n: usize) -> u128 {
    n as u128 * n as u128
}

fn cube(n: usize) -> u128 {
    n as u128 * n as u128 * n as u128
}
