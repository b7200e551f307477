/// Evenly spaced channel values over the closed interval [0, 255].
///
/// Both endpoints are included whenever `steps` is at least 2; a single
/// step collapses to the interval start. Output is a pure function of
/// `steps` and is non-decreasing.
pub fn evenly_spaced(steps: u32) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let span = (steps - 1) as f64;
            (0..steps).map(|i| 255.0 * i as f64 / span).collect()
        }
    }
}

/// Evenly spaced channel values quantized to 8-bit at generation time.
///
/// Quantization truncates toward zero rather than rounding, so interior
/// values land slightly low (three steps give 0, 127, 255).
pub fn evenly_spaced_u8(steps: u32) -> Vec<u8> {
    evenly_spaced(steps).into_iter().map(|v| v as u8).collect()
}
