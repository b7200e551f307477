use std::path::Path;

use anyhow::Result;
use image::RgbImage;

/// Encode the raster and write it to `path`.
///
/// The format follows the file extension (PNG for the default names).
/// Codec and filesystem failures are returned as-is; nothing is retried
/// and no partial file is cleaned up.
pub fn write_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image
        .save(path)
        .map_err(|e| anyhow::anyhow!("Failed to save image {}: {}", path.display(), e))
}
