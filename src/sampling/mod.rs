pub mod channels;
pub mod cube;
pub mod ordering;
pub mod packer;
pub mod planner;

use anyhow::Result;
use image::RgbImage;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::models::Dimensions;

/// Exhaustive grid sampling of the RGB cube.
///
/// Every combination of `steps` evenly spaced values per channel becomes
/// one pixel, packed in enumeration order into the smallest near-square
/// raster that holds them all. Identical settings always produce an
/// identical image.
pub struct GridPipeline {
    pub steps: u32,
    pub verbose: bool,
}

impl GridPipeline {
    pub fn new() -> Self {
        Self {
            steps: 128,
            verbose: false,
        }
    }

    /// Samples per channel; the image holds steps^3 colors.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the full pipeline and return the packed raster.
    pub fn generate(&self) -> Result<RgbImage> {
        if self.steps == 0 {
            return Err(anyhow::anyhow!(
                "invalid dimension: steps must be at least 1"
            ));
        }

        let color_count = (self.steps as usize)
            .checked_pow(3)
            .ok_or_else(|| anyhow::anyhow!("{} steps per channel overflows the catalog", self.steps))?;
        let dims = planner::plan_raster(color_count);

        if self.verbose {
            println!(
                "Creating an image of size {}x{} to hold {} colors.",
                dims.width, dims.height, color_count
            );
        }

        // Quantized at generation time; one axis serves all three channels.
        let axis = channels::evenly_spaced_u8(self.steps);
        let catalog = cube::expand(&axis, &axis, &axis);

        if self.verbose {
            println!("Packing {} colors in enumeration order...", catalog.len());
        }

        Ok(packer::pack(&catalog, dims))
    }
}

impl Default for GridPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform-density sampling of the RGB cube, shuffled into a raster of
/// caller-chosen dimensions.
///
/// The per-channel step count is planned so the expanded cube covers the
/// requested pixel count; the catalog is then randomly permuted and cut
/// to fit. Placement draws OS entropy unless a seed is fixed.
pub struct UniformPipeline {
    pub width: u32,
    pub height: u32,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl UniformPipeline {
    pub fn new() -> Self {
        Self {
            width: 256,
            height: 256,
            seed: None,
            verbose: false,
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Fix the shuffle seed so identical settings reproduce the raster
    /// byte for byte.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the full pipeline and return the packed raster.
    pub fn generate(&self) -> Result<RgbImage> {
        if self.width == 0 || self.height == 0 {
            return Err(anyhow::anyhow!(
                "invalid dimension: width and height must be at least 1, got {}x{}",
                self.width,
                self.height
            ));
        }

        let dims = Dimensions::new(self.width, self.height);
        let steps = planner::steps_for_pixels(dims.pixel_count());

        if self.verbose {
            println!(
                "Sampling {} values per channel to cover {} pixels.",
                steps,
                dims.pixel_count()
            );
        }

        // Real-valued until packing; the packer quantizes.
        let axis = channels::evenly_spaced(steps);
        let mut catalog = cube::expand(&axis, &axis, &axis);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        ordering::shuffle(&mut catalog, &mut rng);

        if self.verbose {
            println!(
                "Placing the first {} of {} shuffled colors.",
                dims.pixel_count().min(catalog.len()),
                catalog.len()
            );
        }

        Ok(packer::pack(&catalog, dims))
    }
}

impl Default for UniformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
