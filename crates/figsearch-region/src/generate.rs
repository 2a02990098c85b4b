//! Random bitmap generation
//!
//! Seeded generation of random bitmaps, mainly for exercising the
//! scanners against brute-force references on many shapes.

use crate::error::{RegionError, RegionResult};
use figsearch_core::Bitmap;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Default number of rows
pub const DEFAULT_HEIGHT: u32 = 16;

/// Default number of columns
pub const DEFAULT_WIDTH: u32 = 16;

/// Default probability that a cell is 1
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Options for random bitmap generation
#[derive(Debug, Clone)]
pub struct RandomBitmapOptions {
    /// Number of rows (must be > 0)
    pub height: u32,
    /// Number of columns (must be > 0)
    pub width: u32,
    /// Probability that a cell is 1 (0.0 - 1.0)
    pub density: f64,
    /// RNG seed; equal seeds give equal bitmaps
    pub seed: u64,
}

impl Default for RandomBitmapOptions {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            density: DEFAULT_DENSITY,
            seed: 0,
        }
    }
}

impl RandomBitmapOptions {
    /// Create options with specified dimensions
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            ..Default::default()
        }
    }

    /// Set the density (clamped to 0.0 - 1.0)
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density.clamp(0.0, 1.0);
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generate a random bitmap
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if either dimension is 0
/// or the density is not a finite probability.
pub fn generate_random_bitmap(options: &RandomBitmapOptions) -> RegionResult<Bitmap> {
    if options.height == 0 || options.width == 0 {
        return Err(RegionError::InvalidParameters(format!(
            "bitmap dimensions must be positive: {}x{}",
            options.height, options.width
        )));
    }
    if !(0.0..=1.0).contains(&options.density) {
        return Err(RegionError::InvalidParameters(format!(
            "density must be within 0.0 - 1.0: {}",
            options.density
        )));
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let size = (options.height as usize) * (options.width as usize);
    let cells: Vec<u8> = (0..size)
        .map(|_| u8::from(rng.random_bool(options.density)))
        .collect();

    Ok(Bitmap::from_cells(options.height, options.width, cells)?)
}
