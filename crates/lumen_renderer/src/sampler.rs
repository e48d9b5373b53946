//! Random number sources for sampling.
//!
//! Each pixel draws from its own generator, derived from the pixel's
//! position. Which thread renders a row therefore has no influence on the
//! numbers that row sees.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Draw a uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Hands out the random generator used for one pixel.
pub trait PixelSampler: Send + Sync {
    type Rng: RngCore;

    /// Generator for the pixel at image row `row`, column `col`.
    fn pixel_rng(&self, row: u32, col: u32) -> Self::Rng;
}

/// Seeds a `StdRng` per pixel from a base seed and the pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SeededSampler {
    seed: u64,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl PixelSampler for SeededSampler {
    type Rng = StdRng;

    fn pixel_rng(&self, row: u32, col: u32) -> StdRng {
        // Golden-ratio stride keeps neighbouring pixels' seeds far apart
        let index = ((row as u64) << 32) | col as u64;
        StdRng::seed_from_u64(self.seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}
