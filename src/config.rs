//! Benchmark run settings.

use crate::blocked::DEFAULT_TILE;
use crate::error::ConfigError;
use crate::variant::Variant;

/// Repetitions per variant when none are given.
pub const DEFAULT_REPETITIONS: usize = 32;
/// Matrix side length when none is given.
pub const DEFAULT_SIZE: usize = 256;

/// Everything the driver needs to run one benchmark session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Side length of the square operands.
    pub size: usize,
    /// Tile edge for the tiled variants.
    pub tile: usize,
    /// Timed (and verified) runs per variant.
    pub repetitions: usize,
    /// RNG seed for the operands; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Variants to run, in order.
    pub variants: Vec<Variant>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            tile: DEFAULT_TILE,
            repetitions: DEFAULT_REPETITIONS,
            seed: None,
            variants: Variant::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.tile == 0 {
            return Err(ConfigError::ZeroTile);
        }
        if self.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        if self.variants.is_empty() {
            return Err(ConfigError::NoVariants);
        }
        Ok(())
    }
}
