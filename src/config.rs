//! Demo configuration
//!
//! Controls how the `tree` demo draws its input keys.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::sample::unique_keys;
use crate::SylvanError;

/// Number of keys the demo draws by default.
pub const DEFAULT_COUNT: usize = 11;
/// Inclusive lower bound of the default key range.
pub const DEFAULT_LOW: i64 = 1;
/// Exclusive upper bound of the default key range.
pub const DEFAULT_HIGH: i64 = 50;

/// Parameters for the random tree demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// How many distinct keys to draw
    pub count: usize,

    /// Inclusive lower bound
    pub low: i64,

    /// Exclusive upper bound
    pub high: i64,

    /// Fixed RNG seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Key range `[low, high)`
    pub fn range(&self) -> Range<i64> {
        self.low..self.high
    }

    /// Reject empty ranges and counts the range cannot satisfy.
    pub fn validate(&self) -> Result<(), SylvanError> {
        if self.low >= self.high {
            return Err(SylvanError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        let available = usize::try_from(self.high.abs_diff(self.low)).unwrap_or(usize::MAX);
        if self.count > available {
            return Err(SylvanError::SampleTooLarge {
                requested: self.count,
                available,
            });
        }
        Ok(())
    }

    /// Draw the configured keys.
    pub fn draw_keys(&self) -> Result<Vec<i64>, SylvanError> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        unique_keys(&mut rng, self.count, self.range())
    }
}
