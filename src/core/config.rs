//! Round configuration.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::tiles::DOUBLE_SIX;

/// Largest supported set. A double-twelve set has 91 tiles.
pub const MAX_SUPPORTED_PIP: u8 = 12;

/// Round configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Highest pip value of the generated set (default: 6, double-six).
    pub max_pip: u8,

    /// Tiles dealt to each player (default: 7).
    /// Capped at half the stock when the set is too small.
    pub hand_size: usize,

    /// Seed for the default random source.
    /// Same seed produces the same deal and tie-breaks.
    pub seed: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_pip: DOUBLE_SIX,
            hand_size: 7,
            seed: 42,
        }
    }
}

impl RoundConfig {
    /// Set the highest pip value.
    pub fn with_max_pip(mut self, max_pip: u8) -> Self {
        self.max_pip = max_pip;
        self
    }

    /// Set the hand size.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the configuration describes a playable round.
    pub fn validate(&self) -> Result<()> {
        if self.max_pip > MAX_SUPPORTED_PIP {
            return Err(EngineError::invalid(format!(
                "max_pip must be at most {MAX_SUPPORTED_PIP}, got {}",
                self.max_pip
            )));
        }
        if self.hand_size == 0 {
            return Err(EngineError::invalid("hand_size must be at least 1"));
        }
        Ok(())
    }
}
