//! Deterministic environment facts supplied by the host.
//!
//! Transitions never reach for ambient randomness or configuration; both
//! arrive through [`GameEnv`], so the same state, action, and env always
//! produce the same result.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::config::GameConfig;

/// Read-only environment handed to every action transition.
pub struct GameEnv<'e> {
    rng: &'e dyn RngOracle,
    config: GameConfig,
}

impl<'e> GameEnv<'e> {
    /// Environment with default configuration.
    pub fn new(rng: &'e dyn RngOracle) -> Self {
        Self {
            rng,
            config: GameConfig::default(),
        }
    }

    pub fn with_config(rng: &'e dyn RngOracle, config: GameConfig) -> Self {
        Self { rng, config }
    }

    pub fn rng(&self) -> &dyn RngOracle {
        self.rng
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
