//! Client configuration from the environment.
//!
//! None of these settings alter game rules; they exist for logging and
//! for reproducing a session layout from a bug report.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Ambient client settings.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Fixed session seed (`PAIRS_SEED`); derived from the clock when
    /// unset.
    pub seed: Option<u64>,
    /// Log directory override (`PAIRS_LOG_DIR`).
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        let seed = match std::env::var("PAIRS_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .with_context(|| format!("PAIRS_SEED must be an unsigned integer, got {raw:?}"))?,
            ),
            Err(_) => None,
        };

        let log_dir = std::env::var_os("PAIRS_LOG_DIR").map(PathBuf::from);

        Ok(Self { seed, log_dir })
    }
}
