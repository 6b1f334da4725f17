/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// How long a mismatched pair stays face-up before the scheduled
    /// clear fires, in milliseconds.
    pub mismatch_delay_ms: u64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum deck size. Bounds the deck storage and the matched-set
    /// bitmask, so it must not exceed 32.
    pub const MAX_CARDS: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1_000;

    pub fn new() -> Self {
        Self {
            mismatch_delay_ms: Self::DEFAULT_MISMATCH_DELAY_MS,
        }
    }

    pub fn with_mismatch_delay_ms(mismatch_delay_ms: u64) -> Self {
        Self { mismatch_delay_ms }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
