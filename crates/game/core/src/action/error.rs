//! Action error types.

/// Structurally invalid action input.
///
/// The rendering loop only ever submits positions it obtained from the
/// deck, so seeing this error indicates a host bug rather than a game
/// condition. Rule-level no-ops are [`ActionOutcome::Ignored`] instead.
///
/// [`ActionOutcome::Ignored`]: super::ActionOutcome::Ignored
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("position {index} is out of range for a deck of {deck_len} cards")]
    IndexOutOfBounds { index: usize, deck_len: usize },
}
