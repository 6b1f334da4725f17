//! Actions: every way the game state can change.
//!
//! Player selections, the scheduled mismatch clear, and resets all
//! implement [`ActionTransition`] and run through
//! [`GameEngine`](crate::engine::GameEngine). Conditions the game rules
//! treat as no-ops (clicking a matched card, a stale timer firing) are
//! reported as [`ActionOutcome::Ignored`], never as errors.
mod error;
mod outcome;
mod reset;
mod resolve;
mod select;

pub use error::ActionError;
pub use outcome::{ActionOutcome, IgnoreReason};
pub use reset::ResetAction;
pub use resolve::ResolveMismatchAction;
pub use select::SelectAction;

use crate::env::GameEnv;
use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the mutation. All hooks receive
/// deterministic environment facts via [`GameEnv`] and must stay free of
/// side effects beyond the state itself.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions against the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the state directly. Implementations
    /// may assume `pre_validate` has already passed.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>)
    -> Result<ActionOutcome, Self::Error>;

    /// Validates post-conditions against the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum covering player input and scheduled messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Flip the card at a board position.
    Select(SelectAction),
    /// Scheduled message clearing a mismatched pair after its delay.
    ResolveMismatch(ResolveMismatchAction),
    /// Reshuffle and start a new round.
    Reset(ResetAction),
}

impl Action {
    pub fn select(index: usize) -> Self {
        Self::Select(SelectAction { index })
    }

    pub fn resolve_mismatch(round: u32) -> Self {
        Self::ResolveMismatch(ResolveMismatchAction { round })
    }

    pub fn reset(seed: u64) -> Self {
        Self::Reset(ResetAction { seed })
    }
}
