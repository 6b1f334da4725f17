//! Clearing a mismatched pair.

use crate::action::{ActionError, ActionOutcome, ActionTransition, IgnoreReason};
use crate::env::GameEnv;
use crate::state::GameState;

/// Scheduled message that flips a mismatched pair back face-down.
///
/// Hosts schedule this with the round the mismatch happened in. If the
/// state has been reset in the meantime the token no longer matches and
/// the message is dropped, so a stray timer can never clear a future
/// selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolveMismatchAction {
    /// Round the originating mismatch was observed in.
    pub round: u32,
}

impl ActionTransition for ResolveMismatchAction {
    type Error = ActionError;

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
    ) -> Result<ActionOutcome, Self::Error> {
        if self.round != state.round {
            return Ok(ActionOutcome::Ignored(IgnoreReason::StaleRound));
        }

        // Within a round, the only way two positions are pending is the
        // mismatch this message was scheduled for.
        let Some(pair) = state.selected.pair() else {
            return Ok(ActionOutcome::Ignored(IgnoreReason::NothingPending));
        };

        state.selected.clear();
        Ok(ActionOutcome::Cleared { pair })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(!state.selected.is_full());
        Ok(())
    }
}
