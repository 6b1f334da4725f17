//! Starting a new round.

use crate::action::{ActionError, ActionOutcome, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

/// Reshuffles the deck and clears all round state.
///
/// The deck keeps the same cards; only their order changes. `seed`
/// drives the shuffle through the environment's RNG oracle, so hosts
/// that pin a seed get reproducible layouts. Bumping `round` invalidates
/// any mismatch clear still scheduled for the old round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetAction {
    /// Shuffle seed for the new round.
    pub seed: u64,
}

impl ActionTransition for ResetAction {
    type Error = ActionError;

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<ActionOutcome, Self::Error> {
        state.deck.shuffle(self.seed, env.rng());
        state.selected.clear();
        state.matched.clear();
        state.moves = 0;
        state.round = state.round.wrapping_add(1);
        Ok(ActionOutcome::Reshuffled)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(state.selected.is_empty());
        debug_assert!(state.matched.is_empty());
        debug_assert_eq!(state.moves, 0);
        Ok(())
    }
}
