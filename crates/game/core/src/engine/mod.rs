//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`].
//! Every mutation, whether a player selection, a scheduled clear, or a
//! reset, flows through the same pre_validate -> apply -> post_validate
//! pipeline, and deferred work comes back out as an explicit [`Effect`]
//! for the host to schedule rather than a callback closing over state.

use crate::action::{Action, ActionError, ActionOutcome, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

/// Follow-up work the host must schedule on the engine's behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Deliver [`Action::ResolveMismatch`] carrying `round` once
    /// `delay_ms` has elapsed.
    ScheduleMismatchClear { round: u32, delay_ms: u64 },
}

/// Complete result of executing one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// What the action did to the state.
    pub outcome: ActionOutcome,
    /// Deferred follow-up, if the action produced one.
    pub effect: Option<Effect>,
}

/// Reducer owning all mutation of a [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action through the transition pipeline.
    ///
    /// A mismatch schedules its clear here, stamped with the current
    /// round, so the effect and the state it refers to can never drift
    /// apart.
    pub fn execute(
        &mut self,
        env: &GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ActionError> {
        let outcome = match action {
            Action::Select(select) => run(select, self.state, env)?,
            Action::ResolveMismatch(resolve) => run(resolve, self.state, env)?,
            Action::Reset(reset) => run(reset, self.state, env)?,
        };

        let effect = match outcome {
            ActionOutcome::Mismatched { .. } => Some(Effect::ScheduleMismatchClear {
                round: self.state.round,
                delay_ms: env.config().mismatch_delay_ms,
            }),
            _ => None,
        };

        Ok(ExecutionOutcome { outcome, effect })
    }
}

fn run<T>(action: &T, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionOutcome, T::Error>
where
    T: ActionTransition,
{
    action.pre_validate(state, env)?;
    let outcome = action.apply(state, env)?;
    action.post_validate(state, env)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::state::{Deck, Face};

    fn test_state() -> GameState {
        let deck = Deck::from_faces(&[Face('a'), Face('b')]).unwrap();
        GameState::new(deck)
    }

    #[test]
    fn a_mismatch_schedules_its_clear() {
        let mut state = test_state();
        let env = GameEnv::new(&PcgRng);
        let mut engine = GameEngine::new(&mut state);

        engine.execute(&env, &Action::select(0)).unwrap();
        let result = engine.execute(&env, &Action::select(1)).unwrap();

        assert!(matches!(result.outcome, ActionOutcome::Mismatched { .. }));
        assert_eq!(
            result.effect,
            Some(Effect::ScheduleMismatchClear {
                round: 0,
                delay_ms: GameConfig::DEFAULT_MISMATCH_DELAY_MS,
            })
        );
    }

    #[test]
    fn the_delay_follows_the_configured_value() {
        let mut state = test_state();
        let env = GameEnv::with_config(&PcgRng, GameConfig::with_mismatch_delay_ms(250));
        let mut engine = GameEngine::new(&mut state);

        engine.execute(&env, &Action::select(0)).unwrap();
        let result = engine.execute(&env, &Action::select(1)).unwrap();

        assert_eq!(
            result.effect,
            Some(Effect::ScheduleMismatchClear {
                round: 0,
                delay_ms: 250,
            })
        );
    }

    #[test]
    fn a_match_schedules_nothing() {
        let mut state = test_state();
        let env = GameEnv::new(&PcgRng);
        let mut engine = GameEngine::new(&mut state);

        engine.execute(&env, &Action::select(0)).unwrap();
        let result = engine.execute(&env, &Action::select(2)).unwrap();

        assert!(matches!(result.outcome, ActionOutcome::Matched { .. }));
        assert_eq!(result.effect, None);
    }

    #[test]
    fn an_invalid_index_surfaces_the_error_before_mutation() {
        let mut state = test_state();
        let env = GameEnv::new(&PcgRng);
        let mut engine = GameEngine::new(&mut state);

        let result = engine.execute(&env, &Action::select(42));
        assert!(result.is_err());
        assert!(engine.state().selected.is_empty());
        assert_eq!(engine.state().moves, 0);
    }
}
