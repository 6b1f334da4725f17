//! Selecting a card.

use crate::action::{ActionError, ActionOutcome, ActionTransition, IgnoreReason};
use crate::env::GameEnv;
use crate::state::{Face, GameState};

/// Flips the card at `index` face-up and, when it completes a pair,
/// resolves the comparison.
///
/// # Invariants
///
/// - At most two positions are ever pending.
/// - `moves` increments exactly once per completed comparison.
/// - A matched position never leaves the matched set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectAction {
    /// Board position to flip.
    pub index: usize,
}

impl SelectAction {
    fn face_at(state: &GameState, index: usize) -> Result<Face, ActionError> {
        state.deck.face(index).ok_or(ActionError::IndexOutOfBounds {
            index,
            deck_len: state.deck.len(),
        })
    }
}

impl ActionTransition for SelectAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if self.index >= state.deck.len() {
            return Err(ActionError::IndexOutOfBounds {
                index: self.index,
                deck_len: state.deck.len(),
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
    ) -> Result<ActionOutcome, Self::Error> {
        // No-op guards, checked in the same order the UI contract lists
        // them: a full selection wins over per-position conditions.
        if state.selected.is_full() {
            return Ok(ActionOutcome::Ignored(IgnoreReason::SelectionFull));
        }
        if state.matched.contains(self.index) {
            return Ok(ActionOutcome::Ignored(IgnoreReason::AlreadyMatched));
        }
        if state.selected.contains(self.index) {
            return Ok(ActionOutcome::Ignored(IgnoreReason::AlreadySelected));
        }

        let face = Self::face_at(state, self.index)?;

        let Some(first) = state.selected.first() else {
            // First card of a pair: flip it and wait.
            state.selected.push(self.index);
            return Ok(ActionOutcome::Flipped { index: self.index });
        };

        // Second card completes a comparison.
        let first_face = Self::face_at(state, first)?;
        state.selected.push(self.index);
        state.moves += 1;

        if first_face == face {
            state.matched.insert(first);
            state.matched.insert(self.index);
            state.selected.clear();
            Ok(ActionOutcome::Matched {
                pair: (first, self.index),
                face,
                won: state.is_won(),
            })
        } else {
            Ok(ActionOutcome::Mismatched {
                pair: (first, self.index),
            })
        }
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(
            !state.selected.iter().any(|index| state.matched.contains(index)),
            "a position cannot be pending and matched at once"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::Deck;

    fn test_state() -> GameState {
        // Layout: a b c d a b c d, so (0,4) (1,5) (2,6) (3,7) are pairs.
        let deck = Deck::from_faces(&[Face('a'), Face('b'), Face('c'), Face('d')]).unwrap();
        GameState::new(deck)
    }

    fn select(state: &mut GameState, index: usize) -> ActionOutcome {
        let action = SelectAction { index };
        let env = GameEnv::new(&PcgRng);
        action.pre_validate(state, &env).unwrap();
        let outcome = action.apply(state, &env).unwrap();
        action.post_validate(state, &env).unwrap();
        outcome
    }

    #[test]
    fn first_selection_flips_and_waits() {
        let mut state = test_state();
        assert_eq!(select(&mut state, 0), ActionOutcome::Flipped { index: 0 });
        assert_eq!(state.selected.len(), 1);
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn equal_faces_match_synchronously() {
        let mut state = test_state();
        select(&mut state, 0);
        let outcome = select(&mut state, 4);

        assert_eq!(
            outcome,
            ActionOutcome::Matched {
                pair: (0, 4),
                face: Face('a'),
                won: false,
            }
        );
        assert!(state.matched.contains(0));
        assert!(state.matched.contains(4));
        assert!(state.selected.is_empty());
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn unequal_faces_stay_pending() {
        let mut state = test_state();
        select(&mut state, 0);
        let outcome = select(&mut state, 1);

        assert_eq!(outcome, ActionOutcome::Mismatched { pair: (0, 1) });
        assert!(state.selected.is_full());
        assert!(state.matched.is_empty());
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn third_selection_is_ignored_while_a_pair_is_pending() {
        let mut state = test_state();
        select(&mut state, 0);
        select(&mut state, 1);

        let outcome = select(&mut state, 2);
        assert_eq!(outcome, ActionOutcome::Ignored(IgnoreReason::SelectionFull));
        assert_eq!(state.moves, 1);
        assert!(!state.selected.contains(2));
    }

    #[test]
    fn selecting_a_matched_position_is_ignored() {
        let mut state = test_state();
        select(&mut state, 0);
        select(&mut state, 4);

        let outcome = select(&mut state, 0);
        assert_eq!(outcome, ActionOutcome::Ignored(IgnoreReason::AlreadyMatched));
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn selecting_the_same_position_twice_is_ignored() {
        let mut state = test_state();
        select(&mut state, 3);

        let outcome = select(&mut state, 3);
        assert_eq!(
            outcome,
            ActionOutcome::Ignored(IgnoreReason::AlreadySelected)
        );
        assert_eq!(state.selected.len(), 1);
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let state = test_state();
        let action = SelectAction { index: 99 };
        let env = GameEnv::new(&PcgRng);

        assert_eq!(
            action.pre_validate(&state, &env),
            Err(ActionError::IndexOutOfBounds {
                index: 99,
                deck_len: 8,
            })
        );
    }

    #[test]
    fn matching_the_final_pair_reports_the_win() {
        let deck = Deck::from_faces(&[Face('a'), Face('b')]).unwrap();
        let mut state = GameState::new(deck);

        select(&mut state, 0);
        let outcome = select(&mut state, 2);
        assert!(matches!(outcome, ActionOutcome::Matched { won: false, .. }));

        select(&mut state, 1);
        let outcome = select(&mut state, 3);
        assert!(matches!(outcome, ActionOutcome::Matched { won: true, .. }));
        assert!(state.is_won());
    }
}
