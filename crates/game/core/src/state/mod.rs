//! Authoritative game state for a single round.
//!
//! This module owns the data structures describing the deck, the pending
//! selection, and the matched set. Frontends read this state freely but
//! mutate it exclusively through [`GameEngine`](crate::engine::GameEngine).
mod card;
mod deck;
mod selection;

pub use card::{Card, CardId, CardPhase, Face};
pub use deck::{Deck, DeckError};
pub use selection::{MatchedSet, Selection};

/// Canonical snapshot of one round of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Card order for the current round. Fixed between resets.
    pub deck: Deck,

    /// Face-up positions pending comparison, at most two.
    pub selected: Selection,

    /// Permanently face-up positions from resolved pairs.
    pub matched: MatchedSet,

    /// Completed pair comparisons this round. Incremented once per
    /// comparison, not per flip.
    pub moves: u32,

    /// Reset generation. Scheduled messages carry the round they were
    /// issued in, and the engine drops messages from earlier rounds.
    pub round: u32,
}

impl GameState {
    /// Creates a fresh state over `deck` in its given order.
    ///
    /// Hosts normally follow up with a
    /// [`ResetAction`](crate::action::ResetAction) to shuffle; tests keep
    /// the injected order.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            selected: Selection::new(),
            matched: MatchedSet::EMPTY,
            moves: 0,
            round: 0,
        }
    }

    /// Presentation phase of the card at `index`.
    pub fn phase(&self, index: usize) -> CardPhase {
        if self.matched.contains(index) {
            CardPhase::Matched
        } else if self.selected.contains(index) {
            CardPhase::Pending
        } else {
            CardPhase::FaceDown
        }
    }

    /// True once every position belongs to a resolved pair.
    pub fn is_won(&self) -> bool {
        self.matched.len() == self.deck.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pair_deck() -> Deck {
        Deck::from_faces(&[Face('a'), Face('b')]).unwrap()
    }

    #[test]
    fn fresh_state_is_all_face_down() {
        let state = GameState::new(two_pair_deck());
        for index in 0..state.deck.len() {
            assert_eq!(state.phase(index), CardPhase::FaceDown);
        }
        assert_eq!(state.moves, 0);
        assert!(!state.is_won());
    }

    #[test]
    fn phase_prefers_matched_over_pending() {
        let mut state = GameState::new(two_pair_deck());
        state.matched.insert(0);
        assert_eq!(state.phase(0), CardPhase::Matched);
        state.selected.push(1);
        assert_eq!(state.phase(1), CardPhase::Pending);
    }
}
