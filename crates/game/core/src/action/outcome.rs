//! Observable outcomes of executing an action.

use crate::state::Face;

/// Why an action was accepted but deliberately changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IgnoreReason {
    /// Two cards are already pending comparison.
    SelectionFull,
    /// The position is already part of a resolved pair.
    AlreadyMatched,
    /// The position is already in the pending selection.
    AlreadySelected,
    /// A scheduled message arrived for an earlier round.
    StaleRound,
    /// A clear message arrived with no mismatched pair pending.
    NothingPending,
}

/// What an executed action did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    /// The action was a no-op by the game's own rules.
    Ignored(IgnoreReason),

    /// A card joined the selection; the comparison is still open.
    Flipped { index: usize },

    /// A completed comparison found equal faces. `won` is set when this
    /// match resolved the final pair.
    Matched {
        pair: (usize, usize),
        face: Face,
        won: bool,
    },

    /// A completed comparison found unequal faces. The pair stays
    /// visible until the scheduled clear fires.
    Mismatched { pair: (usize, usize) },

    /// A scheduled clear flipped the mismatched pair back down.
    Cleared { pair: (usize, usize) },

    /// The deck was reshuffled and all round state reset.
    Reshuffled,
}
