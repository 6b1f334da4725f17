//! Card identity and face values.

/// Opaque identity of a single card within a deck.
///
/// Ids are assigned at deck construction and travel with the card across
/// shuffles; board positions do not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardId(pub u32);

/// A card's face value, drawn from a fixed small alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Face(pub char);

impl core::fmt::Display for Face {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card: stable identity plus face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: CardId,
    pub face: Face,
}

/// Presentation phase of a board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardPhase {
    /// Default: face hidden, selectable.
    FaceDown,
    /// In the pending selection, face visible, awaiting comparison.
    Pending,
    /// Part of a resolved pair, permanently face-up.
    Matched,
}
