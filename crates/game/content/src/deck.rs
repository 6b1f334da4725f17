//! The shipped deck: four fruit faces, two cards each.

use pairs_core::{Deck, DeckError, Face};

/// Face alphabet of the starter deck.
pub const STARTER_FACES: [Face; 4] = [
    Face('\u{1f34e}'), // red apple
    Face('\u{1f34c}'), // banana
    Face('\u{1f347}'), // grapes
    Face('\u{1f352}'), // cherries
];

/// Builds the eight-card starter deck in its canonical, unshuffled order.
pub fn starter_deck() -> Result<Deck, DeckError> {
    Deck::from_faces(&STARTER_FACES)
}
