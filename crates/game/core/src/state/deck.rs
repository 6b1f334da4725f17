//! The deck: a bounded, pair-complete sequence of cards.

use arrayvec::ArrayVec;

use super::{Card, CardId, Face};
use crate::config::GameConfig;
use crate::env::{RngOracle, compute_seed};

/// Errors raised when a card sequence cannot form a valid deck.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("deck holds {0} cards, which is not an even count")]
    OddSize(usize),

    #[error("face {0} appears {1} times, expected exactly 2")]
    UnpairedFace(Face, usize),

    #[error("deck of {0} cards exceeds the capacity of {max}", max = GameConfig::MAX_CARDS)]
    Overflow(usize),
}

/// Ordered sequence of cards holding exactly two of every face.
///
/// The pairing invariant is checked at construction and preserved by
/// [`shuffle`](Deck::shuffle), which permutes without resampling.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    cards: ArrayVec<Card, { GameConfig::MAX_CARDS }>,
}

impl Deck {
    /// Validates an explicit card order.
    ///
    /// Tests inject fixed layouts through this constructor; production
    /// decks come from [`Deck::from_faces`].
    pub fn new(cards: &[Card]) -> Result<Self, DeckError> {
        let mut inner = ArrayVec::new();
        inner
            .try_extend_from_slice(cards)
            .map_err(|_| DeckError::Overflow(cards.len()))?;

        if inner.len() % 2 != 0 {
            return Err(DeckError::OddSize(inner.len()));
        }

        // Every face must appear on exactly two cards. Quadratic, but the
        // deck is capped at MAX_CARDS.
        for card in &inner {
            let copies = inner.iter().filter(|c| c.face == card.face).count();
            if copies != 2 {
                return Err(DeckError::UnpairedFace(card.face, copies));
            }
        }

        Ok(Self { cards: inner })
    }

    /// Builds the canonical paired deck from a face alphabet: two cards
    /// per face, laid out as one full run of the alphabet followed by a
    /// second.
    pub fn from_faces(faces: &[Face]) -> Result<Self, DeckError> {
        let mut cards = ArrayVec::<Card, { GameConfig::MAX_CARDS }>::new();
        for (index, &face) in faces.iter().chain(faces.iter()).enumerate() {
            cards
                .try_push(Card {
                    id: CardId(index as u32),
                    face,
                })
                .map_err(|_| DeckError::Overflow(faces.len() * 2))?;
        }
        Self::new(&cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Face value at a board position.
    pub fn face(&self, index: usize) -> Option<Face> {
        self.cards.get(index).map(|card| card.face)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Unbiased Fisher-Yates permutation of the cards in place.
    ///
    /// Deterministic for a given `seed` and oracle. The card multiset is
    /// unchanged; only positions move.
    pub fn shuffle(&mut self, seed: u64, rng: &dyn RngOracle) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.below(compute_seed(seed, i as u64), i as u32 + 1) as usize;
            self.cards.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn face_run(deck: &Deck) -> Vec<char> {
        deck.cards().iter().map(|card| card.face.0).collect()
    }

    #[test]
    fn from_faces_pairs_every_face() {
        let deck = Deck::from_faces(&[Face('a'), Face('b'), Face('c')]).unwrap();
        assert_eq!(deck.len(), 6);
        for card in deck.cards() {
            let copies = deck.cards().iter().filter(|c| c.face == card.face).count();
            assert_eq!(copies, 2);
        }
    }

    #[test]
    fn card_ids_are_unique() {
        let deck = Deck::from_faces(&[Face('a'), Face('b')]).unwrap();
        let mut ids: Vec<u32> = deck.cards().iter().map(|card| card.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn odd_sized_deck_is_rejected() {
        let cards = [
            Card { id: CardId(0), face: Face('a') },
            Card { id: CardId(1), face: Face('a') },
            Card { id: CardId(2), face: Face('b') },
        ];
        assert!(matches!(Deck::new(&cards), Err(DeckError::OddSize(3))));
    }

    #[test]
    fn unpaired_face_is_rejected() {
        let cards = [
            Card { id: CardId(0), face: Face('a') },
            Card { id: CardId(1), face: Face('b') },
            Card { id: CardId(2), face: Face('c') },
            Card { id: CardId(3), face: Face('c') },
        ];
        assert!(matches!(
            Deck::new(&cards),
            Err(DeckError::UnpairedFace(Face('a'), 1))
        ));
    }

    #[test]
    fn duplicate_alphabet_is_rejected() {
        let result = Deck::from_faces(&[Face('a'), Face('a')]);
        assert!(matches!(result, Err(DeckError::UnpairedFace(Face('a'), 4))));
    }

    #[test]
    fn oversized_deck_is_rejected() {
        let faces: Vec<Face> = ('a'..='z').map(Face).collect();
        assert!(matches!(
            Deck::from_faces(&faces),
            Err(DeckError::Overflow(52))
        ));
    }

    #[test]
    fn shuffle_preserves_the_card_multiset() {
        let mut deck = Deck::from_faces(&[Face('a'), Face('b'), Face('c'), Face('d')]).unwrap();
        let mut before: Vec<char> = face_run(&deck);
        before.sort_unstable();

        deck.shuffle(0xfeed, &PcgRng);

        let mut after: Vec<char> = face_run(&deck);
        after.sort_unstable();
        assert_eq!(before, after);
        // Shuffling never breaks the pairing invariant.
        assert!(Deck::new(deck.cards()).is_ok());
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let base = Deck::from_faces(&[Face('a'), Face('b'), Face('c'), Face('d')]).unwrap();

        let mut first = base.clone();
        let mut second = base.clone();
        first.shuffle(7, &PcgRng);
        second.shuffle(7, &PcgRng);
        assert_eq!(face_run(&first), face_run(&second));

        let mut third = base.clone();
        third.shuffle(8, &PcgRng);
        assert_ne!(
            face_run(&first),
            face_run(&third),
            "distinct seeds should permute differently for this deck"
        );
    }
}
