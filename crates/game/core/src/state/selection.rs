//! The pending selection and the matched set.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Face-up positions awaiting comparison. Holds at most two entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    slots: ArrayVec<usize, 2>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when two positions are pending and no further selection is
    /// accepted.
    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains(&index)
    }

    /// The first pending position, if any.
    pub fn first(&self) -> Option<usize> {
        self.slots.first().copied()
    }

    /// The completed pair, once two positions are pending.
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.slots.as_slice() {
            &[first, second] => Some((first, second)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }

    /// Adds a position. Callers check [`is_full`](Selection::is_full)
    /// first; a third push is dropped.
    pub(crate) fn push(&mut self, index: usize) {
        debug_assert!(!self.is_full(), "selection can hold at most two positions");
        let _ = self.slots.try_push(index);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Positions whose pairs are resolved, stored as a position bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedSet(u32);

impl MatchedSet {
    pub const EMPTY: Self = Self(0);

    pub fn contains(&self, index: usize) -> bool {
        index < GameConfig::MAX_CARDS && self.0 & (1u32 << index) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..GameConfig::MAX_CARDS).filter(move |&index| self.contains(index))
    }

    pub(crate) fn insert(&mut self, index: usize) {
        debug_assert!(index < GameConfig::MAX_CARDS);
        self.0 |= 1u32 << index;
    }

    pub(crate) fn clear(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_reports_the_pair_only_when_full() {
        let mut selection = Selection::new();
        assert_eq!(selection.pair(), None);

        selection.push(3);
        assert_eq!(selection.first(), Some(3));
        assert_eq!(selection.pair(), None);
        assert!(!selection.is_full());

        selection.push(5);
        assert_eq!(selection.pair(), Some((3, 5)));
        assert!(selection.is_full());

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn matched_set_tracks_membership_and_count() {
        let mut matched = MatchedSet::EMPTY;
        assert!(matched.is_empty());

        matched.insert(0);
        matched.insert(31);
        assert!(matched.contains(0));
        assert!(matched.contains(31));
        assert!(!matched.contains(1));
        assert_eq!(matched.len(), 2);
        assert_eq!(matched.iter().collect::<Vec<_>>(), vec![0, 31]);

        // Re-inserting is idempotent.
        matched.insert(0);
        assert_eq!(matched.len(), 2);

        matched.clear();
        assert!(matched.is_empty());
    }

    #[test]
    fn matched_set_ignores_out_of_range_queries() {
        let matched = MatchedSet::EMPTY;
        assert!(!matched.contains(GameConfig::MAX_CARDS));
        assert!(!matched.contains(usize::MAX));
    }
}
