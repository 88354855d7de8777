use std::collections::{BTreeMap, btree_map};

use crate::{Slot, Word};

/// A partial or complete mapping from slots to chosen words.
///
/// Entries are kept in slot order, so iteration and formatting are
/// deterministic.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Assignment, Direction, Slot, Word};
///
/// let slot = Slot::new(0, 0, Direction::Across, 3);
/// let empty = Assignment::new();
/// let extended = empty.extended(slot, Word::new("cat")?);
///
/// assert!(empty.is_empty());
/// assert_eq!(extended.get(slot).map(Word::as_str), Some("CAT"));
/// # Ok::<(), crossfill_core::WordError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: BTreeMap<Slot, Word>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this assignment with `slot` mapped to `word`.
    ///
    /// `self` is left untouched.
    #[must_use]
    pub fn extended(&self, slot: Slot, word: Word) -> Self {
        let mut words = self.words.clone();
        words.insert(slot, word);
        Self { words }
    }

    /// Maps `slot` to `word`, returning the previous word if any.
    pub fn insert(&mut self, slot: Slot, word: Word) -> Option<Word> {
        self.words.insert(slot, word)
    }

    /// Removes the word for `slot`, returning it if present.
    pub fn remove(&mut self, slot: Slot) -> Option<Word> {
        self.words.remove(&slot)
    }

    /// Returns the word assigned to `slot`.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&Word> {
        self.words.get(&slot)
    }

    /// Returns `true` if `slot` has a word.
    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        self.words.contains_key(&slot)
    }

    /// Returns the number of assigned slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no slot is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns an iterator over the assigned slots and words, in slot order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Slot, &Word)> {
        self.words.iter().map(|(&slot, word)| (slot, word))
    }
}

impl FromIterator<(Slot, Word)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Slot, Word)>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Assignment {
    type Item = (Slot, Word);
    type IntoIter = btree_map::IntoIter<Slot, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
