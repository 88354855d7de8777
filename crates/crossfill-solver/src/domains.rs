use std::collections::{BTreeMap, BTreeSet};

use crossfill_core::{Slot, Structure, Word, WordList};

static NO_WORDS: BTreeSet<Word> = BTreeSet::new();

/// The candidate words still possible for every slot.
///
/// Domains start as a full copy of the word list for every slot and only ever
/// shrink. Words are kept in lexicographic order, which is the tie-break order
/// for every heuristic that iterates a domain.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, Slot, Structure, WordList};
/// use crossfill_solver::Domains;
///
/// let structure: Structure = "__#___".parse()?;
/// let words: WordList = "ab\ncat\n".parse()?;
/// let mut domains = Domains::new(&structure, &words);
///
/// let short = Slot::new(0, 0, Direction::Across, 2);
/// assert_eq!(domains.len(short), 2);
///
/// domains.enforce_node_consistency();
/// assert_eq!(domains.len(short), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    domains: BTreeMap<Slot, BTreeSet<Word>>,
}

impl Domains {
    /// Creates a domain for every slot of `structure`, each holding every word.
    ///
    /// `words` is copied; it is never modified.
    #[must_use]
    pub fn new(structure: &Structure, words: &WordList) -> Self {
        let domains = structure
            .variables()
            .iter()
            .map(|&slot| (slot, words.as_set().clone()))
            .collect();
        Self { domains }
    }

    /// Removes every candidate whose length differs from its slot's length.
    ///
    /// Calling this again has no effect.
    pub fn enforce_node_consistency(&mut self) {
        let removed = self.enforce_node_consistency_counted();
        log::debug!("node consistency removed {removed} candidates");
    }

    pub(crate) fn enforce_node_consistency_counted(&mut self) -> usize {
        self.domains
            .iter_mut()
            .map(|(slot, words)| {
                let before = words.len();
                words.retain(|word| word.length() == slot.length());
                before - words.len()
            })
            .sum()
    }

    /// Returns the candidates for `slot`.
    ///
    /// Slots without a domain yield an empty set.
    #[must_use]
    pub fn get(&self, slot: Slot) -> &BTreeSet<Word> {
        self.domains.get(&slot).unwrap_or(&NO_WORDS)
    }

    /// Returns the number of candidates for `slot`.
    #[must_use]
    pub fn len(&self, slot: Slot) -> usize {
        self.get(slot).len()
    }

    /// Returns `true` if `word` is still a candidate for `slot`.
    #[must_use]
    pub fn contains(&self, slot: Slot, word: &Word) -> bool {
        self.get(slot).contains(word)
    }

    /// Returns the total number of candidates over all slots.
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.domains.values().map(BTreeSet::len).sum()
    }

    /// Returns the first slot, in slot order, whose domain is empty.
    #[must_use]
    pub fn first_empty(&self) -> Option<Slot> {
        self.domains
            .iter()
            .find(|(_, words)| words.is_empty())
            .map(|(&slot, _)| slot)
    }

    /// Returns an iterator over every slot and its candidates, in slot order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Slot, &BTreeSet<Word>)> {
        self.domains.iter().map(|(&slot, words)| (slot, words))
    }

    /// Removes one candidate from `slot`.
    ///
    /// Returns `true` if the candidate was present.
    pub fn remove(&mut self, slot: Slot, word: &Word) -> bool {
        self.domains
            .get_mut(&slot)
            .is_some_and(|words| words.remove(word))
    }

    /// Keeps only the candidates of `slot` for which `keep` returns `true`.
    ///
    /// Returns the number of candidates removed.
    pub fn retain(&mut self, slot: Slot, keep: impl FnMut(&Word) -> bool) -> usize {
        let Some(words) = self.domains.get_mut(&slot) else {
            return 0;
        };
        let before = words.len();
        words.retain(keep);
        before - words.len()
    }
}
