//! Test utilities for domain propagation.
//!
//! [`DomainTester`] holds a structure together with an initial and a current
//! [`Domains`] snapshot, so tests can chain propagation steps and assert on
//! what changed.
//!
//! ```ignore
//! DomainTester::new("___\n_##\n_##", &["cat", "cow", "dog"])
//!     .restrict(down, &["cat"])
//!     .revise(across, down, true)
//!     .assert_domain(across, &["cat", "cow"]);
//! ```

use std::collections::BTreeSet;

use crossfill_core::{Slot, Structure, Word, WordList};

use crate::{Arc, Domains};

/// A test harness for domain propagation.
///
/// All methods return `self` for chaining. Assertion methods panic with a
/// message naming the slot involved and use `#[track_caller]` so failures
/// point at the test.
#[derive(Debug)]
pub struct DomainTester {
    structure: Structure,
    initial: Domains,
    current: Domains,
}

/// Builds a word set from string literals, uppercasing each one.
#[track_caller]
pub fn words(words: &[&str]) -> BTreeSet<Word> {
    words.iter().map(|w| Word::new(w).unwrap()).collect()
}

impl DomainTester {
    /// Creates a tester with every slot holding all of `words`.
    #[track_caller]
    pub fn new(structure: &str, words: &[&str]) -> Self {
        let structure: Structure = structure.parse().unwrap();
        let words: WordList = self::words(words).into_iter().collect();
        let domains = Domains::new(&structure, &words);
        Self::from_domains(structure, domains)
    }

    /// Creates a tester from already-built domains.
    pub fn from_domains(structure: Structure, domains: Domains) -> Self {
        Self {
            structure,
            initial: domains.clone(),
            current: domains,
        }
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn domains(&self) -> &Domains {
        &self.current
    }

    /// Narrows the domain of `slot` to `keep`, and makes that the new baseline.
    #[track_caller]
    pub fn restrict(mut self, slot: Slot, keep: &[&str]) -> Self {
        let keep = words(keep);
        self.current.retain(slot, |word| keep.contains(word));
        assert_eq!(
            self.current.get(slot),
            &keep,
            "restricting {slot} to words it does not hold"
        );
        self.initial = self.current.clone();
        self
    }

    pub fn node_consistency(mut self) -> Self {
        self.current.enforce_node_consistency();
        self.initial = self.current.clone();
        self
    }

    #[track_caller]
    pub fn revise(mut self, x: Slot, y: Slot, expected: bool) -> Self {
        let changed = self.current.revise(&self.structure, x, y);
        assert_eq!(changed, expected, "revise({x}, {y}) returned {changed}");
        self
    }

    #[track_caller]
    pub fn ac3(mut self, expected: bool) -> Self {
        let ok = self.current.ac3(&self.structure, None);
        assert_eq!(ok, expected, "ac3 returned {ok}");
        self
    }

    #[track_caller]
    pub fn ac3_with(mut self, arcs: Vec<Arc>, expected: bool) -> Self {
        let ok = self.current.ac3(&self.structure, Some(arcs));
        assert_eq!(ok, expected, "ac3 returned {ok}");
        self
    }

    /// Asserts that the domain of `slot` is exactly `expected`.
    #[track_caller]
    pub fn assert_domain(self, slot: Slot, expected: &[&str]) -> Self {
        assert_eq!(
            self.current.get(slot),
            &words(expected),
            "unexpected domain for {slot}"
        );
        self
    }

    #[track_caller]
    pub fn assert_unchanged(self) -> Self {
        assert_eq!(self.current, self.initial, "domains changed");
        self
    }

    #[track_caller]
    pub fn assert_node_consistent(self) -> Self {
        for (slot, candidates) in self.current.iter() {
            for word in candidates {
                assert_eq!(word.length(), slot.length(), "{word} left in {slot}");
            }
        }
        self
    }

    /// Asserts that every candidate has support in every neighbor.
    #[track_caller]
    pub fn assert_arc_consistent(self) -> Self {
        for &x in self.structure.variables() {
            for &y in self.structure.neighbors(x) {
                let overlap = self.structure.overlap(x, y).unwrap();
                for word in self.current.get(x) {
                    let supported = self
                        .current
                        .get(y)
                        .iter()
                        .any(|other| other.letter_at(overlap.other) == word.letter_at(overlap.own));
                    assert!(supported, "{word} in {x} has no support in {y}");
                }
            }
        }
        self
    }
}
