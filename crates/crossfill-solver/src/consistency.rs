//! Arc consistency over slot domains.
//!
//! Two slots are arc consistent when every candidate of the first has at least
//! one candidate of the second with the same letter in their shared cell.
//! [`Domains::ac3`] drives every arc of the structure to that state, or
//! reports that some slot has run out of candidates.

use std::collections::{BTreeSet, VecDeque};

use crossfill_core::{Slot, Structure};

use crate::{Domains, SolverStats};

/// An ordered pair of slots. Revising `(x, y)` prunes `x` against `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    /// The slot whose domain is pruned.
    pub x: Slot,
    /// The slot it is checked against.
    pub y: Slot,
}

impl Arc {
    /// Creates the arc `(x, y)`.
    #[must_use]
    pub const fn new(x: Slot, y: Slot) -> Self {
        Self { x, y }
    }
}

impl Domains {
    /// Makes `x` arc consistent with `y`.
    ///
    /// Removes every candidate of `x` whose letter in the shared cell appears
    /// in no candidate of `y`. Slots that do not cross are left untouched.
    ///
    /// Returns `true` if the domain of `x` changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossfill_core::{Direction, Slot, Structure, Word, WordList};
    /// use crossfill_solver::Domains;
    ///
    /// let structure: Structure = "___\n_##\n_##".parse()?;
    /// let words: WordList = "cat\ndog\n".parse()?;
    /// let across = Slot::new(0, 0, Direction::Across, 3);
    /// let down = Slot::new(0, 0, Direction::Down, 3);
    ///
    /// let mut domains = Domains::new(&structure, &words);
    /// domains.remove(down, &Word::new("dog")?);
    ///
    /// assert!(domains.revise(&structure, across, down));
    /// assert_eq!(domains.len(across), 1);
    /// assert!(!domains.revise(&structure, across, down));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn revise(&mut self, structure: &Structure, x: Slot, y: Slot) -> bool {
        self.revise_counted(structure, x, y) > 0
    }

    fn revise_counted(&mut self, structure: &Structure, x: Slot, y: Slot) -> usize {
        let Some(overlap) = structure.overlap(x, y) else {
            return 0;
        };
        let supported: BTreeSet<char> = self
            .get(y)
            .iter()
            .filter_map(|word| word.letter_at(overlap.other))
            .collect();
        self.retain(x, |word| {
            word.letter_at(overlap.own)
                .is_some_and(|letter| supported.contains(&letter))
        })
    }

    /// Runs AC-3 until every arc is consistent or a domain empties.
    ///
    /// The work queue is seeded with `arcs`, or with every arc of the structure
    /// (slots in slot order, each followed by its neighbors in slot order) when
    /// `arcs` is `None` or empty. Whenever revising `(x, y)` shrinks `x`, the arcs
    /// `(z, x)` for every other neighbor `z` of `x` are queued again.
    ///
    /// Returns `false` if some domain is empty, either on entry or after
    /// propagation; `true` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossfill_core::{Direction, Slot, Structure, WordList};
    /// use crossfill_solver::Domains;
    ///
    /// let structure: Structure = "___\n_##\n_##".parse()?;
    /// let words: WordList = "cat\ncow\ndog\n".parse()?;
    ///
    /// let mut domains = Domains::new(&structure, &words);
    /// domains.enforce_node_consistency();
    /// assert!(domains.ac3(&structure, None));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn ac3(&mut self, structure: &Structure, arcs: Option<Vec<Arc>>) -> bool {
        self.ac3_with_stats(structure, arcs, &mut SolverStats::new())
    }

    /// Runs [`ac3`](Self::ac3), recording revisions and eliminations in `stats`.
    pub fn ac3_with_stats(
        &mut self,
        structure: &Structure,
        arcs: Option<Vec<Arc>>,
        stats: &mut SolverStats,
    ) -> bool {
        self.propagate(structure, arcs, stats).is_ok()
    }

    /// AC-3 proper. On failure, returns the slot whose domain is empty.
    pub(crate) fn propagate(
        &mut self,
        structure: &Structure,
        arcs: Option<Vec<Arc>>,
        stats: &mut SolverStats,
    ) -> Result<(), Slot> {
        if let Some(slot) = self.first_empty() {
            log::debug!("domain of {slot} is empty before propagation");
            return Err(slot);
        }

        let mut queue: VecDeque<Arc> = match arcs {
            Some(arcs) if !arcs.is_empty() => arcs.into(),
            _ => structure
                .variables()
                .iter()
                .flat_map(|&x| structure.neighbors(x).iter().map(move |&y| Arc::new(x, y)))
                .collect(),
        };
        log::debug!("arc consistency starting with {} arcs", queue.len());

        while let Some(Arc { x, y }) = queue.pop_front() {
            let removed = self.revise_counted(structure, x, y);
            if removed == 0 {
                continue;
            }
            stats.revisions += 1;
            stats.eliminations += removed;
            log::trace!(
                "revised {x} against {y}: removed {removed}, {} left",
                self.len(x)
            );

            if self.len(x) == 0 {
                log::debug!("arc consistency emptied the domain of {x}");
                return Err(x);
            }
            queue.extend(
                structure
                    .neighbors(x)
                    .iter()
                    .filter(|&&z| z != y)
                    .map(|&z| Arc::new(z, x)),
            );
        }

        log::debug!(
            "arc consistency reached a fixpoint with {} candidates",
            self.total_candidates()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossfill_core::{Direction, WordList};
    use proptest::prelude::*;

    use super::*;
    use crate::testing::DomainTester;

    const CROSSING: &str = "___\n_##\n_##";
    const ACROSS: Slot = Slot::new(0, 0, Direction::Across, 3);
    const DOWN: Slot = Slot::new(0, 0, Direction::Down, 3);

    const LADDER: &str = "___\n_##\n___";
    const TOP: Slot = Slot::new(0, 0, Direction::Across, 3);
    const LEFT: Slot = Slot::new(0, 0, Direction::Down, 3);
    const BOTTOM: Slot = Slot::new(2, 0, Direction::Across, 3);

    #[test]
    fn test_revise_without_overlap_is_noop() {
        DomainTester::new("__#__", &["ab", "cd"])
            .revise(
                Slot::new(0, 0, Direction::Across, 2),
                Slot::new(0, 3, Direction::Across, 2),
                false,
            )
            .assert_unchanged();
    }

    #[test]
    fn test_revise_removes_unsupported() {
        DomainTester::new(CROSSING, &["cat", "cow", "dog"])
            .restrict(DOWN, &["cat"])
            .revise(ACROSS, DOWN, true)
            .assert_domain(ACROSS, &["cat", "cow"]);
    }

    #[test]
    fn test_revise_only_touches_x() {
        DomainTester::new(CROSSING, &["cat", "dog"])
            .restrict(ACROSS, &["cat"])
            .revise(ACROSS, DOWN, false)
            .assert_domain(DOWN, &["cat", "dog"]);
    }

    #[test]
    fn test_revise_uses_offsets_of_each_slot() {
        // TOP and LEFT share their first letters; LEFT and BOTTOM share
        // LEFT's last letter and BOTTOM's first.
        DomainTester::new(LADDER, &["abc", "cab", "xyz"])
            .restrict(LEFT, &["abc"])
            .revise(BOTTOM, LEFT, true)
            .assert_domain(BOTTOM, &["cab"])
            .revise(TOP, LEFT, true)
            .assert_domain(TOP, &["abc"]);
    }

    #[test]
    fn test_ac3_succeeds_when_consistent() {
        DomainTester::new(CROSSING, &["cat", "cow", "dog"])
            .node_consistency()
            .ac3(true)
            .assert_unchanged()
            .assert_arc_consistent();
    }

    #[test]
    fn test_ac3_propagates_through_chain() {
        // Pruning LEFT against BOTTOM must be carried on to TOP.
        DomainTester::new(LADDER, &["aba", "ace", "egg"])
            .node_consistency()
            .ac3(true)
            .assert_domain(TOP, &["aba", "ace"])
            .assert_domain(LEFT, &["aba", "ace"])
            .assert_domain(BOTTOM, &["aba", "ace", "egg"])
            .assert_arc_consistent();
    }

    #[test]
    fn test_ac3_fails_when_domain_wiped() {
        DomainTester::new(CROSSING, &["cat", "dog"])
            .restrict(ACROSS, &["cat"])
            .restrict(DOWN, &["dog"])
            .ac3(false);
    }

    #[test]
    fn test_ac3_fails_on_empty_isolated_slot() {
        DomainTester::new("__#_____", &["ab", "cd"])
            .node_consistency()
            .ac3(false);
    }

    #[test]
    fn test_ac3_with_explicit_arcs() {
        // Only the listed arc is revised, and nothing is re-queued because
        // ACROSS has no other neighbor.
        DomainTester::new(CROSSING, &["cat", "cow", "dog"])
            .restrict(DOWN, &["cow"])
            .ac3_with(vec![Arc::new(ACROSS, DOWN)], true)
            .assert_domain(ACROSS, &["cat", "cow"])
            .assert_domain(DOWN, &["cow"]);
    }

    #[test]
    fn test_ac3_with_empty_arc_list_seeds_every_arc() {
        DomainTester::new(CROSSING, &["cat", "dog"])
            .restrict(DOWN, &["cat"])
            .ac3_with(Vec::new(), true)
            .assert_domain(ACROSS, &["cat"])
            .assert_domain(DOWN, &["cat"]);
    }

    #[test]
    fn test_ac3_disconnected_is_trivial() {
        DomainTester::new("__#__\n#####\n__#__", &["ab", "cd"])
            .node_consistency()
            .ac3(true)
            .assert_unchanged();
    }

    #[test]
    fn test_ac3_records_stats() {
        let structure: Structure = LADDER.parse().unwrap();
        let words: WordList = "aba\nace\negg\n".parse().unwrap();
        let mut domains = Domains::new(&structure, &words);
        let mut stats = SolverStats::new();
        assert!(domains.ac3_with_stats(&structure, None, &mut stats));
        assert_eq!(stats.revisions(), 2);
        assert_eq!(stats.eliminations(), 2);
    }

    fn word_strategy() -> impl Strategy<Value = String> {
        "[A-D]{2,3}"
    }

    proptest! {
        #[test]
        fn prop_ac3_result_matches_empty_domain(
            words in prop::collection::btree_set(word_strategy(), 1..12)
        ) {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            let tester = DomainTester::new(LADDER, &words).node_consistency();
            let empty_after_nodes = tester.domains().first_empty().is_some();
            let mut domains = tester.domains().clone();
            let ok = domains.ac3(tester.structure(), None);

            prop_assert_eq!(ok, domains.first_empty().is_none());
            if empty_after_nodes {
                prop_assert!(!ok);
            }
            if ok {
                DomainTester::from_domains(tester.structure().clone(), domains)
                    .assert_arc_consistent()
                    .assert_node_consistent();
            }
        }
    }
}
