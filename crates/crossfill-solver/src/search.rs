use std::{cmp::Reverse, collections::HashSet};

use crossfill_core::{Assignment, Slot, Structure, Word};

use crate::{Domains, SolverStats};

/// Depth-first backtracking search over assignments.
///
/// The search reads domains that were pruned before it started and never
/// prunes them further: each branch only checks that the extended assignment
/// is [`consistent`](Self::consistent).
///
/// Each candidate is tried on its own copy of the assignment, so a branch
/// never sees words placed by a sibling branch.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Assignment, Direction, Slot, Structure, WordList};
/// use crossfill_solver::{Backtracking, Domains};
///
/// let structure: Structure = "__".parse()?;
/// let words: WordList = "cd\nab\n".parse()?;
/// let domains = Domains::new(&structure, &words);
///
/// let solution = Backtracking::new(&structure, &domains)
///     .backtrack(&Assignment::new())
///     .unwrap();
/// let slot = Slot::new(0, 0, Direction::Across, 2);
/// assert_eq!(solution.get(slot).unwrap().as_str(), "AB");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Backtracking<'a> {
    structure: &'a Structure,
    domains: &'a Domains,
}

impl<'a> Backtracking<'a> {
    /// Creates a search over `structure` using the candidates in `domains`.
    #[must_use]
    pub fn new(structure: &'a Structure, domains: &'a Domains) -> Self {
        Self { structure, domains }
    }

    /// Returns `true` if every slot of the structure has a word.
    #[must_use]
    pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
        self.structure
            .variables()
            .iter()
            .all(|&slot| assignment.contains(slot))
    }

    /// Returns `true` if `assignment` breaks no constraint.
    ///
    /// Every word must match its slot's length, no word may be used twice, and
    /// crossing slots must agree on their shared letter.
    #[must_use]
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        let mut used = HashSet::with_capacity(assignment.len());
        for (slot, word) in assignment.iter() {
            if word.length() != slot.length() || !used.insert(word) {
                return false;
            }
            for &neighbor in self.structure.neighbors(slot) {
                let (Some(other), Some(overlap)) = (
                    assignment.get(neighbor),
                    self.structure.overlap(slot, neighbor),
                ) else {
                    continue;
                };
                if word.letter_at(overlap.own) != other.letter_at(overlap.other) {
                    return false;
                }
            }
        }
        true
    }

    /// Picks the next slot to fill.
    ///
    /// Prefers the fewest remaining candidates, then the most neighbors, then
    /// the lowest slot in slot order. Returns `None` once every slot is
    /// assigned.
    #[must_use]
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<Slot> {
        self.structure
            .variables()
            .iter()
            .copied()
            .filter(|&slot| !assignment.contains(slot))
            .min_by_key(|&slot| {
                (
                    self.domains.len(slot),
                    Reverse(self.structure.neighbors(slot).len()),
                )
            })
    }

    /// Returns the candidates of `slot`, least constraining first.
    ///
    /// A candidate's cost is the number of candidates it would rule out in
    /// unassigned neighbors. Equal costs keep lexicographic order.
    #[must_use]
    pub fn order_domain_values(&self, slot: Slot, assignment: &Assignment) -> Vec<Word> {
        let open_neighbors: Vec<_> = self
            .structure
            .neighbors(slot)
            .iter()
            .filter(|&&neighbor| !assignment.contains(neighbor))
            .filter_map(|&neighbor| {
                let overlap = self.structure.overlap(slot, neighbor)?;
                Some((overlap, self.domains.get(neighbor)))
            })
            .collect();

        let mut values: Vec<Word> = self.domains.get(slot).iter().cloned().collect();
        values.sort_by_cached_key(|word| {
            open_neighbors
                .iter()
                .map(|(overlap, candidates)| {
                    let letter = word.letter_at(overlap.own);
                    candidates
                        .iter()
                        .filter(|other| other.letter_at(overlap.other) != letter)
                        .count()
                })
                .sum::<usize>()
        });
        values
    }

    /// Extends `assignment` to a complete, consistent assignment.
    ///
    /// Returns the first solution found, or `None` if no extension exists.
    /// `assignment` itself is never modified.
    #[must_use]
    pub fn backtrack(&self, assignment: &Assignment) -> Option<Assignment> {
        self.backtrack_with_stats(assignment, &mut SolverStats::new())
    }

    /// Runs [`backtrack`](Self::backtrack), recording search counters in `stats`.
    pub fn backtrack_with_stats(
        &self,
        assignment: &Assignment,
        stats: &mut SolverStats,
    ) -> Option<Assignment> {
        if self.assignment_complete(assignment) {
            return Some(assignment.clone());
        }
        let slot = self.select_unassigned_variable(assignment)?;

        for word in self.order_domain_values(slot, assignment) {
            log::trace!("depth {}: trying {word} for {slot}", assignment.len());
            let extended = assignment.extended(slot, word);
            stats.assignments_tried += 1;
            if !self.consistent(&extended) {
                continue;
            }
            stats.record_depth(extended.len());
            if let Some(solution) = self.backtrack_with_stats(&extended, stats) {
                return Some(solution);
            }
        }

        stats.backtracks += 1;
        log::trace!("depth {}: no candidate left for {slot}", assignment.len());
        None
    }
}
