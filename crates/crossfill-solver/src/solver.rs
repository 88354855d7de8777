use crossfill_core::{Assignment, Slot, Structure, WordList};

use crate::{Backtracking, Domains, SolverStats};

/// The result of a solve, with the reason when there is no solution.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A complete, consistent assignment was found.
    Solved(Assignment),
    /// Propagation left this slot without candidates; no search was run.
    EmptyDomain(Slot),
    /// Search tried every candidate without finding a solution.
    Exhausted,
}

impl SolveOutcome {
    /// Returns the solution, if any.
    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Solved(assignment) => Some(assignment),
            Self::EmptyDomain(_) | Self::Exhausted => None,
        }
    }

    /// Converts the outcome into the solution, if any.
    #[must_use]
    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            Self::Solved(assignment) => Some(assignment),
            Self::EmptyDomain(_) | Self::Exhausted => None,
        }
    }
}

/// Fills a crossword structure with words from a word list.
///
/// Solving runs in three phases:
///
/// 1. node consistency drops candidates of the wrong length,
/// 2. AC-3 prunes candidates that cannot agree with any crossing word, and
/// 3. backtracking search picks words using the pruned domains.
///
/// If phase 2 empties a domain the puzzle is reported unsolvable without
/// searching. "No solution" is an ordinary outcome, not an error.
///
/// The solver owns its domains and only borrows the structure; the word list
/// is copied on construction.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, Slot, Structure, WordList};
/// use crossfill_solver::CrosswordSolver;
///
/// let structure: Structure = "___\n_##\n_##".parse()?;
/// let words: WordList = "cat\ncow\n".parse()?;
///
/// let solution = CrosswordSolver::new(&structure, &words).solve().unwrap();
/// let across = Slot::new(0, 0, Direction::Across, 3);
/// let down = Slot::new(0, 0, Direction::Down, 3);
/// assert_eq!(solution.get(across).unwrap().as_str(), "CAT");
/// assert_eq!(solution.get(down).unwrap().as_str(), "COW");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Reporting why there is no solution
///
/// ```
/// use crossfill_core::{Structure, WordList};
/// use crossfill_solver::{CrosswordSolver, SolverStats};
///
/// let structure: Structure = "_____".parse()?;
/// let words: WordList = "cat\n".parse()?;
///
/// let mut stats = SolverStats::new();
/// let outcome = CrosswordSolver::new(&structure, &words).solve_outcome(&mut stats);
/// assert!(outcome.is_empty_domain());
/// assert_eq!(stats.assignments_tried(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CrosswordSolver<'a> {
    structure: &'a Structure,
    domains: Domains,
}

impl<'a> CrosswordSolver<'a> {
    /// Creates a solver whose domains all start with every word of `words`.
    #[must_use]
    pub fn new(structure: &'a Structure, words: &WordList) -> Self {
        Self {
            structure,
            domains: Domains::new(structure, words),
        }
    }

    /// Returns the structure being solved.
    #[must_use]
    pub fn structure(&self) -> &'a Structure {
        self.structure
    }

    /// Returns the current domains.
    ///
    /// After a solve these are the domains the search ran on.
    #[must_use]
    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Returns a search over the current domains.
    #[must_use]
    pub fn backtracking(&self) -> Backtracking<'_> {
        Backtracking::new(self.structure, &self.domains)
    }

    /// Solves the puzzle, returning the first solution found.
    #[must_use]
    pub fn solve(&mut self) -> Option<Assignment> {
        self.solve_with_stats(&mut SolverStats::new())
    }

    /// Solves the puzzle, recording counters in `stats`.
    pub fn solve_with_stats(&mut self, stats: &mut SolverStats) -> Option<Assignment> {
        self.solve_outcome(stats).into_assignment()
    }

    /// Solves the puzzle and reports why it failed, if it did.
    pub fn solve_outcome(&mut self, stats: &mut SolverStats) -> SolveOutcome {
        log::debug!(
            "solving {} slots with {} candidates",
            self.structure.variables().len(),
            self.domains.total_candidates()
        );

        let removed = self.domains.enforce_node_consistency_counted();
        stats.eliminations += removed;
        log::debug!("node consistency removed {removed} candidates");

        if let Err(slot) = self.domains.propagate(self.structure, None, stats) {
            log::debug!("no solution: {slot} has no candidates left");
            return SolveOutcome::EmptyDomain(slot);
        }

        match self
            .backtracking()
            .backtrack_with_stats(&Assignment::new(), stats)
        {
            Some(solution) => {
                log::debug!(
                    "solution found after {} assignments",
                    stats.assignments_tried()
                );
                SolveOutcome::Solved(solution)
            }
            None => {
                log::debug!(
                    "no solution: search exhausted after {} assignments",
                    stats.assignments_tried()
                );
                SolveOutcome::Exhausted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossfill_core::{Direction, Word};
    use proptest::prelude::*;

    use super::*;

    fn parse(structure: &str, words: &[&str]) -> (Structure, WordList) {
        let structure = structure.parse().unwrap();
        let words = words.iter().map(|w| Word::new(w).unwrap()).collect();
        (structure, words)
    }

    fn solved_words(solution: &Assignment) -> Vec<(Slot, &str)> {
        solution.iter().map(|(slot, w)| (slot, w.as_str())).collect()
    }

    #[test]
    fn test_single_slot_picks_first_word() {
        let (structure, words) = parse("__", &["cd", "ab"]);
        let solution = CrosswordSolver::new(&structure, &words).solve().unwrap();
        assert_eq!(
            solved_words(&solution),
            vec![(Slot::new(0, 0, Direction::Across, 2), "AB")]
        );
    }

    #[test]
    fn test_crossing_slots_with_shared_letter() {
        let (structure, words) = parse("___\n_##\n_##", &["cat", "cow"]);
        let solution = CrosswordSolver::new(&structure, &words).solve().unwrap();
        assert_eq!(
            solved_words(&solution),
            vec![
                (Slot::new(0, 0, Direction::Across, 3), "CAT"),
                (Slot::new(0, 0, Direction::Down, 3), "COW"),
            ]
        );
    }

    #[test]
    fn test_crossing_slots_without_shared_letter() {
        let (structure, words) = parse("___\n_##\n_##", &["cat", "dog"]);
        let mut stats = SolverStats::new();
        let outcome = CrosswordSolver::new(&structure, &words).solve_outcome(&mut stats);
        // AC-3 cannot see that the only agreeing pairs reuse a word.
        assert_eq!(outcome, SolveOutcome::Exhausted);
        assert!(stats.assignments_tried() > 0);
    }

    #[test]
    fn test_missing_length_fails_before_search() {
        let (structure, words) = parse("__#_____", &["ab", "cd", "abc"]);
        let mut solver = CrosswordSolver::new(&structure, &words);
        let mut stats = SolverStats::new();
        let outcome = solver.solve_outcome(&mut stats);

        let long = Slot::new(0, 3, Direction::Across, 5);
        assert_eq!(outcome, SolveOutcome::EmptyDomain(long));
        assert!(solver.domains().get(long).is_empty());
        assert_eq!(stats.assignments_tried(), 0);
        assert_eq!(stats.max_depth(), 0);
    }

    #[test]
    fn test_arc_consistency_wipeout_fails_before_search() {
        // The 2-letter words never end with the letter the 3-letter words
        // start with.
        let (structure, words) = parse("__\n#_\n#_", &["ab", "cd", "xyz"]);
        let mut stats = SolverStats::new();
        let outcome = CrosswordSolver::new(&structure, &words).solve_outcome(&mut stats);
        assert!(outcome.is_empty_domain());
        assert_eq!(stats.assignments_tried(), 0);
        assert!(stats.revisions() > 0);
    }

    #[test]
    fn test_disconnected_slots_never_backtrack() {
        let (structure, words) =
            parse("__#__\n#####\n__#__", &["ab", "cd", "ef", "gh", "ij"]);
        let mut stats = SolverStats::new();
        let solution = CrosswordSolver::new(&structure, &words)
            .solve_with_stats(&mut stats)
            .unwrap();

        assert_eq!(solution.len(), 4);
        assert_eq!(stats.backtracks(), 0);
        assert_eq!(stats.revisions(), 0);
        let words: Vec<_> = solution.iter().map(|(_, w)| w.as_str()).collect();
        assert_eq!(words, vec!["AB", "CD", "EF", "GH"]);
    }

    #[test]
    fn test_no_slots_is_trivially_solved() {
        let (structure, words) = parse("_#\n#_", &["ab"]);
        let solution = CrosswordSolver::new(&structure, &words).solve().unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn test_not_enough_distinct_words() {
        let (structure, words) = parse("__#__", &["ab"]);
        let outcome =
            CrosswordSolver::new(&structure, &words).solve_outcome(&mut SolverStats::new());
        assert!(outcome.is_exhausted());
        assert_eq!(outcome.assignment(), None);
    }

    #[test]
    fn test_solve_is_repeatable() {
        let (structure, words) = parse(
            "#___#\n#_##_\n#_##_\n#____\n#_##_",
            &[
                "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "ore",
                "tie", "oven", "rove",
            ],
        );
        let first = CrosswordSolver::new(&structure, &words).solve();
        let second = CrosswordSolver::new(&structure, &words).solve();
        assert_eq!(first, second);

        let mut solver = CrosswordSolver::new(&structure, &words);
        let again = solver.solve();
        assert_eq!(again, solver.solve());
        assert_eq!(first, again);
    }

    #[test]
    fn test_word_list_is_not_modified() {
        let (structure, words) = parse("___\n_##\n_##", &["ab", "cat", "cow"]);
        let before = words.clone();
        let _ = CrosswordSolver::new(&structure, &words).solve();
        assert_eq!(words, before);
    }

    fn grid_strategy() -> impl Strategy<Value = Structure> {
        (2usize..4, 2usize..4)
            .prop_flat_map(|(w, h)| {
                (Just(w), Just(h), prop::collection::vec(prop::bool::weighted(0.75), w * h))
            })
            .prop_map(|(w, h, cells)| Structure::from_cells(w, h, cells).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_solutions_are_complete_and_consistent(
            structure in grid_strategy(),
            words in prop::collection::btree_set("[A-C]{2,3}", 1..12),
        ) {
            let words: WordList = words.iter().map(|w| Word::new(w).unwrap()).collect();
            let mut solver = CrosswordSolver::new(&structure, &words);
            if let Some(solution) = solver.solve() {
                let search = solver.backtracking();
                prop_assert!(search.assignment_complete(&solution));
                prop_assert!(search.consistent(&solution));
                for (slot, word) in solution.iter() {
                    prop_assert!(words.contains(word));
                    prop_assert!(solver.domains().contains(slot, word));
                }
            }
        }
    }
}
