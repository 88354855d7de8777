/// Statistics collected while solving.
///
/// Counters only grow, so a single stats object can accumulate over several
/// solves via [`CrosswordSolver::solve_with_stats`](crate::CrosswordSolver::solve_with_stats).
///
/// # Examples
///
/// ```
/// use crossfill_core::{Structure, WordList};
/// use crossfill_solver::{CrosswordSolver, SolverStats};
///
/// let structure: Structure = "___\n_##\n_##".parse()?;
/// let words: WordList = "ab\ncat\ncow\ndog\n".parse()?;
/// let mut stats = SolverStats::new();
///
/// let solution = CrosswordSolver::new(&structure, &words).solve_with_stats(&mut stats);
/// assert!(solution.is_some());
/// assert!(stats.eliminations() > 0);
/// assert_eq!(stats.max_depth(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SolverStats {
    pub(crate) revisions: usize,
    pub(crate) eliminations: usize,
    pub(crate) assignments_tried: usize,
    pub(crate) backtracks: usize,
    pub(crate) max_depth: usize,
}

impl SolverStats {
    /// Creates an empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of arc revisions that removed at least one candidate.
    #[must_use]
    pub fn revisions(&self) -> usize {
        self.revisions
    }

    /// Returns the number of candidates removed by node and arc consistency.
    #[must_use]
    pub fn eliminations(&self) -> usize {
        self.eliminations
    }

    /// Returns the number of extended assignments checked for consistency.
    #[must_use]
    pub fn assignments_tried(&self) -> usize {
        self.assignments_tried
    }

    /// Returns the number of search frames that ran out of candidates.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the largest number of slots assigned at once during search.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn record_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}
