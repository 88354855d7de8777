//! Constraint-satisfaction solver for crossword fills.
//!
//! The solver treats every slot of a [`Structure`](crossfill_core::Structure)
//! as a variable whose values are candidate words. It prunes candidates with
//! node consistency (word length) and arc consistency ([`Domains::ac3`]), then
//! runs a [`Backtracking`] search ordered by the minimum-remaining-values and
//! degree heuristics for slots and the least-constraining-value heuristic for
//! words.
//!
//! Candidate words are always visited in lexicographic order and slots in
//! slot order, so a given input always produces the same solution.
//!
//! # Examples
//!
//! ```
//! use crossfill_core::{Structure, WordList};
//! use crossfill_solver::CrosswordSolver;
//!
//! let structure: Structure = "___\n_##\n_##".parse()?;
//! let words: WordList = "cat\ncow\ndog\n".parse()?;
//!
//! match CrosswordSolver::new(&structure, &words).solve() {
//!     Some(solution) => print!("{}", structure.display(&solution)),
//!     None => println!("No solution."),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    consistency::Arc, domains::Domains, search::Backtracking, solver::*, stats::SolverStats,
};

pub mod consistency;
mod domains;
mod search;
mod solver;
mod stats;

#[cfg(test)]
mod testing;
