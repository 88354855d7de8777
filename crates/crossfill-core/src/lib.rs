//! Core data structures for crossword filling.
//!
//! This crate describes *what* has to be filled; the solving itself lives in
//! `crossfill-solver`.
//!
//! # Overview
//!
//! - [`Structure`]: the fixed grid of fillable and blocked cells, the [`Slot`]s
//!   it contains, and the [`Overlap`] between every pair of crossing slots.
//! - [`Word`] and [`WordList`]: normalized candidate words.
//! - [`Assignment`]: a mapping from slots to chosen words.
//! - [`render`]: text and SVG output for filled grids.
//!
//! # Examples
//!
//! ```
//! use crossfill_core::{Assignment, Structure, WordList};
//!
//! let structure: Structure = "___\n_##\n_##".parse()?;
//! let words: WordList = "cat\ncow\n".parse()?;
//!
//! assert_eq!(structure.variables().len(), 2);
//! assert_eq!(words.len(), 2);
//! assert_eq!(structure.display(&Assignment::new()).to_string(), "   \n ██\n ██\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    assignment::Assignment,
    render::{BLOCK_GLYPH, GridDisplay, SvgImage, SvgRenderer},
    slot::{Direction, Overlap, Slot},
    structure::{BLOCKED, FILLABLE, Structure, StructureError},
    word::{Word, WordError, WordList, WordListError},
};

mod assignment;
pub mod render;
mod slot;
mod structure;
mod word;
