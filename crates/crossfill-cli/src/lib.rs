//! Command-line front end for crossfill.
//!
//! Loads a structure file and a word list, solves the puzzle, prints the
//! filled grid, and optionally writes it as an SVG image.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use crossfill_core::{Assignment, Structure, StructureError, SvgRenderer, WordList, WordListError};
use crossfill_solver::{CrosswordSolver, SolverStats};

/// Errors reported by the command-line tool.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// An input file could not be read.
    #[from(skip)]
    #[display("failed to read {}: {source}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The image file could not be written.
    #[from(skip)]
    #[display("failed to write {}: {source}", path.display())]
    Write {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The structure file is malformed.
    #[from(skip)]
    #[display("invalid structure in {}: {source}", path.display())]
    Structure {
        /// The structure file.
        path: PathBuf,
        /// The parse error.
        source: StructureError,
    },
    /// The word list is malformed.
    #[from(skip)]
    #[display("invalid word list in {}: {source}", path.display())]
    WordList {
        /// The word list file.
        path: PathBuf,
        /// The parse error.
        source: WordListError,
    },
    /// Printing the result failed.
    #[display("failed to print output: {_0}")]
    Output(io::Error),
}

/// Fill a crossword grid with words from a word list.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Structure file: one row per line, `#` for blocked cells.
    #[arg(value_name = "STRUCTURE")]
    pub structure: PathBuf,

    /// Word list file: one word per line.
    #[arg(value_name = "WORDS")]
    pub words: PathBuf,

    /// Write the filled grid as an SVG image to this path.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print solver statistics to stderr.
    #[arg(long)]
    pub stats: bool,

    /// Side length of each cell in the image, in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = 100)]
    pub cell_size: u32,
}

/// Reads and parses a structure file.
///
/// # Errors
///
/// Returns [`CliError::Read`] or [`CliError::Structure`].
pub fn load_structure(path: &Path) -> Result<Structure, CliError> {
    let text = read(path)?;
    text.parse().map_err(|source| CliError::Structure {
        path: path.to_owned(),
        source,
    })
}

/// Reads and parses a word list file.
///
/// # Errors
///
/// Returns [`CliError::Read`] or [`CliError::WordList`].
pub fn load_words(path: &Path) -> Result<WordList, CliError> {
    let text = read(path)?;
    text.parse().map_err(|source| CliError::WordList {
        path: path.to_owned(),
        source,
    })
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Writes `assignment` as an SVG image.
///
/// # Errors
///
/// Returns [`CliError::Write`] if the file cannot be written.
pub fn save_image(
    path: &Path,
    renderer: SvgRenderer,
    structure: &Structure,
    assignment: &Assignment,
) -> Result<(), CliError> {
    let svg = renderer.image(structure, assignment).to_string();
    fs::write(path, svg).map_err(|source| CliError::Write {
        path: path.to_owned(),
        source,
    })
}

/// Runs the tool, printing the grid (or `No solution.`) to `out` and
/// statistics to `err`.
///
/// # Errors
///
/// Returns an error if an input cannot be loaded or an output cannot be
/// written. An unsolvable puzzle is not an error.
pub fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> Result<(), CliError> {
    let structure = load_structure(&args.structure)?;
    let words = load_words(&args.words)?;
    log::info!(
        "loaded {}x{} structure with {} slots and {} words",
        structure.width(),
        structure.height(),
        structure.variables().len(),
        words.len()
    );

    let mut stats = SolverStats::new();
    let solution = CrosswordSolver::new(&structure, &words).solve_with_stats(&mut stats);

    match &solution {
        Some(assignment) => {
            write!(out, "{}", structure.display(assignment))?;
            if let Some(output) = &args.output {
                let renderer = SvgRenderer::new().with_cell_size(args.cell_size);
                save_image(output, renderer, &structure, assignment)?;
                log::info!("wrote image to {}", output.display());
            }
        }
        None => writeln!(out, "No solution.")?,
    }

    if args.stats {
        print_stats(err, &stats)?;
    }
    Ok(())
}

fn print_stats(err: &mut impl Write, stats: &SolverStats) -> io::Result<()> {
    writeln!(err, "Stats:")?;
    writeln!(err, "  revisions: {}", stats.revisions())?;
    writeln!(err, "  eliminations: {}", stats.eliminations())?;
    writeln!(err, "  assignments tried: {}", stats.assignments_tried())?;
    writeln!(err, "  backtracks: {}", stats.backtracks())?;
    writeln!(err, "  max depth: {}", stats.max_depth())
}
