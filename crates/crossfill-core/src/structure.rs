//! Crossword structure: cell layout, slots, and the overlap relation.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Direction, Overlap, Slot};

/// Character marking a blocked cell in the textual structure format.
pub const BLOCKED: char = '#';

/// Character written for a fillable cell when formatting a structure.
pub const FILLABLE: char = '_';

/// Errors returned when building a [`Structure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StructureError {
    /// The structure has no rows or no columns.
    #[display("structure is empty")]
    Empty,
    /// The cell vector does not match the requested dimensions.
    #[display("expected {expected} cells, got {actual}")]
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
}

static NO_NEIGHBORS: BTreeSet<Slot> = BTreeSet::new();

/// The fixed shape of a crossword puzzle.
///
/// A structure owns the grid of fillable and blocked cells and everything the
/// solver derives from it once: the set of slots, the overlap between every
/// pair of crossing slots, and each slot's neighbors. It is immutable after
/// construction.
///
/// A slot is a maximal horizontal or vertical run of at least two fillable
/// cells.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, Overlap, Slot, Structure};
///
/// let structure: Structure = "
/// ___
/// _##
/// _##"
///     .trim_start()
///     .parse()?;
///
/// let across = Slot::new(0, 0, Direction::Across, 3);
/// let down = Slot::new(0, 0, Direction::Down, 3);
/// assert_eq!(structure.variables().len(), 2);
/// assert_eq!(structure.overlap(across, down), Some(Overlap::new(0, 0)));
/// assert!(structure.neighbors(across).contains(&down));
/// # Ok::<(), crossfill_core::StructureError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    width: usize,
    height: usize,
    /// Row-major; `true` for fillable cells.
    cells: Vec<bool>,
    variables: BTreeSet<Slot>,
    overlaps: HashMap<(Slot, Slot), Overlap>,
    neighbors: BTreeMap<Slot, BTreeSet<Slot>>,
}

impl Structure {
    /// Builds a structure from a row-major vector of fillable flags.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::Empty`] if either dimension is zero and
    /// [`StructureError::CellCountMismatch`] if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, StructureError> {
        if width == 0 || height == 0 {
            return Err(StructureError::Empty);
        }
        if cells.len() != width * height {
            return Err(StructureError::CellCountMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }

        let mut this = Self {
            width,
            height,
            cells,
            variables: BTreeSet::new(),
            overlaps: HashMap::new(),
            neighbors: BTreeMap::new(),
        };
        this.variables = this.find_slots();
        this.link_slots();
        Ok(this)
    }

    fn find_slots(&self) -> BTreeSet<Slot> {
        let mut slots = BTreeSet::new();
        for row in 0..self.height {
            for column in 0..self.width {
                if !self.is_fillable(row, column) {
                    continue;
                }
                if column == 0 || !self.is_fillable(row, column - 1) {
                    let length = (column..self.width)
                        .take_while(|&c| self.is_fillable(row, c))
                        .count();
                    if length > 1 {
                        slots.insert(Slot::new(row, column, Direction::Across, length));
                    }
                }
                if row == 0 || !self.is_fillable(row - 1, column) {
                    let length = (row..self.height)
                        .take_while(|&r| self.is_fillable(r, column))
                        .count();
                    if length > 1 {
                        slots.insert(Slot::new(row, column, Direction::Down, length));
                    }
                }
            }
        }
        slots
    }

    fn link_slots(&mut self) {
        let mut covering: HashMap<(usize, usize), Vec<(Slot, usize)>> = HashMap::new();
        for &slot in &self.variables {
            for (k, cell) in slot.cells().enumerate() {
                covering.entry(cell).or_default().push((slot, k));
            }
        }

        self.neighbors = self
            .variables
            .iter()
            .map(|&slot| (slot, BTreeSet::new()))
            .collect();
        for slots in covering.values() {
            for (i, &(x, x_offset)) in slots.iter().enumerate() {
                for &(y, y_offset) in &slots[i + 1..] {
                    let overlap = Overlap::new(x_offset, y_offset);
                    self.overlaps.insert((x, y), overlap);
                    self.overlaps.insert((y, x), overlap.reversed());
                    if let Some(n) = self.neighbors.get_mut(&x) {
                        n.insert(y);
                    }
                    if let Some(n) = self.neighbors.get_mut(&y) {
                        n.insert(x);
                    }
                }
            }
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the cell at (`row`, `column`) can hold a letter.
    ///
    /// Cells outside the grid are treated as blocked.
    #[must_use]
    pub fn is_fillable(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width && self.cells[row * self.width + column]
    }

    /// Returns every slot, in slot order.
    #[must_use]
    pub fn variables(&self) -> &BTreeSet<Slot> {
        &self.variables
    }

    /// Returns the shared cell of `x` and `y` as offsets into each slot.
    ///
    /// Returns `None` if the slots do not cross, or if `x == y`.
    #[must_use]
    pub fn overlap(&self, x: Slot, y: Slot) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Returns every slot that shares a cell with `slot`, in slot order.
    ///
    /// Returns an empty set for slots not in this structure.
    #[must_use]
    pub fn neighbors(&self, slot: Slot) -> &BTreeSet<Slot> {
        self.neighbors.get(&slot).unwrap_or(&NO_NEIGHBORS)
    }
}

impl FromStr for Structure {
    type Err = StructureError;

    /// Parses the row-per-line format.
    ///
    /// [`BLOCKED`] marks a blocked cell and any other character a fillable one.
    /// Rows shorter than the longest row are padded with blocked cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s.lines().map(|line| line.chars().collect()).collect();
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let cells = rows
            .iter()
            .flat_map(|row| (0..width).map(|c| row.get(c).is_some_and(|&ch| ch != BLOCKED)))
            .collect();
        Self::from_cells(width, height, cells)
    }
}

impl Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for column in 0..self.width {
                let ch = if self.is_fillable(row, column) {
                    FILLABLE
                } else {
                    BLOCKED
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
