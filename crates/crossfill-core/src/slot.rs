//! Slot geometry: directions, slots, and overlaps.

use std::fmt::{self, Display};

/// The direction a slot runs in.
///
/// `Across` orders before `Down`, which makes [`Slot`] ordering stable for
/// slots that start on the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => f.write_str("across"),
            Self::Down => f.write_str("down"),
        }
    }
}

/// A maximal run of fillable cells that must hold one word.
///
/// A slot is identified by its starting cell, direction, and length. Two slots
/// are equal iff all four fields are equal, so slots are used by value as map
/// and set keys.
///
/// The derived ordering (row, column, direction, length) is the canonical
/// slot order used wherever the solver iterates slots deterministically.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, Slot};
///
/// let slot = Slot::new(0, 2, Direction::Down, 4);
/// assert_eq!(slot.cell(3), (3, 2));
/// assert_eq!(slot.to_string(), "(0, 2) down 4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    row: usize,
    column: usize,
    direction: Direction,
    length: usize,
}

impl Slot {
    /// Creates a slot starting at (`row`, `column`).
    #[must_use]
    pub const fn new(row: usize, column: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            column,
            direction,
            length,
        }
    }

    /// Returns the row of the first cell.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column of the first cell.
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Returns the direction of the slot.
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Returns the number of cells in the slot.
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    /// Returns the (row, column) of the `k`-th cell of the slot.
    ///
    /// # Panics
    ///
    /// Panics if `k` is not less than the slot length.
    #[must_use]
    pub fn cell(self, k: usize) -> (usize, usize) {
        assert!(k < self.length, "cell offset {k} out of range for {self}");
        match self.direction {
            Direction::Across => (self.row, self.column + k),
            Direction::Down => (self.row + k, self.column),
        }
    }

    /// Returns an iterator over the (row, column) of every cell, in order.
    pub fn cells(self) -> impl ExactSizeIterator<Item = (usize, usize)> {
        (0..self.length).map(move |k| self.cell(k))
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} {}",
            self.row, self.column, self.direction, self.length
        )
    }
}

/// The shared cell between two crossing slots, seen from one of them.
///
/// For `overlap(x, y)`, the `own`-th letter of `x`'s word must equal the
/// `other`-th letter of `y`'s word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap {
    /// Offset of the shared cell within the first slot.
    pub own: usize,
    /// Offset of the shared cell within the second slot.
    pub other: usize,
}

impl Overlap {
    /// Creates an overlap from the two offsets.
    #[must_use]
    pub const fn new(own: usize, other: usize) -> Self {
        Self { own, other }
    }

    /// Returns the same overlap seen from the other slot.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            own: self.other,
            other: self.own,
        }
    }
}
