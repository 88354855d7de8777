//! Text and image rendering of filled grids.

use std::fmt::{self, Display};

use crate::{Assignment, Structure};

/// Glyph printed for blocked cells by [`Structure::display`].
pub const BLOCK_GLYPH: char = '█';

impl Structure {
    /// Returns the letter at every cell for `assignment`.
    ///
    /// The outer vector is indexed by row. Blocked cells and fillable cells no
    /// assigned slot covers are `None`.
    #[must_use]
    pub fn letter_grid(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; self.width()]; self.height()];
        for (slot, word) in assignment.iter() {
            for (k, (row, column)) in slot.cells().take(word.length()).enumerate() {
                if let Some(cell) = letters.get_mut(row).and_then(|r| r.get_mut(column)) {
                    *cell = Some(word.letter(k));
                }
            }
        }
        letters
    }

    /// Returns a [`Display`] adapter that prints the grid filled with
    /// `assignment`.
    ///
    /// Blocked cells are printed as [`BLOCK_GLYPH`] and unfilled fillable cells
    /// as a space. Every row ends with a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossfill_core::{Assignment, Direction, Slot, Structure, Word};
    ///
    /// let structure: Structure = "__#".parse()?;
    /// let slot = Slot::new(0, 0, Direction::Across, 2);
    /// let assignment = Assignment::new().extended(slot, Word::new("hi").unwrap());
    ///
    /// assert_eq!(structure.display(&assignment).to_string(), "HI█\n");
    /// assert_eq!(structure.display(&Assignment::new()).to_string(), "  █\n");
    /// # Ok::<(), crossfill_core::StructureError>(())
    /// ```
    #[must_use]
    pub fn display<'a>(&'a self, assignment: &'a Assignment) -> GridDisplay<'a> {
        GridDisplay {
            structure: self,
            assignment,
        }
    }
}

/// Text rendering of a filled grid, created by [`Structure::display`].
#[derive(Debug, Clone, Copy)]
pub struct GridDisplay<'a> {
    structure: &'a Structure,
    assignment: &'a Assignment,
}

impl Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self.structure.letter_grid(self.assignment);
        for (row, row_letters) in letters.iter().enumerate() {
            for (column, letter) in row_letters.iter().enumerate() {
                let ch = if self.structure.is_fillable(row, column) {
                    letter.unwrap_or(' ')
                } else {
                    BLOCK_GLYPH
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders filled grids as SVG images.
///
/// The image has a black background with a white square per fillable cell,
/// inset by the border width, and each letter centered in its cell.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Assignment, Structure, SvgRenderer};
///
/// let structure: Structure = "__\n#_".parse()?;
/// let svg = SvgRenderer::new()
///     .with_cell_size(40)
///     .image(&structure, &Assignment::new())
///     .to_string();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains(r#"width="80" height="80""#));
/// # Ok::<(), crossfill_core::StructureError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    cell_size: u32,
    border: u32,
    font_size: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    /// Creates a renderer with 100px cells, a 2px border, and 80px letters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell_size: 100,
            border: 2,
            font_size: 80,
        }
    }

    /// Sets the side length of each cell in pixels.
    #[must_use]
    pub const fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the width of the black border drawn around each cell.
    #[must_use]
    pub const fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Sets the letter font size in pixels.
    #[must_use]
    pub const fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns a [`Display`] adapter producing the SVG document.
    #[must_use]
    pub fn image<'a>(&self, structure: &'a Structure, assignment: &'a Assignment) -> SvgImage<'a> {
        SvgImage {
            renderer: *self,
            structure,
            assignment,
        }
    }
}

/// An SVG document for a filled grid, created by [`SvgRenderer::image`].
#[derive(Debug, Clone, Copy)]
pub struct SvgImage<'a> {
    renderer: SvgRenderer,
    structure: &'a Structure,
    assignment: &'a Assignment,
}

impl Display for SvgImage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SvgRenderer {
            cell_size,
            border,
            font_size,
        } = self.renderer;
        let cell = u64::from(cell_size);
        let border = u64::from(border);
        let interior = cell.saturating_sub(2 * border);
        let width = cell.saturating_mul(pixels(self.structure.width()));
        let height = cell.saturating_mul(pixels(self.structure.height()));

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(f, r#"<rect width="{width}" height="{height}" fill="black"/>"#)?;

        let letters = self.structure.letter_grid(self.assignment);
        for (row, row_letters) in letters.iter().enumerate() {
            for (column, letter) in row_letters.iter().enumerate() {
                if !self.structure.is_fillable(row, column) {
                    continue;
                }
                let x = pixels(column).saturating_mul(cell) + border;
                let y = pixels(row).saturating_mul(cell) + border;
                writeln!(
                    f,
                    r#"<rect x="{x}" y="{y}" width="{interior}" height="{interior}" fill="white"/>"#
                )?;
                if let Some(letter) = letter {
                    let cx = x + interior / 2;
                    let cy = y + interior / 2;
                    writeln!(
                        f,
                        r#"<text x="{cx}" y="{cy}" font-family="sans-serif" font-size="{font_size}" text-anchor="middle" dominant-baseline="central" fill="black">{}</text>"#,
                        Escaped(*letter)
                    )?;
                }
            }
        }
        writeln!(f, "</svg>")
    }
}

fn pixels(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

struct Escaped(char);

impl Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            '&' => f.write_str("&amp;"),
            '<' => f.write_str("&lt;"),
            '>' => f.write_str("&gt;"),
            '"' => f.write_str("&quot;"),
            '\'' => f.write_str("&apos;"),
            ch => write!(f, "{ch}"),
        }
    }
}
