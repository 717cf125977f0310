/// State of one output cell while the pipeline runs.
///
/// A cell never holds an undefined value: it is transparent, a pending
/// outline mark, or a resolved glyph (palette character, space, or the
/// outline block).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// Transparent source pixel, or a border cell not yet resolved.
    #[default]
    Transparent,
    /// Marked by a directional outline sweep, pending the finalize pass.
    EdgeCandidate,
    /// Resolved printable glyph.
    Glyph(char),
}

impl Cell {
    /// Printable character for this cell. Unresolved states print as space.
    #[inline(always)]
    #[must_use]
    pub const fn printable(self) -> char {
        match self {
            Self::Glyph(ch) => ch,
            Self::Transparent | Self::EdgeCandidate => ' ',
        }
    }
}

/// Character grid the pipeline mutates in place, row-major.
///
/// Created once per run by [`CharGrid::for_sprite`], written by the
/// quantizer, outline detector, and normalizer, then read by the renderer.
///
/// # Example
/// ```
/// use sc_core::grid::{Cell, CharGrid};
/// let mut grid = CharGrid::new(4, 2);
/// assert_eq!(*grid.get(0, 0), Cell::Transparent);
/// grid.set(3, 1, Cell::Glyph('█'));
/// assert_eq!(grid.get(3, 1).printable(), '█');
/// ```
#[derive(Clone)]
pub struct CharGrid {
    /// Flat array of cells, row-major.
    pub cells: Vec<Cell>,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl CharGrid {
    /// Create a grid with every cell transparent.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![Cell::Transparent; (width * height) as usize],
            width,
            height,
        }
    }

    /// Size a grid to a sprite: the sprite's dimensions, plus a one-cell
    /// border ring on every side when an outline is requested.
    ///
    /// # Example
    /// ```
    /// use sc_core::grid::CharGrid;
    /// assert_eq!(CharGrid::for_sprite(8, 6, false).height, 6);
    /// assert_eq!(CharGrid::for_sprite(8, 6, true).height, 8);
    /// ```
    #[must_use]
    pub fn for_sprite(width: u32, height: u32, outline: bool) -> Self {
        if outline {
            Self::new(width + 2, height + 2)
        } else {
            Self::new(width, height)
        }
    }

    /// Set the cell at (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        self.cells[(y * self.width + x) as usize] = cell;
    }

    /// Get the cell at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> &Cell {
        &self.cells[(y * self.width + x) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_grid_is_entirely_transparent() {
        let grid = CharGrid::for_sprite(3, 2, false);
        assert_eq!(grid.cells.len(), 6);
        assert!(grid.cells.iter().all(|c| *c == Cell::Transparent));
    }

    #[test]
    fn outline_request_grows_both_dimensions_by_two() {
        let grid = CharGrid::for_sprite(3, 2, true);
        assert_eq!((grid.width, grid.height), (5, 4));
        assert!(grid.cells.iter().all(|c| *c == Cell::Transparent));
    }

    #[test]
    fn set_and_get_are_row_major() {
        let mut grid = CharGrid::new(3, 2);
        grid.set(2, 1, Cell::Glyph('x'));
        assert_eq!(grid.cells[5], Cell::Glyph('x'));
        assert_eq!(*grid.get(2, 1), Cell::Glyph('x'));
    }

    #[test]
    fn unresolved_states_print_as_space() {
        assert_eq!(Cell::Transparent.printable(), ' ');
        assert_eq!(Cell::EdgeCandidate.printable(), ' ');
        assert_eq!(Cell::Glyph('▓').printable(), '▓');
    }
}
