use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use sc_core::grid::CharGrid;
use thiserror::Error;

/// Errors raised while emitting the grid. Fatal: partial output is not
/// considered valid and nothing is retried.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Destination path uncreatable.
    #[error("cannot create {path}: {source}")]
    Create {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Write to the console or the destination file failed.
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
}

/// One grid row as output text: each cell's character twice, since glyphs
/// render roughly half as wide as they are tall.
///
/// # Example
/// ```
/// use sc_ascii::render::row_text;
/// use sc_core::grid::{Cell, CharGrid};
/// let mut grid = CharGrid::new(2, 1);
/// grid.set(0, 0, Cell::Glyph('▓'));
/// grid.set(1, 0, Cell::Glyph(' '));
/// assert_eq!(row_text(&grid, 0), "▓▓  ");
/// ```
#[must_use]
pub fn row_text(grid: &CharGrid, y: u32) -> String {
    let mut line = String::with_capacity(grid.width as usize * 2 + 1);
    for x in 0..grid.width {
        let ch = grid.get(x, y).printable();
        line.push(ch);
        line.push(ch);
    }
    line
}

/// Stream the grid to stdout and the destination file in a single pass.
///
/// Each row is formatted once and the same bytes go to both sinks,
/// terminated with a line break. The file handle closes on every exit
/// path, including errors.
///
/// # Errors
/// [`RenderError::Create`] when the destination cannot be created,
/// [`RenderError::Write`] when either sink rejects a write.
pub fn render(grid: &CharGrid, destination: &Path) -> Result<(), RenderError> {
    let file = File::create(destination).map_err(|source| RenderError::Create {
        path: destination.to_path_buf(),
        source,
    })?;
    let mut file = BufWriter::new(file);
    let stdout = io::stdout();
    let mut console = stdout.lock();

    for y in 0..grid.height {
        let mut line = row_text(grid, y);
        line.push('\n');
        console.write_all(line.as_bytes())?;
        file.write_all(line.as_bytes())?;
    }
    file.flush()?;
    Ok(())
}
