use sc_core::grid::{Cell, CharGrid};
use sc_core::palette::FAINT_GLYPH;

/// Blank out cells that should read as empty in the final image.
///
/// Transparent sentinels and the near-dark dot glyph both become a literal
/// space. Must run after outline detection, which still needs to tell the
/// sentinel apart from dark-but-opaque glyphs. Idempotent.
pub fn normalize(grid: &mut CharGrid) {
    for cell in &mut grid.cells {
        if matches!(cell, Cell::Transparent | Cell::Glyph(FAINT_GLYPH)) {
            *cell = Cell::Glyph(' ');
        }
    }
}
