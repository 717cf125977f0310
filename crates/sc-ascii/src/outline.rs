use sc_core::grid::{Cell, CharGrid};

/// Solid block written over finalized edge candidates.
pub const OUTLINE_GLYPH: char = '█';

/// One directional sweep: every transparent cell whose neighbor at
/// (x+dx, y+dy) holds a resolved glyph becomes an edge candidate.
///
/// Candidates from earlier sweeps never count as opaque, so sweep order
/// cannot cascade marks through transparent regions. Cells whose neighbor
/// would fall outside the grid are skipped.
fn sweep(grid: &mut CharGrid, dx: i32, dy: i32) {
    for y in 0..grid.height {
        for x in 0..grid.width {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= grid.width as i32 || ny >= grid.height as i32 {
                continue;
            }
            if *grid.get(x, y) == Cell::Transparent
                && matches!(grid.get(nx as u32, ny as u32), Cell::Glyph(_))
            {
                grid.set(x, y, Cell::EdgeCandidate);
            }
        }
    }
}

/// Surface an outline around every opaque region of the grid.
///
/// Four directional sweeps (looking below, above, right, then left), then a
/// finalize pass that rewrites every candidate to [`OUTLINE_GLYPH`]. A cell
/// joins the outline when it is transparent and at least one of its four
/// axis-aligned neighbors is not.
pub fn trace_outline(grid: &mut CharGrid) {
    sweep(grid, 0, 1);
    sweep(grid, 0, -1);
    sweep(grid, 1, 0);
    sweep(grid, -1, 0);

    let mut marked = 0usize;
    for cell in &mut grid.cells {
        if *cell == Cell::EdgeCandidate {
            *cell = Cell::Glyph(OUTLINE_GLYPH);
            marked += 1;
        }
    }
    log::debug!("outline traced: {marked} edge cells");
}
