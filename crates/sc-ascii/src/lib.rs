/// The sprite→ASCII conversion pipeline.
///
/// Quantizes a decoded frame against a character ramp, optionally traces an
/// outline around opaque regions, blanks transparent and near-dark cells,
/// and emits the result to the console and a text file.

pub mod normalize;
pub mod outline;
pub mod quantize;
pub mod render;

use sc_core::frame::SpriteFrame;
use sc_core::grid::CharGrid;
use sc_core::palette::Palette;

pub use render::RenderError;

/// Convert a frame into its character grid.
///
/// Runs the full in-memory pipeline: grid allocation, quantization, the
/// outline sweeps when requested, then normalization. The returned grid is
/// ready for [`render::render`]. Single-threaded; every call owns a fresh
/// grid.
///
/// # Example
/// ```
/// use sc_ascii::convert;
/// use sc_core::{Palette, SpriteFrame};
///
/// let frame = SpriteFrame::new(2, 2);
/// let grid = convert(&frame, Palette::Default, false);
/// assert_eq!((grid.width, grid.height), (2, 2));
/// ```
#[must_use]
pub fn convert(frame: &SpriteFrame, palette: Palette, outline: bool) -> CharGrid {
    let mut grid = CharGrid::for_sprite(frame.width, frame.height, outline);
    quantize::quantize(frame, palette.ramp(), &mut grid, outline);
    if outline {
        outline::trace_outline(&mut grid);
    }
    normalize::normalize(&mut grid);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::row_text;
    use sc_core::grid::Cell;

    fn opaque(r: u8, g: u8, b: u8) -> (u8, u8, u8, u8) {
        (r, g, b, 255)
    }

    #[test]
    fn uniform_mid_gray_quantizes_uniformly() {
        let mut frame = SpriteFrame::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                frame.set_pixel(x, y, opaque(128, 128, 128));
            }
        }

        let grid = convert(&frame, Palette::Default, false);
        assert_eq!((grid.width, grid.height), (2, 2));
        assert!(grid.cells.iter().all(|c| *c == Cell::Glyph('▒')));
        for y in 0..2 {
            assert_eq!(row_text(&grid, y), "▒▒▒▒");
        }
    }

    #[test]
    fn fully_transparent_pixel_with_outline_yields_all_spaces() {
        let frame = SpriteFrame::new(1, 1);
        let grid = convert(&frame, Palette::HighColorRange, true);

        assert_eq!((grid.width, grid.height), (3, 3));
        assert!(grid.cells.iter().all(|c| *c == Cell::Glyph(' ')));
    }

    #[test]
    fn transparent_pixels_end_as_space_for_every_palette() {
        let mut frame = SpriteFrame::new(1, 1);
        frame.set_pixel(0, 0, (255, 0, 255, 0));
        for palette in Palette::ALL {
            let grid = convert(&frame, palette, false);
            assert_eq!(*grid.get(0, 0), Cell::Glyph(' '), "{palette:?}");
        }
    }

    #[test]
    fn opaque_rectangle_on_transparency_grows_an_outline_ring() {
        // 2×2 mid-gray block centered in a 4×4 transparent sprite.
        let mut frame = SpriteFrame::new(4, 4);
        for y in 1..3 {
            for x in 1..3 {
                frame.set_pixel(x, y, opaque(128, 128, 128));
            }
        }

        let grid = convert(&frame, Palette::Default, true);
        assert_eq!((grid.width, grid.height), (6, 6));

        // Interior keeps its palette glyphs.
        for y in 2..4 {
            for x in 2..4 {
                assert_eq!(*grid.get(x, y), Cell::Glyph('▒'));
            }
        }
        // Every transparent cell edge-adjacent to the block is outlined.
        for (x, y) in [(2, 1), (3, 1), (1, 2), (4, 2), (1, 3), (4, 3), (2, 4), (3, 4)] {
            assert_eq!(*grid.get(x, y), Cell::Glyph('█'), "ring cell ({x},{y})");
        }
        // The outer border stays blank.
        for i in 0..6 {
            assert_eq!(*grid.get(i, 0), Cell::Glyph(' '));
            assert_eq!(*grid.get(i, 5), Cell::Glyph(' '));
            assert_eq!(*grid.get(0, i), Cell::Glyph(' '));
            assert_eq!(*grid.get(5, i), Cell::Glyph(' '));
        }
    }

    #[test]
    fn near_dark_pixels_read_as_empty() {
        // Brightness low enough to hit the '.' slot, which normalizes away.
        let mut frame = SpriteFrame::new(1, 1);
        frame.set_pixel(0, 0, opaque(40, 40, 40));
        let grid = convert(&frame, Palette::Default, false);
        assert_eq!(*grid.get(0, 0), Cell::Glyph(' '));
    }
}
