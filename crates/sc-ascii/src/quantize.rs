use sc_core::frame::SpriteFrame;
use sc_core::grid::{Cell, CharGrid};

/// Map a brightness sample to a ramp index.
///
/// `round()` can land one past the last glyph for near-maximal brightness;
/// the result is clamped instead of indexed out of bounds.
///
/// # Example
/// ```
/// use sc_ascii::quantize::ramp_index;
/// assert_eq!(ramp_index(0.0, 6), 0);
/// assert_eq!(ramp_index(255.0, 6), 5);
/// ```
#[inline(always)]
#[must_use]
pub fn ramp_index(brightness: f64, ramp_len: usize) -> usize {
    let idx = (brightness / 255.0 * (ramp_len - 1) as f64).round() as usize;
    idx.min(ramp_len - 1)
}

/// Copy pass: quantize every source pixel into the grid.
///
/// Transparent pixels (alpha 0) keep the transparency sentinel regardless
/// of their color channels. When an outline border is present, pixel (x, y)
/// lands at cell (x+1, y+1) and the border ring is left untouched for the
/// outline detector.
pub fn quantize(frame: &SpriteFrame, ramp: &[char], grid: &mut CharGrid, outline: bool) {
    let offset = u32::from(outline);
    for y in 0..frame.height {
        for x in 0..frame.width {
            let cell = if frame.is_transparent(x, y) {
                Cell::Transparent
            } else {
                Cell::Glyph(ramp[ramp_index(frame.brightness(x, y), ramp.len())])
            };
            grid.set(x + offset, y + offset, cell);
        }
    }
}
