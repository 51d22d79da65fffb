//! Test support utilities for glyphgrid.
//!
//! Helpers for drawing synthetic font sheets and screenshots. Useful in tests
//! and benchmarks, not part of the scanning API.

use crate::{mask::GlyphMask, pixel::PixelBuffer, Pixel};

/// Background used for synthetic sheets: opaque black.
pub const BACKGROUND: Pixel = Pixel::rgb(0, 0, 0);

/// Draws glyph patterns into a grid of square cells.
///
/// Patterns are rows of text, top to bottom; `'#'` is white ink and any other
/// character is background.
pub struct SheetBuilder {
    cell_size: u32,
    buffer: PixelBuffer,
}

impl SheetBuilder {
    pub fn new(cols: u32, rows: u32, cell_size: u32) -> Self {
        Self {
            cell_size,
            buffer: PixelBuffer::new(cols * cell_size, rows * cell_size, BACKGROUND),
        }
    }

    /// Draw `pattern` with its top-left corner at cell `(col, row)`.
    pub fn glyph(mut self, col: u32, row: u32, pattern: &[&str]) -> Self {
        let (x0, y0) = (col * self.cell_size, row * self.cell_size);
        for (dy, line) in pattern.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch == '#' {
                    self.buffer.set(x0 + dx as u32, y0 + dy as u32, Pixel::WHITE);
                }
            }
        }
        self
    }

    /// Set a single pixel, e.g. to draw off-white noise.
    pub fn pixel(mut self, x: u32, y: u32, pixel: Pixel) -> Self {
        self.buffer.set(x, y, pixel);
        self
    }

    pub fn build(self) -> PixelBuffer {
        self.buffer
    }
}

/// Column-major bits of the first `width` columns of `pattern`, padded to
/// `cell_size` rows. This is what the scanner should recover for it.
pub fn pattern_bits(pattern: &[&str], width: usize, cell_size: usize) -> String {
    let rows: Vec<Vec<char>> = pattern.iter().map(|l| l.chars().collect()).collect();
    let mut bits = String::with_capacity(width * cell_size);
    for dx in 0..width {
        for dy in 0..cell_size {
            let ink = rows
                .get(dy)
                .and_then(|r| r.get(dx))
                .is_some_and(|&c| c == '#');
            bits.push(if ink { '1' } else { '0' });
        }
    }
    bits
}

/// Draw `mask` at screen `(x, y)` magnified `scale` times, like a game UI
/// rendering the font at a GUI scale. Returns the x just past the glyph.
pub fn stamp_mask(
    buffer: &mut PixelBuffer,
    mask: &GlyphMask,
    x: u32,
    y: u32,
    cell_height: u32,
    scale: u32,
    ink: Pixel,
) -> u32 {
    let width = mask.width(cell_height) as u32;
    for dx in 0..width {
        for dy in 0..cell_height {
            if !mask.bit(dx, dy, cell_height) {
                continue;
            }
            for sx in 0..scale {
                for sy in 0..scale {
                    buffer.set(x + dx * scale + sx, y + dy * scale + sy, ink);
                }
            }
        }
    }
    x + width * scale
}
