//! Exact-match text reading from screenshots that use a scanned font.

use log::trace;

use crate::{charmap::CharMap, mask::GlyphMask, pixel::ImageSource, Pixel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadOptions {
    /// Screen pixels per font pixel, on both axes.
    pub scale: u32,
    /// Font pixels sampled per column.
    pub cell_height: u32,
    /// Exclusive right bound in screen pixels; defaults to the image width.
    pub max_x: Option<u32>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            cell_height: 8,
            max_x: None,
        }
    }
}

impl ReadOptions {
    pub fn with_scale(scale: u32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }
}

/// One glyph read off a screenshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRead {
    pub mask: GlyphMask,
    /// Screen x just past the terminator column (or the right bound).
    pub next_x: u32,
    /// False when the right bound was hit before a blank column.
    pub terminated: bool,
}

/// Read columns from `(x, y)` rightwards until one has no ink.
///
/// The blank column ends the glyph and is not part of the mask, so a blank
/// first column gives an empty mask. Samples below the image bottom read as
/// blank.
pub fn read_glyph<I, F>(image: &I, x: u32, y: u32, options: &ReadOptions, is_ink: F) -> GlyphRead
where
    I: ImageSource + ?Sized,
    F: Fn(Pixel) -> bool,
{
    let scale = options.scale.max(1);
    let rows = options.cell_height as usize;
    let right = options
        .max_x
        .map_or(image.width(), |m| m.min(image.width()));
    let mut bits = String::new();
    let mut x = x;

    while x < right {
        let mut column_blank = true;
        for dy in 0..options.cell_height {
            let sy = y + dy * scale;
            if sy < image.height() && is_ink(image.pixel_at(x, sy)) {
                bits.push('1');
                column_blank = false;
            } else {
                bits.push('0');
            }
        }
        x += scale;
        if column_blank {
            bits.truncate(bits.len() - rows);
            return GlyphRead {
                mask: GlyphMask::from_bits(bits),
                next_x: x,
                terminated: true,
            };
        }
    }
    GlyphRead {
        mask: GlyphMask::from_bits(bits),
        next_x: x,
        terminated: false,
    }
}

/// Read characters left to right starting at `(x, y)`.
///
/// Stops at the first blank gap, the first glyph missing from `map`, or the
/// right bound.
pub fn read_line<I, F>(
    image: &I,
    map: &CharMap,
    x: u32,
    y: u32,
    options: &ReadOptions,
    is_ink: F,
) -> String
where
    I: ImageSource + ?Sized,
    F: Fn(Pixel) -> bool,
{
    let mut text = String::new();
    let mut x = x;
    loop {
        let glyph = read_glyph(image, x, y, options, &is_ink);
        if glyph.mask.is_empty() {
            break;
        }
        let Some(ch) = map.get(&glyph.mask) else {
            trace!("unknown glyph at x={x}: {}", glyph.mask);
            break;
        };
        text.push(ch);
        if !glyph.terminated {
            break;
        }
        x = glyph.next_x;
    }
    text
}
