//! The glyph grid scanner.
//!
//! A font sheet renders one glyph per square cell, left aligned, with at
//! least one blank pixel column after it. Reading each cell column by column
//! and stopping at the first blank column after some ink recovers the glyph's
//! rendered width without knowing it up front. Cells that never show ink
//! (spacing) and cells that never show a blank column after ink produce no
//! entry.

use log::{debug, trace};

use crate::{
    error::{GlyphError, Result},
    mask::GlyphMask,
    pixel::ImageSource,
    table::{GlyphTable, GridCoord},
};

/// Largest cell the scanner handles; masks must stay shorter than a full 8x8 cell.
pub const MAX_CELL_SIZE: u32 = 8;

/// Which part of the sheet to scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Vertical pixel offset of the first glyph row. Multiple of `cell_size`.
    pub origin_row: u32,
    /// Number of glyph rows to scan.
    pub row_count: u32,
    /// Cell edge length in pixels.
    pub cell_size: u32,
}

impl Default for ScanOptions {
    /// Layout of the reference ASCII sheet: rows 2..=7 hold `!` through `~`.
    fn default() -> Self {
        Self {
            origin_row: 2 * MAX_CELL_SIZE,
            row_count: 6,
            cell_size: MAX_CELL_SIZE,
        }
    }
}

impl ScanOptions {
    pub fn new(origin_row: u32, row_count: u32, cell_size: u32) -> Self {
        Self {
            origin_row,
            row_count,
            cell_size,
        }
    }

    /// Check the requested rows fit inside `image`.
    ///
    /// [`scan`] assumes this holds and does no checking of its own.
    pub fn check<I: ImageSource + ?Sized>(&self, image: &I) -> Result<()> {
        if self.cell_size == 0 || self.cell_size > MAX_CELL_SIZE {
            return Err(GlyphError::Geometry(format!(
                "cell size {} outside 1..={MAX_CELL_SIZE}",
                self.cell_size
            )));
        }
        if self.origin_row % self.cell_size != 0 {
            return Err(GlyphError::Geometry(format!(
                "origin row {} is not a multiple of cell size {}",
                self.origin_row, self.cell_size
            )));
        }
        let bottom = self
            .row_count
            .checked_mul(self.cell_size)
            .and_then(|h| h.checked_add(self.origin_row))
            .ok_or_else(|| GlyphError::Geometry("row range overflows".into()))?;
        if bottom > image.height() {
            return Err(GlyphError::Geometry(format!(
                "rows end at y={bottom} but image is {} pixels tall",
                image.height()
            )));
        }
        Ok(())
    }

    /// Number of whole cells across the image.
    pub fn columns<I: ImageSource + ?Sized>(&self, image: &I) -> u32 {
        image.width() / self.cell_size
    }
}

/// Scan `row_count` rows of cells starting at `origin_row` and collect every
/// cell that holds a terminated glyph.
pub fn scan<I: ImageSource + ?Sized>(image: &I, options: &ScanOptions) -> GlyphTable {
    let cell = options.cell_size;
    let columns = options.columns(image);
    let mut table = GlyphTable::new();

    for r in 0..options.row_count {
        let y0 = options.origin_row + r * cell;
        let before = table.len();
        for c in 0..columns {
            let x0 = c * cell;
            if let Some(mask) = scan_cell(image, x0, y0, cell) {
                let coord = GridCoord::new(x0 / cell, y0 / cell);
                trace!("cell {coord} => {mask}");
                table.insert(coord, mask);
            }
        }
        debug!(
            "row y={y0}: {} glyphs in {columns} cells",
            table.len() - before
        );
    }
    table
}

/// Read one cell at pixel origin `(x0, y0)`.
///
/// Returns the bits of the columns before the first blank column that follows
/// ink, or `None` when the cell is blank or never ends in a blank column.
pub fn scan_cell<I: ImageSource + ?Sized>(
    image: &I,
    x0: u32,
    y0: u32,
    cell_size: u32,
) -> Option<GlyphMask> {
    let step = cell_size as usize;
    let mut bits = String::with_capacity(step * step);
    let mut seen_ink = false;

    for dx in 0..cell_size {
        let mut column_blank = true;
        for dy in 0..cell_size {
            if image.pixel_at(x0 + dx, y0 + dy).is_opaque_white() {
                bits.push('1');
                column_blank = false;
            } else {
                bits.push('0');
            }
        }
        if column_blank && seen_ink {
            bits.truncate(bits.len() - step);
            return Some(GlyphMask::from_bits(bits));
        }
        seen_ink |= !column_blank;
    }
    None
}
