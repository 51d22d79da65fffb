//! Plain-text listing of a scanned table.
//!
//! ```text
//! 2 Items Found.
//! (0.0 2.0) => 0111110010000010...
//! (1.0 2.0) => 11111010
//! ```

use std::io::Write;

use crate::{
    error::Result,
    table::{GlyphTable, GridCoord},
};

/// Write the count line followed by one `(<col> <row>) => <mask>` line per entry.
pub fn write_report<W: Write>(table: &GlyphTable, cell_size: u32, out: &mut W) -> Result<()> {
    writeln!(out, "{} Items Found.", table.len())?;
    for (coord, mask) in table {
        let (x, y) = real_coord(coord, cell_size);
        writeln!(out, "({x:.1} {y:.1}) => {mask}")?;
    }
    Ok(())
}

pub fn render_report(table: &GlyphTable, cell_size: u32) -> Result<String> {
    let mut buf = Vec::new();
    write_report(table, cell_size, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Pixel origin of the cell divided by the cell size, as a real number.
fn real_coord(coord: GridCoord, cell_size: u32) -> (f64, f64) {
    let cell = f64::from(cell_size.max(1));
    (
        f64::from(coord.col * cell_size) / cell,
        f64::from(coord.row * cell_size) / cell,
    )
}
