//! glyphgrid: bitmap font sheet scanner.
//! Extracts per-cell glyph masks from a font sheet and reads text back out of
//! screenshots by exact mask match.

pub mod charmap;
mod error;
mod load;
mod mask;
mod pixel;
pub mod reader;
mod report;
pub mod scan;
mod table;

pub use charmap::{write_charmap, CharLayout, CharMap};
pub use error::{GlyphError, Result};
pub use load::{decode_image, load_image};
pub use mask::GlyphMask;
pub use pixel::{ImageSource, Pixel, PixelBuffer};
pub use reader::{read_glyph, read_line, ReadOptions};
pub use report::{render_report, write_report};
pub use scan::{scan, scan_cell, ScanOptions};
pub use table::{GlyphEntry, GlyphTable, GridCoord};

// Test utilities
pub mod test_support;
