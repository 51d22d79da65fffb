use std::fmt;

use crate::error::{GlyphError, Result};

/// Column-major occupancy bits of one glyph, as a `'0'`/`'1'` string.
///
/// Each run of `cell_size` characters is one pixel column, top to bottom.
/// The blank column that ended the glyph is not part of the mask.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GlyphMask {
    bits: String,
}

impl GlyphMask {
    /// Validate a bit string read from elsewhere (e.g. a stored dictionary).
    ///
    /// The string must be made of `'0'`/`'1'` only, be a whole number of
    /// `cell_size`-bit columns, hold at least one `'1'` and stay shorter than
    /// a full cell, the same shape [`crate::scan_cell`] produces. The empty
    /// mask is the one exception: it is accepted as the "blank gap" a text
    /// reader sees between words.
    pub fn parse(bits: &str, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(GlyphError::InvalidMask("cell size must be non-zero".into()));
        }
        if let Some(bad) = bits.chars().find(|c| *c != '0' && *c != '1') {
            return Err(GlyphError::InvalidMask(format!("unexpected character {bad:?}")));
        }
        if bits.len() % cell_size as usize != 0 {
            return Err(GlyphError::InvalidMask(format!(
                "length {} is not a multiple of {cell_size}",
                bits.len()
            )));
        }
        if !bits.is_empty() && !bits.contains('1') {
            return Err(GlyphError::InvalidMask("mask has no ink".into()));
        }
        let cell_area = (cell_size as usize).checked_mul(cell_size as usize);
        if cell_area.is_some_and(|area| bits.len() >= area) {
            return Err(GlyphError::InvalidMask(format!(
                "length {} leaves no terminator column in a {cell_size}x{cell_size} cell",
                bits.len()
            )));
        }
        Ok(Self {
            bits: bits.to_string(),
        })
    }

    pub(crate) fn from_bits(bits: String) -> Self {
        Self { bits }
    }

    pub fn as_str(&self) -> &str {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn has_ink(&self) -> bool {
        self.bits.contains('1')
    }

    /// Number of pixel columns the glyph occupies.
    pub fn width(&self, cell_size: u32) -> usize {
        self.bits.len() / cell_size.max(1) as usize
    }

    /// Iterate the mask one pixel column at a time.
    pub fn columns(&self, cell_size: u32) -> impl Iterator<Item = &str> + '_ {
        let step = cell_size.max(1) as usize;
        (0..self.bits.len() / step).map(move |i| &self.bits[i * step..(i + 1) * step])
    }

    /// Whether pixel `(dx, dy)` inside the glyph is ink.
    pub fn bit(&self, dx: u32, dy: u32, cell_size: u32) -> bool {
        let idx = dx as usize * cell_size as usize + dy as usize;
        self.bits.as_bytes().get(idx) == Some(&b'1')
    }
}

impl fmt::Display for GlyphMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

impl AsRef<str> for GlyphMask {
    fn as_ref(&self) -> &str {
        &self.bits
    }
}
