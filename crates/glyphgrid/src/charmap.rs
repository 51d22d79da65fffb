//! Mask to character dictionary.
//!
//! A scanned sheet only knows where a glyph sits. The sheet layout turns that
//! position into a character code, which gives the dictionary used to read
//! text from other screenshots.

use std::collections::HashMap;
use std::io::Write;

use log::warn;

use crate::{
    error::Result,
    mask::GlyphMask,
    table::{GlyphTable, GridCoord},
};

/// How glyph positions on a sheet map to character codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharLayout {
    /// Code of the glyph at `(0, 0)`.
    pub first_code: u32,
    /// Glyphs per sheet row.
    pub columns: u32,
}

impl Default for CharLayout {
    /// A 16x16 code page sheet starting at code 0.
    fn default() -> Self {
        Self {
            first_code: 0,
            columns: 16,
        }
    }
}

impl CharLayout {
    /// `None` when the code does not fit in a `u32`.
    pub fn code_at(&self, coord: GridCoord) -> Option<u32> {
        coord
            .row
            .checked_mul(self.columns)?
            .checked_add(coord.col)?
            .checked_add(self.first_code)
    }

    /// Printable ASCII glyph at `coord`, if any. Space is never a glyph.
    pub fn char_at(&self, coord: GridCoord) -> Option<char> {
        self.code_at(coord)
            .and_then(char::from_u32)
            .filter(|c| c.is_ascii_graphic())
    }
}

/// Two sheet positions rendering to the same pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub mask: GlyphMask,
    pub kept: char,
    pub dropped: char,
}

#[derive(Clone, Debug, Default)]
pub struct CharMap {
    chars: HashMap<GlyphMask, char>,
    collisions: Vec<Collision>,
}

impl CharMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign each scanned glyph its character. Where masks repeat the first
    /// glyph in scan order keeps the mask.
    pub fn from_table(table: &GlyphTable, layout: &CharLayout) -> Self {
        let mut map = Self::new();
        for (coord, mask) in table {
            if let Some(ch) = layout.char_at(coord) {
                map.insert(mask.clone(), ch);
            }
        }
        map
    }

    /// Add `mask => ch` unless the mask is already taken. Returns whether it was added.
    pub fn insert(&mut self, mask: GlyphMask, ch: char) -> bool {
        if let Some(&kept) = self.chars.get(&mask) {
            warn!("{ch:?} has the same mask as {kept:?}, keeping {kept:?}");
            self.collisions.push(Collision {
                mask,
                kept,
                dropped: ch,
            });
            return false;
        }
        self.chars.insert(mask, ch);
        true
    }

    pub fn get(&self, mask: &GlyphMask) -> Option<char> {
        self.chars.get(mask).copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Entries ordered by character.
    pub fn iter(&self) -> impl Iterator<Item = (&GlyphMask, char)> + '_ {
        let mut entries: Vec<(&GlyphMask, char)> =
            self.chars.iter().map(|(m, &c)| (m, c)).collect();
        entries.sort_by_key(|&(_, c)| c);
        entries.into_iter()
    }
}

/// Write one `<mask> => <char>` line per entry, ordered by character.
pub fn write_charmap<W: Write>(map: &CharMap, out: &mut W) -> Result<()> {
    for (mask, ch) in map.iter() {
        writeln!(out, "{mask} => {ch}")?;
    }
    Ok(())
}
