use std::collections::HashMap;
use std::fmt;

use crate::mask::GlyphMask;

/// Cell position on the sheet: `(pixel_x / cell_size, pixel_y / cell_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridCoord {
    pub col: u32,
    pub row: u32,
}

impl GridCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.col, self.row)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GlyphEntry {
    pub coord: GridCoord,
    pub mask: GlyphMask,
}

/// Glyph masks keyed by grid coordinate, kept in scan order.
///
/// Built by a single [`crate::scan`] pass and read-only afterwards.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GlyphTable {
    entries: Vec<GlyphEntry>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<GridCoord, usize>,
}

impl GlyphTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Each coordinate is inserted once per scan.
    pub(crate) fn insert(&mut self, coord: GridCoord, mask: GlyphMask) {
        let previous = self.index.insert(coord, self.entries.len());
        debug_assert!(previous.is_none(), "cell {coord} scanned twice");
        self.entries.push(GlyphEntry { coord, mask });
    }

    pub fn get(&self, coord: GridCoord) -> Option<&GlyphMask> {
        self.index.get(&coord).map(|&idx| &self.entries[idx].mask)
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        self.index.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &GlyphMask)> + '_ {
        self.entries.iter().map(|e| (e.coord, &e.mask))
    }

    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.entries.iter().map(|e| e.coord)
    }

    pub fn entries(&self) -> &[GlyphEntry] {
        &self.entries
    }
}

impl PartialEq for GlyphTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for GlyphTable {}

impl<'a> IntoIterator for &'a GlyphTable {
    type Item = (GridCoord, &'a GlyphMask);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
