//! Category-to-tile lookup tables.

use crate::category::Category;
use crate::id::TileAssignment;
use std::marker::PhantomData;

/// An explicit lookup table from category to drawable tile.
///
/// One table exists per visual theme (a terrain group's own edge set, a
/// transition pair's blend set, a fog overlay set). Keeping the mapping in
/// a table — rather than deriving tile indices from category ordinals —
/// lets themes lay out their sheets however the artist drew them, and
/// keeps category identity separate from presentation.
///
/// Missing entries are represented as `None`; the caller decides the
/// fallback policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileTable<C: Category> {
    slots: Vec<Option<TileAssignment>>,
    _category: PhantomData<C>,
}

impl<C: Category> TileTable<C> {
    /// Create a table with every entry missing.
    pub fn empty() -> Self {
        Self {
            slots: vec![None; C::COUNT],
            _category: PhantomData,
        }
    }

    /// Set the tile for a category.
    pub fn set(&mut self, category: C, tile: TileAssignment) {
        self.slots[category.ordinal()] = Some(tile);
    }

    /// Look up the tile for a category, if one is declared.
    pub fn get(&self, category: C) -> Option<TileAssignment> {
        self.slots[category.ordinal()]
    }

    /// Number of declared entries.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if no entry is declared.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }
}

impl<C: Category> Default for TileTable<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: Category> FromIterator<(C, TileAssignment)> for TileTable<C> {
    fn from_iter<I: IntoIterator<Item = (C, TileAssignment)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (category, tile) in iter {
            table.set(category, tile);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{BorderCategory, ChainCategory};
    use crate::id::SheetId;

    #[test]
    fn empty_table_has_no_entries() {
        let table = TileTable::<BorderCategory>::empty();
        assert!(table.is_empty());
        for cat in BorderCategory::ALL {
            assert_eq!(table.get(cat), None);
        }
    }

    #[test]
    fn set_then_get() {
        let mut table = TileTable::<ChainCategory>::empty();
        let tile = TileAssignment::new(SheetId(1), 9);
        table.set(ChainCategory::Cross, tile);
        assert_eq!(table.get(ChainCategory::Cross), Some(tile));
        assert_eq!(table.get(ChainCategory::Horizontal), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn from_iter_collects() {
        let tile = |i| TileAssignment::new(SheetId(0), i);
        let table: TileTable<BorderCategory> = [
            (BorderCategory::Center, tile(0)),
            (BorderCategory::EdgeNorth, tile(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.get(BorderCategory::Center), Some(tile(0)));
        assert_eq!(table.get(BorderCategory::EdgeNorth), Some(tile(1)));
        assert_eq!(table.len(), 2);
    }
}
