//! Overlay sprite selection and the fog theme table.

use verge_core::{BorderCategory, SheetId, TileAssignment, TileTable};

/// One overlay layer's contribution at a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlaySprite {
    /// The layer covers this cell completely.
    Full,
    /// The cell sits on the layer's boundary; draw the rim sprite for
    /// this border category.
    Rim(BorderCategory),
}

/// What to draw over one cell: the opaque "hide" layer (unexplored) and
/// the translucent "fog" layer (explored but not currently visible).
/// Both `None` means the cell is fully visible — draw nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellOverlay {
    /// Opaque cover contribution.
    pub hide: Option<OverlaySprite>,
    /// Translucent fog contribution.
    pub fog: Option<OverlaySprite>,
}

impl CellOverlay {
    /// Returns `true` if nothing is drawn over the cell.
    pub fn is_clear(&self) -> bool {
        self.hide.is_none() && self.fog.is_none()
    }
}

/// The category → sprite table for one fog art style.
///
/// Themes map overlay decisions to concrete tiles; tracker state never
/// encodes presentation. A rim category missing from the theme falls back
/// to the layer's full-cover tile, which renders correctly if abruptly.
#[derive(Clone, Debug)]
pub struct FogTheme {
    sheet: SheetId,
    hide_full: TileAssignment,
    fog_full: TileAssignment,
    hide_rim: TileTable<BorderCategory>,
    fog_rim: TileTable<BorderCategory>,
}

impl FogTheme {
    /// Build a theme on one sheet from full-cover tile indices and rim
    /// tables.
    pub fn new(
        sheet: SheetId,
        hide_full: u16,
        fog_full: u16,
        hide_rim: TileTable<BorderCategory>,
        fog_rim: TileTable<BorderCategory>,
    ) -> Self {
        Self {
            sheet,
            hide_full: TileAssignment::new(sheet, hide_full),
            fog_full: TileAssignment::new(sheet, fog_full),
            hide_rim,
            fog_rim,
        }
    }

    /// The sheet this theme draws from.
    pub fn sheet(&self) -> SheetId {
        self.sheet
    }

    /// The hide-layer tile for a cell, if any.
    pub fn hide_sprite(&self, overlay: &CellOverlay) -> Option<TileAssignment> {
        match overlay.hide? {
            OverlaySprite::Full => Some(self.hide_full),
            OverlaySprite::Rim(category) => {
                Some(self.hide_rim.get(category).unwrap_or(self.hide_full))
            }
        }
    }

    /// The fog-layer tile for a cell, if any.
    pub fn fog_sprite(&self, overlay: &CellOverlay) -> Option<TileAssignment> {
        match overlay.fog? {
            OverlaySprite::Full => Some(self.fog_full),
            OverlaySprite::Rim(category) => {
                Some(self.fog_rim.get(category).unwrap_or(self.fog_full))
            }
        }
    }
}
