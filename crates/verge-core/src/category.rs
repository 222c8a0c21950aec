//! The border category enumerations.
//!
//! A category is a pure function of a cell's own presence and its
//! neighbourhood presence pattern — it carries no independently settable
//! state. The enumerations are deliberately reduced: the full 8-bit
//! pattern space collapses onto the handful of shapes that tile art can
//! actually distinguish.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common surface of the category enums, used by generic lookup tables
/// and fields.
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// Number of variants.
    const COUNT: usize;

    /// The category of a cell that is not present.
    const ABSENT: Self;

    /// Dense index of this variant, `0 <= ordinal < COUNT`.
    fn ordinal(self) -> usize;

    /// All variants in ordinal order.
    fn all() -> &'static [Self];
}

/// Border category of a cell under the 8-connected neighbourhood.
///
/// Used by terrain transitions and fog-of-war. Directional variants are
/// named from the cell's own point of view:
///
/// - an **edge** is named by its single absent cardinal side
///   (`EdgeNorth` sits on the north rim of its region);
/// - an **outer corner** is named by its two absent adjacent sides;
/// - an **inner corner** is named by its single absent diagonal
///   (all four cardinals present);
/// - a **channel** has both cardinals of one axis absent and runs along
///   the other axis;
/// - a **stub** is named by its single *present* cardinal — the side it
///   hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderCategory {
    /// The cell itself is absent.
    None,
    /// Present and fully surrounded.
    Center,
    /// North side absent.
    EdgeNorth,
    /// East side absent.
    EdgeEast,
    /// South side absent.
    EdgeSouth,
    /// West side absent.
    EdgeWest,
    /// North and west absent.
    CornerNorthWest,
    /// North and east absent.
    CornerNorthEast,
    /// South and west absent.
    CornerSouthWest,
    /// South and east absent.
    CornerSouthEast,
    /// All cardinals present, north-west diagonal absent.
    InnerNorthWest,
    /// All cardinals present, north-east diagonal absent.
    InnerNorthEast,
    /// All cardinals present, south-west diagonal absent.
    InnerSouthWest,
    /// All cardinals present, south-east diagonal absent.
    InnerSouthEast,
    /// North and south absent; the region runs east–west here.
    ChannelHorizontal,
    /// East and west absent; the region runs north–south here.
    ChannelVertical,
    /// Only the north neighbour is present.
    StubNorth,
    /// Only the east neighbour is present.
    StubEast,
    /// Only the south neighbour is present.
    StubSouth,
    /// Only the west neighbour is present.
    StubWest,
    /// Present with no cardinal neighbour at all.
    Isolated,
}

impl BorderCategory {
    /// All variants in ordinal order.
    pub const ALL: [BorderCategory; 21] = [
        BorderCategory::None,
        BorderCategory::Center,
        BorderCategory::EdgeNorth,
        BorderCategory::EdgeEast,
        BorderCategory::EdgeSouth,
        BorderCategory::EdgeWest,
        BorderCategory::CornerNorthWest,
        BorderCategory::CornerNorthEast,
        BorderCategory::CornerSouthWest,
        BorderCategory::CornerSouthEast,
        BorderCategory::InnerNorthWest,
        BorderCategory::InnerNorthEast,
        BorderCategory::InnerSouthWest,
        BorderCategory::InnerSouthEast,
        BorderCategory::ChannelHorizontal,
        BorderCategory::ChannelVertical,
        BorderCategory::StubNorth,
        BorderCategory::StubEast,
        BorderCategory::StubSouth,
        BorderCategory::StubWest,
        BorderCategory::Isolated,
    ];
}

impl Category for BorderCategory {
    const COUNT: usize = Self::ALL.len();
    const ABSENT: Self = BorderCategory::None;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn all() -> &'static [Self] {
        &Self::ALL
    }
}

/// Connectivity category of a cell in a linear chain (circuit), under the
/// 4-connected neighbourhood.
///
/// Ends are named by their single connected direction; corners by their
/// connected pair; tees by their single *missing* direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainCategory {
    /// The cell carries no chain.
    None,
    /// A chain cell with no connection.
    Isolated,
    /// Connected northward only.
    EndNorth,
    /// Connected eastward only.
    EndEast,
    /// Connected southward only.
    EndSouth,
    /// Connected westward only.
    EndWest,
    /// Connected east and west: a straight east–west run.
    Horizontal,
    /// Connected north and south: a straight north–south run.
    Vertical,
    /// Connected north and east.
    CornerNorthEast,
    /// Connected north and west.
    CornerNorthWest,
    /// Connected south and east.
    CornerSouthEast,
    /// Connected south and west.
    CornerSouthWest,
    /// Connected everywhere but north.
    TeeNorth,
    /// Connected everywhere but east.
    TeeEast,
    /// Connected everywhere but south.
    TeeSouth,
    /// Connected everywhere but west.
    TeeWest,
    /// Connected in all four directions.
    Cross,
}

impl ChainCategory {
    /// All variants in ordinal order.
    pub const ALL: [ChainCategory; 17] = [
        ChainCategory::None,
        ChainCategory::Isolated,
        ChainCategory::EndNorth,
        ChainCategory::EndEast,
        ChainCategory::EndSouth,
        ChainCategory::EndWest,
        ChainCategory::Horizontal,
        ChainCategory::Vertical,
        ChainCategory::CornerNorthEast,
        ChainCategory::CornerNorthWest,
        ChainCategory::CornerSouthEast,
        ChainCategory::CornerSouthWest,
        ChainCategory::TeeNorth,
        ChainCategory::TeeEast,
        ChainCategory::TeeSouth,
        ChainCategory::TeeWest,
        ChainCategory::Cross,
    ];
}

impl Category for ChainCategory {
    const COUNT: usize = Self::ALL.len();
    const ABSENT: Self = ChainCategory::None;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn all() -> &'static [Self] {
        &Self::ALL
    }
}
