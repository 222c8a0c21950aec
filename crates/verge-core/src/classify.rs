//! Pure border classification.
//!
//! A classifier maps `(self present, neighbourhood mask)` to one category.
//! Classification is deterministic, side-effect-free, and total: every one
//! of the 2 × 256 inputs maps to exactly one variant.
//!
//! # Precedence policy
//!
//! Where several shapes could plausibly describe a pattern, the cardinal
//! sides decide first and the diagonals are only consulted when all four
//! cardinals are present:
//!
//! 1. absent cell → [`BorderCategory::None`];
//! 2. four absent cardinals → [`BorderCategory::Isolated`];
//! 3. three absent → a stub named by the lone present cardinal;
//! 4. two adjacent absent → the outer corner named by the absent pair;
//! 5. two opposite absent → a channel along the remaining axis;
//! 6. one absent → the edge named by it;
//! 7. none absent → the first absent diagonal in NW, NE, SW, SE order
//!    names an inner corner, otherwise [`BorderCategory::Center`].
//!
//! Corner categories therefore always outrank pure edges, which keeps
//! re-entrant region outlines and map-boundary cells free of visible
//! seams.

use crate::category::{BorderCategory, Category, ChainCategory};
use crate::mask::{Connectivity, Dir8, NeighbourMask};

/// A pure classification table from presence pattern to category.
///
/// Implementations are zero-sized: the classifier is a compile-time
/// choice, and border fields are typed by it.
pub trait Classify {
    /// The category enum this classifier produces.
    type Category: Category;

    /// The neighbourhood shape masks are built with.
    const CONNECTIVITY: Connectivity;

    /// Classify one cell. Must be deterministic and total.
    fn classify(present: bool, mask: NeighbourMask) -> Self::Category;
}

/// The 8-connected classifier used by terrain transitions and fog-of-war.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BorderClassifier;

impl Classify for BorderClassifier {
    type Category = BorderCategory;

    const CONNECTIVITY: Connectivity = Connectivity::Eight;

    fn classify(present: bool, mask: NeighbourMask) -> BorderCategory {
        if !present {
            return BorderCategory::None;
        }
        let n = mask.has(Dir8::North);
        let e = mask.has(Dir8::East);
        let s = mask.has(Dir8::South);
        let w = mask.has(Dir8::West);
        match (n, e, s, w) {
            (true, true, true, true) => {
                if !mask.has(Dir8::NorthWest) {
                    BorderCategory::InnerNorthWest
                } else if !mask.has(Dir8::NorthEast) {
                    BorderCategory::InnerNorthEast
                } else if !mask.has(Dir8::SouthWest) {
                    BorderCategory::InnerSouthWest
                } else if !mask.has(Dir8::SouthEast) {
                    BorderCategory::InnerSouthEast
                } else {
                    BorderCategory::Center
                }
            }
            (false, true, true, true) => BorderCategory::EdgeNorth,
            (true, false, true, true) => BorderCategory::EdgeEast,
            (true, true, false, true) => BorderCategory::EdgeSouth,
            (true, true, true, false) => BorderCategory::EdgeWest,
            (false, true, true, false) => BorderCategory::CornerNorthWest,
            (false, false, true, true) => BorderCategory::CornerNorthEast,
            (true, true, false, false) => BorderCategory::CornerSouthWest,
            (true, false, false, true) => BorderCategory::CornerSouthEast,
            (false, true, false, true) => BorderCategory::ChannelHorizontal,
            (true, false, true, false) => BorderCategory::ChannelVertical,
            (true, false, false, false) => BorderCategory::StubNorth,
            (false, true, false, false) => BorderCategory::StubEast,
            (false, false, true, false) => BorderCategory::StubSouth,
            (false, false, false, true) => BorderCategory::StubWest,
            (false, false, false, false) => BorderCategory::Isolated,
        }
    }
}

/// The 4-connected classifier used by circuits (roads, rivers, walls).
///
/// Diagonal mask bits are ignored entirely: chain connectivity is a
/// cardinal-only notion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainClassifier;

impl Classify for ChainClassifier {
    type Category = ChainCategory;

    const CONNECTIVITY: Connectivity = Connectivity::Four;

    fn classify(present: bool, mask: NeighbourMask) -> ChainCategory {
        if !present {
            return ChainCategory::None;
        }
        let n = mask.has(Dir8::North);
        let e = mask.has(Dir8::East);
        let s = mask.has(Dir8::South);
        let w = mask.has(Dir8::West);
        match (n, e, s, w) {
            (false, false, false, false) => ChainCategory::Isolated,
            (true, false, false, false) => ChainCategory::EndNorth,
            (false, true, false, false) => ChainCategory::EndEast,
            (false, false, true, false) => ChainCategory::EndSouth,
            (false, false, false, true) => ChainCategory::EndWest,
            (false, true, false, true) => ChainCategory::Horizontal,
            (true, false, true, false) => ChainCategory::Vertical,
            (true, true, false, false) => ChainCategory::CornerNorthEast,
            (true, false, false, true) => ChainCategory::CornerNorthWest,
            (false, true, true, false) => ChainCategory::CornerSouthEast,
            (false, false, true, true) => ChainCategory::CornerSouthWest,
            (false, true, true, true) => ChainCategory::TeeNorth,
            (true, false, true, true) => ChainCategory::TeeEast,
            (true, true, false, true) => ChainCategory::TeeSouth,
            (true, true, true, false) => ChainCategory::TeeWest,
            (true, true, true, true) => ChainCategory::Cross,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mask_of(dirs: &[Dir8]) -> NeighbourMask {
        dirs.iter().copied().collect()
    }

    // ── BorderClassifier ───────────────────────────────────────────

    #[test]
    fn absent_cell_is_none_regardless_of_mask() {
        assert_eq!(
            BorderClassifier::classify(false, NeighbourMask::FULL),
            BorderCategory::None
        );
        assert_eq!(
            BorderClassifier::classify(false, NeighbourMask::EMPTY),
            BorderCategory::None
        );
    }

    #[test]
    fn surrounded_cell_is_center() {
        assert_eq!(
            BorderClassifier::classify(true, NeighbourMask::FULL),
            BorderCategory::Center
        );
    }

    #[test]
    fn lone_cell_is_isolated() {
        assert_eq!(
            BorderClassifier::classify(true, NeighbourMask::EMPTY),
            BorderCategory::Isolated
        );
    }

    #[test]
    fn one_absent_cardinal_is_an_edge() {
        let mask = NeighbourMask(0xFF).0 & !(1 << Dir8::North.bit());
        assert_eq!(
            BorderClassifier::classify(true, NeighbourMask(mask)),
            BorderCategory::EdgeNorth
        );
    }

    #[test]
    fn adjacent_absent_pair_is_an_outer_corner() {
        // South-east corner of a region: only north and west present.
        let mask = mask_of(&[Dir8::North, Dir8::West, Dir8::NorthWest]);
        assert_eq!(
            BorderClassifier::classify(true, mask),
            BorderCategory::CornerSouthEast
        );
    }

    #[test]
    fn corner_outranks_edge_when_diagonal_also_missing() {
        // Two absent adjacent cardinals plus assorted absent diagonals
        // must still classify as the corner, never as either edge.
        let mask = mask_of(&[Dir8::South, Dir8::East]);
        assert_eq!(
            BorderClassifier::classify(true, mask),
            BorderCategory::CornerNorthWest
        );
    }

    #[test]
    fn opposite_absent_pair_is_a_channel() {
        let mask = mask_of(&[Dir8::East, Dir8::West]);
        assert_eq!(
            BorderClassifier::classify(true, mask),
            BorderCategory::ChannelHorizontal
        );
        let mask = mask_of(&[Dir8::North, Dir8::South]);
        assert_eq!(
            BorderClassifier::classify(true, mask),
            BorderCategory::ChannelVertical
        );
    }

    #[test]
    fn three_absent_cardinals_is_a_stub() {
        let mask = mask_of(&[Dir8::South, Dir8::SouthEast]);
        assert_eq!(
            BorderClassifier::classify(true, mask),
            BorderCategory::StubSouth
        );
    }

    #[test]
    fn missing_diagonal_with_full_cardinals_is_an_inner_corner() {
        let mask = NeighbourMask(0xFF).0 & !(1 << Dir8::SouthEast.bit());
        assert_eq!(
            BorderClassifier::classify(true, NeighbourMask(mask)),
            BorderCategory::InnerSouthEast
        );
    }

    #[test]
    fn inner_corner_tie_break_is_nw_ne_sw_se() {
        // Both NW and SE diagonals absent: NW wins by the documented order.
        let bits = NeighbourMask(0xFF).0
            & !(1 << Dir8::NorthWest.bit())
            & !(1 << Dir8::SouthEast.bit());
        assert_eq!(
            BorderClassifier::classify(true, NeighbourMask(bits)),
            BorderCategory::InnerNorthWest
        );
    }

    // ── ChainClassifier ────────────────────────────────────────────

    #[test]
    fn chain_shapes() {
        assert_eq!(
            ChainClassifier::classify(true, NeighbourMask::EMPTY),
            ChainCategory::Isolated
        );
        assert_eq!(
            ChainClassifier::classify(true, mask_of(&[Dir8::East, Dir8::West])),
            ChainCategory::Horizontal
        );
        assert_eq!(
            ChainClassifier::classify(true, mask_of(&[Dir8::North, Dir8::East])),
            ChainCategory::CornerNorthEast
        );
        assert_eq!(
            ChainClassifier::classify(true, mask_of(&[Dir8::North])),
            ChainCategory::EndNorth
        );
        assert_eq!(
            ChainClassifier::classify(
                true,
                mask_of(&[Dir8::North, Dir8::East, Dir8::South, Dir8::West])
            ),
            ChainCategory::Cross
        );
        assert_eq!(
            ChainClassifier::classify(true, mask_of(&[Dir8::East, Dir8::South, Dir8::West])),
            ChainCategory::TeeNorth
        );
    }

    #[test]
    fn chain_ignores_diagonals() {
        let with_diagonals = mask_of(&[
            Dir8::East,
            Dir8::West,
            Dir8::NorthEast,
            Dir8::SouthWest,
            Dir8::NorthWest,
            Dir8::SouthEast,
        ]);
        assert_eq!(
            ChainClassifier::classify(true, with_diagonals),
            ChainCategory::Horizontal
        );
    }

    // ── Properties ─────────────────────────────────────────────────

    proptest! {
        #[test]
        fn border_classification_is_total_and_deterministic(bits in 0u8..=255, present: bool) {
            let a = BorderClassifier::classify(present, NeighbourMask(bits));
            let b = BorderClassifier::classify(present, NeighbourMask(bits));
            prop_assert_eq!(a, b);
        }

        #[test]
        fn none_iff_absent(bits in 0u8..=255) {
            prop_assert_eq!(
                BorderClassifier::classify(false, NeighbourMask(bits)),
                BorderCategory::None
            );
            prop_assert_ne!(
                BorderClassifier::classify(true, NeighbourMask(bits)),
                BorderCategory::None
            );
        }

        #[test]
        fn chain_category_depends_only_on_cardinals(bits in 0u8..=255) {
            let cardinal_bits = bits
                & ((1 << Dir8::North.bit())
                    | (1 << Dir8::East.bit())
                    | (1 << Dir8::South.bit())
                    | (1 << Dir8::West.bit()));
            prop_assert_eq!(
                ChainClassifier::classify(true, NeighbourMask(bits)),
                ChainClassifier::classify(true, NeighbourMask(cardinal_bits))
            );
        }

        #[test]
        fn two_adjacent_absent_cardinals_never_classify_as_edge(bits in 0u8..=255) {
            let mask = NeighbourMask(bits);
            let n = mask.has(Dir8::North);
            let e = mask.has(Dir8::East);
            let s = mask.has(Dir8::South);
            let w = mask.has(Dir8::West);
            let adjacent_pair_absent =
                (!n && !e) || (!e && !s) || (!s && !w) || (!w && !n);
            if adjacent_pair_absent {
                let cat = BorderClassifier::classify(true, mask);
                let is_edge = matches!(
                    cat,
                    BorderCategory::EdgeNorth
                        | BorderCategory::EdgeEast
                        | BorderCategory::EdgeSouth
                        | BorderCategory::EdgeWest
                );
                prop_assert!(!is_edge, "corner precedence violated: {:?} -> {:?}", mask, cat);
            }
        }
    }
}
