//! The [`NeighbourMask`] presence pattern and neighbourhood geometry.

use std::fmt;

/// The eight compass directions, ordered clockwise from north.
///
/// The discriminant of each direction is its bit position in a
/// [`NeighbourMask`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir8 {
    /// `(0, -1)`
    North,
    /// `(1, -1)`
    NorthEast,
    /// `(1, 0)`
    East,
    /// `(1, 1)`
    SouthEast,
    /// `(0, 1)`
    South,
    /// `(-1, 1)`
    SouthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, -1)`
    NorthWest,
}

impl Dir8 {
    /// All eight directions, clockwise from north.
    pub const ALL: [Dir8; 8] = [
        Dir8::North,
        Dir8::NorthEast,
        Dir8::East,
        Dir8::SouthEast,
        Dir8::South,
        Dir8::SouthWest,
        Dir8::West,
        Dir8::NorthWest,
    ];

    /// The four cardinal directions, clockwise from north.
    pub const CARDINALS: [Dir8; 4] = [Dir8::North, Dir8::East, Dir8::South, Dir8::West];

    /// The four diagonal directions, clockwise from north-east.
    pub const DIAGONALS: [Dir8; 4] = [
        Dir8::NorthEast,
        Dir8::SouthEast,
        Dir8::SouthWest,
        Dir8::NorthWest,
    ];

    /// The `(dx, dy)` cell offset of this direction.
    ///
    /// Offsets follow the crate coordinate convention: `y` grows southward,
    /// so north is `(0, -1)`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir8::North => (0, -1),
            Dir8::NorthEast => (1, -1),
            Dir8::East => (1, 0),
            Dir8::SouthEast => (1, 1),
            Dir8::South => (0, 1),
            Dir8::SouthWest => (-1, 1),
            Dir8::West => (-1, 0),
            Dir8::NorthWest => (-1, -1),
        }
    }

    /// Bit position of this direction in a [`NeighbourMask`].
    pub fn bit(self) -> u8 {
        self as u8
    }
}

/// Neighbourhood shape used when building a [`NeighbourMask`].
///
/// Terrain transitions and fog-of-war classify against the full
/// 8-connected neighbourhood; circuits connect through the four cardinal
/// directions only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Cardinal neighbours only (N, E, S, W).
    Four,
    /// Cardinal plus diagonal neighbours.
    Eight,
}

impl Connectivity {
    /// The directions considered by this connectivity, clockwise.
    pub fn directions(self) -> &'static [Dir8] {
        match self {
            Connectivity::Four => &Dir8::CARDINALS,
            Connectivity::Eight => &Dir8::ALL,
        }
    }
}

/// An 8-bit presence pattern over a cell's neighbourhood.
///
/// Bit `n` is set when the neighbour in direction `Dir8::ALL[n]` is
/// present. Cells outside the grid are never present, so masks built at
/// the map edge simply have those bits clear — there is no separate
/// edge encoding.
///
/// Masks built under [`Connectivity::Four`] leave the diagonal bits clear.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NeighbourMask(pub u8);

impl NeighbourMask {
    /// The empty pattern: no neighbour present.
    pub const EMPTY: NeighbourMask = NeighbourMask(0);

    /// The full pattern: all eight neighbours present.
    pub const FULL: NeighbourMask = NeighbourMask(0xFF);

    /// Returns `true` if the neighbour in `dir` is present.
    pub fn has(self, dir: Dir8) -> bool {
        self.0 & (1 << dir.bit()) != 0
    }

    /// Returns a copy of the mask with the neighbour in `dir` marked
    /// present.
    pub fn with(self, dir: Dir8) -> Self {
        Self(self.0 | (1 << dir.bit()))
    }

    /// Number of present cardinal neighbours.
    pub fn cardinal_count(self) -> u32 {
        Dir8::CARDINALS
            .iter()
            .filter(|&&d| self.has(d))
            .count() as u32
    }
}

impl fmt::Debug for NeighbourMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NeighbourMask({:#010b})", self.0)
    }
}

impl FromIterator<Dir8> for NeighbourMask {
    fn from_iter<I: IntoIterator<Item = Dir8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_clockwise_from_north() {
        assert_eq!(Dir8::North.bit(), 0);
        assert_eq!(Dir8::East.bit(), 2);
        assert_eq!(Dir8::NorthWest.bit(), 7);
    }

    #[test]
    fn offsets_are_unit_steps() {
        for dir in Dir8::ALL {
            let (dx, dy) = dir.offset();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
        }
    }

    #[test]
    fn opposite_offsets_cancel() {
        let pairs = [
            (Dir8::North, Dir8::South),
            (Dir8::East, Dir8::West),
            (Dir8::NorthEast, Dir8::SouthWest),
            (Dir8::NorthWest, Dir8::SouthEast),
        ];
        for (a, b) in pairs {
            let (ax, ay) = a.offset();
            let (bx, by) = b.offset();
            assert_eq!((ax + bx, ay + by), (0, 0));
        }
    }

    #[test]
    fn mask_set_and_query() {
        let mask: NeighbourMask = [Dir8::North, Dir8::SouthWest].into_iter().collect();
        assert!(mask.has(Dir8::North));
        assert!(mask.has(Dir8::SouthWest));
        assert!(!mask.has(Dir8::East));
        assert_eq!(mask.cardinal_count(), 1);
    }

    #[test]
    fn full_mask_has_everything() {
        for dir in Dir8::ALL {
            assert!(NeighbourMask::FULL.has(dir));
        }
        assert_eq!(NeighbourMask::FULL.cardinal_count(), 4);
    }

    #[test]
    fn four_connectivity_is_cardinals_only() {
        assert_eq!(Connectivity::Four.directions().len(), 4);
        assert_eq!(Connectivity::Eight.directions().len(), 8);
        assert!(!Connectivity::Four.directions().contains(&Dir8::NorthEast));
    }
}
