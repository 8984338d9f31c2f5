//! Geometry primitives: [`HexCoord`] and [`HexDirection`].
//!
//! Coordinates address an *offset* hexagonal grid: rows are stacked along Y
//! and every even row is shifted half a cell to the right of its odd
//! neighbours. Because of that shift, the column delta of a diagonal step
//! depends on the parity of the row being left.

use std::fmt;
use std::str::FromStr;

use crate::error::HexError;

// ---------------------------------------------------------------------------
// HexDirection
// ---------------------------------------------------------------------------

/// One of the six directions leaving a hexagon.
///
/// Y grows "up": the `*Up` directions move to row `y + 1` and the `*Down`
/// directions to row `y - 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDirection {
    LeftUp,
    Left,
    LeftDown,
    RightDown,
    Right,
    RightUp,
}

impl HexDirection {
    /// All six directions in exploration order.
    ///
    /// Every search tries neighbours in exactly this sequence, so it also
    /// fixes how ties are broken.
    pub const ALL: [HexDirection; 6] = [
        Self::LeftUp,
        Self::Left,
        Self::LeftDown,
        Self::RightDown,
        Self::Right,
        Self::RightUp,
    ];

    /// The opposite direction. `d.flip().flip() == d`.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Self::LeftUp => Self::RightDown,
            Self::Left => Self::Right,
            Self::LeftDown => Self::RightUp,
            Self::RightDown => Self::LeftUp,
            Self::Right => Self::Left,
            Self::RightUp => Self::LeftDown,
        }
    }

    /// Counter-clockwise successor: `L → LU → RU → R → RD → LD → L`.
    #[inline]
    pub const fn rotate(self) -> Self {
        match self {
            Self::Left => Self::LeftUp,
            Self::LeftUp => Self::RightUp,
            Self::RightUp => Self::Right,
            Self::Right => Self::RightDown,
            Self::RightDown => Self::LeftDown,
            Self::LeftDown => Self::Left,
        }
    }

    /// Short label (`LU`, `L`, `LD`, `RD`, `R`, `RU`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::LeftUp => "LU",
            Self::Left => "L",
            Self::LeftDown => "LD",
            Self::RightDown => "RD",
            Self::Right => "R",
            Self::RightUp => "RU",
        }
    }

    /// Position of this direction in [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for HexDirection {
    type Error = HexError;

    fn try_from(v: u8) -> Result<Self, HexError> {
        Self::ALL
            .get(v as usize)
            .copied()
            .ok_or(HexError::InvalidDirection(v))
    }
}

impl fmt::Display for HexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a direction label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown hex direction \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for HexDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, ParseDirectionError> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// HexCoord
// ---------------------------------------------------------------------------

/// A cell position on the offset grid. X is the column, Y the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

impl HexCoord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate lies on an even row (the shorter, shifted one).
    #[inline]
    pub const fn is_even_row(self) -> bool {
        self.y.rem_euclid(2) == 0
    }

    /// The neighbouring coordinate in `dir`.
    ///
    /// Diagonal steps out of an odd row move one column left for the `Left*`
    /// directions; out of an even row they move one column right for the
    /// `Right*` directions. No bounds checking is done.
    #[inline]
    pub const fn adjacent(self, dir: HexDirection) -> Self {
        let odd = !self.is_even_row();
        let (dx, dy) = match dir {
            HexDirection::LeftUp => (if odd { -1 } else { 0 }, 1),
            HexDirection::Left => (-1, 0),
            HexDirection::LeftDown => (if odd { -1 } else { 0 }, -1),
            HexDirection::RightDown => (if odd { 0 } else { 1 }, -1),
            HexDirection::Right => (1, 0),
            HexDirection::RightUp => (if odd { 0 } else { 1 }, 1),
        };
        Self::new(self.x + dx, self.y + dy)
    }

    /// The six neighbours, paired with the direction leading to each, in
    /// [`HexDirection::ALL`] order.
    #[inline]
    pub fn neighbors(self) -> [(HexDirection, HexCoord); 6] {
        HexDirection::ALL.map(|d| (d, self.adjacent(d)))
    }

    /// The direction leading from `self` to `other`, if they are adjacent.
    pub fn direction_to(self, other: HexCoord) -> Option<HexDirection> {
        HexDirection::ALL
            .into_iter()
            .find(|&d| self.adjacent(d) == other)
    }

    /// Whether `other` is one step away.
    #[inline]
    pub fn is_adjacent(self, other: HexCoord) -> bool {
        self.direction_to(other).is_some()
    }
}

impl PartialOrd for HexCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HexCoord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for HexCoord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = HexCoord::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: HexCoord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
