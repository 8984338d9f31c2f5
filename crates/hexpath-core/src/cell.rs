//! The [`CellState`] type: what occupies a single hexagon.

use std::fmt;

/// State of one grid cell.
///
/// Only [`Open`](CellState::Open) cells can be crossed by a search; the
/// origin and objective are reached as explicit endpoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Obstacle,
    Origin,
    Objective,
}

impl CellState {
    /// Whether a search may pass through this cell.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Character used in text boards.
    pub const fn to_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Obstacle => '#',
            Self::Origin => 'o',
            Self::Objective => 'x',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Obstacle),
            'o' | 'O' => Some(Self::Origin),
            'x' | 'X' => Some(Self::Objective),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open cell",
            Self::Obstacle => "obstacle",
            Self::Origin => "origin",
            Self::Objective => "objective",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_open_is_traversable() {
        assert!(CellState::Open.is_open());
        assert!(!CellState::Obstacle.is_open());
        assert!(!CellState::Origin.is_open());
        assert!(!CellState::Objective.is_open());
    }

    #[test]
    fn chars_round_trip() {
        for s in [
            CellState::Open,
            CellState::Obstacle,
            CellState::Origin,
            CellState::Objective,
        ] {
            assert_eq!(CellState::from_char(s.to_char()), Some(s));
        }
        assert_eq!(CellState::from_char('?'), None);
    }
}
