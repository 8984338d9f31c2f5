//! World-space placement of hexagon centres.

use crate::geom::HexCoord;

/// Hexagon size used by the default layout.
pub const HEX_SIZE: f32 = 2.5;
/// Horizontal gap between neighbouring hexagons.
pub const PAD_X: f32 = 3.1;
/// Vertical gap between rows.
pub const PAD_Y: f32 = 1.8;

/// A 2D world position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: WorldPos) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Maps grid coordinates to world positions.
///
/// Columns are `pitch_x` apart and rows `pitch_y` apart; even rows are
/// shifted right by half a column.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub pitch_x: f32,
    pub pitch_y: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            pitch_x: HEX_SIZE + PAD_X,
            pitch_y: HEX_SIZE + PAD_Y,
        }
    }
}

impl Layout {
    /// Centre of the hexagon at `c`.
    pub fn center(&self, c: HexCoord) -> WorldPos {
        let shift = if c.is_even_row() { self.pitch_x / 2.0 } else { 0.0 };
        WorldPos::new(c.x as f32 * self.pitch_x + shift, c.y as f32 * self.pitch_y)
    }

    /// Straight-line distance between the centres of `a` and `b`.
    #[inline]
    pub fn distance(&self, a: HexCoord, b: HexCoord) -> f32 {
        self.center(a).distance(self.center(b))
    }

    /// Longest displacement covered by a single hop: either a horizontal
    /// step or a diagonal one, whichever is longer.
    pub fn step_length(&self) -> f32 {
        self.pitch_x.max((self.pitch_x / 2.0).hypot(self.pitch_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::HexDirection;

    #[test]
    fn even_rows_are_shifted() {
        let l = Layout::default();
        let even = l.center(HexCoord::new(0, 0));
        let odd = l.center(HexCoord::new(0, 1));
        assert!((even.x - 2.8).abs() < 1e-5);
        assert!(odd.x.abs() < 1e-5);
        assert!((odd.y - 4.3).abs() < 1e-5);
    }

    #[test]
    fn neighbours_are_within_one_step() {
        let l = Layout::default();
        for c in [HexCoord::new(2, 2), HexCoord::new(2, 3)] {
            for d in HexDirection::ALL {
                let dist = l.distance(c, c.adjacent(d));
                assert!(dist > 0.0);
                assert!(dist <= l.step_length() + 1e-4, "{c} {d} {dist}");
            }
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let l = Layout::default();
        let a = HexCoord::new(1, 4);
        let b = HexCoord::new(6, 1);
        assert_eq!(l.distance(a, b), l.distance(b, a));
        assert_eq!(l.distance(a, a), 0.0);
    }
}
