//! The [`HexGrid`] type: a rectangular table of [`CellState`]s laid out as
//! an offset hexagonal grid.
//!
//! Even rows hold `width - 1` cells and odd rows hold `width` cells: packing
//! hexagons into a rectangle shifts every other row by half a cell, so the
//! shifted rows lose their last column.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::cell::CellState;
use crate::error::HexError;
use crate::geom::HexCoord;

/// Smallest accepted width and height.
pub const MIN_SIDE: i32 = 5;
/// Largest accepted width and height.
pub const MAX_SIDE: i32 = 99;

/// An offset hexagonal grid of [`CellState`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct HexGrid {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
}

impl HexGrid {
    /// Create a grid of open cells.
    ///
    /// Both dimensions are clamped into `[MIN_SIDE, MAX_SIDE]`.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.clamp(MIN_SIDE, MAX_SIDE);
        let h = height.clamp(MIN_SIDE, MAX_SIDE);
        if w != width || h != height {
            log::debug!("grid size {width}x{height} clamped to {w}x{h}");
        }
        Self {
            cells: vec![CellState::Open; (w * h) as usize],
            width: w,
            height: h,
        }
    }

    /// Width of the odd (full) rows.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of valid columns on row `y`.
    #[inline]
    pub fn row_width(&self, y: i32) -> i32 {
        if y.rem_euclid(2) == 0 {
            self.width - 1
        } else {
            self.width
        }
    }

    /// Whether `c` lies inside the grid, honouring the shorter even rows.
    #[inline]
    pub fn is_valid(&self, c: HexCoord) -> bool {
        c.y >= 0 && c.y < self.height && c.x >= 0 && c.x < self.row_width(c.y)
    }

    /// Whether `c` is valid and [`Open`](CellState::Open).
    #[inline]
    pub fn is_open(&self, c: HexCoord) -> bool {
        self.at(c).is_some_and(CellState::is_open)
    }

    /// Check that `c` is valid, returning it back for chaining.
    pub fn check(&self, c: HexCoord) -> Result<HexCoord, HexError> {
        if self.is_valid(c) {
            Ok(c)
        } else {
            Err(HexError::InvalidCoordinate(c))
        }
    }

    #[inline]
    fn index(&self, c: HexCoord) -> Option<usize> {
        if self.is_valid(c) {
            Some((c.y * self.width + c.x) as usize)
        } else {
            None
        }
    }

    /// The state at `c`, or `None` outside the grid.
    pub fn at(&self, c: HexCoord) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Set the state at `c`.
    pub fn set(&mut self, c: HexCoord, state: CellState) -> Result<(), HexError> {
        let i = self.index(c).ok_or(HexError::InvalidCoordinate(c))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Set every valid cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        for c in self.coords().collect::<Vec<_>>() {
            if let Some(i) = self.index(c) {
                self.cells[i] = state;
            }
        }
    }

    /// Number of valid cells.
    pub fn len(&self) -> usize {
        let odd = self.height / 2;
        let even = self.height - odd;
        (odd * self.width + even * (self.width - 1)) as usize
    }

    /// Always `false`: grids are never smaller than `MIN_SIDE` per side.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major iterator over every valid coordinate.
    pub fn coords(&self) -> impl Iterator<Item = HexCoord> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.row_width(y)).map(move |x| HexCoord::new(x, y)))
    }

    /// Row-major iterator over `(HexCoord, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (HexCoord, CellState)> + '_ {
        self.coords()
            .map(|c| (c, self.cells[(c.y * self.width + c.x) as usize]))
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.iter().filter(|&(_, s)| s == state).count()
    }

    /// Turn each open cell into an obstacle with probability `density`.
    ///
    /// `density` is clamped into `[0, 1]`. Returns the number of obstacles
    /// placed.
    pub fn scatter_obstacles<R: Rng>(&mut self, density: f64, rng: &mut R) -> usize {
        let p = density.clamp(0.0, 1.0);
        let mut placed = 0;
        for c in self.coords().collect::<Vec<_>>() {
            let Some(i) = self.index(c) else {
                continue;
            };
            if self.cells[i].is_open() && rng.random_bool(p) {
                self.cells[i] = CellState::Obstacle;
                placed += 1;
            }
        }
        placed
    }

    /// Render the grid, drawing each cell with `f`.
    ///
    /// Even rows are indented by one space so the hex offset is visible;
    /// the output parses back with [`FromStr`].
    pub fn render(&self, mut f: impl FnMut(HexCoord, CellState) -> char) -> String {
        let mut out = String::with_capacity((self.width * 2 + 2) as usize * self.height as usize);
        for y in 0..self.height {
            if y % 2 == 0 {
                out.push(' ');
            }
            for x in 0..self.row_width(y) {
                let c = HexCoord::new(x, y);
                if x > 0 {
                    out.push(' ');
                }
                out.push(f(c, self.cells[(y * self.width + x) as usize]));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for HexGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, s| s.to_char()))
    }
}

impl FromStr for HexGrid {
    type Err = HexError;

    /// Parse a text board: one line per row starting at `y = 0`, whitespace
    /// ignored, cells written with [`CellState::to_char`].
    fn from_str(s: &str) -> Result<Self, HexError> {
        let mut rows: Vec<Vec<CellState>> = Vec::new();
        for (line, text) in s.trim_matches('\n').lines().enumerate() {
            let mut row = Vec::new();
            for (column, ch) in text.chars().enumerate() {
                if ch.is_whitespace() {
                    continue;
                }
                let state = CellState::from_char(ch).ok_or(HexError::InvalidRune {
                    ch,
                    line,
                    column,
                })?;
                row.push(state);
            }
            rows.push(row);
        }

        let width = rows
            .iter()
            .enumerate()
            .map(|(y, r)| r.len() as i32 + if y % 2 == 0 { 1 } else { 0 })
            .max()
            .unwrap_or(0);
        if width > MAX_SIDE || rows.len() > MAX_SIDE as usize {
            return Err(HexError::BoardTooLarge {
                width,
                height: rows.len() as i32,
            });
        }
        for (y, r) in rows.iter().enumerate() {
            let expected = if y % 2 == 0 { width - 1 } else { width };
            if r.len() as i32 != expected {
                return Err(HexError::InconsistentRow {
                    y: y as i32,
                    expected,
                    found: r.len() as i32,
                });
            }
        }

        let mut grid = HexGrid::new(width, rows.len() as i32);
        for (y, r) in rows.iter().enumerate() {
            for (x, &state) in r.iter().enumerate() {
                let c = HexCoord::new(x as i32, y as i32);
                if grid.is_valid(c) {
                    grid.set(c, state)?;
                }
            }
        }
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Grid fields as stored, checked before they become a [`HexGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for HexGrid {
    type Error = HexError;

    fn try_from(raw: RawGrid) -> Result<Self, HexError> {
        let RawGrid {
            cells,
            width,
            height,
        } = raw;
        let in_range = |side: i32| (MIN_SIDE..=MAX_SIDE).contains(&side);
        if !in_range(width) || !in_range(height) || cells.len() != (width * height) as usize {
            return Err(HexError::InvalidSize {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn new_clamps_dimensions() {
        let g = HexGrid::new(2, 200);
        assert_eq!(g.width(), MIN_SIDE);
        assert_eq!(g.height(), MAX_SIDE);
    }

    #[test]
    fn even_rows_are_one_shorter() {
        let g = HexGrid::new(5, 5);
        assert!(g.is_valid(HexCoord::new(3, 0)));
        assert!(!g.is_valid(HexCoord::new(4, 0)));
        assert!(g.is_valid(HexCoord::new(4, 1)));
        assert!(!g.is_valid(HexCoord::new(5, 1)));
        assert!(!g.is_valid(HexCoord::new(0, 5)));
        assert!(!g.is_valid(HexCoord::new(-1, 1)));
        assert!(!g.is_valid(HexCoord::new(0, -1)));
    }

    #[test]
    fn len_counts_valid_cells() {
        let g = HexGrid::new(5, 5);
        // three even rows of 4, two odd rows of 5
        assert_eq!(g.len(), 22);
        assert_eq!(g.coords().count(), g.len());
        assert!(g.coords().all(|c| g.is_valid(c)));
    }

    #[test]
    fn set_and_is_open() {
        let mut g = HexGrid::new(6, 6);
        let c = HexCoord::new(2, 3);
        assert!(g.is_open(c));
        g.set(c, CellState::Obstacle).unwrap();
        assert!(!g.is_open(c));
        assert_eq!(g.at(c), Some(CellState::Obstacle));
        assert_eq!(
            g.set(HexCoord::new(5, 0), CellState::Obstacle),
            Err(HexError::InvalidCoordinate(HexCoord::new(5, 0)))
        );
        assert!(!g.is_open(HexCoord::new(5, 0)));
    }

    #[test]
    fn fill_and_count() {
        let mut g = HexGrid::new(5, 5);
        g.fill(CellState::Obstacle);
        assert_eq!(g.count(CellState::Obstacle), g.len());
        assert_eq!(g.count(CellState::Open), 0);
    }

    #[test]
    fn parse_and_display_round_trip() {
        let text = "\
 . . . .
. # . . .
 o . # .
. . . . x
 . . . .";
        let g: HexGrid = text.parse().unwrap();
        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 5);
        assert_eq!(g.at(HexCoord::new(1, 1)), Some(CellState::Obstacle));
        assert_eq!(g.at(HexCoord::new(0, 2)), Some(CellState::Origin));
        assert_eq!(g.at(HexCoord::new(4, 3)), Some(CellState::Objective));
        let back: HexGrid = g.to_string().parse().unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn parse_rejects_bad_rows_and_runes() {
        let err = "....\n....\n....".parse::<HexGrid>().unwrap_err();
        assert_eq!(
            err,
            HexError::InconsistentRow {
                y: 1,
                expected: 5,
                found: 4
            }
        );
        let err = "..?.\n.....".parse::<HexGrid>().unwrap_err();
        assert_eq!(
            err,
            HexError::InvalidRune {
                ch: '?',
                line: 0,
                column: 2
            }
        );
    }

    #[test]
    fn oversized_boards_are_rejected() {
        let rows: Vec<String> = (0..120)
            .map(|y| {
                let n = if y % 2 == 0 { 4 } else { 5 };
                let rune = if y == 110 { '#' } else { '.' };
                std::iter::repeat_n(rune, n).collect()
            })
            .collect();
        let err = rows.join("\n").parse::<HexGrid>().unwrap_err();
        assert_eq!(
            err,
            HexError::BoardTooLarge {
                width: 5,
                height: 120
            }
        );

        let wide = format!("{}\n{}", ".".repeat(100), ".".repeat(101));
        assert_eq!(
            wide.parse::<HexGrid>().unwrap_err(),
            HexError::BoardTooLarge {
                width: 101,
                height: 2
            }
        );
    }

    #[test]
    fn small_boards_are_padded_with_open_cells() {
        let g: HexGrid = "o#\n...".parse().unwrap();
        assert_eq!((g.width(), g.height()), (5, 5));
        assert_eq!(g.at(HexCoord::new(1, 0)), Some(CellState::Obstacle));
        assert_eq!(g.count(CellState::Obstacle), 1);
    }

    #[test]
    fn scatter_respects_density_bounds() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut g = HexGrid::new(10, 10);
        assert_eq!(g.scatter_obstacles(0.0, &mut rng), 0);
        let placed = g.scatter_obstacles(2.0, &mut rng);
        assert_eq!(placed, g.len());
        assert_eq!(g.count(CellState::Open), 0);
    }

    #[test]
    fn scatter_leaves_endpoints_alone() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut g = HexGrid::new(8, 8);
        g.set(HexCoord::new(0, 0), CellState::Origin).unwrap();
        g.scatter_obstacles(1.0, &mut rng);
        assert_eq!(g.at(HexCoord::new(0, 0)), Some(CellState::Origin));
    }
}
