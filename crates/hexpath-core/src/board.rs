//! A [`Board`]: a grid plus its origin and objective.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellState;
use crate::error::HexError;
use crate::geom::HexCoord;
use crate::grid::HexGrid;

/// A [`HexGrid`] that keeps track of its origin and objective cells.
///
/// At most one origin and one objective exist at a time; placing a new one
/// turns the previous cell back to [`Open`](CellState::Open).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBoard")
)]
pub struct Board {
    grid: HexGrid,
    origin: Option<HexCoord>,
    objective: Option<HexCoord>,
}

impl Board {
    /// An all-open board of the given (clamped) size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid: HexGrid::new(width, height),
            origin: None,
            objective: None,
        }
    }

    /// Adopt a grid, picking up any origin and objective cells it contains.
    pub fn from_grid(grid: HexGrid) -> Result<Self, HexError> {
        let mut origin = None;
        let mut objective = None;
        for (c, state) in grid.iter() {
            let slot = match state {
                CellState::Origin => &mut origin,
                CellState::Objective => &mut objective,
                _ => continue,
            };
            if slot.replace(c).is_some() {
                return Err(HexError::DuplicateEndpoint(state));
            }
        }
        Ok(Self {
            grid,
            origin,
            objective,
        })
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    #[inline]
    pub fn origin(&self) -> Option<HexCoord> {
        self.origin
    }

    #[inline]
    pub fn objective(&self) -> Option<HexCoord> {
        self.objective
    }

    /// Both endpoints, or which one is missing.
    pub fn endpoints(&self) -> Result<(HexCoord, HexCoord), HexError> {
        let origin = self
            .origin
            .ok_or(HexError::MissingEndpoint(CellState::Origin))?;
        let objective = self
            .objective
            .ok_or(HexError::MissingEndpoint(CellState::Objective))?;
        Ok((origin, objective))
    }

    /// Mark `c` as the origin.
    pub fn set_origin(&mut self, c: HexCoord) -> Result<(), HexError> {
        self.grid.check(c)?;
        self.clear_origin();
        if self.objective == Some(c) {
            self.objective = None;
        }
        self.grid.set(c, CellState::Origin)?;
        self.origin = Some(c);
        Ok(())
    }

    /// Mark `c` as the objective.
    pub fn set_objective(&mut self, c: HexCoord) -> Result<(), HexError> {
        self.grid.check(c)?;
        self.clear_objective();
        if self.origin == Some(c) {
            self.origin = None;
        }
        self.grid.set(c, CellState::Objective)?;
        self.objective = Some(c);
        Ok(())
    }

    /// Forget the origin, reopening its cell.
    pub fn clear_origin(&mut self) {
        if let Some(c) = self.origin.take() {
            let reopened = self.grid.set(c, CellState::Open);
            debug_assert!(reopened.is_ok(), "origin {c} lies on the grid");
        }
    }

    /// Forget the objective, reopening its cell.
    pub fn clear_objective(&mut self) {
        if let Some(c) = self.objective.take() {
            let reopened = self.grid.set(c, CellState::Open);
            debug_assert!(reopened.is_ok(), "objective {c} lies on the grid");
        }
    }

    /// Block or reopen `c`. An endpoint on that cell is forgotten.
    pub fn set_obstacle(&mut self, c: HexCoord, blocked: bool) -> Result<(), HexError> {
        self.grid.check(c)?;
        if self.origin == Some(c) {
            self.origin = None;
        }
        if self.objective == Some(c) {
            self.objective = None;
        }
        let state = if blocked {
            CellState::Obstacle
        } else {
            CellState::Open
        };
        self.grid.set(c, state)
    }

    /// Scatter obstacles over the open cells; endpoints are never covered.
    /// See [`HexGrid::scatter_obstacles`].
    pub fn scatter_obstacles<R: rand::Rng>(&mut self, density: f64, rng: &mut R) -> usize {
        self.grid.scatter_obstacles(density, rng)
    }

    /// Reopen every cell and forget both endpoints.
    pub fn clear(&mut self) {
        self.grid.fill(CellState::Open);
        self.origin = None;
        self.objective = None;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

impl FromStr for Board {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, HexError> {
        Self::from_grid(s.parse()?)
    }
}

/// Board fields as stored; the endpoints must agree with the grid's cells.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoard {
    grid: HexGrid,
    origin: Option<HexCoord>,
    objective: Option<HexCoord>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoard> for Board {
    type Error = HexError;

    fn try_from(raw: RawBoard) -> Result<Self, HexError> {
        let board = Self::from_grid(raw.grid)?;
        if board.origin != raw.origin {
            return Err(HexError::EndpointMismatch(CellState::Origin));
        }
        if board.objective != raw.objective {
            return Err(HexError::EndpointMismatch(CellState::Objective));
        }
        Ok(board)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    fn sample() -> Board {
        let mut b = Board::new(6, 5);
        b.set_origin(HexCoord::new(0, 0)).unwrap();
        b.set_objective(HexCoord::new(4, 3)).unwrap();
        b.set_obstacle(HexCoord::new(2, 2), true).unwrap();
        b
    }

    #[test]
    fn board_round_trip() {
        let b = sample();
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn stored_endpoints_must_match_cells() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["origin"] = serde_json::json!({ "x": 1, "y": 1 });
        let err = serde_json::from_value::<Board>(value).unwrap_err();
        assert!(err.to_string().contains("does not match"), "{err}");

        let mut value = serde_json::to_value(sample()).unwrap();
        value["objective"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<Board>(value).is_err());
    }

    #[test]
    fn malformed_grid_inside_board_is_rejected() {
        let json = r#"{"grid":{"cells":[],"width":5,"height":5},"origin":null,"objective":null}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}
