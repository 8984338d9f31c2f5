//! The [`HexError`] type shared by the grid model and the search engine.

use std::fmt;

use crate::cell::CellState;
use crate::geom::HexCoord;

/// Errors raised by grid construction, board parsing and search setup.
///
/// Not finding a path is *not* an error; searches report it through
/// their result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The coordinate lies outside the grid's row-dependent bounds.
    InvalidCoordinate(HexCoord),
    /// A direction index outside `0..6`.
    InvalidDirection(u8),
    /// A character that does not name a cell state.
    InvalidRune { ch: char, line: usize, column: usize },
    /// A row whose cell count does not match its parity.
    InconsistentRow {
        y: i32,
        expected: i32,
        found: i32,
    },
    /// More than one origin or objective on a board.
    DuplicateEndpoint(CellState),
    /// The board has no origin or no objective.
    MissingEndpoint(CellState),
    /// A board text larger than [`MAX_SIDE`](crate::MAX_SIDE) in either
    /// direction.
    BoardTooLarge { width: i32, height: i32 },
    /// Stored dimensions that no grid could have: out of range, or not
    /// matching the number of cells.
    InvalidSize {
        width: i32,
        height: i32,
        cells: usize,
    },
    /// A stored endpoint that disagrees with the cell at that position.
    EndpointMismatch(CellState),
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate(c) => write!(f, "coordinate {c} is outside the grid"),
            Self::InvalidDirection(v) => write!(f, "invalid hex direction {v}"),
            Self::InvalidRune { ch, line, column } => {
                write!(
                    f,
                    "board contains invalid rune \u{201c}{ch}\u{201d} at line {line}, column {column}"
                )
            }
            Self::InconsistentRow { y, expected, found } => {
                write!(f, "row {y} has {found} cells, expected {expected}")
            }
            Self::DuplicateEndpoint(state) => write!(f, "board has more than one {state}"),
            Self::MissingEndpoint(state) => write!(f, "board has no {state}"),
            Self::BoardTooLarge { width, height } => write!(
                f,
                "board of {width}x{height} cells exceeds the {max}x{max} limit",
                max = crate::MAX_SIDE
            ),
            Self::InvalidSize {
                width,
                height,
                cells,
            } => write!(f, "{cells} cells do not make a {width}x{height} grid"),
            Self::EndpointMismatch(state) => {
                write!(f, "stored {state} does not match the board's cells")
            }
        }
    }
}

impl std::error::Error for HexError {}
