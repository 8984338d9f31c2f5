//! Board setup and text output shared by the `hexsearch` driver.
//!
//! Demonstrates: loading or generating a board, running each search
//! strategy on it, drawing the found path, and walking it with a
//! [`Traveller`].

use std::fmt;

use hexpath_core::{Board, CellState, HexCoord, HexError, Layout, Traveller, WorldPos};
use hexpath_paths::SearchResult;
use rand::SeedableRng;

/// Character marking the inner cells of a found path.
pub const PATH_MARK: char = '*';

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while preparing a board.
#[derive(Debug)]
pub enum DemoError {
    /// The board file could not be read.
    Io(std::io::Error),
    /// The board text or its endpoints are invalid.
    Board(HexError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read board: {e}"),
            Self::Board(e) => write!(f, "bad board: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Board(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for DemoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<HexError> for DemoError {
    fn from(e: HexError) -> Self {
        Self::Board(e)
    }
}

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

/// Parse a text board; it must hold exactly one origin and one objective.
pub fn parse_board(text: &str) -> Result<Board, DemoError> {
    let board: Board = text.parse()?;
    board.endpoints()?;
    Ok(board)
}

/// Read a text board from `path`.
pub fn load_board(path: &std::path::Path) -> Result<Board, DemoError> {
    let text = std::fs::read_to_string(path)?;
    parse_board(&text)
}

/// A board with the origin in the bottom-left corner, the objective in the
/// top-right one and obstacles scattered with `density` in between.
///
/// The same `seed` always yields the same board.
pub fn generate_board(width: i32, height: i32, density: f64, seed: u64) -> Board {
    let mut board = Board::new(width, height);
    let grid = board.grid();
    let top = grid.height() - 1;
    let objective = HexCoord::new(grid.row_width(top) - 1, top);
    let placed_ends = board
        .set_origin(HexCoord::new(0, 0))
        .and_then(|()| board.set_objective(objective));
    debug_assert!(placed_ends.is_ok(), "corners of a clamped grid are valid");

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let placed = board.scatter_obstacles(density, &mut rng);
    log::debug!("generated {width}x{height} board, {placed} obstacles, seed {seed}");
    board
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Draw `board` with the inner cells of the result's path marked.
pub fn render_path(board: &Board, result: &SearchResult) -> String {
    let inner = if result.path.len() > 2 {
        &result.path[1..result.path.len() - 1]
    } else {
        &[][..]
    };
    board.grid().render(|c, state| match state {
        CellState::Open if inner.contains(&c) => PATH_MARK,
        _ => state.to_char(),
    })
}

/// World positions a traveller passes through, sampled every `dt` seconds,
/// while walking the result's path from origin to objective.
///
/// A traveller that cannot make progress (`speed` or `dt` not positive)
/// yields only its starting position.
pub fn walk(result: &SearchResult, layout: Layout, speed: f32, dt: f32) -> Vec<WorldPos> {
    let mut traveller = Traveller::new(result.path.clone(), layout, speed);
    let mut samples = vec![traveller.position()];
    if dt.is_nan() || dt <= 0.0 {
        return samples;
    }
    while traveller.is_travelling() {
        let before = traveller.position();
        let after = traveller.advance(dt);
        if after != before {
            samples.push(after);
        }
    }
    samples
}
