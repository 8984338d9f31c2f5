//! **hexpath-core**: the offset hexagonal grid model.
//!
//! This crate provides the types the *hexpath* search engine operates on:
//! coordinates and directions with parity-aware adjacency, cell states, the
//! rectangular grid with its shorter even rows, boards tracking an origin and
//! an objective, world-space layout of hexagon centres, and a traveller that
//! walks a found path.

pub mod board;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod travel;

pub use board::Board;
pub use cell::CellState;
pub use error::HexError;
pub use geom::{HexCoord, HexDirection, ParseDirectionError};
pub use grid::{HexGrid, MAX_SIDE, MIN_SIDE};
pub use layout::{Layout, WorldPos};
pub use travel::{DEFAULT_SPEED, Traveller};
