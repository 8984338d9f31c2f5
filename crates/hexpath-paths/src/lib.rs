//! Path search on offset hex grids.
//!
//! Three strategies are provided, all driven through [`SearchEngine`]:
//!
//! - **DFS** follows one thread as deep as it goes ([`DfsMode`])
//! - **BFS** expands whole waves and finds a fewest-hops path
//! - **A\*** expands the most promising cell first ([`Heuristic`])
//!
//! A search can run to completion with [`SearchEngine::search`] or be
//! stepped one unit of work at a time through a [`Search`] session, which
//! is how an animated view shows the exploration unfold. The engine owns a
//! [`SearchState`] that is reused by every search it runs.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | DFS, BFS |
//! | [`HeuristicPather`] : [`Pather`] | A*, and starting any search |

mod astar;
mod bfs;
mod config;
mod dfs;
mod engine;
mod path;
mod state;
mod traits;

pub use config::{DfsMode, Heuristic, SearchConfig};
pub use engine::{Progress, Search, SearchEngine};
pub use path::{Algorithm, ParseAlgorithmError, SearchResult};
pub use state::SearchState;
pub use traits::{GridPather, HeuristicPather, Pather};
