use std::fmt;
use std::str::FromStr;

use hexpath_core::HexCoord;

/// The search strategies an engine can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dfs,
    Bfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Dfs, Self::Bfs, Self::AStar];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Dfs => "DFS",
            Self::Bfs => "BFS",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Self::Dfs),
            "bfs" => Ok(Self::Bfs),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Outcome of a finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub found: bool,
    /// Origin first, objective last. Empty when nothing was found.
    pub path: Vec<HexCoord>,
    /// `path.len() - 1`, or 0 when nothing was found.
    pub hops: usize,
    /// Directions examined during the search.
    pub explored: usize,
    /// Edges walked, when the engine records them.
    pub edges: Vec<(HexCoord, HexCoord)>,
}

impl SearchResult {
    pub(crate) fn found(
        algorithm: Algorithm,
        path: Vec<HexCoord>,
        explored: usize,
        edges: Vec<(HexCoord, HexCoord)>,
    ) -> Self {
        Self {
            algorithm,
            found: true,
            hops: path.len().saturating_sub(1),
            path,
            explored,
            edges,
        }
    }

    pub(crate) fn not_found(
        algorithm: Algorithm,
        explored: usize,
        edges: Vec<(HexCoord, HexCoord)>,
    ) -> Self {
        Self {
            algorithm,
            found: false,
            path: Vec::new(),
            hops: 0,
            explored,
            edges,
        }
    }

    /// The path from the objective back to the origin.
    pub fn playback_reversed(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.path.iter().rev().copied()
    }

    /// Consecutive `(from, to)` pairs of the path, for drawing it.
    pub fn segments(&self) -> impl Iterator<Item = (HexCoord, HexCoord)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(
                f,
                "{}: path of {} hops, {} directions explored",
                self.algorithm, self.hops, self.explored
            )
        } else {
            write!(
                f,
                "{}: no path, {} directions explored",
                self.algorithm, self.explored
            )
        }
    }
}
