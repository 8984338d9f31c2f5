//! Search configuration.

/// How A* ranks its candidates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Rank by straight-line distance to the objective only. This is greedy
    /// best-first search: fast, but the path is not guaranteed shortest.
    #[default]
    Greedy,
    /// Rank by hops taken plus a lower bound on hops remaining. Paths are
    /// shortest by hop count.
    Cumulative,
}

/// How depth-first search reacts to a dead end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DfsMode {
    /// Step back to the previous node and try its remaining directions.
    #[default]
    Backtracking,
    /// Commit to the first open neighbour of every node; the first dead end
    /// ends the search unsuccessfully.
    FirstBranch,
}

/// Options shared by every search an engine runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    pub dfs_mode: DfsMode,
    /// Keep every walked edge for visualisation.
    pub record_edges: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            dfs_mode: DfsMode::default(),
            record_edges: true,
        }
    }
}

impl SearchConfig {
    /// Set the A* ranking (builder).
    #[inline]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the DFS dead-end behaviour (builder).
    #[inline]
    pub const fn with_dfs_mode(mut self, mode: DfsMode) -> Self {
        self.dfs_mode = mode;
        self
    }

    /// Enable or disable edge recording (builder).
    #[inline]
    pub const fn with_record_edges(mut self, record: bool) -> Self {
        self.record_edges = record;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default()
            .with_heuristic(Heuristic::Cumulative)
            .with_dfs_mode(DfsMode::FirstBranch)
            .with_record_edges(false);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
