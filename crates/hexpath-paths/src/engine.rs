use hexpath_core::{Board, HexCoord, HexError};

use crate::config::{Heuristic, SearchConfig};
use crate::path::{Algorithm, SearchResult};
use crate::state::{Frame, SearchState};
use crate::traits::{HeuristicPather, Pather};

/// What a call to [`Search::step`] achieved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// More work remains.
    Pending,
    /// The objective was reached.
    Found,
    /// Every reachable candidate was used up without reaching the objective.
    Exhausted,
}

// ---------------------------------------------------------------------------
// Search session
// ---------------------------------------------------------------------------

/// A search in progress.
///
/// Created by [`SearchEngine::start`]. Each [`step`](Self::step) does one
/// unit of work (a BFS wave, an A* candidate or a DFS node), so a caller can
/// interleave steps with drawing. The session borrows the pather, which keeps
/// the grid from being edited until the search is dropped.
pub struct Search<'a, P> {
    pub(crate) pather: &'a P,
    pub(crate) state: &'a mut SearchState,
    pub(crate) config: SearchConfig,
    pub(crate) algorithm: Algorithm,
    pub(crate) origin: HexCoord,
    pub(crate) objective: HexCoord,
    // objective first, origin last
    pub(crate) route: Option<Vec<HexCoord>>,
    pub(crate) progress: Progress,
    steps: usize,
}

impl<'a, P: HeuristicPather> Search<'a, P> {
    fn new(
        pather: &'a P,
        state: &'a mut SearchState,
        config: SearchConfig,
        algorithm: Algorithm,
        origin: HexCoord,
        objective: HexCoord,
    ) -> Self {
        state.clear();
        let mut search = Self {
            pather,
            state,
            config,
            algorithm,
            origin,
            objective,
            route: None,
            progress: Progress::Pending,
            steps: 0,
        };
        if origin == objective {
            search.route = Some(vec![origin]);
            search.progress = Progress::Found;
            return search;
        }
        let i = search.state.discover(origin, None, 0);
        match algorithm {
            Algorithm::Dfs => search.state.stack.push(Frame::new(origin)),
            Algorithm::Bfs => search.state.frontier.push(origin),
            Algorithm::AStar => {
                let p = search.priority(origin, 0);
                search.state.estimates[i] = p;
            }
        }
        search
    }

    /// Do one unit of work. Once the search is over this keeps returning
    /// the final outcome.
    pub fn step(&mut self) -> Progress {
        if self.progress != Progress::Pending {
            return self.progress;
        }
        self.steps += 1;
        self.progress = match self.algorithm {
            Algorithm::Dfs => self.dfs_step(),
            Algorithm::Bfs => self.bfs_step(),
            Algorithm::AStar => self.astar_step(),
        };
        log::trace!(
            "{} step {}: {} discovered, {} explored",
            self.algorithm,
            self.steps,
            self.state.log.len(),
            self.state.explored
        );
        self.progress
    }

    /// Step until the search is over and return its result.
    pub fn run(mut self) -> SearchResult {
        while self.step() == Progress::Pending {}
        self.result()
    }

    /// A* priority of a cell reached after `hops` hops.
    pub(crate) fn priority(&self, c: HexCoord, hops: u32) -> f32 {
        let h = self.pather.estimate(c, self.objective);
        match self.config.heuristic {
            Heuristic::Greedy => h,
            Heuristic::Cumulative => hops as f32 + h / self.pather.step_length(),
        }
    }
}

impl<P> Search<'_, P> {
    /// The outcome so far.
    #[inline]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of steps taken.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Directions examined so far.
    #[inline]
    pub fn explored(&self) -> usize {
        self.state.explored
    }

    /// Edges walked so far.
    #[inline]
    pub fn edges(&self) -> &[(HexCoord, HexCoord)] {
        &self.state.edges
    }

    /// The BFS wave awaiting expansion.
    #[inline]
    pub fn frontier(&self) -> &[HexCoord] {
        &self.state.frontier
    }

    /// Coordinates discovered so far, origin first.
    #[inline]
    pub fn discovered(&self) -> &[HexCoord] {
        &self.state.log
    }

    /// Build the result for the current progress. A search that is still
    /// pending reports no path.
    pub fn result(&self) -> SearchResult {
        let edges = self.state.edges.clone();
        match (&self.route, self.progress) {
            (Some(route), Progress::Found) => {
                let path = route.iter().rev().copied().collect();
                SearchResult::found(self.algorithm, path, self.state.explored, edges)
            }
            _ => SearchResult::not_found(self.algorithm, self.state.explored, edges),
        }
    }

    #[inline]
    pub(crate) fn record_edge(&mut self, from: HexCoord, to: HexCoord) {
        if self.config.record_edges {
            self.state.edges.push((from, to));
        }
    }

    /// Finish after stepping from `terminal` onto the objective.
    pub(crate) fn reach_objective(&mut self, terminal: HexCoord) -> Progress {
        self.record_edge(terminal, self.objective);
        self.route = Some(self.state.reconstruct(terminal, self.objective));
        Progress::Found
    }
}

impl<P: Pather> Search<'_, P> {
    #[inline]
    pub(crate) fn passable(&self, c: HexCoord) -> bool {
        self.pather.passable(c)
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Runs searches, reusing one [`SearchState`] between them.
///
/// ```
/// use hexpath_core::{HexCoord, HexGrid};
/// use hexpath_paths::{Algorithm, SearchEngine};
///
/// let grid = HexGrid::new(5, 5);
/// let mut engine = SearchEngine::default();
/// let r = engine
///     .search(Algorithm::Bfs, &grid, HexCoord::new(0, 0), HexCoord::new(2, 0))
///     .unwrap();
/// assert!(r.found);
/// assert_eq!(r.hops, 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SearchEngine {
    config: SearchConfig,
    state: SearchState,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            state: SearchState::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the configuration used by later searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Bookkeeping left by the most recent search.
    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Discard anything left over from earlier searches.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Begin an incremental search from `origin` to `objective`.
    ///
    /// Both endpoints must be cells of the grid.
    pub fn start<'a, P: HeuristicPather>(
        &'a mut self,
        algorithm: Algorithm,
        pather: &'a P,
        origin: HexCoord,
        objective: HexCoord,
    ) -> Result<Search<'a, P>, HexError> {
        for c in [origin, objective] {
            if !pather.contains(c) {
                return Err(HexError::InvalidCoordinate(c));
            }
        }
        log::debug!("{algorithm} search from {origin} to {objective}");
        Ok(Search::new(
            pather,
            &mut self.state,
            self.config,
            algorithm,
            origin,
            objective,
        ))
    }

    /// Run a whole search and return its result.
    pub fn search<P: HeuristicPather>(
        &mut self,
        algorithm: Algorithm,
        pather: &P,
        origin: HexCoord,
        objective: HexCoord,
    ) -> Result<SearchResult, HexError> {
        let result = self.start(algorithm, pather, origin, objective)?.run();
        if result.found {
            log::debug!(
                "{algorithm} found {} hops after exploring {}",
                result.hops,
                result.explored
            );
        } else {
            log::debug!("{algorithm} found no path after exploring {}", result.explored);
        }
        Ok(result)
    }

    /// Search between a board's origin and objective.
    pub fn search_board(
        &mut self,
        algorithm: Algorithm,
        board: &Board,
    ) -> Result<SearchResult, HexError> {
        let (origin, objective) = board.endpoints()?;
        self.search(algorithm, board.grid(), origin, objective)
    }
}
