use crate::config::Heuristic;
use crate::engine::{Progress, Search};
use crate::traits::HeuristicPather;

impl<P: HeuristicPather> Search<'_, P> {
    /// Expand the most promising logged cell.
    ///
    /// Candidates are every logged, not yet closed cell; the one with the
    /// smallest priority wins, ties going to the earliest discovered. The
    /// first step therefore expands the origin. With
    /// [`Heuristic::Greedy`] the priority is the straight-line distance to
    /// the objective alone; with [`Heuristic::Cumulative`] it also counts
    /// hops taken, and cheaper routes to open candidates replace dearer ones.
    pub(crate) fn astar_step(&mut self) -> Progress {
        let mut best: Option<usize> = None;
        for i in 0..self.state.log.len() {
            if self.state.closed[i] {
                continue;
            }
            if best.is_none_or(|b| self.state.estimates[i] < self.state.estimates[b]) {
                best = Some(i);
            }
        }
        let Some(ci) = best else {
            return Progress::Exhausted;
        };

        self.state.closed[ci] = true;
        let from = self.state.log[ci];
        let hops = self.state.cost[ci] + 1;
        let cumulative = self.config.heuristic == Heuristic::Cumulative;

        for (dir, to) in from.neighbors() {
            self.state.explored += 1;
            if let Some(ni) = self.state.position(to) {
                if cumulative && !self.state.closed[ni] && hops < self.state.cost[ni] {
                    let p = self.priority(to, hops);
                    self.state.cost[ni] = hops;
                    self.state.came_from[ni] = Some(dir);
                    self.state.estimates[ni] = p;
                }
                continue;
            }
            if to == self.objective {
                return self.reach_objective(from);
            }
            if self.passable(to) {
                let p = self.priority(to, hops);
                let ni = self.state.discover(to, Some(dir), hops);
                self.state.estimates[ni] = p;
                self.record_edge(from, to);
            }
        }
        Progress::Pending
    }
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, Heuristic, Progress, SearchConfig, SearchEngine};
    use hexpath_core::{CellState, HexCoord, HexGrid};

    #[test]
    fn first_step_expands_origin() {
        let grid = HexGrid::new(9, 9);
        let mut engine = SearchEngine::default();
        let origin = HexCoord::new(1, 1);
        let mut search = engine
            .start(Algorithm::AStar, &grid, origin, HexCoord::new(7, 7))
            .unwrap();
        assert_eq!(search.step(), Progress::Pending);
        assert_eq!(search.discovered().len(), 7);
        assert_eq!(search.explored(), 6);
        assert_eq!(search.edges().len(), 6);
    }

    #[test]
    fn greedy_heads_straight_for_objective() {
        let grid = HexGrid::new(12, 5);
        let mut engine = SearchEngine::default();
        let (o, x) = (HexCoord::new(0, 1), HexCoord::new(11, 1));
        let r = engine.search(Algorithm::AStar, &grid, o, x).unwrap();
        assert!(r.found);
        assert_eq!(r.hops, 11);
        assert!(r.path.iter().all(|c| c.y == 1));
        // One expansion per cell along the row; the last one stops at R.
        assert_eq!(r.explored, 6 * 10 + 5);
    }

    // A wall between origin and objective, open only at the bottom rows.
    const POCKET: &str = "\
 . . . . . . . . .
. . . . . . . . . .
 . . . . . # . . .
. . . . . . # . . .
 . . . . . # . . .
. . . . . # . . . .
 . . . . . # . . .
. . . . . . # . . .
 . . . . . # . . .";

    #[test]
    fn detour_around_wall() {
        let mut grid: HexGrid = POCKET.parse().unwrap();
        let (o, x) = (HexCoord::new(2, 5), HexCoord::new(8, 5));
        grid.set(o, CellState::Origin).unwrap();
        grid.set(x, CellState::Objective).unwrap();

        let mut engine = SearchEngine::default();
        let bfs = engine.search(Algorithm::Bfs, &grid, o, x).unwrap();
        let greedy = engine.search(Algorithm::AStar, &grid, o, x).unwrap();
        engine.set_config(SearchConfig::default().with_heuristic(Heuristic::Cumulative));
        let astar = engine.search(Algorithm::AStar, &grid, o, x).unwrap();

        assert!(bfs.found && greedy.found && astar.found);
        assert_eq!(astar.hops, bfs.hops);
        assert!(greedy.hops >= bfs.hops);
    }

    #[test]
    fn cumulative_explores_no_more_than_bfs_on_open_grid() {
        let grid = HexGrid::new(15, 15);
        let (o, x) = (HexCoord::new(0, 0), HexCoord::new(12, 13));
        let mut engine = SearchEngine::default();
        let bfs = engine.search(Algorithm::Bfs, &grid, o, x).unwrap();
        engine.set_config(SearchConfig::default().with_heuristic(Heuristic::Cumulative));
        let astar = engine.search(Algorithm::AStar, &grid, o, x).unwrap();
        assert_eq!(astar.hops, bfs.hops);
        assert!(astar.explored <= bfs.explored);
    }

    #[test]
    fn exhausts_when_walled_in() {
        let mut grid = HexGrid::new(7, 7);
        let origin = HexCoord::new(3, 3);
        for (_, n) in origin.neighbors() {
            grid.set(n, CellState::Obstacle).unwrap();
        }
        let mut engine = SearchEngine::default();
        let mut search = engine
            .start(Algorithm::AStar, &grid, origin, HexCoord::new(0, 0))
            .unwrap();
        assert_eq!(search.step(), Progress::Pending);
        assert_eq!(search.step(), Progress::Exhausted);
    }
}
