use hexpath_core::HexCoord;

use crate::engine::{Progress, Search};
use crate::traits::Pather;

impl<P: Pather> Search<'_, P> {
    /// Expand the whole current wave by one hop.
    ///
    /// Every member of the frontier tries all six directions in order.
    /// Because a wave is finished before the next begins, the first time
    /// the objective is touched the route to it is shortest.
    pub(crate) fn bfs_step(&mut self) -> Progress {
        let wave = std::mem::take(&mut self.state.frontier);
        let mut next = std::mem::take(&mut self.state.next);
        next.clear();

        for &from in &wave {
            let hops = self.state.position(from).map_or(0, |i| self.state.cost[i]);
            for (dir, to) in from.neighbors() {
                self.state.explored += 1;
                if self.state.contains(to) {
                    continue;
                }
                if to == self.objective {
                    self.state.frontier = wave;
                    self.state.next = next;
                    return self.reach_objective(from);
                }
                if self.passable(to) {
                    self.state.discover(to, Some(dir), hops + 1);
                    self.record_edge(from, to);
                    next.push(to);
                }
            }
        }

        self.state.frontier = next;
        self.state.next = wave;
        if self.state.frontier.is_empty() {
            Progress::Exhausted
        } else {
            Progress::Pending
        }
    }

    /// Hop count of every coordinate reached so far, in discovery order.
    pub fn bfs_layers(&self) -> impl Iterator<Item = (HexCoord, u32)> + '_ {
        self.state
            .log
            .iter()
            .copied()
            .zip(self.state.cost.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Algorithm, Progress, SearchEngine};
    use hexpath_core::{CellState, HexCoord, HexGrid};

    #[test]
    fn one_wave_per_step() {
        let grid = HexGrid::new(9, 9);
        let mut engine = SearchEngine::default();
        let origin = HexCoord::new(4, 4);
        let mut search = engine
            .start(Algorithm::Bfs, &grid, origin, HexCoord::new(8, 7))
            .unwrap();
        assert_eq!(search.frontier(), &[origin]);

        assert_eq!(search.step(), Progress::Pending);
        assert_eq!(search.frontier().len(), 6);
        assert_eq!(search.explored(), 6);

        assert_eq!(search.step(), Progress::Pending);
        assert_eq!(search.frontier().len(), 12);
        assert_eq!(search.explored(), 6 + 36);
        assert!(search.bfs_layers().all(|(_, hops)| hops <= 2));
    }

    #[test]
    fn first_wave_follows_direction_order() {
        let grid = HexGrid::new(7, 7);
        let mut engine = SearchEngine::default();
        let origin = HexCoord::new(3, 3);
        let mut search = engine
            .start(Algorithm::Bfs, &grid, origin, HexCoord::new(0, 0))
            .unwrap();
        search.step();
        let expected: Vec<_> = origin.neighbors().iter().map(|&(_, c)| c).collect();
        assert_eq!(search.frontier(), expected.as_slice());
    }

    #[test]
    fn isolated_origin_exhausts_after_one_step() {
        let mut grid = HexGrid::new(7, 7);
        let origin = HexCoord::new(3, 3);
        for (_, n) in origin.neighbors() {
            grid.set(n, CellState::Obstacle).unwrap();
        }
        let mut engine = SearchEngine::default();
        let mut search = engine
            .start(Algorithm::Bfs, &grid, origin, HexCoord::new(0, 0))
            .unwrap();
        assert_eq!(search.step(), Progress::Exhausted);
        assert_eq!(search.explored(), 6);
        assert!(!search.result().found);
    }

    #[test]
    fn obstacles_force_a_detour() {
        let grid: HexGrid = "\
 . . . .
. . # . .
 . . # .
. . # . .
 . . . ."
            .parse()
            .unwrap();
        let mut engine = SearchEngine::default();
        let r = engine
            .search(Algorithm::Bfs, &grid, HexCoord::new(0, 2), HexCoord::new(3, 2))
            .unwrap();
        assert!(r.found);
        assert!(r.hops > 3);
        assert!(r.path.iter().all(|&c| grid.at(c) != Some(CellState::Obstacle)));
    }
}
