use hexpath_core::{HexCoord, HexGrid, Layout};

/// Minimal search interface: bounds and traversability.
pub trait Pather {
    /// Whether `c` is a cell of the grid.
    fn contains(&self, c: HexCoord) -> bool;

    /// Whether a search may pass through `c`.
    fn passable(&self, c: HexCoord) -> bool;
}

/// Pather that can also rank cells by straight-line distance, for A*.
pub trait HeuristicPather: Pather {
    /// Straight-line distance between the centres of `from` and `to`.
    fn estimate(&self, from: HexCoord, to: HexCoord) -> f32;

    /// Longest straight-line displacement covered by a single hop.
    /// Dividing [`estimate`](Self::estimate) by this never overestimates
    /// the remaining hop count.
    fn step_length(&self) -> f32;
}

impl Pather for HexGrid {
    #[inline]
    fn contains(&self, c: HexCoord) -> bool {
        self.is_valid(c)
    }

    #[inline]
    fn passable(&self, c: HexCoord) -> bool {
        self.is_open(c)
    }
}

impl HeuristicPather for HexGrid {
    fn estimate(&self, from: HexCoord, to: HexCoord) -> f32 {
        Layout::default().distance(from, to)
    }

    fn step_length(&self) -> f32 {
        Layout::default().step_length()
    }
}

/// A grid paired with a custom world [`Layout`].
#[derive(Clone, Copy, Debug)]
pub struct GridPather<'a> {
    pub grid: &'a HexGrid,
    pub layout: Layout,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a HexGrid, layout: Layout) -> Self {
        Self { grid, layout }
    }
}

impl Pather for GridPather<'_> {
    #[inline]
    fn contains(&self, c: HexCoord) -> bool {
        self.grid.is_valid(c)
    }

    #[inline]
    fn passable(&self, c: HexCoord) -> bool {
        self.grid.is_open(c)
    }
}

impl HeuristicPather for GridPather<'_> {
    fn estimate(&self, from: HexCoord, to: HexCoord) -> f32 {
        self.layout.distance(from, to)
    }

    fn step_length(&self) -> f32 {
        self.layout.step_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, Heuristic, SearchConfig, SearchEngine};
    use hexpath_core::CellState;
    use rand::SeedableRng;

    // Rows far apart relative to columns, so a diagonal hop is the long one.
    const TALL: Layout = Layout {
        pitch_x: 2.0,
        pitch_y: 6.0,
    };

    #[test]
    fn custom_layout_drives_the_heuristic() {
        let grid = HexGrid::new(9, 9);
        let pather = GridPather::new(&grid, TALL);
        let (a, b) = (HexCoord::new(0, 1), HexCoord::new(0, 3));
        assert_eq!(pather.estimate(a, b), TALL.distance(a, b));
        assert_ne!(pather.estimate(a, b), grid.estimate(a, b));
        assert_eq!(pather.step_length(), (1.0f32).hypot(6.0));
        assert!(pather.contains(a) && pather.passable(a));
        assert!(!pather.contains(HexCoord::new(8, 0)));
    }

    #[test]
    fn custom_layout_keeps_cumulative_search_shortest() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x7a11);
        let (o, x) = (HexCoord::new(0, 0), HexCoord::new(9, 9));
        let cumulative = SearchConfig::default().with_heuristic(Heuristic::Cumulative);
        for round in 0..25 {
            let mut grid = HexGrid::new(11, 10);
            grid.scatter_obstacles(0.25, &mut rng);
            grid.set(o, CellState::Origin).unwrap();
            grid.set(x, CellState::Objective).unwrap();
            let pather = GridPather::new(&grid, TALL);

            let mut engine = SearchEngine::default();
            let bfs = engine.search(Algorithm::Bfs, &pather, o, x).unwrap();
            let greedy = engine.search(Algorithm::AStar, &pather, o, x).unwrap();
            engine.set_config(cumulative);
            let astar = engine.search(Algorithm::AStar, &pather, o, x).unwrap();

            assert_eq!(greedy.found, bfs.found, "round {round}");
            assert_eq!(astar.found, bfs.found, "round {round}");
            if bfs.found {
                assert_eq!(astar.hops, bfs.hops, "round {round}");
                assert!(greedy.hops >= bfs.hops, "round {round}");
                assert_eq!(greedy.path.first(), Some(&o));
                assert_eq!(greedy.path.last(), Some(&x));
            }
        }
    }
}
