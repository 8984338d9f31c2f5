use std::collections::HashMap;

use hexpath_core::{HexCoord, HexDirection};

// ---------------------------------------------------------------------------
// DFS stack frame
// ---------------------------------------------------------------------------

/// A node on the depth-first stack and the next direction it will try.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Frame {
    pub(crate) at: HexCoord,
    pub(crate) next_dir: usize,
}

impl Frame {
    pub(crate) fn new(at: HexCoord) -> Self {
        Self { at, next_dir: 0 }
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Bookkeeping for a single search.
///
/// Every discovered coordinate is appended to a flat log (index 0 is the
/// origin) together with the direction that discovered it. Paths are
/// rebuilt by walking those directions backwards. The state is owned by a
/// [`SearchEngine`](crate::SearchEngine), lent to one search at a time and
/// cleared whenever a new search starts, so that repeated searches reuse
/// its allocations.
#[derive(Debug, Default, Clone)]
pub struct SearchState {
    pub(crate) log: Vec<HexCoord>,
    pub(crate) index: HashMap<HexCoord, usize>,
    pub(crate) came_from: Vec<Option<HexDirection>>,
    // A* priority of each entry
    pub(crate) estimates: Vec<f32>,
    // hops from the origin
    pub(crate) cost: Vec<u32>,
    pub(crate) closed: Vec<bool>,
    // BFS waves
    pub(crate) frontier: Vec<HexCoord>,
    pub(crate) next: Vec<HexCoord>,
    // DFS
    pub(crate) stack: Vec<Frame>,
    pub(crate) explored: usize,
    pub(crate) edges: Vec<(HexCoord, HexCoord)>,
}

impl SearchState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything from the previous search, keeping allocations.
    pub fn clear(&mut self) {
        self.log.clear();
        self.index.clear();
        self.came_from.clear();
        self.estimates.clear();
        self.cost.clear();
        self.closed.clear();
        self.frontier.clear();
        self.next.clear();
        self.stack.clear();
        self.explored = 0;
        self.edges.clear();
    }

    /// Number of directions examined so far.
    #[inline]
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Coordinates in discovery order, starting with the origin.
    #[inline]
    pub fn discovered(&self) -> &[HexCoord] {
        &self.log
    }

    /// Edges walked so far, in discovery order.
    #[inline]
    pub fn edges(&self) -> &[(HexCoord, HexCoord)] {
        &self.edges
    }

    /// The BFS wave awaiting expansion.
    #[inline]
    pub fn frontier(&self) -> &[HexCoord] {
        &self.frontier
    }

    /// Whether `c` has already been discovered.
    #[inline]
    pub fn contains(&self, c: HexCoord) -> bool {
        self.index.contains_key(&c)
    }

    #[inline]
    pub(crate) fn position(&self, c: HexCoord) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Append `c` to the log and return its index.
    pub(crate) fn discover(&mut self, c: HexCoord, dir: Option<HexDirection>, cost: u32) -> usize {
        let i = self.log.len();
        self.log.push(c);
        self.index.insert(c, i);
        self.came_from.push(dir);
        self.estimates.push(0.0);
        self.cost.push(cost);
        self.closed.push(false);
        i
    }

    /// Rebuild the route that ends by stepping from `terminal` onto
    /// `objective`.
    ///
    /// The result runs objective first, origin last.
    pub(crate) fn reconstruct(&self, terminal: HexCoord, objective: HexCoord) -> Vec<HexCoord> {
        let Some(&origin) = self.log.first() else {
            return vec![objective];
        };
        let mut route = vec![objective];
        let mut k = terminal;
        // Hop counts fall along the walk, so it ends within the log length.
        for _ in 0..self.log.len() {
            if k == origin {
                break;
            }
            route.push(k);
            let Some(d) = self.position(k).and_then(|i| self.came_from[i]) else {
                break;
            };
            k = k.adjacent(d.flip());
        }
        route.push(origin);
        route
    }
}
