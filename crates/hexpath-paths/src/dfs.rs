//! Depth-first search with an explicit stack.

use hexpath_core::HexDirection;

use crate::config::DfsMode;
use crate::engine::{Progress, Search};
use crate::state::Frame;
use crate::traits::Pather;

impl<P: Pather> Search<'_, P> {
    /// Work on the node at the top of the stack until it either descends
    /// into an open neighbour or runs out of directions.
    ///
    /// Every examined neighbour inside the grid is logged, open or not, so
    /// it is never looked at again. The path found is whichever thread reached the
    /// objective first; it is not necessarily shortest.
    pub(crate) fn dfs_step(&mut self) -> Progress {
        let Some(&Frame { at, next_dir }) = self.state.stack.last() else {
            return Progress::Exhausted;
        };
        let hops = self.state.position(at).map_or(0, |i| self.state.cost[i]);

        for (k, &dir) in HexDirection::ALL.iter().enumerate().skip(next_dir) {
            if let Some(top) = self.state.stack.last_mut() {
                top.next_dir = k + 1;
            }
            self.state.explored += 1;
            let to = at.adjacent(dir);
            if !self.pather.contains(to) || self.state.contains(to) {
                continue;
            }
            if to == self.objective {
                return self.reach_objective(at);
            }
            self.state.discover(to, Some(dir), hops + 1);
            if self.passable(to) {
                self.record_edge(at, to);
                match self.config.dfs_mode {
                    DfsMode::Backtracking => self.state.stack.push(Frame::new(to)),
                    DfsMode::FirstBranch => {
                        self.state.stack.clear();
                        self.state.stack.push(Frame::new(to));
                    }
                }
                return Progress::Pending;
            }
        }

        // Dead end.
        self.state.stack.pop();
        if self.config.dfs_mode == DfsMode::FirstBranch || self.state.stack.is_empty() {
            self.state.stack.clear();
            Progress::Exhausted
        } else {
            Progress::Pending
        }
    }

    /// Depth of the current DFS thread.
    pub fn dfs_depth(&self) -> usize {
        self.state.stack.len()
    }
}
