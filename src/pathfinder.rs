use log::debug;
use smallvec::SmallVec;

use crate::astar::astar;
use crate::cell::Cell;
use crate::config::GridConfig;
use crate::path::Path;
use crate::N_SMALLVEC_SIZE;

/// Cost of a single cardinal move.
const C: i32 = 1;

/// [PathFinder] computes minimum-length 4-connected routes on a [GridConfig] with A* and the
/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Equal
/// estimates are expanded in the order they were discovered, with neighbours discovered in the
/// order up, down, left, right, which makes the returned path deterministic.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'a> {
    config: &'a GridConfig,
}

impl<'a> PathFinder<'a> {
    pub fn new(config: &'a GridConfig) -> PathFinder<'a> {
        PathFinder { config }
    }

    pub fn config(&self) -> &GridConfig {
        self.config
    }

    pub fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32 {
        p1.manhattan_distance(p2) * C
    }

    fn successors(&self, node: &Cell) -> SmallVec<[(Cell, i32); N_SMALLVEC_SIZE]> {
        self.config
            .passable_neighbours(node)
            .into_iter()
            .map(|p| (p, C))
            .collect()
    }

    /// Computes a shortest path from start to goal.
    ///
    /// Returns `[start]` if start and goal coincide, and [None] if either endpoint is outside
    /// the grid or blocked, or if the goal lies on another connected component than the start.
    pub fn find_path(&self, start: Cell, goal: Cell) -> Option<Path> {
        if !self.config.is_passable(&start) || !self.config.is_passable(&goal) {
            debug!("{} or {} is not a passable cell", start, goal);
            return None;
        }
        if start == goal {
            return Some(Path::new(vec![start]));
        }
        // Check if start and goal are on the same connected component.
        if !self.config.reachable(&start, &goal) {
            debug!("{} is not reachable from {}", goal, start);
            return None;
        }
        debug!("{} is reachable from {}, computing path", goal, start);
        astar(
            &start,
            |node| self.successors(node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        )
        .map(|(v, _c)| Path::new(v))
    }
}
