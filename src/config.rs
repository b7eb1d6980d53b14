//! The immutable grid configuration shared by [PathFinder](crate::PathFinder) and
//! [RequestValidator](crate::RequestValidator).
use core::fmt;
use fxhash::FxHashSet;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::{COLS, MAX_CELLS, N_SMALLVEC_SIZE, REFERENCE_OBSTACLES, ROWS};

/// Fatal errors in the startup configuration of a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// One of the dimensions is zero.
    EmptyGrid { rows: usize, cols: usize },
    /// The grid has more than [MAX_CELLS] cells.
    TooLarge { rows: usize, cols: usize },
    /// An obstacle lies outside the grid.
    ObstacleOutOfBounds(Cell),
    /// The same obstacle was listed twice.
    DuplicateObstacle(Cell),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => write!(f, "Grid of {}x{} has no cells", rows, cols),
            Self::TooLarge { rows, cols } => write!(
                f,
                "Grid of {}x{} exceeds the maximum of {} cells",
                rows, cols, MAX_CELLS
            ),
            Self::ObstacleOutOfBounds(cell) => {
                write!(f, "Obstacle {} lies outside the grid", cell)
            }
            Self::DuplicateObstacle(cell) => write!(f, "Obstacle {} is listed twice", cell),
        }
    }
}

impl std::error::Error for ConfigError {}

/// [GridConfig] holds the bounds and the obstacle set of a grid, together with the connected
/// components of its passable cells. It is built once and only read afterwards, so it can be
/// shared between any number of searches.
#[derive(Clone, Debug)]
pub struct GridConfig {
    rows: usize,
    cols: usize,
    obstacles: FxHashSet<Cell>,
    components: UnionFind<usize>,
}

impl GridConfig {
    /// Validates the dimensions and obstacles and precomputes the connected components.
    pub fn new<I>(rows: usize, cols: usize, obstacles: I) -> Result<GridConfig, ConfigError>
    where
        I: IntoIterator<Item = Cell>,
    {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        if rows.checked_mul(cols).map_or(true, |n| n > MAX_CELLS) {
            return Err(ConfigError::TooLarge { rows, cols });
        }
        let mut config = GridConfig {
            rows,
            cols,
            obstacles: FxHashSet::default(),
            components: UnionFind::new(0),
        };
        for cell in obstacles {
            if !config.in_bounds(&cell) {
                return Err(ConfigError::ObstacleOutOfBounds(cell));
            }
            if !config.obstacles.insert(cell) {
                return Err(ConfigError::DuplicateObstacle(cell));
            }
        }
        config.generate_components();
        debug!(
            "Configured {}x{} grid with {} obstacles",
            rows,
            cols,
            config.obstacles.len()
        );
        Ok(config)
    }

    /// The 10x10 warehouse floor with its five fixed obstacles.
    pub fn reference() -> GridConfig {
        // The reference constants are in bounds and free of duplicates.
        GridConfig::new(ROWS, COLS, REFERENCE_OBSTACLES.iter().copied())
            .unwrap_or_else(|e| unreachable!("invalid reference grid: {}", e))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    pub fn is_blocked(&self, cell: &Cell) -> bool {
        self.obstacles.contains(cell)
    }

    pub fn is_passable(&self, cell: &Cell) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell)
    }

    /// Obstacles in no particular order.
    pub fn obstacles(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.obstacles.iter()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Passable 4-neighbours of a cell, in the order of [Cell::neumann_neighborhood].
    pub fn passable_neighbours(&self, cell: &Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.is_passable(p))
            .collect()
    }

    /// Checks if both cells are passable and on the same connected component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.is_passable(start) && self.is_passable(goal) {
            self.components.equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            false
        }
    }

    /// Retrieves the component id a passable [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        self.is_passable(cell)
            .then(|| self.components.find(self.get_ix(cell)))
    }

    fn get_ix(&self, cell: &Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// Links every passable cell to its passable right and lower neighbours.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.rows * self.cols);
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let cell = Cell::new(row, col);
                if !self.is_passable(&cell) {
                    continue;
                }
                let parent_ix = self.get_ix(&cell);
                [Cell::new(row + 1, col), Cell::new(row, col + 1)]
                    .iter()
                    .filter(|p| self.is_passable(p))
                    .for_each(|p| {
                        components.union(parent_ix, self.get_ix(p));
                    });
            }
        }
        self.components = components;
    }
}
