//! # agv_pathfinding
//!
//! Route planning for automated guided vehicles on a warehouse floor modelled as a fixed grid
//! with static obstacles. Vehicles move on a 4-connected grid with unit cost per move; routes are
//! computed with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) using the Manhattan
//! distance, which always yields a route of minimum length. Connected components of the floor
//! are computed once per [GridConfig] so unreachable goals are reported without searching.
//!
//! ```
//! use agv_pathfinding::{plan_route, Cell, GridConfig, RouteOutcome};
//!
//! let config = GridConfig::reference();
//! let outcome = plan_route(&config, Cell::new(0, 0), Cell::new(9, 9));
//! if let RouteOutcome::PathFound { steps } = &outcome {
//!     assert_eq!(steps.steps(), 18);
//! }
//! ```
pub mod astar;
pub mod cell;
pub mod config;
pub mod path;
pub mod pathfinder;
pub mod render;
pub mod route;
pub mod validator;

pub use cell::Cell;
pub use config::{ConfigError, GridConfig};
pub use path::Path;
pub use pathfinder::PathFinder;
pub use render::{clamp_cell, GridView};
pub use route::{plan_route, RouteOutcome};
pub use validator::{Rejection, RequestValidator, Severity};

/// Rows of the reference warehouse floor.
pub const ROWS: usize = 10;
/// Columns of the reference warehouse floor.
pub const COLS: usize = 10;
/// Shelving on the reference warehouse floor.
pub const REFERENCE_OBSTACLES: [Cell; 5] = [
    Cell::new(3, 3),
    Cell::new(3, 4),
    Cell::new(4, 3),
    Cell::new(6, 7),
    Cell::new(6, 8),
];
/// Upper bound on the number of cells of a configured grid.
pub const MAX_CELLS: usize = 1 << 24;

/// Inline capacity of neighbour lists; a cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
