//! Plain-text rendering of a grid and a route, one line per row with row 0 on top.
use core::fmt;

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::path::Path;

/// Clamps raw operator input to the grid, like a bounded number input would.
pub fn clamp_cell(config: &GridConfig, row: i64, col: i64) -> Cell {
    let clamp = |v: i64, n: usize| v.clamp(0, n as i64 - 1) as i32;
    Cell::new(clamp(row, config.rows()), clamp(col, config.cols()))
}

/// Draws obstacles as `#`, start as `S`, goal as `G`, path cells as `*` and free cells as `.`.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    config: &'a GridConfig,
    start: Option<Cell>,
    goal: Option<Cell>,
    path: Option<&'a Path>,
}

impl<'a> GridView<'a> {
    pub fn new(config: &'a GridConfig) -> GridView<'a> {
        GridView {
            config,
            start: None,
            goal: None,
            path: None,
        }
    }

    pub fn with_route(mut self, start: Cell, goal: Cell, path: Option<&'a Path>) -> GridView<'a> {
        self.start = Some(start);
        self.goal = Some(goal);
        self.path = path;
        self
    }

    fn symbol(&self, cell: &Cell) -> char {
        if self.config.is_blocked(cell) {
            '#'
        } else if self.start == Some(*cell) {
            'S'
        } else if self.goal == Some(*cell) {
            'G'
        } else if self.path.map_or(false, |p| p.contains(cell)) {
            '*'
        } else {
            '.'
        }
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.config.rows() as i32 {
            let line: String = (0..self.config.cols() as i32)
                .map(|col| self.symbol(&Cell::new(row, col)))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
