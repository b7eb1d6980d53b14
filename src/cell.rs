use core::fmt;
use smallvec::{smallvec, SmallVec};

use crate::N_SMALLVEC_SIZE;

/// A (row, column) coordinate on the grid. Coordinates are signed so that requests falling
/// outside the grid can still be represented and rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The 4-neighbourhood in the fixed order up, down, left, right. Bounds are not checked.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        smallvec![
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row, self.col - 1),
            Cell::new(self.row, self.col + 1),
        ]
    }

    /// Whether the two cells differ by exactly one in exactly one coordinate.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
