use core::fmt;
use itertools::Itertools;

use crate::cell::Cell;

/// An ordered route from a start cell to a goal cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Vec<Cell>);

impl Path {
    pub(crate) fn new(cells: Vec<Cell>) -> Path {
        debug_assert!(!cells.is_empty());
        Path(cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn start(&self) -> Cell {
        self.0[0]
    }

    pub fn goal(&self) -> Cell {
        self.0[self.0.len() - 1]
    }

    /// Number of cells, including both endpoints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves needed to follow the path.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.0.contains(cell)
    }

    /// Checks that every consecutive pair of cells is 4-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.0.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }

    pub fn into_inner(self) -> Vec<Cell> {
        self.0
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_and_endpoints() {
        let path = Path::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);
        assert_eq!(path.steps(), 2);
        assert_eq!(path.start(), Cell::new(0, 0));
        assert_eq!(path.goal(), Cell::new(1, 1));
        assert!(path.is_contiguous());
        assert_eq!(path.to_string(), "(0, 0) -> (0, 1) -> (1, 1)");
    }

    #[test]
    fn detects_jumps() {
        let diagonal = Path::new(vec![Cell::new(0, 0), Cell::new(1, 1)]);
        assert!(!diagonal.is_contiguous());
        let single = Path::new(vec![Cell::new(4, 4)]);
        assert!(single.is_contiguous());
        assert_eq!(single.steps(), 0);
    }
}
