//! Request validation performed before any search is started.
use core::fmt;
use log::debug;

use crate::cell::Cell;
use crate::config::GridConfig;

/// How a front end should present a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Reasons a route request is refused before searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The cell lies outside the grid.
    OutOfBounds(Cell),
    /// Start and goal are the same cell.
    SameCell,
    /// The cell is an obstacle.
    BlockedCell(Cell),
}

impl Rejection {
    /// Short identifier for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OutOfBounds(_) => "OUT_OF_BOUNDS",
            Self::SameCell => "SAME_CELL",
            Self::BlockedCell(_) => "BLOCKED_CELL",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::SameCell => Severity::Warning,
            Self::OutOfBounds(_) | Self::BlockedCell(_) => Severity::Error,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(cell) => write!(f, "{} lies outside the grid", cell),
            Self::SameCell => write!(f, "Start and goal are the same cell"),
            Self::BlockedCell(cell) => write!(f, "{} is inside an obstacle", cell),
        }
    }
}

impl std::error::Error for Rejection {}

/// Checks start and goal against a [GridConfig]. Bounds are checked first, then equality, then
/// obstacles; start is checked before goal.
#[derive(Clone, Copy, Debug)]
pub struct RequestValidator<'a> {
    config: &'a GridConfig,
}

impl<'a> RequestValidator<'a> {
    pub fn new(config: &'a GridConfig) -> RequestValidator<'a> {
        RequestValidator { config }
    }

    pub fn validate(&self, start: Cell, goal: Cell) -> Result<(), Rejection> {
        let result = self.check(start, goal);
        if let Err(rejection) = &result {
            debug!("Rejected {} -> {}: {}", start, goal, rejection.code());
        }
        result
    }

    fn check(&self, start: Cell, goal: Cell) -> Result<(), Rejection> {
        for cell in [start, goal] {
            if !self.config.in_bounds(&cell) {
                return Err(Rejection::OutOfBounds(cell));
            }
        }
        if start == goal {
            return Err(Rejection::SameCell);
        }
        for cell in [start, goal] {
            if self.config.is_blocked(&cell) {
                return Err(Rejection::BlockedCell(cell));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_free_cells() {
        let config = GridConfig::reference();
        let validator = RequestValidator::new(&config);
        assert_eq!(validator.validate(Cell::new(0, 0), Cell::new(9, 9)), Ok(()));
    }

    #[test]
    fn same_cell_is_a_warning() {
        let config = GridConfig::reference();
        let validator = RequestValidator::new(&config);
        let rejection = validator
            .validate(Cell::new(2, 2), Cell::new(2, 2))
            .unwrap_err();
        assert_eq!(rejection, Rejection::SameCell);
        assert_eq!(rejection.severity(), Severity::Warning);
    }

    #[test]
    fn blocked_start_or_goal() {
        let config = GridConfig::reference();
        let validator = RequestValidator::new(&config);
        assert_eq!(
            validator.validate(Cell::new(3, 3), Cell::new(9, 9)),
            Err(Rejection::BlockedCell(Cell::new(3, 3)))
        );
        assert_eq!(
            validator.validate(Cell::new(0, 0), Cell::new(6, 8)),
            Err(Rejection::BlockedCell(Cell::new(6, 8)))
        );
        // Same cell takes precedence over the obstacle check.
        assert_eq!(
            validator.validate(Cell::new(3, 3), Cell::new(3, 3)),
            Err(Rejection::SameCell)
        );
    }

    #[test]
    fn bounds_are_rechecked() {
        let config = GridConfig::reference();
        let validator = RequestValidator::new(&config);
        let rejection = validator
            .validate(Cell::new(10, 10), Cell::new(10, 10))
            .unwrap_err();
        assert_eq!(rejection, Rejection::OutOfBounds(Cell::new(10, 10)));
        assert_eq!(rejection.severity(), Severity::Error);
        assert_eq!(
            validator.validate(Cell::new(0, 0), Cell::new(0, -1)),
            Err(Rejection::OutOfBounds(Cell::new(0, -1)))
        );
        assert_eq!(rejection.to_string(), "(10, 10) lies outside the grid");
    }
}
