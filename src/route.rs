//! The single operation a front end needs: validate a request, then search.
use log::{debug, info};

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::path::Path;
use crate::pathfinder::PathFinder;
use crate::validator::{Rejection, RequestValidator, Severity};

/// Result of a route request as presented to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    PathFound { steps: Path },
    NoPathFound,
    RejectedSameCell,
    RejectedBlockedCell(Cell),
    RejectedOutOfBounds(Cell),
}

impl RouteOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathFound { steps } => Some(steps),
            _ => None,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::PathFound { .. } => Severity::Success,
            Self::RejectedSameCell => Severity::Warning,
            Self::NoPathFound | Self::RejectedBlockedCell(_) | Self::RejectedOutOfBounds(_) => {
                Severity::Error
            }
        }
    }

    /// The message shown to the operator.
    pub fn message(&self) -> String {
        match self {
            Self::PathFound { steps } => format!("Path found! Total steps: {}", steps.steps()),
            Self::NoPathFound => "No path found.".to_owned(),
            Self::RejectedSameCell => "Start and Goal cannot be the same.".to_owned(),
            Self::RejectedBlockedCell(_) => "Start or Goal is inside an obstacle!".to_owned(),
            Self::RejectedOutOfBounds(_) => "Start or Goal is outside the grid!".to_owned(),
        }
    }
}

impl From<Rejection> for RouteOutcome {
    fn from(rejection: Rejection) -> RouteOutcome {
        match rejection {
            Rejection::OutOfBounds(cell) => RouteOutcome::RejectedOutOfBounds(cell),
            Rejection::SameCell => RouteOutcome::RejectedSameCell,
            Rejection::BlockedCell(cell) => RouteOutcome::RejectedBlockedCell(cell),
        }
    }
}

/// Validates the request and, if it is accepted, searches for a shortest path.
pub fn plan_route(config: &GridConfig, start: Cell, goal: Cell) -> RouteOutcome {
    if let Err(rejection) = RequestValidator::new(config).validate(start, goal) {
        return rejection.into();
    }
    match PathFinder::new(config).find_path(start, goal) {
        Some(steps) => {
            info!("Route {} -> {} takes {} steps", start, goal, steps.steps());
            RouteOutcome::PathFound { steps }
        }
        None => {
            debug!("No route {} -> {}", start, goal);
            RouteOutcome::NoPathFound
        }
    }
}
