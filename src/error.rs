//! Error types for board construction, input parsing, and stone placement.
//!
//! Every error leaves the board it came from untouched.

use std::fmt;

use crate::grid::{Color, Point};

/// Input that could not be turned into a board, a point, or a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Board size must be at least 1
    InvalidSize(usize),
    /// Color is not a stone (Empty was given as a move color)
    NotAStone(Color),
    /// Raw color code outside {-1, 0, 1}
    InvalidColorCode(i8),
    /// Point lies outside the board
    OutOfBounds { point: Point, size: usize },
    /// Text could not be parsed
    Unparseable(String),
    /// A diagram contains a group with no liberties
    DeadGroup(Point),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidSize(size) => write!(f, "invalid board size {size}"),
            InputError::NotAStone(color) => write!(f, "{color} is not a stone color"),
            InputError::InvalidColorCode(raw) => write!(f, "invalid color code {raw}"),
            InputError::OutOfBounds { point, size } => write!(
                f,
                "point ({}, {}) is outside the {size}x{size} board",
                point.0, point.1
            ),
            InputError::Unparseable(text) => write!(f, "cannot parse '{text}'"),
            InputError::DeadGroup(point) => write!(
                f,
                "group at ({}, {}) has no liberties",
                point.0, point.1
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Reason a placement was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Color is not Black/White, or the point is off the board
    InvalidInput(InputError),
    /// Point is not empty
    OccupiedPosition(Point),
    /// Move would leave its own group without liberties and captures nothing
    SuicideMove(Point),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidInput(err) => write!(f, "Illegal move: {err}"),
            PlacementError::OccupiedPosition(pt) => {
                write!(f, "Illegal move: point ({}, {}) not EMPTY", pt.0, pt.1)
            }
            PlacementError::SuicideMove(pt) => {
                write!(f, "Illegal move: suicide at ({}, {})", pt.0, pt.1)
            }
        }
    }
}

impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlacementError::InvalidInput(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InputError> for PlacementError {
    fn from(err: InputError) -> Self {
        PlacementError::InvalidInput(err)
    }
}
