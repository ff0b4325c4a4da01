//! Error types for board operations.

use std::fmt;

use super::Coordinate;

/// Error type for building or parsing coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Coordinate lies outside the 8x8 board
    OutOfBounds { x: i32, y: i32 },
    /// Text is not of the form `x,y` or `(x, y)`
    InvalidNotation { text: String },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({x}, {y}) is off the board (must be 1-8)")
            }
            CoordinateError::InvalidNotation { text } => {
                write!(f, "Invalid coordinate notation '{text}'")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Error type for applying a move to the piece inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece at this inventory index
    UnknownPiece { index: usize },
    /// Target square is off the board
    OffBoard { to: Coordinate },
    /// Target square is held by another piece
    Occupied { to: Coordinate },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::UnknownPiece { index } => write!(f, "No piece at index {index}"),
            MoveError::OffBoard { to } => write!(f, "Target {to} is off the board"),
            MoveError::Occupied { to } => write!(f, "Target {to} is already occupied"),
        }
    }
}

impl std::error::Error for MoveError {}
