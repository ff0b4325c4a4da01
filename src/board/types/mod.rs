//! Core board types.
//!
//! This module contains the value types shared by move generation and the
//! game loop:
//! - `Coordinate` and the bounds check
//! - `Occupancy` - snapshot of held squares
//! - `PieceKind`, `Archetype` and the direction tables
//! - `MoveList` - generated destinations

mod coordinate;
mod moves;
mod occupancy;
mod piece;

pub use coordinate::{is_within_bounds, Coordinate, Vector, BOARD_SIZE, MIN_COORD};
pub use moves::MoveList;
pub use occupancy::Occupancy;
pub use piece::{Archetype, PieceKind, DIAGONALS, KNIGHT_OFFSETS, ORTHOGONALS, QUEEN_DIRECTIONS};
