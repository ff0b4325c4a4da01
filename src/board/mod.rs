//! Board representation and move generation.
//!
//! Pieces may pass over occupied squares but never land on one. Sliding
//! pieces walk each direction to the board edge and skip held squares;
//! leaping pieces make one bounded jump per offset.
//!
//! # Example
//! ```
//! use jumpover_chess::board::{Coordinate, Occupancy, Piece, PieceKind};
//!
//! let queen = Piece::new(PieceKind::Queen, Coordinate::new(4, 4)).unwrap();
//! let occupied: Occupancy = [Coordinate::new(6, 4)].into_iter().collect();
//! let moves = queen.valid_moves(&occupied);
//! assert!(!moves.contains(Coordinate::new(6, 4)));
//! assert!(moves.contains(Coordinate::new(7, 4)));
//! ```

mod builder;
mod error;
pub mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{CoordinateError, MoveError};
pub use movegen::{generate_moves, leaper_moves, slider_moves};
pub use state::{Board, Piece};
pub use types::{
    is_within_bounds, Archetype, Coordinate, MoveList, Occupancy, PieceKind, Vector, BOARD_SIZE,
    DIAGONALS, KNIGHT_OFFSETS, MIN_COORD, ORTHOGONALS, QUEEN_DIRECTIONS,
};
