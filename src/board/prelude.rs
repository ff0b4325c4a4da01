//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use jumpover_chess::board::prelude::*;
//! ```

pub use super::{
    generate_moves, is_within_bounds, Archetype, Board, BoardBuilder, Coordinate, CoordinateError,
    MoveError, MoveList, Occupancy, Piece, PieceKind,
};
