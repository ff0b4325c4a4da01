pub mod board;
pub mod game;

pub use board::{Board, Coordinate, MoveList, Occupancy, Piece, PieceKind};
pub use game::{Game, GameConfig};
