//! Fluent builder for constructing piece inventories.
//!
//! # Example
//! ```
//! use jumpover_chess::board::{BoardBuilder, Coordinate, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece(PieceKind::Queen, Coordinate::new(4, 4))
//!     .piece(PieceKind::Knight, Coordinate::new(6, 4))
//!     .build()
//!     .unwrap();
//! assert_eq!(board.len(), 2);
//! ```

use super::{Board, Coordinate, CoordinateError, Piece, PieceKind};

/// A fluent builder for constructing `Board` inventories.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(PieceKind, Coordinate)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Start from the standard six-piece roster.
    #[must_use]
    pub fn standard_setup() -> Self {
        let pieces = Board::standard_setup()
            .pieces()
            .iter()
            .map(|p| (p.kind(), p.position()))
            .collect();
        BoardBuilder { pieces }
    }

    /// Place a piece, replacing anything already on that square.
    #[must_use]
    pub fn piece(mut self, kind: PieceKind, at: Coordinate) -> Self {
        self.pieces.retain(|(_, c)| *c != at);
        self.pieces.push((kind, at));
        self
    }

    /// Remove whatever stands on a square.
    #[must_use]
    pub fn clear(mut self, at: Coordinate) -> Self {
        self.pieces.retain(|(_, c)| *c != at);
        self
    }

    /// Build the board, failing on the first off-board placement.
    pub fn build(self) -> Result<Board, CoordinateError> {
        let pieces = self
            .pieces
            .into_iter()
            .map(|(kind, at)| Piece::new(kind, at))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Board { pieces })
    }
}
