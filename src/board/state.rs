use std::fmt;

use super::movegen::generate_moves;
use super::{Coordinate, CoordinateError, MoveError, MoveList, Occupancy, PieceKind};

/// A piece on the board: a fixed kind at a mutable position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    position: Coordinate,
}

impl Piece {
    /// Create a piece, rejecting off-board positions.
    pub fn new(kind: PieceKind, position: Coordinate) -> Result<Self, CoordinateError> {
        if !position.is_within_bounds() {
            return Err(CoordinateError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        Ok(Piece { kind, position })
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Overwrite the position. The caller is responsible for passing a
    /// square taken from [`Piece::valid_moves`] or otherwise on the board.
    #[inline]
    pub fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    /// Legal destinations given the squares held by all pieces.
    #[must_use]
    pub fn valid_moves(&self, occupied: &Occupancy) -> MoveList {
        generate_moves(self.position, self.kind.archetype(), occupied)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

/// Ordered inventory of the pieces in play.
///
/// Pieces never inspect each other; every interaction goes through the
/// occupancy snapshot built by [`Board::occupancy`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: Vec<Piece>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Board { pieces: Vec::new() }
    }

    /// Two knights, two bishops and two queens.
    #[must_use]
    pub fn standard_setup() -> Self {
        Board::from_roster(&[
            (PieceKind::Knight, 2, 1),
            (PieceKind::Knight, 7, 1),
            (PieceKind::Bishop, 3, 1),
            (PieceKind::Bishop, 6, 1),
            (PieceKind::Queen, 4, 1),
            (PieceKind::Queen, 5, 8),
        ])
    }

    /// Board from a fixed roster of on-board squares.
    pub(crate) fn from_roster(roster: &[(PieceKind, i32, i32)]) -> Self {
        let pieces = roster
            .iter()
            .map(|&(kind, x, y)| {
                let position = Coordinate::new(x, y);
                debug_assert!(position.is_within_bounds(), "roster square {position} off board");
                Piece { kind, position }
            })
            .collect();
        Board { pieces }
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The piece standing on `c`, if any.
    #[must_use]
    pub fn piece_at(&self, c: Coordinate) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position == c)
    }

    /// Fresh snapshot of every held square.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.pieces.iter().map(Piece::position).collect()
    }

    /// Legal destinations for the piece at `index`.
    #[must_use]
    pub fn valid_moves_for(&self, index: usize) -> Option<MoveList> {
        let occupied = self.occupancy();
        self.pieces.get(index).map(|p| p.valid_moves(&occupied))
    }

    /// Indices of pieces with at least one legal destination.
    #[must_use]
    pub fn movable_pieces(&self) -> Vec<usize> {
        let occupied = self.occupancy();
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.valid_moves(&occupied).is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Move the piece at `index` to `to`, returning its previous position.
    ///
    /// Only the landing square is checked; reachability is the caller's
    /// concern (it normally picks `to` from the piece's valid moves).
    pub fn apply_move(&mut self, index: usize, to: Coordinate) -> Result<Coordinate, MoveError> {
        if index >= self.pieces.len() {
            return Err(MoveError::UnknownPiece { index });
        }
        if !to.is_within_bounds() {
            return Err(MoveError::OffBoard { to });
        }
        if self.piece_at(to).is_some() {
            return Err(MoveError::Occupied { to });
        }
        let piece = &mut self.pieces[index];
        let from = piece.position;
        piece.set_position(to);
        Ok(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_rejects_off_board_position() {
        let err = Piece::new(PieceKind::Knight, Coordinate::new(0, 5)).unwrap_err();
        assert_eq!(err, CoordinateError::OutOfBounds { x: 0, y: 5 });
    }

    #[test]
    fn test_set_position_changes_moves() {
        let mut knight = Piece::new(PieceKind::Knight, Coordinate::new(3, 3)).unwrap();
        assert_eq!(knight.position(), Coordinate::new(3, 3));

        knight.set_position(Coordinate::new(5, 5));
        assert_eq!(knight.position(), Coordinate::new(5, 5));

        let moves = knight.valid_moves(&Occupancy::new());
        assert!(moves.contains(Coordinate::new(6, 7)));
        assert!(moves.contains(Coordinate::new(7, 6)));
        assert!(!moves.contains(Coordinate::new(4, 5)));
    }

    #[test]
    fn test_standard_setup_occupancy() {
        let board = Board::standard_setup();
        assert_eq!(board.len(), 6);
        let occ = board.occupancy();
        assert_eq!(occ.len(), 6);
        assert!(occ.contains(Coordinate::new(5, 8)));
        assert_eq!(
            board.piece_at(Coordinate::new(4, 1)).map(Piece::kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn test_apply_move_errors() {
        let mut board = Board::standard_setup();
        assert_eq!(
            board.apply_move(6, Coordinate::new(4, 4)),
            Err(MoveError::UnknownPiece { index: 6 })
        );
        assert_eq!(
            board.apply_move(0, Coordinate::new(2, 9)),
            Err(MoveError::OffBoard {
                to: Coordinate::new(2, 9)
            })
        );
        assert_eq!(
            board.apply_move(0, Coordinate::new(3, 1)),
            Err(MoveError::Occupied {
                to: Coordinate::new(3, 1)
            })
        );
    }

    #[test]
    fn test_apply_move_returns_origin() {
        let mut board = Board::standard_setup();
        let from = board.apply_move(0, Coordinate::new(3, 3)).unwrap();
        assert_eq!(from, Coordinate::new(2, 1));
        assert_eq!(board.pieces()[0].position(), Coordinate::new(3, 3));
        assert!(!board.occupancy().contains(Coordinate::new(2, 1)));
    }

    #[test]
    fn test_movable_pieces_on_standard_setup() {
        let board = Board::standard_setup();
        assert_eq!(board.movable_pieces(), vec![0, 1, 2, 3, 4, 5]);
        assert!(Board::empty().movable_pieces().is_empty());
    }

    #[test]
    fn test_valid_moves_for_index() {
        let board = Board::standard_setup();
        let moves = board.valid_moves_for(0).unwrap();
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(Coordinate::new(3, 3)));
        assert!(moves.contains(Coordinate::new(4, 2)));
        assert!(moves.contains(Coordinate::new(1, 3)));
        assert!(board.valid_moves_for(6).is_none());
        assert!(Board::empty().valid_moves_for(0).is_none());
    }

    #[test]
    fn test_display() {
        let piece = Piece::new(PieceKind::Bishop, Coordinate::new(3, 1)).unwrap();
        assert_eq!(piece.to_string(), "Bishop at (3, 1)");
    }
}
