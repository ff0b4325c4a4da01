//! Piece kinds and their movement tables.

use std::fmt;

use super::Vector;

/// Knight jumps, in generation order.
pub const KNIGHT_OFFSETS: [Vector; 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Diagonal rays.
pub const DIAGONALS: [Vector; 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Horizontal and vertical rays.
pub const ORTHOGONALS: [Vector; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonals followed by orthogonals.
pub const QUEEN_DIRECTIONS: [Vector; 8] = [
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// How a piece moves: a single bounded jump per offset, or a walk along each
/// direction until the board edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Archetype {
    Leaper(&'static [Vector]),
    Slider(&'static [Vector]),
}

impl Archetype {
    /// The offset or direction table.
    #[inline]
    #[must_use]
    pub const fn vectors(self) -> &'static [Vector] {
        match self {
            Archetype::Leaper(v) | Archetype::Slider(v) => v,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, Archetype::Slider(_))
    }
}

/// Piece kinds that take part in a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Knight,
    Bishop,
    Queen,
}

impl PieceKind {
    pub const ALL: [PieceKind; 3] = [PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen];

    /// The movement table for this kind. This is the only per-kind variation.
    #[inline]
    #[must_use]
    pub const fn archetype(self) -> Archetype {
        match self {
            PieceKind::Knight => Archetype::Leaper(&KNIGHT_OFFSETS),
            PieceKind::Bishop => Archetype::Slider(&DIAGONALS),
            PieceKind::Queen => Archetype::Slider(&QUEEN_DIRECTIONS),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
        }
    }

    /// Parse from a character (n, b, q), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queen_is_diagonals_then_orthogonals() {
        assert_eq!(&QUEEN_DIRECTIONS[..4], &DIAGONALS[..]);
        assert_eq!(&QUEEN_DIRECTIONS[4..], &ORTHOGONALS[..]);
    }

    #[test]
    fn test_knight_offsets_are_l_shaped() {
        for (dx, dy) in KNIGHT_OFFSETS {
            let (ax, ay) = (dx.abs(), dy.abs());
            assert!((ax, ay) == (1, 2) || (ax, ay) == (2, 1));
        }
    }

    #[test]
    fn test_archetypes() {
        assert!(!PieceKind::Knight.archetype().is_slider());
        assert!(PieceKind::Bishop.archetype().is_slider());
        assert_eq!(PieceKind::Queen.archetype().vectors().len(), 8);
    }

    #[test]
    fn test_char_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.to_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('K'), None);
    }
}
