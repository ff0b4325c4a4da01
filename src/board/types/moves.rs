//! Destination list returned by move generation.

use std::ops::Index;

use super::Coordinate;

/// Most destinations any built-in piece can have (a centralised queen).
pub(crate) const MAX_MOVES: usize = 27;

/// Ordered list of destination squares.
///
/// Order follows the generating table: offsets in table order for leapers,
/// then increasing step within each direction for sliders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Coordinate>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    pub(crate) fn push(&mut self, to: Coordinate) {
        self.moves.push(to);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, c: Coordinate) -> bool {
        self.moves.contains(&c)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Coordinate> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Coordinate> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Coordinate> for MoveList {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Coordinate;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}
