//! Occupancy snapshot.

use std::collections::hash_set;
use std::collections::HashSet;

use super::Coordinate;

/// Squares held by any piece at the moment moves are generated.
///
/// Membership is by value: `Coordinate` derives `Eq` and `Hash` together, so
/// two coordinates with the same components are the same member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    squares: HashSet<Coordinate>,
}

impl Occupancy {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Occupancy {
            squares: HashSet::new(),
        }
    }

    /// Mark a square as held. Returns false if it was already held.
    pub fn insert(&mut self, c: Coordinate) -> bool {
        self.squares.insert(c)
    }

    /// Returns true if `c` is held by some piece.
    #[inline]
    #[must_use]
    pub fn contains(&self, c: Coordinate) -> bool {
        self.squares.contains(&c)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Coordinate> {
        self.squares.iter()
    }
}

impl FromIterator<Coordinate> for Occupancy {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Occupancy {
            squares: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coordinate> for Occupancy {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.squares.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Occupancy {
    type Item = &'a Coordinate;
    type IntoIter = hash_set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}
