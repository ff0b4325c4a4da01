//! Piece and destination selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Coordinate, MoveList};

/// Chooses which piece moves and where it goes.
pub trait SelectionStrategy {
    /// Pick one of `candidates` (piece indices). `None` if it is empty.
    fn choose_piece(&mut self, candidates: &[usize]) -> Option<usize>;

    /// Pick one destination. `None` if `moves` is empty.
    fn choose_move(&mut self, moves: &MoveList) -> Option<Coordinate>;
}

/// Uniform random choice from an injected RNG.
#[derive(Clone, Debug)]
pub struct RandomSelection<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelection<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        RandomSelection { rng }
    }
}

impl RandomSelection<StdRng> {
    /// Reproducible selection from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomSelection::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        RandomSelection::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SelectionStrategy for RandomSelection<R> {
    fn choose_piece(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.gen_range(0..candidates.len())])
    }

    fn choose_move(&mut self, moves: &MoveList) -> Option<Coordinate> {
        if moves.is_empty() {
            return None;
        }
        moves.get(self.rng.gen_range(0..moves.len()))
    }
}

/// Always takes the first candidate and the first destination.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstSelection;

impl SelectionStrategy for FirstSelection {
    fn choose_piece(&mut self, candidates: &[usize]) -> Option<usize> {
        candidates.first().copied()
    }

    fn choose_move(&mut self, moves: &MoveList) -> Option<Coordinate> {
        moves.first()
    }
}
