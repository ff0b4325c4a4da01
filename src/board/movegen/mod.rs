//! Move generation under the jump-over rule.
//!
//! Both generators are pure functions of an origin, a vector table and an
//! occupancy snapshot. The origin is expected to be on the board; `Piece`
//! enforces this at construction. An off-board origin still produces a list,
//! but the geometry relative to it is meaningless.

mod leapers;
mod sliders;

pub use leapers::leaper_moves;
pub use sliders::slider_moves;

use super::{Archetype, Coordinate, MoveList, Occupancy};

/// Generate destinations for `archetype` from `origin`.
#[must_use]
pub fn generate_moves(origin: Coordinate, archetype: Archetype, occupied: &Occupancy) -> MoveList {
    match archetype {
        Archetype::Leaper(offsets) => leaper_moves(origin, offsets, occupied),
        Archetype::Slider(directions) => slider_moves(origin, directions, occupied),
    }
}
