use super::super::{Coordinate, MoveList, Occupancy, Vector};

/// Destinations one jump away along each offset.
///
/// A candidate is dropped if it is off the board or held by any piece. There
/// is no intermediate square to consider, so occupancy elsewhere never
/// matters.
#[must_use]
pub fn leaper_moves(origin: Coordinate, offsets: &[Vector], occupied: &Occupancy) -> MoveList {
    let mut moves = MoveList::new();
    for &offset in offsets {
        let Some(to) = origin.checked_offset(offset) else {
            continue;
        };
        if !to.is_within_bounds() {
            continue;
        }
        if occupied.contains(to) {
            continue;
        }
        moves.push(to);
    }
    moves
}
