use super::super::{Coordinate, MoveList, Occupancy, Vector, BOARD_SIZE};

/// Destinations along each direction, walking outward until the board edge.
///
/// Per step the bounds check runs before the occupancy check. Leaving the
/// board ends the direction; a held square is skipped but the walk goes on,
/// so squares beyond an obstruction stay reachable.
#[must_use]
pub fn slider_moves(origin: Coordinate, directions: &[Vector], occupied: &Occupancy) -> MoveList {
    let mut moves = MoveList::new();
    for &dir in directions {
        for step in 1..=BOARD_SIZE {
            let Some(to) = origin.checked_step(dir, step) else {
                break;
            };
            if !to.is_within_bounds() {
                break;
            }
            if occupied.contains(to) {
                continue;
            }
            moves.push(to);
        }
    }
    moves
}
