use serde::Deserialize;

use jumpover_chess::board::{Coordinate, Occupancy, Piece, PieceKind};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    kind: char,
    origin: (i32, i32),
    occupied: Vec<(i32, i32)>,
    count: usize,
    includes: Vec<(i32, i32)>,
    excludes: Vec<(i32, i32)>,
}

fn coord((x, y): (i32, i32)) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");
    assert!(!set.scenarios.is_empty());

    for s in &set.scenarios {
        let kind = PieceKind::from_char(s.kind).expect("unknown piece kind");
        let piece = Piece::new(kind, coord(s.origin)).expect("origin off board");
        let occupied: Occupancy = s.occupied.iter().copied().map(coord).collect();
        let moves = piece.valid_moves(&occupied);

        assert_eq!(moves.len(), s.count, "wrong count for '{}'", s.name);
        for &sq in &s.includes {
            assert!(moves.contains(coord(sq)), "'{}' should reach {:?}", s.name, sq);
        }
        for &sq in &s.excludes {
            assert!(!moves.contains(coord(sq)), "'{}' should not reach {:?}", s.name, sq);
        }
    }
}
