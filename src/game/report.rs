//! Human-readable game reports.

use std::fmt;

use super::{GameSummary, TurnOutcome};
use crate::board::Board;

/// Numbered roster lines, e.g. `  1. Knight at (2, 1)`.
#[must_use]
pub fn board_report(board: &Board) -> String {
    let mut out = String::new();
    for (i, piece) in board.pieces().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, piece));
    }
    out
}

pub fn print_board(board: &Board) {
    println!("Current board state:");
    print!("{}", board_report(board));
}

/// Per-turn report followed by the completion line, one block per turn.
#[must_use]
pub fn summary_report(summary: &GameSummary) -> String {
    let mut out = String::new();
    for outcome in &summary.outcomes {
        out.push_str(&format!("=== Move {} ===\n{outcome}\n", outcome.turn()));
        if let TurnOutcome::Moved { options, .. } = outcome {
            out.push_str(&format!("Valid moves available: {options}\n"));
        }
    }
    out.push_str(&format!(
        "=== Game Complete: {} moves, {} skipped ===\n",
        summary.moves_made(),
        summary.turns_skipped()
    ));
    out
}

pub fn print_summary(summary: &GameSummary) {
    print!("{}", summary_report(summary));
    print_board(&summary.board);
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnOutcome::Moved { kind, from, to, .. } => {
                write!(f, "{kind} moved from {from} to {to}")
            }
            TurnOutcome::Skipped { .. } => {
                write!(f, "No valid moves available for any piece. Skipping turn.")
            }
        }
    }
}
