//! Turn loop around the move generator.
//!
//! Each turn takes a fresh occupancy snapshot, picks a piece with at least
//! one legal destination, picks a destination and applies it. The board is
//! the only mutable state and is owned by the `Game`.

mod config;
mod error;
pub mod logger;
mod report;
mod strategy;

use log::{debug, info, warn};

use crate::board::{Board, Coordinate, MoveList, PieceKind};

pub use config::{GameConfig, GameMode, PiecePolicy, DEFAULT_ATTEMPT_FACTOR, DEFAULT_TURNS};
pub use error::ConfigError;
pub use report::{board_report, print_board, print_summary, summary_report};
pub use strategy::{FirstSelection, RandomSelection, SelectionStrategy};

/// Starting square of the lone knight in simple mode.
pub const KNIGHT_WALK_START: Coordinate = Coordinate::new(3, 3);

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved {
        turn: usize,
        index: usize,
        kind: PieceKind,
        from: Coordinate,
        to: Coordinate,
        /// Number of legal destinations the piece had
        options: usize,
    },
    Skipped {
        turn: usize,
    },
}

impl TurnOutcome {
    #[must_use]
    pub const fn turn(&self) -> usize {
        match self {
            TurnOutcome::Moved { turn, .. } | TurnOutcome::Skipped { turn } => *turn,
        }
    }

    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, TurnOutcome::Moved { .. })
    }
}

/// Outcomes of a whole game plus the final position.
#[derive(Clone, Debug)]
pub struct GameSummary {
    pub outcomes: Vec<TurnOutcome>,
    pub board: Board,
}

impl GameSummary {
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_move()).count()
    }

    #[must_use]
    pub fn turns_skipped(&self) -> usize {
        self.outcomes.len() - self.moves_made()
    }
}

/// Board for simple mode: one knight on an otherwise empty board.
#[must_use]
pub fn knight_walk_board() -> Board {
    Board::from_roster(&[(PieceKind::Knight, KNIGHT_WALK_START.x, KNIGHT_WALK_START.y)])
}

/// Board for the given mode.
#[must_use]
pub fn setup_board(mode: GameMode) -> Board {
    match mode {
        GameMode::Simple => knight_walk_board(),
        GameMode::Complex => Board::standard_setup(),
    }
}

pub struct Game<S: SelectionStrategy> {
    board: Board,
    strategy: S,
    policy: PiecePolicy,
    turn: usize,
}

impl<S: SelectionStrategy> Game<S> {
    #[must_use]
    pub fn new(board: Board, strategy: S) -> Self {
        Game {
            board,
            strategy,
            policy: PiecePolicy::Movable,
            turn: 0,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PiecePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Play one turn and report what happened.
    pub fn play_turn(&mut self) -> TurnOutcome {
        self.turn += 1;
        let turn = self.turn;

        let Some((index, moves)) = self.select_piece() else {
            debug!("turn {turn}: no valid moves available for any piece, skipping");
            return TurnOutcome::Skipped { turn };
        };
        let Some(to) = self.strategy.choose_move(&moves) else {
            warn!("turn {turn}: strategy declined to choose a destination, skipping");
            return TurnOutcome::Skipped { turn };
        };

        match self.board.apply_move(index, to) {
            Ok(from) => {
                let kind = self.board.pieces()[index].kind();
                debug!(
                    "turn {turn}: {kind} moved from {from} to {to} ({} options)",
                    moves.len()
                );
                TurnOutcome::Moved {
                    turn,
                    index,
                    kind,
                    from,
                    to,
                    options: moves.len(),
                }
            }
            Err(err) => {
                warn!("turn {turn}: rejected move: {err}");
                TurnOutcome::Skipped { turn }
            }
        }
    }

    /// Play `turns` turns.
    pub fn play(mut self, turns: usize) -> GameSummary {
        info!("game setup complete with {} pieces", self.board.len());
        let outcomes: Vec<TurnOutcome> = (0..turns).map(|_| self.play_turn()).collect();
        info!("game complete after {} turns", outcomes.len());
        GameSummary {
            outcomes,
            board: self.board,
        }
    }

    /// Choose the piece to move according to the policy, together with its
    /// destinations. `None` means the turn is skipped.
    fn select_piece(&mut self) -> Option<(usize, MoveList)> {
        match self.policy {
            PiecePolicy::Movable => {
                let candidates = self.board.movable_pieces();
                debug!(
                    "turn {}: {} of {} pieces can move",
                    self.turn,
                    candidates.len(),
                    self.board.len()
                );
                let index = self.strategy.choose_piece(&candidates)?;
                let moves = self.board.valid_moves_for(index)?;
                Some((index, moves))
            }
            PiecePolicy::Retry { attempt_factor } => {
                let occupied = self.board.occupancy();
                let all: Vec<usize> = (0..self.board.len()).collect();
                let max_attempts = self.board.len() * attempt_factor;
                for attempt in 1..=max_attempts {
                    let index = self.strategy.choose_piece(&all)?;
                    let moves = self.board.pieces()[index].valid_moves(&occupied);
                    if !moves.is_empty() {
                        debug!("turn {}: found movable piece on attempt {attempt}", self.turn);
                        return Some((index, moves));
                    }
                }
                None
            }
        }
    }
}

/// Build and play a game from a configuration.
pub fn run(config: &GameConfig) -> GameSummary {
    let board = setup_board(config.mode);
    let strategy = match config.seed {
        Some(seed) => RandomSelection::seeded(seed),
        None => RandomSelection::from_entropy(),
    };
    Game::new(board, strategy)
        .with_policy(config.policy)
        .play(config.turns)
}
