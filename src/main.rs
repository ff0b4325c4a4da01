use std::env;
use std::process::ExitCode;

use jumpover_chess::game::{self, logger, GameConfig, GameMode};

const USAGE: &str = "usage: jumpover_chess [--mode simple|complex] [--turns N] [--seed N] \
[--policy movable|retry] [--attempt-factor N] [--log-level off|error|warn|info|debug|trace]";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config = match GameConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = logger::init(config.log_level) {
        eprintln!("warning: logger not installed: {err}");
    }

    let label = match config.mode {
        GameMode::Simple => "simple",
        GameMode::Complex => "complex",
    };
    println!("Starting {label} game for {} turns", config.turns);
    game::print_board(&game::setup_board(config.mode));

    let summary = game::run(&config);
    game::print_summary(&summary);
    ExitCode::SUCCESS
}
