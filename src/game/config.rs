//! Game configuration.
//!
//! Options are applied one at a time by name, the same way for command-line
//! flags and for programmatic use.

use std::str::FromStr;

use log::LevelFilter;

use super::ConfigError;

pub const DEFAULT_TURNS: usize = 10;
pub const DEFAULT_ATTEMPT_FACTOR: usize = 3;

/// Which roster to play with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// A lone knight wandering an empty board
    Simple,
    /// The standard six-piece roster
    Complex,
}

impl FromStr for GameMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(GameMode::Simple),
            "complex" => Ok(GameMode::Complex),
            _ => Err(()),
        }
    }
}

/// How the piece to move is picked each turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PiecePolicy {
    /// Choose among pieces that have at least one legal move.
    Movable,
    /// Choose among all pieces, retrying up to `pieces * attempt_factor`
    /// times until one with a legal move comes up.
    Retry { attempt_factor: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub turns: usize,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub policy: PiecePolicy,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::Complex,
            turns: DEFAULT_TURNS,
            seed: None,
            policy: PiecePolicy::Movable,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Apply a single named option.
    ///
    /// Names are case-insensitive; `-` and `_` are interchangeable.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        let require = || {
            value.ok_or_else(|| ConfigError::MissingValue {
                name: normalized.clone(),
            })
        };
        let invalid = |v: &str| ConfigError::InvalidValue {
            name: normalized.clone(),
            value: v.to_string(),
        };

        match normalized.as_str() {
            "mode" => {
                let v = require()?;
                self.mode = v.parse().map_err(|()| invalid(v))?;
            }
            "turns" => {
                let v = require()?;
                self.turns = v.trim().parse().map_err(|_| invalid(v))?;
            }
            "seed" => {
                let v = require()?;
                self.seed = Some(v.trim().parse().map_err(|_| invalid(v))?);
            }
            "policy" => {
                let v = require()?;
                self.policy = match v.trim().to_ascii_lowercase().as_str() {
                    "movable" => PiecePolicy::Movable,
                    "retry" => PiecePolicy::Retry {
                        attempt_factor: DEFAULT_ATTEMPT_FACTOR,
                    },
                    _ => return Err(invalid(v)),
                };
            }
            "attempt-factor" => {
                let v = require()?;
                let factor: usize = v.trim().parse().map_err(|_| invalid(v))?;
                if factor == 0 {
                    return Err(invalid(v));
                }
                self.policy = PiecePolicy::Retry {
                    attempt_factor: factor,
                };
            }
            "log-level" => {
                let v = require()?;
                self.log_level = v.trim().parse().map_err(|_| invalid(v))?;
            }
            _ => return Err(ConfigError::UnknownOption { name: normalized }),
        }
        Ok(())
    }

    /// Build a configuration from `--name value` pairs.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            let Some(name) = arg.strip_prefix("--") else {
                return Err(ConfigError::UnknownOption {
                    name: arg.to_string(),
                });
            };
            match name.split_once('=') {
                Some((name, value)) => config.apply_option(name, Some(value))?,
                None => {
                    let value = args.next();
                    let value: Option<&str> = value.as_ref().map(|v| v.as_ref());
                    config.apply_option(name, value)?;
                }
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GameMode::Complex);
        assert_eq!(config.turns, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.policy, PiecePolicy::Movable);
    }

    #[test]
    fn test_from_args() {
        let config = GameConfig::from_args([
            "--mode",
            "simple",
            "--turns=25",
            "--seed",
            "42",
            "--log_level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.mode, GameMode::Simple);
        assert_eq!(config.turns, 25);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_policy_options() {
        let mut config = GameConfig::default();
        config.apply_option("Policy", Some("retry")).unwrap();
        assert_eq!(config.policy, PiecePolicy::Retry { attempt_factor: 3 });
        config.apply_option("attempt-factor", Some("5")).unwrap();
        assert_eq!(config.policy, PiecePolicy::Retry { attempt_factor: 5 });
        assert!(config.apply_option("attempt-factor", Some("0")).is_err());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            GameConfig::from_args(["--speed", "fast"]),
            Err(ConfigError::UnknownOption {
                name: "speed".to_string()
            })
        );
        assert_eq!(
            GameConfig::from_args(["--turns"]),
            Err(ConfigError::MissingValue {
                name: "turns".to_string()
            })
        );
        assert_eq!(
            GameConfig::from_args(["--mode", "blitz"]),
            Err(ConfigError::InvalidValue {
                name: "mode".to_string(),
                value: "blitz".to_string()
            })
        );
        assert!(GameConfig::from_args(["turns"]).is_err());
    }
}
