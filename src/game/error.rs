//! Error types for game configuration.

use std::fmt;

/// Error type for applying a configuration option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The option name is not recognised
    UnknownOption { name: String },
    /// The option requires a value and none was given
    MissingValue { name: String },
    /// The value could not be parsed for this option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::MissingValue { name } => write!(f, "Option '{name}' requires a value"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
