use std::path::PathBuf;

use crate::game::GameStatus;

/// Errors returned when a move is attempted that the caller should never have
/// forwarded. A full column is not an error; see [`crate::game::MoveOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("game is over ({status}), start a new game to keep playing")]
    GameOver { status: GameStatus },
}

/// Errors produced when validating board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error("board {axis} must be in 1..={max}, got {value}")]
    OutOfRange {
        axis: &'static str,
        value: i64,
        max: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn {
            column: 9,
            width: 7,
        };
        assert_eq!(err.to_string(), "column 9 is outside the board (width 7)");

        let err = MoveError::GameOver {
            status: GameStatus::Won(Player::Two),
        };
        assert_eq!(
            err.to_string(),
            "game is over (won by Player 2), start a new game to keep playing"
        );
    }

    #[test]
    fn test_dimension_error_display() {
        let err = DimensionError::OutOfRange {
            axis: "width",
            value: -3,
            max: 64,
        };
        assert_eq!(err.to_string(), "board width must be in 1..=64, got -3");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.height must be in 1..=64".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.height must be in 1..=64"
        );
    }
}
