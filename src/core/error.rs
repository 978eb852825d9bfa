//! Error types for board operations.
//!
//! Every fallible engine operation returns [`Result`]. Selection is the one
//! exception: `select`/`deselect` report rejection as `false` because a soft
//! hold carries no durable consequence.

use std::path::PathBuf;

use super::ids::BoardId;
use crate::board::CellCoord;
use crate::lifecycle::BoardStatus;

/// Errors raised by the board engine.
#[derive(Debug, thiserror::Error)]
pub enum SquaresError {
    /// Header digits are malformed, or a shape/layout parameter is invalid.
    #[error("invalid shape configuration: {0}")]
    InvalidShapeConfiguration(String),

    /// A claim or selection was attempted outside `Open`.
    #[error("board is not open for claims (status: {status})")]
    BoardNotOpen { status: BoardStatus },

    /// The cell already has an owner.
    #[error("cell {cell} is already claimed")]
    AlreadyClaimed { cell: CellCoord },

    /// A lifecycle transition out of order.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: BoardStatus, to: BoardStatus },

    /// Payout fractions are negative, non-finite, or sum above 100%.
    #[error("invalid payout schedule: {0}")]
    InvalidPayoutSchedule(String),

    #[error("cell {cell} is outside the board")]
    CellOutOfRange { cell: CellCoord },

    #[error("claimant identity is missing")]
    MissingClaimant,

    #[error("header digits have already been drawn")]
    HeadersAlreadyDrawn,

    #[error("header digits have not been drawn yet")]
    HeadersNotDrawn,

    /// Winner resolution attempted before locking or after completion.
    #[error("winner resolution is not permitted while {status}")]
    ResolutionNotPermitted { status: BoardStatus },

    #[error("scoring period {period} is outside the schedule ({period_count} periods)")]
    PeriodOutOfRange { period: u8, period_count: usize },

    /// The period was already resolved with a different score.
    #[error("period {period} already resolved with score {home}-{away}")]
    PeriodAlreadyResolved { period: u8, home: u32, away: u32 },

    #[error("final period has not been resolved")]
    FinalPeriodUnresolved,

    #[error("pot total overflows 64-bit minor units")]
    PotOverflow,

    #[error("board {0} not found")]
    BoardNotFound(BoardId),

    /// A write carried an older version than the stored board.
    #[error("board {id} is stale (stored version {stored}, incoming {incoming})")]
    StaleBoard { id: BoardId, stored: u64, incoming: u64 },

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
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

    #[error("validation error: {0}")]
    Validation(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, SquaresError>;

impl From<bincode::Error> for SquaresError {
    fn from(err: bincode::Error) -> Self {
        SquaresError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SquaresError::AlreadyClaimed {
            cell: CellCoord::new(3, 5),
        };
        assert_eq!(err.to_string(), "cell (3, 5) is already claimed");

        let err = SquaresError::InvalidTransition {
            from: BoardStatus::Completed,
            to: BoardStatus::Open,
        };
        assert_eq!(err.to_string(), "invalid transition from Completed to Open");
    }

    #[test]
    fn test_config_error_converts() {
        let err: SquaresError = ConfigError::Validation("bad".into()).into();
        assert!(matches!(err, SquaresError::Config(ConfigError::Validation(_))));
    }
}
