//! Configuration errors
//!
//! The simulation itself is total; only building an engine can fail.

use thiserror::Error;

/// Errors raised while validating tuning or level data
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Tuning JSON could not be parsed
    #[error("tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A level pattern has no rows or no columns
    #[error("level pattern {level} is empty")]
    EmptyPattern { level: usize },

    /// A level pattern row differs in length from the first row
    #[error("level pattern {level}: row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        level: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A level pattern cell is not 0 (empty), 1 (brick) or 2 (obstacle)
    #[error("level pattern {level}: unknown cell value {value} at ({row}, {col})")]
    UnknownCell {
        level: usize,
        row: usize,
        col: usize,
        value: u8,
    },

    /// A level pattern has no destructible bricks and could never be cleared
    #[error("level pattern {level} contains no bricks")]
    NoBricks { level: usize },

    /// No level patterns configured
    #[error("no level patterns configured")]
    NoLevels,

    /// A tuning value is out of range
    #[error("invalid tuning value `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },
}
