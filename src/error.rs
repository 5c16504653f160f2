//! Error types for the rules engine

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    #[error("square ({row}, {col}) is outside the board")]
    OutOfRange { row: i32, col: i32 },

    #[error("no piece to move")]
    InvalidPieceReference,

    /// A straight-line walk stepped off the board, which means the caller
    /// asked for a path that is neither straight nor diagonal.
    #[error("path walk left the board at ({row}, {col})")]
    PathLeftBoard { row: i32, col: i32 },
}

pub type Result<T> = std::result::Result<T, RulesError>;
