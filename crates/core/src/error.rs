//! Error types for the rule engine.
//!
//! Construction problems and programming errors (out-of-range cells, losing a
//! life with none left) are both surfaced as values; callers decide whether a
//! failure is recoverable.

use thiserror::Error;

/// Errors raised by [`crate::Board`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("number of rows and columns must be greater than 0 (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid number of mines: {count} ({available} free cells)")]
    InvalidHazardCount { count: usize, available: usize },
}

/// Errors raised by [`crate::Actor`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    #[error("initial lives must be greater than 0")]
    InvalidLives,

    #[error("no more lives left")]
    NoLivesLeft,
}

/// Errors raised by the rule engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("number of mines must be greater than 0")]
    InvalidMineCount,

    #[error("actor start ({row}, {col}) is outside the board")]
    ActorOutOfBounds { row: usize, col: usize },

    #[error("the session has already ended")]
    SessionEnded,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Actor(#[from] ActorError),
}
