//! Error types for the quiz engine.
//!
//! Question generation itself never fails; these cover the edges where
//! outside input enters: typed answers, hand-built questions, and config.

use thiserror::Error;

/// Why a typed answer could not be graded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("answer is empty")]
    Empty,
    #[error("answer {0:?} is not a whole number")]
    NotANumber(String),
}

/// Why a hand-built question was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("{operand1} - {operand2} would be negative")]
    NegativeDifference { operand1: i64, operand2: i64 },
    #[error("division by zero")]
    DivisionByZero,
    #[error("{operand1} is not divisible by {operand2}")]
    InexactDivision { operand1: i64, operand2: i64 },
    #[error("answer does not fit in an i64")]
    Overflow,
}

/// Errors raised while loading a [`QuizConfig`](crate::QuizConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("stars_per_celebration must be between 1 and {max}, got {got}")]
    InvalidStarCount { got: usize, max: usize },
    #[error("celebration_ttl_ms must be between 1 and {max}, got {got}")]
    InvalidTtl { got: i64, max: i64 },
}
