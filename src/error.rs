//! Error types for the statistics boundary

use thiserror::Error;

/// Errors surfaced before the counting kernel runs.
///
/// Data-dependent conditions (zero denominators, excluded samples, empty
/// label subsets) never error; they are absorbed into
/// [`MetricValue`](crate::MetricValue). Only structural misuse is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// `y_true` and `y_pred` differ in length
    #[error("y_true and y_pred must be same shape: {0} vs {1}")]
    ShapeMismatch(usize, usize),

    /// Both sequences empty and no explicit labels given
    #[error("cannot infer labels from empty input")]
    EmptyInput,

    /// Explicit label list contains a repeated value
    #[error("duplicate label in explicit label list")]
    DuplicateLabel,

    /// String outside the enumerated policy set
    #[error("invalid policy value: {0}")]
    InvalidPolicy(String),
}

/// Result type for statistics operations
pub type Result<T> = std::result::Result<T, StatsError>;
