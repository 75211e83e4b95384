//! Error types for the engine tables

use thiserror::Error;

/// Errors observable at the engine API surface
///
/// Internal invariant violations (failed normalization, rank mismatches) are
/// programming errors and panic instead of surfacing here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Division by the interned zero
    #[error("division by zero")]
    DivByZero,

    /// An operation over an empty operand list
    #[error("empty input")]
    EmptyInput,

    /// A complex index outside the table
    #[error("invalid complex index {index}: table has {len} entries")]
    InvalidIndex { index: usize, len: usize },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
