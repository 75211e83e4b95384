//! Error types for the simulators

use qudd_core::CircuitError;
use qudd_engine::EngineError;
use thiserror::Error;

/// Errors observable at the simulator API surface
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulatorError {
    /// Requested rounding precision outside `0..=10`
    #[error("invalid precision {0}: decimals must be in 0..=10")]
    InvalidPrecision(u8),

    /// A sampling request with no shots
    #[error("invalid shot count {0}: at least one shot is required")]
    InvalidShots(u64),

    /// The state edge carries zero weight
    #[error("zero-weight state edge")]
    ZeroEdge,

    /// The state edge points directly at the terminal
    #[error("state edge points at the terminal")]
    TerminalEdge,

    /// A circuit-level validation error
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// An engine-table error
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;
