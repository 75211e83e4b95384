//! Circuit simulation over QMDDs
//!
//! The simulator compiles an ordered circuit into per-step QMDDs, multiplies
//! them into the running state edge, and exposes the result two ways:
//!
//! - **Strong simulation** — a lazy, deterministic enumeration of every
//!   basis state with a nonzero amplitude ([`Amplitude`], [`AmplitudeIter`])
//! - **Weak simulation** — shot-based sampling by seeded random descent
//!   through the state diagram ([`SampleCounts`])
//!
//! No intermediate statevector is ever materialized.
//!
//! # Example
//!
//! ```
//! use qudd_core::{Circuit, Control, Operation, QubitId};
//! use qudd_gates::{Hadamard, PauliX};
//! use qudd_sim::{Simulator, SimulatorConfig};
//! use std::sync::Arc;
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.push(Operation::single(Arc::new(Hadamard), QubitId::new(0))).unwrap();
//! circuit.push(Operation::controlled(
//!     Arc::new(PauliX),
//!     QubitId::new(1),
//!     vec![Control::new(QubitId::new(0))],
//! ).unwrap()).unwrap();
//!
//! let simulator = Simulator::new(SimulatorConfig::default());
//! let result = simulator.run(&circuit).unwrap();
//! let amplitudes: Vec<_> = result.amplitudes(4).unwrap().collect();
//! assert_eq!(amplitudes.len(), 2); // the Bell state
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod result;
pub mod simulator;
pub mod statistics;
pub mod strong;
pub mod weak;

pub use config::SimulatorConfig;
pub use error::SimulatorError;
pub use result::SimulationResult;
pub use simulator::Simulator;
pub use statistics::ExecutionStatistics;
pub use strong::{Amplitude, AmplitudeIter};
pub use weak::{SampleCounts, ShotRecord};

/// Type alias for results in qudd-sim
pub type Result<T> = std::result::Result<T, SimulatorError>;
