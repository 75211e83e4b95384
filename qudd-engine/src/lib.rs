//! QMDD graph engine for the qudd quantum circuit simulator
//!
//! A Quantum Multiple-valued Decision Diagram (QMDD) is a reduced, canonical,
//! weighted DAG that represents complex-valued vectors (quantum states, two
//! edges per node) and unitary matrices (operators, four edges per node) over
//! `n` qubits at the same time.
//!
//! The engine is built from three layers:
//!
//! - [`complex`] / [`table`] — exact complex arithmetic over the ring
//!   generated by `{1, 1/√2, i}`, hash-consed so that value equality is
//!   index equality
//! - [`node`] — interned nodes addressed by [`NodeId`], weighted [`Edge`]s
//! - [`dd`] — the [`Qmdd`] engine: node factory with normalization and
//!   identity recognition, memoized addition and multiplication, ground
//!   state and gate constructors
//!
//! # Example
//!
//! ```
//! use qudd_engine::{NormRule, Qmdd};
//! use qudd_core::ComplexId;
//!
//! let mut dd = Qmdd::new(2, NormRule::FirstNonZero);
//! let state = dd.ground_state();
//! let h = dd.gate_matrix(
//!     [ComplexId::SQRT2_INV, ComplexId::SQRT2_INV,
//!      ComplexId::SQRT2_INV, ComplexId::NEG_SQRT2_INV],
//!     0,
//!     &[],
//! );
//! let state = dd.apply_operator(h, state);
//! assert!(!state.is_zero());
//! ```

pub mod complex;
pub mod dd;
pub mod error;
pub mod node;
pub mod table;

pub use complex::ComplexValue;
pub use dd::{CacheStats, NormRule, Qmdd};
pub use error::EngineError;
pub use node::{Edge, Node, NodeId};
pub use table::ComplexTable;

/// Type alias for results in qudd-engine
pub type Result<T> = std::result::Result<T, EngineError>;
