//! Core types and contracts for the qudd quantum circuit simulator
//!
//! This crate provides the foundational types shared by the decision-diagram
//! engine and the simulators:
//!
//! - **Addressing**: [`QubitId`] and [`ComplexId`] index newtypes
//! - **Gate contract**: the [`Gate`] trait — every gate contributes a 2×2
//!   matrix of exact-complex indices in row-major order
//! - **Controls**: [`Control`] with its activator/anti-activator quadrants
//! - **Circuits**: an ordered, validated list of [`Operation`]s
//! - **Initial states**: parsing of the `{0,1,+,-,r,l}` preparation alphabet
//!
//! # Quick Start
//!
//! ```
//! use qudd_core::{Circuit, Control, Operation, QubitId};
//! use std::sync::Arc;
//!
//! # #[derive(Debug)]
//! # struct XGate;
//! # impl qudd_core::Gate for XGate {
//! #     fn name(&self) -> &str { "X" }
//! #     fn matrix(&self) -> [qudd_core::ComplexId; 4] {
//! #         use qudd_core::ComplexId as C;
//! #         [C::ZERO, C::ONE, C::ONE, C::ZERO]
//! #     }
//! # }
//! let mut circuit = Circuit::new(2).unwrap();
//! let x = Arc::new(XGate);
//! circuit.push(Operation::controlled(
//!     x,
//!     QubitId::new(1),
//!     vec![Control::new(QubitId::new(0))],
//! ).unwrap()).unwrap();
//! assert_eq!(circuit.len(), 1);
//! ```

pub mod circuit;
pub mod complex_id;
pub mod control;
pub mod error;
pub mod gate;
pub mod initial_state;
pub mod operation;
pub mod qubit;

pub use circuit::Circuit;
pub use complex_id::ComplexId;
pub use control::Control;
pub use error::CircuitError;
pub use gate::Gate;
pub use initial_state::{BasisPrep, InitialState};
pub use operation::Operation;
pub use qubit::QubitId;

/// Type alias for results in qudd-core
pub type Result<T> = std::result::Result<T, CircuitError>;
