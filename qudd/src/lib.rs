//! qudd — a QMDD-based quantum circuit simulator
//!
//! Circuits are compiled into Quantum Multiple-valued Decision Diagrams and
//! applied to the state without ever materializing a dense statevector.
//! Amplitudes are kept exact (integer arithmetic over the ring generated by
//! `{1, 1/√2, i}`) until they are read out.
//!
//! The workspace splits by role:
//!
//! - [`qudd_core`] — ids, gate/control contracts, circuits, initial states
//! - [`qudd_gates`] — the standard gate catalog with exact matrices
//! - [`qudd_engine`] — the decision-diagram engine and complex table
//! - [`qudd_sim`] — circuit compilation plus strong and weak simulation
//!
//! # Example
//!
//! ```
//! use qudd::{Circuit, Control, Hadamard, Operation, PauliX, QubitId, Simulator, SimulatorConfig};
//! use std::sync::Arc;
//!
//! // Prepare a Bell pair.
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.push(Operation::single(Arc::new(Hadamard), QubitId::new(0))).unwrap();
//! circuit.push(Operation::controlled(
//!     Arc::new(PauliX),
//!     QubitId::new(1),
//!     vec![Control::new(QubitId::new(0))],
//! ).unwrap()).unwrap();
//!
//! let simulator = Simulator::new(SimulatorConfig::default().with_seed(7));
//! let mut result = simulator.run(&circuit).unwrap();
//!
//! // Strong simulation: lazy enumeration of the nonzero amplitudes.
//! let amplitudes: Vec<_> = result.amplitudes(4).unwrap().collect();
//! assert_eq!(amplitudes.len(), 2);
//!
//! // Weak simulation: shot-based sampling.
//! let counts = result.sample(1000).unwrap();
//! assert_eq!(counts.total_shots(), 1000);
//! ```

pub use qudd_core::{
    BasisPrep, Circuit, CircuitError, ComplexId, Control, Gate, InitialState, Operation, QubitId,
};
pub use qudd_engine::{
    ComplexTable, ComplexValue, Edge, EngineError, Node, NodeId, NormRule, Qmdd,
};
pub use qudd_gates::{Hadamard, PauliX, PauliY, PauliZ, SDagger, SGate, TDagger, TGate};
pub use qudd_sim::{
    Amplitude, AmplitudeIter, ExecutionStatistics, SampleCounts, ShotRecord, SimulationResult,
    Simulator, SimulatorConfig, SimulatorError,
};
