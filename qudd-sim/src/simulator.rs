//! Simulator entry point

use crate::compiler;
use crate::config::SimulatorConfig;
use crate::error::Result;
use crate::result::SimulationResult;
use crate::statistics::ExecutionStatistics;
use log::debug;
use qudd_core::{Circuit, InitialState};
use qudd_engine::Qmdd;

/// QMDD-based quantum circuit simulator
///
/// Every run builds a fresh engine, prepares the initial state, multiplies
/// each circuit step into the state edge, and hands the session over to a
/// [`SimulationResult`] for strong enumeration or weak sampling.
///
/// # Example
///
/// ```
/// use qudd_core::{Circuit, Operation, QubitId};
/// use qudd_gates::Hadamard;
/// use qudd_sim::{Simulator, SimulatorConfig};
/// use std::sync::Arc;
///
/// let mut circuit = Circuit::new(2).unwrap();
/// circuit.push(Operation::single(Arc::new(Hadamard), QubitId::new(1))).unwrap();
///
/// let simulator = Simulator::new(SimulatorConfig::default().with_seed(42));
/// let mut result = simulator.run(&circuit).unwrap();
/// let counts = result.sample(100).unwrap();
/// assert_eq!(counts.total_shots(), 100);
/// ```
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with the given configuration
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// The simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run a circuit from the ground state
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        self.run_with_state(circuit, &InitialState::Ground)
    }

    /// Run a circuit from a described initial state
    ///
    /// Validation happens before any engine table is built, so a rejected
    /// call has no observable effect.
    pub fn run_with_state(
        &self,
        circuit: &Circuit,
        initial: &InitialState,
    ) -> Result<SimulationResult> {
        let num_qubits = circuit.num_qubits();
        let preps = initial.preps(num_qubits)?;
        debug!(
            "run: {} operations on {} qubits",
            circuit.len(),
            num_qubits
        );

        let mut dd = Qmdd::new(num_qubits, self.config.norm_rule);
        let state = compiler::prepare_state(&mut dd, &preps);
        let state = compiler::apply_circuit(&mut dd, circuit, state);

        let statistics = self.config.collect_statistics.then(|| {
            let cache = dd.cache_stats();
            ExecutionStatistics {
                operations: circuit.len(),
                dd_nodes: dd.node_count(),
                complex_entries: dd.complex_count(),
                add_cache_hits: cache.add_hits,
                add_cache_misses: cache.add_misses,
                mul_cache_hits: cache.mul_hits,
                mul_cache_misses: cache.mul_misses,
            }
        });

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut result = SimulationResult::new(dd, state, seed);
        if let Some(statistics) = statistics {
            result = result.with_statistics(statistics);
        }
        Ok(result)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}
