//! Simulation result

use crate::error::Result;
use crate::statistics::ExecutionStatistics;
use crate::strong::AmplitudeIter;
use crate::weak::{self, SampleCounts};
use qudd_engine::{Edge, Qmdd};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of applying a circuit to an initial state
///
/// Owns the engine (and with it every table of the session) together with
/// the final state edge. Strong enumeration borrows the result immutably;
/// sampling advances the result's recorded random stream.
pub struct SimulationResult {
    dd: Qmdd,
    root: Edge,
    seed: u64,
    rng: StdRng,
    statistics: Option<ExecutionStatistics>,
}

impl SimulationResult {
    pub(crate) fn new(dd: Qmdd, root: Edge, seed: u64) -> Self {
        Self {
            dd,
            root,
            seed,
            rng: StdRng::seed_from_u64(seed),
            statistics: None,
        }
    }

    pub(crate) fn with_statistics(mut self, statistics: ExecutionStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.dd.num_qubits()
    }

    /// The sampling seed, given or derived
    ///
    /// Replaying a run with this seed reproduces every sampling sequence.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The final state edge
    pub fn root(&self) -> Edge {
        self.root
    }

    /// The engine owning the session tables
    pub fn engine(&self) -> &Qmdd {
        &self.dd
    }

    /// Execution statistics, when collection was enabled
    pub fn statistics(&self) -> Option<&ExecutionStatistics> {
        self.statistics.as_ref()
    }

    /// Lazily enumerate every nonzero amplitude
    ///
    /// Amplitudes are rounded to `decimals` places (`0..=10`). The sequence
    /// is finite and its order is stable across runs with identical inputs.
    pub fn amplitudes(&self, decimals: u8) -> Result<AmplitudeIter<'_>> {
        AmplitudeIter::new(&self.dd, self.root, decimals)
    }

    /// Sample `shots` basis states from the state's distribution
    ///
    /// Consecutive calls continue the same seeded random stream.
    pub fn sample(&mut self, shots: u64) -> Result<SampleCounts> {
        weak::sample_states(&mut self.dd, self.root, shots, &mut self.rng)
    }
}

impl std::fmt::Debug for SimulationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationResult")
            .field("num_qubits", &self.num_qubits())
            .field("root", &self.root)
            .field("seed", &self.seed)
            .finish()
    }
}
