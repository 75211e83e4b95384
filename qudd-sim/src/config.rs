//! Simulator configuration

use qudd_engine::NormRule;

/// Configuration for a simulation run
///
/// A configuration is fixed when the simulator is built; each run creates a
/// fresh engine, so sessions never share tables.
#[derive(Debug, Clone, Default)]
pub struct SimulatorConfig {
    /// Edge-weight normalization rule
    ///
    /// Chosen once per session and never mixed within a graph.
    ///
    /// Default: first-nonzero
    pub norm_rule: NormRule,

    /// Random seed for weak simulation
    ///
    /// If `None`, a seed is derived at run time and recorded on the result
    /// so every sampling sequence stays reproducible.
    ///
    /// Default: None (derived)
    pub seed: Option<u64>,

    /// Enable execution statistics collection
    ///
    /// When true, node/table sizes and cache counters are captured on the
    /// result after the circuit has been applied.
    ///
    /// Default: false
    pub collect_statistics: bool,
}

impl SimulatorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the normalization rule
    pub fn with_norm_rule(mut self, rule: NormRule) -> Self {
        self.norm_rule = rule;
        self
    }

    /// Set the random seed for deterministic sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }
}
