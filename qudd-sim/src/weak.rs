//! Weak simulation: shot-based sampling
//!
//! Each shot walks the state diagram from the root to the terminal. At a
//! vector node, child `i` is taken with probability proportional to
//! `child.prob · |wᵢ|²` (times a factor of two per level the edge skips);
//! skipped levels themselves are fair coins. The sampled amplitude is the
//! exact product of the taken edge weights.

use crate::error::{Result, SimulatorError};
use ahash::AHashMap;
use num_complex::Complex64;
use qudd_core::ComplexId;
use qudd_engine::{Edge, Qmdd};
use rand::rngs::StdRng;
use rand::Rng;

/// Observations for one sampled basis state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotRecord {
    /// How many shots measured this state
    pub occurrences: u64,
    /// Real part of the exact amplitude
    pub re: f64,
    /// Imaginary part of the exact amplitude
    pub im: f64,
}

impl ShotRecord {
    /// The amplitude as a complex number
    pub fn amplitude(&self) -> Complex64 {
        Complex64::new(self.re, self.im)
    }
}

/// Measurement outcomes of a weak-simulation run
///
/// Maps observed basis states to their [`ShotRecord`]; states that were
/// never sampled are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCounts {
    counts: AHashMap<String, ShotRecord>,
    total_shots: u64,
}

impl SampleCounts {
    /// Total number of shots taken
    pub fn total_shots(&self) -> u64 {
        self.total_shots
    }

    /// Number of distinct states observed
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no state was observed (never true after a successful run)
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Record for a specific basis state, if it was observed
    pub fn get(&self, state: &str) -> Option<&ShotRecord> {
        self.counts.get(state)
    }

    /// Empirical frequency of a basis state
    pub fn frequency(&self, state: &str) -> f64 {
        self.get(state)
            .map(|r| r.occurrences as f64 / self.total_shots as f64)
            .unwrap_or(0.0)
    }

    /// Iterate over observed states and their records
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ShotRecord)> {
        self.counts.iter()
    }
}

/// Sample `shots` basis states from the state rooted at `root`
pub fn sample_states(
    dd: &mut Qmdd,
    root: Edge,
    shots: u64,
    rng: &mut StdRng,
) -> Result<SampleCounts> {
    if shots == 0 {
        return Err(SimulatorError::InvalidShots(0));
    }
    if root.is_zero() {
        return Err(SimulatorError::ZeroEdge);
    }
    if root.node.is_terminal() {
        return Err(SimulatorError::TerminalEdge);
    }

    let mut counts: AHashMap<String, ShotRecord> = AHashMap::new();
    for _ in 0..shots {
        let (state, amp) = sample_once(dd, root, rng);
        let record = counts.entry(state).or_insert_with(|| ShotRecord {
            occurrences: 0,
            re: dd.complex()[amp].re(),
            im: dd.complex()[amp].im(),
        });
        record.occurrences += 1;
    }
    Ok(SampleCounts {
        counts,
        total_shots: shots,
    })
}

/// One root-to-terminal descent
fn sample_once(dd: &mut Qmdd, root: Edge, rng: &mut StdRng) -> (String, ComplexId) {
    let n = dd.num_qubits();
    // Bits in qubit order; reversed into the output string at the end.
    let mut bits: Vec<char> = Vec::with_capacity(n);
    let mut amp = root.weight;
    let mut current = root.node;

    // Levels skipped above the root are uniform.
    for _ in 0..dd.node(root.node).variable {
        bits.push(coin(rng));
    }

    while !current.is_terminal() {
        let node = dd.node(current);
        let level = node.variable;
        let e0 = node.edges[0];
        let e1 = node.edges[1];
        let p0 = edge_mass(dd, e0, level);
        let p1 = edge_mass(dd, e1, level);
        debug_assert!(p0 + p1 > 0.0, "reachable node with zero selection mass");

        let (bit, edge) = if rng.gen::<f64>() * (p0 + p1) < p0 {
            ('0', e0)
        } else {
            ('1', e1)
        };
        bits.push(bit);
        amp = dd
            .complex_mut()
            .mul(amp, edge.weight)
            .expect("interned edge weights");

        // Uniform coins for every level the chosen edge skips.
        let child_var = dd.node(edge.node).variable;
        for _ in level + 1..child_var {
            bits.push(coin(rng));
        }
        current = edge.node;
    }

    debug_assert_eq!(bits.len(), n);
    (bits.into_iter().rev().collect(), amp)
}

fn edge_mass(dd: &Qmdd, e: Edge, level: usize) -> f64 {
    if e.is_zero() {
        return 0.0;
    }
    let child = dd.node(e.node);
    let skip = (child.variable - level - 1) as i32;
    child.prob * dd.complex()[e.weight].mag2() * 2f64.powi(skip)
}

fn coin(rng: &mut StdRng) -> char {
    if rng.gen_bool(0.5) {
        '1'
    } else {
        '0'
    }
}
