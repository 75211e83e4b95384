//! The QMDD engine
//!
//! [`Qmdd`] owns the four shared tables of a simulation session: the complex
//! table, the node arena with its unique table, and the add/multiply
//! operation caches. All construction goes through the node factory
//! ([`Qmdd::make_vector_node`] / [`Qmdd::make_matrix_node`]), which
//! normalizes edge weights, collapses redundant nodes, and hash-conses the
//! rest, so structurally equal sub-diagrams are always the same node.
//!
//! Skipped levels have a fixed reading: on the matrix side a skipped level
//! is the identity (diagonal inherits, off-diagonal is zero), on the vector
//! side it is the unnormalized uniform factor `|0⟩ + |1⟩` (both children
//! inherit). A matrix edge that goes straight to the terminal is therefore
//! a scaled identity on every remaining level, which is what makes
//! multiplication against identity branches O(1).

use crate::node::{Edge, Node, NodeId};
use crate::table::ComplexTable;
use log::{debug, trace};
use ahash::AHashMap;
use qudd_core::{ComplexId, Control};
use smallvec::{smallvec, SmallVec};

/// Edge-weight normalization rule, fixed for the lifetime of an engine
///
/// Mixing rules within one graph breaks canonicity, so the rule is chosen
/// at construction and never changes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum NormRule {
    /// Divide all outgoing weights by the first nonzero weight
    #[default]
    FirstNonZero,
    /// Divide by the first weight of maximal squared magnitude
    LargestMagnitude,
}

/// Hit/miss counters for the operation caches
#[derive(Copy, Clone, Debug, Default)]
pub struct CacheStats {
    pub add_hits: u64,
    pub add_misses: u64,
    pub mul_hits: u64,
    pub mul_misses: u64,
}

/// Rank of a multiplication right-hand side
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Rank {
    Vector,
    Matrix,
}

impl Rank {
    const fn edge_count(self) -> usize {
        match self {
            Rank::Vector => 2,
            Rank::Matrix => 4,
        }
    }
}

type NodeKey = (usize, SmallVec<[Edge; 4]>);

/// A QMDD engine over a fixed number of qubits
pub struct Qmdd {
    complex: ComplexTable,
    nodes: Vec<Node>,
    unique: AHashMap<NodeKey, NodeId>,
    add_cache: AHashMap<(Edge, Edge), Edge>,
    mul_cache: AHashMap<(Edge, Edge), Edge>,
    num_qubits: usize,
    rule: NormRule,
    stats: CacheStats,
}

impl Qmdd {
    /// Create an engine for `num_qubits` qubits
    ///
    /// # Panics
    /// Panics on `num_qubits == 0`; widths are validated at the circuit
    /// layer before an engine is ever built.
    pub fn new(num_qubits: usize, rule: NormRule) -> Self {
        assert!(num_qubits > 0, "engine requires at least one qubit");
        let mut dd = Self {
            complex: ComplexTable::new(),
            nodes: Vec::new(),
            unique: AHashMap::new(),
            add_cache: AHashMap::new(),
            mul_cache: AHashMap::new(),
            num_qubits,
            rule,
            stats: CacheStats::default(),
        };
        dd.push_terminal();
        dd
    }

    fn push_terminal(&mut self) {
        // Terminal depth exceeds every real node.
        self.nodes.push(Node {
            variable: self.num_qubits,
            edges: SmallVec::new(),
            prob: 1.0,
        });
    }

    /// Void every table and reseed the well-known complex constants
    pub fn reset(&mut self) {
        debug!("reset: dropping {} nodes", self.nodes.len());
        self.nodes.clear();
        self.unique.clear();
        self.add_cache.clear();
        self.mul_cache.clear();
        self.complex.reset();
        self.stats = CacheStats::default();
        self.push_terminal();
    }

    /// Number of qubits
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The active normalization rule
    #[inline]
    pub const fn rule(&self) -> NormRule {
        self.rule
    }

    /// The complex table
    #[inline]
    pub fn complex(&self) -> &ComplexTable {
        &self.complex
    }

    /// Mutable access to the complex table
    #[inline]
    pub fn complex_mut(&mut self) -> &mut ComplexTable {
        &mut self.complex
    }

    /// Look up an interned node
    ///
    /// # Panics
    /// Panics on an id not produced by this engine.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of interned nodes (terminal included)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of interned complex values
    pub fn complex_count(&self) -> usize {
        self.complex.len()
    }

    /// Operation-cache counters
    pub fn cache_stats(&self) -> CacheStats {
        self.stats
    }

    /// Whether a matrix edge is a scaled identity
    #[inline]
    pub fn is_identity(&self, e: Edge) -> bool {
        e.node.is_terminal() && !e.is_zero()
    }

    // ------------------------------------------------------------------
    // Node factory
    // ------------------------------------------------------------------

    /// Build a vector node, returning the normalized entry edge
    pub fn make_vector_node(&mut self, variable: usize, edges: [Edge; 2]) -> Edge {
        self.make_node(variable, SmallVec::from_slice(&edges))
    }

    /// Build a matrix node, returning the normalized entry edge
    ///
    /// Quadrants are row-major: `0 = |0⟩⟨0|`, `1 = |0⟩⟨1|`, `2 = |1⟩⟨0|`,
    /// `3 = |1⟩⟨1|`.
    pub fn make_matrix_node(&mut self, variable: usize, edges: [Edge; 4]) -> Edge {
        self.make_node(variable, SmallVec::from_slice(&edges))
    }

    fn make_node(&mut self, variable: usize, mut edges: SmallVec<[Edge; 4]>) -> Edge {
        debug_assert!(variable < self.num_qubits);
        let k = edges.len();
        debug_assert!(k == 2 || k == 4, "nodes have two or four edges");
        for e in edges.iter_mut() {
            debug_assert!(self.nodes[e.node.index()].variable > variable);
            if e.is_zero() {
                *e = Edge::zero();
            }
        }

        let factor = self.normalize(&mut edges);
        if factor.is_zero() {
            return Edge::zero();
        }

        // Redundancy elision: a vector node whose children coincide is the
        // uniform factor on this level; a diagonal matrix node whose
        // children coincide is the identity on this level. Either way the
        // node is dropped and the common weight bubbles into the parent.
        let elide = if k == 2 {
            edges[0] == edges[1]
        } else {
            edges[1].is_zero() && edges[2].is_zero() && edges[0] == edges[3]
        };
        if elide {
            let w = self.cmul(factor, edges[0].weight);
            trace!("make_node: elided redundant node at level {}", variable);
            return Edge::new(edges[0].node, w);
        }

        let id = self.intern(variable, edges);
        Edge::new(id, factor)
    }

    fn normalize(&mut self, edges: &mut SmallVec<[Edge; 4]>) -> ComplexId {
        let factor = match self.rule {
            NormRule::FirstNonZero => edges
                .iter()
                .map(|e| e.weight)
                .find(|w| !w.is_zero())
                .unwrap_or(ComplexId::ZERO),
            NormRule::LargestMagnitude => {
                let weights: SmallVec<[ComplexId; 4]> =
                    edges.iter().map(|e| e.weight).collect();
                self.complex
                    .argmax(&weights)
                    .expect("node factory never sees an empty edge list")
            }
        };
        if factor.is_zero() || factor.is_one() {
            return factor;
        }
        for e in edges.iter_mut() {
            if !e.is_zero() {
                e.weight = self.cdiv(e.weight, factor);
            }
        }
        factor
    }

    fn intern(&mut self, variable: usize, edges: SmallVec<[Edge; 4]>) -> NodeId {
        let key = (variable, edges);
        if let Some(&id) = self.unique.get(&key) {
            trace!("intern: node {} already exists", id);
            return id;
        }
        let prob = if key.1.len() == 2 {
            self.vector_prob(variable, &key.1)
        } else {
            0.0
        };
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            variable,
            edges: key.1.clone(),
            prob,
        });
        self.unique.insert(key, id);
        trace!("intern: created node {} at level {}", id, variable);
        id
    }

    /// Selection mass of a vector node, set once at intern time
    ///
    /// Skipped levels contribute a factor of two per level: a skip is the
    /// uniform factor `|0⟩ + |1⟩`, whose squared norm is 2.
    fn vector_prob(&self, variable: usize, edges: &[Edge]) -> f64 {
        let mut p = 0.0;
        for e in edges {
            if e.is_zero() {
                continue;
            }
            let child = &self.nodes[e.node.index()];
            let skip = (child.variable - variable - 1) as i32;
            p += child.prob * self.complex[e.weight].mag2() * 2f64.powi(skip);
        }
        p
    }

    // ------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------

    /// The `|0…0⟩` state: a chain of `(child, 1), (terminal, 0)` nodes
    pub fn ground_state(&mut self) -> Edge {
        let mut cur = Edge::identity();
        for v in (0..self.num_qubits).rev() {
            cur = self.make_vector_node(v, [cur, Edge::zero()]);
        }
        debug!("ground_state: root {}", cur);
        cur
    }

    /// Build the QMDD of a 2×2 gate with arbitrary controls
    ///
    /// `entries` is row-major `[m00, m01, m10, m11]`. Controls deeper than
    /// the target wrap each quadrant separately (the off state must read as
    /// the identity on diagonal quadrants only); controls above the target
    /// wrap the finished root. Construction is bottom-up so every node's
    /// children are already interned.
    pub fn gate_matrix(
        &mut self,
        entries: [ComplexId; 4],
        target: usize,
        controls: &[Control],
    ) -> Edge {
        debug_assert!(target < self.num_qubits);

        let mut below: Vec<&Control> = controls
            .iter()
            .filter(|c| c.qubit().index() > target)
            .collect();
        below.sort_by_key(|c| std::cmp::Reverse(c.qubit().index()));
        let mut above: Vec<&Control> = controls
            .iter()
            .filter(|c| c.qubit().index() < target)
            .collect();
        above.sort_by_key(|c| std::cmp::Reverse(c.qubit().index()));

        let mut em = entries.map(|m| Edge::new(NodeId::TERMINAL, m));
        for c in below {
            let q = c.qubit().index();
            for (i, e) in em.iter_mut().enumerate() {
                let mut quadrants = [Edge::zero(); 4];
                quadrants[c.activator()] = *e;
                if i == 0 || i == 3 {
                    quadrants[c.antiactivator()] = Edge::identity();
                }
                *e = self.make_matrix_node(q, quadrants);
            }
        }

        let mut root = self.make_matrix_node(target, em);
        for c in above {
            let q = c.qubit().index();
            let mut quadrants = [Edge::zero(); 4];
            quadrants[c.activator()] = root;
            quadrants[c.antiactivator()] = Edge::identity();
            root = self.make_matrix_node(q, quadrants);
        }
        debug!(
            "gate_matrix: target {} with {} controls -> {}",
            target,
            controls.len(),
            root
        );
        root
    }

    /// Tensor product of uncontrolled gates on distinct targets
    ///
    /// Built deepest-first so each gate wraps the subtree below it; levels
    /// not named by any gate are skipped and read as identity.
    pub fn parallel_step(&mut self, gates: &[([ComplexId; 4], usize)]) -> Edge {
        let mut sorted: Vec<&([ComplexId; 4], usize)> = gates.iter().collect();
        sorted.sort_by_key(|(_, t)| std::cmp::Reverse(*t));

        let mut cur = Edge::identity();
        for (entries, target) in sorted {
            let mut quadrants = [Edge::zero(); 4];
            for (q, &m) in entries.iter().enumerate() {
                let w = self.cmul(m, cur.weight);
                quadrants[q] = if w.is_zero() {
                    Edge::zero()
                } else {
                    Edge::new(cur.node, w)
                };
            }
            cur = self.make_matrix_node(*target, quadrants);
        }
        cur
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Sum of two equal-rank edges
    pub fn add(&mut self, e0: Edge, e1: Edge) -> Edge {
        if e0.is_zero() {
            return if e1.is_zero() { Edge::zero() } else { e1 };
        }
        if e1.is_zero() {
            return e0;
        }
        if e0.node == e1.node {
            let w = self.cadd(e0.weight, e1.weight);
            return if w.is_zero() {
                Edge::zero()
            } else {
                Edge::new(e0.node, w)
            };
        }

        let key = if e0 <= e1 { (e0, e1) } else { (e1, e0) };
        if let Some(&res) = self.add_cache.get(&key) {
            self.stats.add_hits += 1;
            return res;
        }
        self.stats.add_misses += 1;

        let v0 = self.nodes[e0.node.index()].variable;
        let v1 = self.nodes[e1.node.index()].variable;
        let level = v0.min(v1);
        let k = if v0 == level {
            self.nodes[e0.node.index()].edges.len()
        } else {
            self.nodes[e1.node.index()].edges.len()
        };
        if v0 == level && v1 == level {
            assert_eq!(
                self.nodes[e0.node.index()].edges.len(),
                self.nodes[e1.node.index()].edges.len(),
                "addition of edges with incompatible ranks"
            );
        }

        let mut res: SmallVec<[Edge; 4]> = smallvec![];
        for q in 0..k {
            let c0 = self.cofactor(e0, level, q, k);
            let c1 = self.cofactor(e1, level, q, k);
            let sum = self.add(c0, c1);
            res.push(sum);
        }
        let out = self.make_node(level, res);
        self.add_cache.insert(key, out);
        out
    }

    /// Matrix × vector product
    pub fn apply_operator(&mut self, op: Edge, state: Edge) -> Edge {
        self.mul_rec(op, state, Rank::Vector)
    }

    /// Matrix × matrix product
    pub fn multiply(&mut self, lhs: Edge, rhs: Edge) -> Edge {
        self.mul_rec(lhs, rhs, Rank::Matrix)
    }

    fn mul_rec(&mut self, m: Edge, r: Edge, rank: Rank) -> Edge {
        if m.is_zero() || r.is_zero() {
            return Edge::zero();
        }
        // A terminal-destination matrix is a scaled identity: multiply in
        // O(1) regardless of how deep the other operand reaches.
        if m.node.is_terminal() {
            let w = self.cmul(m.weight, r.weight);
            return Edge::new(r.node, w);
        }
        if rank == Rank::Matrix && r.node.is_terminal() {
            let w = self.cmul(m.weight, r.weight);
            return Edge::new(m.node, w);
        }

        let key = (m, r);
        if let Some(&res) = self.mul_cache.get(&key) {
            self.stats.mul_hits += 1;
            return res;
        }
        self.stats.mul_misses += 1;

        let vm = self.nodes[m.node.index()].variable;
        let vr = self.nodes[r.node.index()].variable;
        let level = vm.min(vr);
        let k = rank.edge_count();

        let mut res: SmallVec<[Edge; 4]> = smallvec![];
        for idx in 0..k {
            let (i, j) = if k == 4 { (idx / 2, idx % 2) } else { (idx, 0) };
            let mut acc = Edge::zero();
            for s in 0..2 {
                let me = self.cofactor(m, level, 2 * i + s, 4);
                let re = self.cofactor(r, level, if k == 4 { 2 * s + j } else { s }, k);
                let prod = self.mul_rec(me, re, rank);
                acc = self.add(acc, prod);
            }
            res.push(acc);
        }
        let out = self.make_node(level, res);
        self.mul_cache.insert(key, out);
        out
    }

    /// Quadrant `q` of `e` seen from `level`
    ///
    /// An operand whose destination sits below `level` skips it: a matrix
    /// (`k == 4`) reads as the identity there, a vector (`k == 2`) as the
    /// uniform factor.
    fn cofactor(&mut self, e: Edge, level: usize, q: usize, k: usize) -> Edge {
        let var = self.nodes[e.node.index()].variable;
        if var > level {
            return if k == 4 && !(q == 0 || q == 3) {
                Edge::zero()
            } else {
                e
            };
        }
        debug_assert_eq!(var, level);
        let child = self.nodes[e.node.index()].edges[q];
        if child.is_zero() {
            return Edge::zero();
        }
        let w = self.cmul(e.weight, child.weight);
        Edge::new(child.node, w)
    }

    // ------------------------------------------------------------------
    // Complex helpers over interned, known-valid indices
    // ------------------------------------------------------------------

    fn cadd(&mut self, x: ComplexId, y: ComplexId) -> ComplexId {
        self.complex.add(x, y).expect("interned operands")
    }

    fn cmul(&mut self, x: ComplexId, y: ComplexId) -> ComplexId {
        self.complex.mul(x, y).expect("interned operands")
    }

    fn cdiv(&mut self, num: ComplexId, den: ComplexId) -> ComplexId {
        self.complex
            .div(num, den)
            .expect("normalization factor is nonzero and interned")
    }
}

impl std::fmt::Debug for Qmdd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Qmdd")
            .field("num_qubits", &self.num_qubits)
            .field("rule", &self.rule)
            .field("nodes", &self.nodes.len())
            .field("complex", &self.complex.len())
            .finish()
    }
}
