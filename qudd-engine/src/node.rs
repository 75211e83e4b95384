//! QMDD nodes and edges
//!
//! Nodes live in an append-only arena owned by the engine and are addressed
//! by [`NodeId`]; edges are freely copied `(destination, weight)` pairs.
//! A node's role follows from its edge count: two edges for vector nodes,
//! four for matrix nodes, none for the terminal.

use qudd_core::ComplexId;
use smallvec::SmallVec;
use std::fmt;

/// Arena index of an interned node
///
/// The terminal is always node 0. Monotone ids double as the canonical sort
/// order for commutativity-aware cache keys.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The terminal node
    pub const TERMINAL: NodeId = NodeId(0);

    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Whether this is the terminal
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A weighted edge into the DAG
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Edge {
    pub node: NodeId,
    pub weight: ComplexId,
}

impl Edge {
    #[inline]
    pub const fn new(node: NodeId, weight: ComplexId) -> Self {
        Self { node, weight }
    }

    /// The canonical zero edge
    #[inline]
    pub const fn zero() -> Self {
        Self::new(NodeId::TERMINAL, ComplexId::ZERO)
    }

    /// The identity edge: terminal destination, weight one
    ///
    /// Read as a matrix, a terminal-destination edge is the identity on
    /// every remaining level, scaled by its weight.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(NodeId::TERMINAL, ComplexId::ONE)
    }

    /// Whether the weight is the interned zero
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.weight.is_zero()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.weight, self.node)
    }
}

/// An interned node
///
/// `variable` is the qubit this node decides on; the terminal carries
/// `variable == n` so that its depth exceeds every real node. `prob` is the
/// selection mass used by weak simulation, set once when the node is
/// interned and never written again.
#[derive(Clone, Debug)]
pub struct Node {
    pub variable: usize,
    pub edges: SmallVec<[Edge; 4]>,
    pub prob: f64,
}

impl Node {
    /// Whether this is the terminal
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether this is a vector node (two outgoing edges)
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.edges.len() == 2
    }

    /// Whether this is a matrix node (four outgoing edges)
    #[inline]
    pub fn is_matrix(&self) -> bool {
        self.edges.len() == 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_terminal_id() {
        assert!(NodeId::TERMINAL.is_terminal());
        assert!(!NodeId::new(3).is_terminal());
    }

    #[test]
    fn test_canonical_edges() {
        assert!(Edge::zero().is_zero());
        assert_eq!(Edge::zero().node, NodeId::TERMINAL);
        assert_eq!(Edge::identity().weight, ComplexId::ONE);
    }

    #[test]
    fn test_node_kinds() {
        let terminal = Node {
            variable: 2,
            edges: SmallVec::new(),
            prob: 1.0,
        };
        assert!(terminal.is_terminal());

        let vector = Node {
            variable: 0,
            edges: smallvec![Edge::identity(), Edge::zero()],
            prob: 1.0,
        };
        assert!(vector.is_vector());
        assert!(!vector.is_matrix());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Edge::identity()), "c1@n0");
    }
}
