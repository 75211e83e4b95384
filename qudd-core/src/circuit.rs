//! Quantum circuit representation

use crate::error::{CircuitError, Result};
use crate::Operation;

/// An ordered list of operations over a fixed number of qubits
///
/// Operations are validated against the circuit width when pushed; the
/// simulator never mutates a circuit.
///
/// # Example
/// ```
/// use qudd_core::Circuit;
///
/// let circuit = Circuit::new(3).unwrap();
/// assert_eq!(circuit.num_qubits(), 3);
/// assert!(circuit.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<Operation>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits
    ///
    /// # Errors
    /// [`CircuitError::InvalidQubitCount`] when `num_qubits` is zero.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(CircuitError::InvalidQubitCount(num_qubits));
        }
        Ok(Self {
            num_qubits,
            operations: Vec::new(),
        })
    }

    /// Number of qubits
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of operations
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the circuit has no operations
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append an operation
    ///
    /// # Errors
    /// [`CircuitError::OutOfBoundsQubit`] when the operation touches a qubit
    /// outside `0..num_qubits`.
    pub fn push(&mut self, op: Operation) -> Result<()> {
        for q in op.qubits() {
            if q.index() >= self.num_qubits {
                return Err(CircuitError::OutOfBoundsQubit {
                    qubit: q.index(),
                    num_qubits: self.num_qubits,
                });
            }
        }
        self.operations.push(op);
        Ok(())
    }

    /// Iterate over the operations in application order
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComplexId, Gate, QubitId};
    use std::sync::Arc;

    #[derive(Debug)]
    struct MockGate;

    impl Gate for MockGate {
        fn name(&self) -> &str {
            "M"
        }

        fn matrix(&self) -> [ComplexId; 4] {
            [
                ComplexId::ZERO,
                ComplexId::ONE,
                ComplexId::ONE,
                ComplexId::ZERO,
            ]
        }
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert_eq!(
            Circuit::new(0).unwrap_err(),
            CircuitError::InvalidQubitCount(0)
        );
    }

    #[test]
    fn test_push_in_bounds() {
        let mut c = Circuit::new(2).unwrap();
        c.push(Operation::single(Arc::new(MockGate), QubitId::new(1)))
            .unwrap();
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_push_out_of_bounds() {
        let mut c = Circuit::new(2).unwrap();
        let err = c
            .push(Operation::single(Arc::new(MockGate), QubitId::new(2)))
            .unwrap_err();
        assert_eq!(
            err,
            CircuitError::OutOfBoundsQubit {
                qubit: 2,
                num_qubits: 2
            }
        );
        assert!(c.is_empty());
    }
}
