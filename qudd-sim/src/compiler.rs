//! Circuit-to-QMDD compilation
//!
//! Each circuit step becomes one matrix QMDD which is multiplied into the
//! running state; the state is only ever held as a single edge.

use log::debug;
use qudd_core::{BasisPrep, Circuit, ComplexId, Operation};
use qudd_engine::{Edge, Qmdd};
use qudd_gates::matrices::{HADAMARD, PAULI_X, S_GATE};

/// Build the matrix QMDD of one circuit operation
pub fn operation_matrix(dd: &mut Qmdd, op: &Operation) -> Edge {
    match op {
        Operation::Controlled {
            gate,
            target,
            controls,
        } => dd.gate_matrix(gate.matrix(), target.index(), controls),
        Operation::Parallel { gates } => {
            let pairs: Vec<([ComplexId; 4], usize)> = gates
                .iter()
                .map(|(gate, target)| (gate.matrix(), target.index()))
                .collect();
            dd.parallel_step(&pairs)
        }
    }
}

/// Gate sequence preparing one qubit from `|0⟩`
fn prep_gates(prep: BasisPrep) -> &'static [[ComplexId; 4]] {
    match prep {
        BasisPrep::Zero => &[],
        BasisPrep::One => &[PAULI_X],
        BasisPrep::Plus => &[HADAMARD],
        BasisPrep::Minus => &[PAULI_X, HADAMARD],
        BasisPrep::PlusI => &[HADAMARD, S_GATE],
        BasisPrep::MinusI => &[PAULI_X, HADAMARD, S_GATE],
    }
}

/// Build the initial state from per-qubit preparations
pub fn prepare_state(dd: &mut Qmdd, preps: &[BasisPrep]) -> Edge {
    let mut state = dd.ground_state();
    for (qubit, &prep) in preps.iter().enumerate() {
        for &entries in prep_gates(prep) {
            let gate = dd.gate_matrix(entries, qubit, &[]);
            state = dd.apply_operator(gate, state);
        }
    }
    state
}

/// Apply every operation of the circuit to the state, in order
pub fn apply_circuit(dd: &mut Qmdd, circuit: &Circuit, mut state: Edge) -> Edge {
    for (index, op) in circuit.operations().enumerate() {
        let matrix = operation_matrix(dd, op);
        state = dd.apply_operator(matrix, state);
        debug!("apply_circuit: step {} -> root {}", index, state);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use qudd_core::{InitialState, QubitId};
    use qudd_engine::NormRule;
    use qudd_gates::PauliX;
    use std::sync::Arc;

    #[test]
    fn test_prepare_ground_is_chain() {
        let mut dd = Qmdd::new(3, NormRule::FirstNonZero);
        let preps = InitialState::Ground.preps(3).unwrap();
        let state = prepare_state(&mut dd, &preps);
        let ground = dd.ground_state();
        assert_eq!(state, ground);
    }

    #[test]
    fn test_prepare_basis_string() {
        // "10" puts qubit 1 into |1⟩.
        let mut dd = Qmdd::new(2, NormRule::FirstNonZero);
        let preps = InitialState::Bits("10".into()).preps(2).unwrap();
        let state = prepare_state(&mut dd, &preps);

        let x1 = dd.gate_matrix(PAULI_X, 1, &[]);
        let ground = dd.ground_state();
        let expected = dd.apply_operator(x1, ground);
        assert_eq!(state, expected);
    }

    #[test]
    fn test_apply_circuit_in_order() {
        // Two X gates on the same qubit cancel.
        let mut circuit = Circuit::new(1).unwrap();
        circuit
            .push(Operation::single(Arc::new(PauliX), QubitId::new(0)))
            .unwrap();
        circuit
            .push(Operation::single(Arc::new(PauliX), QubitId::new(0)))
            .unwrap();

        let mut dd = Qmdd::new(1, NormRule::FirstNonZero);
        let ground = dd.ground_state();
        let state = apply_circuit(&mut dd, &circuit, ground);
        assert_eq!(state, ground);
    }
}
