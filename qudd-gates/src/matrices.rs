//! Exact gate matrices
//!
//! Row-major `[m00, m01, m10, m11]` quads of well-known complex indices.

use qudd_core::ComplexId;

const ZERO: ComplexId = ComplexId::ZERO;
const ONE: ComplexId = ComplexId::ONE;
const A: ComplexId = ComplexId::SQRT2_INV;
const NEG_A: ComplexId = ComplexId::NEG_SQRT2_INV;
const I: ComplexId = ComplexId::I;
const NEG_I: ComplexId = ComplexId::NEG_I;
const NEG_ONE: ComplexId = ComplexId::NEG_ONE;

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [ComplexId; 4] = [A, A, A, NEG_A];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [ComplexId; 4] = [ZERO, ONE, ONE, ZERO];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [ComplexId; 4] = [ZERO, NEG_I, I, ZERO];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [ComplexId; 4] = [ONE, ZERO, ZERO, NEG_ONE];

/// S gate matrix (phase gate, √Z)
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: [ComplexId; 4] = [ONE, ZERO, ZERO, I];

/// S† gate matrix
/// S† = [[1,  0],
///       [0, -i]]
pub const S_GATE_DAGGER: [ComplexId; 4] = [ONE, ZERO, ZERO, NEG_I];

/// T gate matrix (π/8 gate, √S)
/// T = [[1, 0],
///      [0, (1+i)/√2]]
pub const T_GATE: [ComplexId; 4] = [ONE, ZERO, ZERO, ComplexId::OMEGA];

/// T† gate matrix
/// T† = [[1, 0],
///       [0, (1-i)/√2]]
pub const T_GATE_DAGGER: [ComplexId; 4] = [ONE, ZERO, ZERO, ComplexId::OMEGA_CONJ];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_gates_share_upper_left() {
        for m in [S_GATE, S_GATE_DAGGER, T_GATE, T_GATE_DAGGER, PAULI_Z] {
            assert_eq!(m[0], ONE);
            assert_eq!(m[1], ZERO);
            assert_eq!(m[2], ZERO);
        }
    }

    #[test]
    fn test_dagger_pairs_conjugate() {
        assert_eq!(S_GATE[3], I);
        assert_eq!(S_GATE_DAGGER[3], NEG_I);
        assert_eq!(T_GATE[3], ComplexId::OMEGA);
        assert_eq!(T_GATE_DAGGER[3], ComplexId::OMEGA_CONJ);
    }
}
