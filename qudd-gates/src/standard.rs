//! Standard gate implementations
//!
//! Each gate is a stateless unit struct; singletons carry no semantic
//! content here, so gates are freely constructed and copied.

use crate::matrices;
use qudd_core::{ComplexId, Gate};

/// Helper macro for the per-gate boilerplate
macro_rules! impl_gate {
    ($gate_type:ty, $name:literal, $matrix:expr, hermitian: $herm:literal) => {
        impl Gate for $gate_type {
            fn name(&self) -> &str {
                $name
            }

            fn matrix(&self) -> [ComplexId; 4] {
                $matrix
            }

            fn is_hermitian(&self) -> bool {
                $herm
            }
        }
    };
}

/// Hadamard gate
///
/// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2
#[derive(Debug, Clone, Copy)]
pub struct Hadamard;

impl_gate!(Hadamard, "H", matrices::HADAMARD, hermitian: true);

/// Pauli-X gate (NOT gate)
///
/// Bit flip: X|0⟩ = |1⟩, X|1⟩ = |0⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliX;

impl_gate!(PauliX, "X", matrices::PAULI_X, hermitian: true);

/// Pauli-Y gate
#[derive(Debug, Clone, Copy)]
pub struct PauliY;

impl_gate!(PauliY, "Y", matrices::PAULI_Y, hermitian: true);

/// Pauli-Z gate
///
/// Phase flip: Z|1⟩ = -|1⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliZ;

impl_gate!(PauliZ, "Z", matrices::PAULI_Z, hermitian: true);

/// S gate (phase gate, √Z)
#[derive(Debug, Clone, Copy)]
pub struct SGate;

impl_gate!(SGate, "S", matrices::S_GATE, hermitian: false);

/// S† gate
#[derive(Debug, Clone, Copy)]
pub struct SDagger;

impl_gate!(SDagger, "Sdg", matrices::S_GATE_DAGGER, hermitian: false);

/// T gate (π/8 gate, √S)
#[derive(Debug, Clone, Copy)]
pub struct TGate;

impl_gate!(TGate, "T", matrices::T_GATE, hermitian: false);

/// T† gate
#[derive(Debug, Clone, Copy)]
pub struct TDagger;

impl_gate!(TDagger, "Tdg", matrices::T_GATE_DAGGER, hermitian: false);
