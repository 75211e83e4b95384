//! Initial-state descriptions
//!
//! A simulation starts from `|0…0⟩` or from a per-qubit preparation given as
//! a string over `{'0','1','+','-','r','l'}` (first character is qubit
//! `n−1`, last is qubit `0`) or as an integer whose binary representation is
//! left-padded to `n` bits.

use crate::error::{CircuitError, Result};
use crate::QubitId;

/// Single-qubit preparation, one per character of an initial-state string
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BasisPrep {
    /// `|0⟩` — no gates
    Zero,
    /// `|1⟩` — X
    One,
    /// `|+⟩` — H
    Plus,
    /// `|−⟩` — X, H
    Minus,
    /// `|+i⟩` — H, S
    PlusI,
    /// `|−i⟩` — X, H, S
    MinusI,
}

impl BasisPrep {
    /// Interpret one initial-state character
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            '+' => Ok(Self::Plus),
            '-' => Ok(Self::Minus),
            'r' => Ok(Self::PlusI),
            'l' => Ok(Self::MinusI),
            other => Err(CircuitError::InvalidInitialState(format!(
                "unrecognized character '{}'",
                other
            ))),
        }
    }
}

/// How the pre-circuit state is prepared
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InitialState {
    /// The ground state `|0…0⟩`
    Ground,
    /// Per-qubit preparation string, first character is qubit `n−1`
    Bits(String),
    /// Computational basis state `|k⟩`
    Integer(u64),
}

impl Default for InitialState {
    fn default() -> Self {
        Self::Ground
    }
}

impl InitialState {
    /// Resolve to one preparation per qubit, indexed by qubit
    ///
    /// # Errors
    /// [`CircuitError::InvalidInitialState`] on an unknown character, a
    /// string whose length differs from `num_qubits`, or an integer with no
    /// `num_qubits`-bit representation.
    pub fn preps(&self, num_qubits: usize) -> Result<Vec<BasisPrep>> {
        match self {
            Self::Ground => Ok(vec![BasisPrep::Zero; num_qubits]),
            Self::Bits(s) => {
                let chars: Vec<char> = s.chars().collect();
                if chars.len() != num_qubits {
                    return Err(CircuitError::InvalidInitialState(format!(
                        "state string of length {} for {} qubits",
                        chars.len(),
                        num_qubits
                    )));
                }
                // First character describes qubit n−1; index the result by qubit.
                (0..num_qubits)
                    .map(|q| {
                        BasisPrep::from_char(
                            chars[QubitId::new(q).string_position(num_qubits)],
                        )
                    })
                    .collect()
            }
            Self::Integer(k) => {
                if num_qubits < 64 && *k >= (1u64 << num_qubits) {
                    return Err(CircuitError::InvalidInitialState(format!(
                        "basis state {} does not fit {} qubits",
                        k, num_qubits
                    )));
                }
                Ok((0..num_qubits)
                    .map(|q| {
                        if (k >> q) & 1 == 1 {
                            BasisPrep::One
                        } else {
                            BasisPrep::Zero
                        }
                    })
                    .collect())
            }
        }
    }
}
