//! Circuit operations
//!
//! An operation is either a single gate with zero or more controls, or an
//! uncontrolled parallel step applying several gates to distinct qubits in
//! one logical time slice.

use crate::error::{CircuitError, Result};
use crate::{Control, Gate, QubitId};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// One step of a quantum circuit
#[derive(Clone)]
pub enum Operation {
    /// A gate on `target`, gated by `controls` (possibly empty)
    Controlled {
        gate: Arc<dyn Gate>,
        target: QubitId,
        controls: SmallVec<[Control; 2]>,
    },

    /// Several uncontrolled gates on distinct targets, applied together
    Parallel {
        gates: Vec<(Arc<dyn Gate>, QubitId)>,
    },
}

impl Operation {
    /// An uncontrolled single-qubit gate
    pub fn single(gate: Arc<dyn Gate>, target: QubitId) -> Self {
        Self::Controlled {
            gate,
            target,
            controls: SmallVec::new(),
        }
    }

    /// A controlled gate
    ///
    /// # Errors
    /// [`CircuitError::DuplicateQubit`] when the target reappears as a
    /// control or a control qubit is listed twice.
    pub fn controlled(
        gate: Arc<dyn Gate>,
        target: QubitId,
        controls: Vec<Control>,
    ) -> Result<Self> {
        for (i, c) in controls.iter().enumerate() {
            if c.qubit() == target {
                return Err(CircuitError::DuplicateQubit(target));
            }
            for other in &controls[i + 1..] {
                if other.qubit() == c.qubit() {
                    return Err(CircuitError::DuplicateQubit(c.qubit()));
                }
            }
        }
        Ok(Self::Controlled {
            gate,
            target,
            controls: SmallVec::from_vec(controls),
        })
    }

    /// An uncontrolled parallel step
    ///
    /// `gates[i]` is applied to `targets[i]`; all targets must be distinct.
    ///
    /// # Errors
    /// [`CircuitError::ArityMismatch`] when the lists disagree in length or
    /// are empty, [`CircuitError::DuplicateQubit`] on a repeated target.
    pub fn parallel(gates: Vec<Arc<dyn Gate>>, targets: &[QubitId]) -> Result<Self> {
        if gates.is_empty() || gates.len() != targets.len() {
            return Err(CircuitError::ArityMismatch {
                gates: gates.len(),
                targets: targets.len(),
            });
        }
        for (i, t) in targets.iter().enumerate() {
            if targets[i + 1..].contains(t) {
                return Err(CircuitError::DuplicateQubit(*t));
            }
        }
        Ok(Self::Parallel {
            gates: gates.into_iter().zip(targets.iter().copied()).collect(),
        })
    }

    /// Every qubit this operation touches
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Self::Controlled {
                target, controls, ..
            } => {
                let mut qs: Vec<QubitId> = controls.iter().map(|c| c.qubit()).collect();
                qs.push(*target);
                qs
            }
            Self::Parallel { gates } => gates.iter().map(|(_, t)| *t).collect(),
        }
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled {
                gate,
                target,
                controls,
            } => {
                write!(f, "{}(", gate.name())?;
                for c in controls {
                    write!(f, "{}, ", c)?;
                }
                write!(f, "{})", target)
            }
            Self::Parallel { gates } => {
                write!(f, "[")?;
                for (i, (g, t)) in gates.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}({})", g.name(), t)?;
                }
                write!(f, "]")
            }
        }
    }
}
