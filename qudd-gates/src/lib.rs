//! Standard quantum gates for the qudd simulator
//!
//! Every gate here has a 2×2 matrix whose entries lie in the ring generated
//! by `{1, 1/√2, i}`, so the entries are always well-known interned indices
//! and no floating point is involved.

pub mod matrices;
pub mod standard;

pub use standard::{
    Hadamard, PauliX, PauliY, PauliZ, SDagger, SGate, TDagger, TGate,
};
