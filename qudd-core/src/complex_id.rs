//! Interned exact-complex value indices
//!
//! The engine stores every exact complex value once and hands out its
//! insertion position as a [`ComplexId`]. Two indices are equal exactly when
//! the underlying ring values are equal, which makes edge weights and cache
//! keys trivially comparable.

use std::fmt;

/// Index of an interned exact complex value
///
/// The nine well-known values are seeded into the table in a fixed order at
/// initialization, so their indices are compile-time constants.
///
/// # Example
/// ```
/// use qudd_core::ComplexId;
///
/// assert_eq!(ComplexId::ZERO.index(), 0);
/// assert_eq!(ComplexId::OMEGA_CONJ.index(), 8);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ComplexId(usize);

impl ComplexId {
    /// The value 0
    pub const ZERO: ComplexId = ComplexId(0);
    /// The value 1
    pub const ONE: ComplexId = ComplexId(1);
    /// The value 1/√2
    pub const SQRT2_INV: ComplexId = ComplexId(2);
    /// The value −1
    pub const NEG_ONE: ComplexId = ComplexId(3);
    /// The imaginary unit i
    pub const I: ComplexId = ComplexId(4);
    /// The value −i
    pub const NEG_I: ComplexId = ComplexId(5);
    /// The value −1/√2
    pub const NEG_SQRT2_INV: ComplexId = ComplexId(6);
    /// The value (1+i)/√2 = e^{iπ/4}
    pub const OMEGA: ComplexId = ComplexId(7);
    /// The value (1−i)/√2 = e^{−iπ/4}
    pub const OMEGA_CONJ: ComplexId = ComplexId(8);

    /// Number of well-known values seeded at table initialization
    pub const WELL_KNOWN: usize = 9;

    /// Create an index from a raw table position
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the underlying table position
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Whether this is the interned zero
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether this is the interned one
    #[inline]
    pub const fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl fmt::Display for ComplexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}
