//! Hash-consed table of exact complex values
//!
//! The table stores every canonical [`ComplexValue`] once; the insertion
//! position is the value's [`ComplexId`]. All arithmetic routes through
//! memoization caches keyed on interned indices, so repeated operations are
//! constant-time lookups and commutative identities collapse to one entry.

use crate::complex::ComplexValue;
use crate::error::{EngineError, Result};
use ahash::AHashMap;
use num_complex::Complex64;
use qudd_core::ComplexId;
use std::ops::Index;

/// Interned exact-complex values with memoized arithmetic
///
/// The nine well-known values are seeded in the fixed order documented on
/// [`ComplexId`], so e.g. `ComplexId::SQRT2_INV` always resolves to `1/√2`.
pub struct ComplexTable {
    values: Vec<ComplexValue>,
    index: AHashMap<ComplexValue, ComplexId>,
    add_cache: AHashMap<(ComplexId, ComplexId), ComplexId>,
    mul_cache: AHashMap<(ComplexId, ComplexId), ComplexId>,
    div_cache: AHashMap<(ComplexId, ComplexId), ComplexId>,
}

impl ComplexTable {
    /// Create a table seeded with the well-known values
    pub fn new() -> Self {
        let mut table = Self {
            values: Vec::new(),
            index: AHashMap::new(),
            add_cache: AHashMap::new(),
            mul_cache: AHashMap::new(),
            div_cache: AHashMap::new(),
        };
        table.seed();
        table
    }

    fn seed(&mut self) {
        for v in [
            ComplexValue::ZERO,
            ComplexValue::ONE,
            ComplexValue::SQRT2_INV,
            ComplexValue::NEG_ONE,
            ComplexValue::I,
            ComplexValue::NEG_I,
            ComplexValue::NEG_SQRT2_INV,
            ComplexValue::OMEGA,
            ComplexValue::OMEGA_CONJ,
        ] {
            self.intern(v);
        }
        debug_assert_eq!(self.values.len(), ComplexId::WELL_KNOWN);
    }

    /// Void the table and reseed the well-known values
    pub fn reset(&mut self) {
        self.values.clear();
        self.index.clear();
        self.add_cache.clear();
        self.mul_cache.clear();
        self.div_cache.clear();
        self.seed();
    }

    /// Number of interned values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table holds no values (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Intern a canonical value, returning its stable index
    pub fn intern(&mut self, value: ComplexValue) -> ComplexId {
        if let Some(&id) = self.index.get(&value) {
            return id;
        }
        let id = ComplexId::new(self.values.len());
        self.values.push(value);
        self.index.insert(value, id);
        id
    }

    /// Look up a value by index
    pub fn value(&self, id: ComplexId) -> Result<&ComplexValue> {
        self.values
            .get(id.index())
            .ok_or(EngineError::InvalidIndex {
                index: id.index(),
                len: self.values.len(),
            })
    }

    /// Exact sum of two interned values
    pub fn add(&mut self, x: ComplexId, y: ComplexId) -> Result<ComplexId> {
        self.check(x)?;
        self.check(y)?;
        if x.is_zero() {
            return Ok(y);
        }
        if y.is_zero() {
            return Ok(x);
        }
        let key = sorted(x, y);
        if let Some(&id) = self.add_cache.get(&key) {
            return Ok(id);
        }
        let sum = self.values[x.index()].add(&self.values[y.index()]);
        let id = self.intern(sum);
        self.add_cache.insert(key, id);
        Ok(id)
    }

    /// Exact product of two interned values
    pub fn mul(&mut self, x: ComplexId, y: ComplexId) -> Result<ComplexId> {
        self.check(x)?;
        self.check(y)?;
        if x.is_zero() || y.is_zero() {
            return Ok(ComplexId::ZERO);
        }
        if x.is_one() {
            return Ok(y);
        }
        if y.is_one() {
            return Ok(x);
        }
        let key = sorted(x, y);
        if let Some(&id) = self.mul_cache.get(&key) {
            return Ok(id);
        }
        let product = self.values[x.index()].mul(&self.values[y.index()]);
        let id = self.intern(product);
        self.mul_cache.insert(key, id);
        Ok(id)
    }

    /// Exact product over a list of interned values
    ///
    /// # Errors
    /// [`EngineError::EmptyInput`] for an empty list.
    pub fn mul_all(&mut self, ids: &[ComplexId]) -> Result<ComplexId> {
        let (&first, rest) = ids.split_first().ok_or(EngineError::EmptyInput)?;
        rest.iter()
            .try_fold(first, |acc, &id| self.mul(acc, id))
    }

    /// Exact quotient of two interned values
    ///
    /// `div(0, x)` returns `0` without caching; `div(x, 1)` returns `x`;
    /// `div(x, x)` returns `1`.
    ///
    /// # Errors
    /// [`EngineError::DivByZero`] when the denominator is the interned zero.
    pub fn div(&mut self, num: ComplexId, den: ComplexId) -> Result<ComplexId> {
        self.check(num)?;
        self.check(den)?;
        if den.is_zero() {
            return Err(EngineError::DivByZero);
        }
        if num.is_zero() {
            return Ok(ComplexId::ZERO);
        }
        if den.is_one() {
            return Ok(num);
        }
        if num == den {
            return Ok(ComplexId::ONE);
        }
        let key = (num, den);
        if let Some(&id) = self.div_cache.get(&key) {
            return Ok(id);
        }
        let recip = self.values[den.index()]
            .recip()
            .expect("nonzero denominator has a reciprocal");
        let quotient = self.values[num.index()].mul(&recip);
        let id = self.intern(quotient);
        self.div_cache.insert(key, id);
        Ok(id)
    }

    /// First index of maximal squared magnitude
    ///
    /// # Errors
    /// [`EngineError::EmptyInput`] for an empty list.
    pub fn argmax(&self, ids: &[ComplexId]) -> Result<ComplexId> {
        let (&first, rest) = ids.split_first().ok_or(EngineError::EmptyInput)?;
        let mut best = first;
        let mut best_mag = self.value(first)?.mag2();
        for &id in rest {
            let mag = self.value(id)?.mag2();
            if mag > best_mag {
                best = id;
                best_mag = mag;
            }
        }
        Ok(best)
    }

    /// Real part of an interned value
    pub fn re(&self, id: ComplexId) -> Result<f64> {
        Ok(self.value(id)?.re())
    }

    /// Imaginary part of an interned value
    pub fn im(&self, id: ComplexId) -> Result<f64> {
        Ok(self.value(id)?.im())
    }

    /// Squared magnitude of an interned value
    pub fn mag2(&self, id: ComplexId) -> Result<f64> {
        Ok(self.value(id)?.mag2())
    }

    /// Floating-point view of an interned value
    pub fn as_complex64(&self, id: ComplexId) -> Result<Complex64> {
        Ok(self.value(id)?.to_complex64())
    }

    fn check(&self, id: ComplexId) -> Result<()> {
        if id.index() < self.values.len() {
            Ok(())
        } else {
            Err(EngineError::InvalidIndex {
                index: id.index(),
                len: self.values.len(),
            })
        }
    }
}

impl Default for ComplexTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Panicking lookup for indices known to be interned
impl Index<ComplexId> for ComplexTable {
    type Output = ComplexValue;

    fn index(&self, id: ComplexId) -> &Self::Output {
        &self.values[id.index()]
    }
}

fn sorted(x: ComplexId, y: ComplexId) -> (ComplexId, ComplexId) {
    if x <= y {
        (x, y)
    } else {
        (y, x)
    }
}
