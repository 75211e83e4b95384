//! Exact complex values over the ring generated by `{1, 1/√2, i}`
//!
//! Every amplitude reachable by the supported gate set lies in this ring, so
//! the whole simulation runs on integer arithmetic; floating point appears
//! only when values are read out.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// An exact complex value `((a + b/√2) + (c + d/√2)·i) / e`
///
/// The canonical form divides all five components by their gcd and keeps
/// `e > 0` by folding its sign into the numerator. Component-wise equality
/// of canonical tuples is value equality, which is what makes hash-consing
/// in [`ComplexTable`](crate::ComplexTable) sound.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ComplexValue {
    a: i128,
    b: i128,
    c: i128,
    d: i128,
    e: i128,
}

impl ComplexValue {
    /// The value 0
    pub const ZERO: ComplexValue = ComplexValue { a: 0, b: 0, c: 0, d: 0, e: 1 };
    /// The value 1
    pub const ONE: ComplexValue = ComplexValue { a: 1, b: 0, c: 0, d: 0, e: 1 };
    /// The value 1/√2
    pub const SQRT2_INV: ComplexValue = ComplexValue { a: 0, b: 1, c: 0, d: 0, e: 1 };
    /// The value −1
    pub const NEG_ONE: ComplexValue = ComplexValue { a: -1, b: 0, c: 0, d: 0, e: 1 };
    /// The imaginary unit
    pub const I: ComplexValue = ComplexValue { a: 0, b: 0, c: 1, d: 0, e: 1 };
    /// The value −i
    pub const NEG_I: ComplexValue = ComplexValue { a: 0, b: 0, c: -1, d: 0, e: 1 };
    /// The value −1/√2
    pub const NEG_SQRT2_INV: ComplexValue = ComplexValue { a: 0, b: -1, c: 0, d: 0, e: 1 };
    /// The value (1+i)/√2
    pub const OMEGA: ComplexValue = ComplexValue { a: 0, b: 1, c: 0, d: 1, e: 1 };
    /// The value (1−i)/√2
    pub const OMEGA_CONJ: ComplexValue = ComplexValue { a: 0, b: 1, c: 0, d: -1, e: 1 };

    /// Create a canonical value from raw components
    ///
    /// # Panics
    /// Panics when `e == 0`; a zero denominator is a programming error, not
    /// a representable value.
    pub fn new(a: i128, b: i128, c: i128, d: i128, e: i128) -> Self {
        assert_ne!(e, 0, "complex value denominator must be nonzero");
        Self::canonical(a, b, c, d, e)
    }

    fn canonical(a: i128, b: i128, c: i128, d: i128, e: i128) -> Self {
        if a == 0 && b == 0 && c == 0 && d == 0 {
            return Self::ZERO;
        }
        let g = gcd(gcd(gcd(a.unsigned_abs(), b.unsigned_abs()), gcd(c.unsigned_abs(), d.unsigned_abs())), e.unsigned_abs()) as i128;
        let (mut a, mut b, mut c, mut d, mut e) = (a / g, b / g, c / g, d / g, e / g);
        if e < 0 {
            a = -a;
            b = -b;
            c = -c;
            d = -d;
            e = -e;
        }
        Self { a, b, c, d, e }
    }

    /// Whether this is the zero value
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Whether this is the one value
    #[inline]
    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// Exact sum
    pub fn add(&self, other: &Self) -> Self {
        Self::canonical(
            self.a * other.e + other.a * self.e,
            self.b * other.e + other.b * self.e,
            self.c * other.e + other.c * self.e,
            self.d * other.e + other.d * self.e,
            self.e * other.e,
        )
    }

    /// Exact product, expanded over the common denominator `2·e·e'`
    pub fn mul(&self, other: &Self) -> Self {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let (p, q, r, s) = (other.a, other.b, other.c, other.d);
        Self::canonical(
            2 * (a * p - c * r) + b * q - d * s,
            2 * (a * q + b * p) - 2 * (c * s + d * r),
            2 * (a * r + c * p) + b * s + d * q,
            2 * (a * s + b * r + c * q + d * p),
            2 * self.e * other.e,
        )
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        Self {
            a: -self.a,
            b: -self.b,
            c: -self.c,
            d: -self.d,
            e: self.e,
        }
    }

    /// Complex conjugate
    pub fn conj(&self) -> Self {
        Self {
            a: self.a,
            b: self.b,
            c: -self.c,
            d: -self.d,
            e: self.e,
        }
    }

    /// Multiplicative inverse, `None` for zero
    ///
    /// Computed by multiplying with the complex conjugate to obtain a real
    /// value `(r + s/√2)/f`, then clearing the `√2` part with its conjugate:
    /// the remaining denominator `2r² − s²` is a plain integer.
    pub fn recip(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let cj = self.conj();
        let m = self.mul(&cj);
        debug_assert_eq!(m.c, 0);
        debug_assert_eq!(m.d, 0);
        let (r, s, f) = (m.a, m.b, m.e);
        let m_inv = Self::canonical(2 * f * r, -2 * f * s, 0, 0, 2 * r * r - s * s);
        Some(cj.mul(&m_inv))
    }

    /// Real part as floating point
    pub fn re(&self) -> f64 {
        (self.a as f64 + self.b as f64 * FRAC_1_SQRT_2) / self.e as f64
    }

    /// Imaginary part as floating point
    pub fn im(&self) -> f64 {
        (self.c as f64 + self.d as f64 * FRAC_1_SQRT_2) / self.e as f64
    }

    /// Squared magnitude as floating point
    pub fn mag2(&self) -> f64 {
        let re = self.re();
        let im = self.im();
        re * re + im * im
    }

    /// Floating-point view of the value
    pub fn to_complex64(&self) -> Complex64 {
        Complex64::new(self.re(), self.im())
    }
}

fn gcd(mut x: u128, mut y: u128) -> u128 {
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    x.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_canonical_reduces_common_factor() {
        // (2, 4, 6, 8, 10) reduces to (1, 2, 3, 4, 5)
        let v = ComplexValue::new(2, 4, 6, 8, 10);
        assert_eq!(v, ComplexValue::new(1, 2, 3, 4, 5));
    }

    #[test]
    fn test_canonical_folds_denominator_sign() {
        let v = ComplexValue::new(1, 0, 0, 0, -2);
        assert_eq!(v, ComplexValue::new(-1, 0, 0, 0, 2));
    }

    #[test]
    fn test_canonical_zero() {
        assert_eq!(ComplexValue::new(0, 0, 0, 0, 7), ComplexValue::ZERO);
    }

    #[test]
    fn test_i_squared() {
        assert_eq!(ComplexValue::I.mul(&ComplexValue::I), ComplexValue::NEG_ONE);
    }

    #[test]
    fn test_sqrt2_inv_squared_is_half() {
        let half = ComplexValue::new(1, 0, 0, 0, 2);
        assert_eq!(
            ComplexValue::SQRT2_INV.mul(&ComplexValue::SQRT2_INV),
            half
        );
    }

    #[test]
    fn test_omega_times_conjugate_is_one() {
        assert_eq!(
            ComplexValue::OMEGA.mul(&ComplexValue::OMEGA_CONJ),
            ComplexValue::ONE
        );
    }

    #[test]
    fn test_add_inverse() {
        let v = ComplexValue::new(3, -1, 2, 5, 4);
        assert_eq!(v.add(&v.neg()), ComplexValue::ZERO);
    }

    #[test]
    fn test_recip_of_sqrt2_inv() {
        // 1/(1/√2) = √2 = 2/√2
        let sqrt2 = ComplexValue::new(0, 2, 0, 0, 1);
        assert_eq!(ComplexValue::SQRT2_INV.recip().unwrap(), sqrt2);
    }

    #[test]
    fn test_recip_roundtrip() {
        let v = ComplexValue::new(3, -1, 2, 5, 4);
        assert_eq!(v.mul(&v.recip().unwrap()), ComplexValue::ONE);
    }

    #[test]
    fn test_recip_of_zero() {
        assert!(ComplexValue::ZERO.recip().is_none());
    }

    #[test]
    fn test_float_views() {
        assert_abs_diff_eq!(ComplexValue::SQRT2_INV.re(), FRAC_1_SQRT_2);
        assert_abs_diff_eq!(ComplexValue::SQRT2_INV.im(), 0.0);
        assert_abs_diff_eq!(ComplexValue::OMEGA.im(), FRAC_1_SQRT_2);
        assert_abs_diff_eq!(ComplexValue::I.mag2(), 1.0);
        assert_abs_diff_eq!(ComplexValue::SQRT2_INV.mag2(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_to_complex64() {
        let z = ComplexValue::OMEGA.to_complex64();
        assert_abs_diff_eq!(z.re, FRAC_1_SQRT_2);
        assert_abs_diff_eq!(z.im, FRAC_1_SQRT_2);
    }
}
