//! Double-double arithmetic, carrying roughly 106 bits of mantissa.

use crate::math::Real;
use core::ops::{Add, Mul, Neg, Sub};

/// An unevaluated sum `hi + lo` of two floats with `|lo| <= ulp(hi) / 2`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct DoubleDouble {
    /// The leading component.
    pub hi: Real,
    /// The rounding error of `hi`.
    pub lo: Real,
}

/// Error-free sum: `a + b == s + e` exactly.
#[inline]
fn two_sum(a: Real, b: Real) -> (Real, Real) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Error-free sum assuming `|a| >= |b|`.
#[inline]
fn quick_two_sum(a: Real, b: Real) -> (Real, Real) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// Error-free product: `a * b == p + e` exactly.
#[inline]
fn two_prod(a: Real, b: Real) -> (Real, Real) {
    let p = a * b;
    let e = a.mul_add(b, -p);
    (p, e)
}

impl DoubleDouble {
    /// The double-double equal to `value`.
    #[inline]
    pub const fn new(value: Real) -> Self {
        Self { hi: value, lo: 0.0 }
    }

    /// The exact difference `a - b`.
    #[inline]
    pub fn difference(a: Real, b: Real) -> Self {
        let (hi, lo) = two_sum(a, -b);
        Self { hi, lo }
    }

    /// The sign of this value: `-1`, `0` or `1`.
    #[inline]
    pub fn signum(self) -> i32 {
        if self.hi > 0.0 {
            1
        } else if self.hi < 0.0 {
            -1
        } else if self.lo > 0.0 {
            1
        } else if self.lo < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Is this value zero?
    #[inline]
    pub fn is_zero(self) -> bool {
        self.hi == 0.0 && self.lo == 0.0
    }

    /// The closest float to this value.
    #[inline]
    pub fn to_real(self) -> Real {
        self.hi + self.lo
    }
}

impl From<Real> for DoubleDouble {
    #[inline]
    fn from(value: Real) -> Self {
        Self::new(value)
    }
}

impl Add for DoubleDouble {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (s, e) = two_sum(self.hi, rhs.hi);
        let (t, f) = two_sum(self.lo, rhs.lo);
        let (s, e) = quick_two_sum(s, e + t);
        let (hi, lo) = quick_two_sum(s, e + f);
        Self { hi, lo }
    }
}

impl Neg for DoubleDouble {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Sub for DoubleDouble {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for DoubleDouble {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (p, e) = two_prod(self.hi, rhs.hi);
        let e = e + (self.hi * rhs.lo + self.lo * rhs.hi);
        let (hi, lo) = quick_two_sum(p, e);
        Self { hi, lo }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_is_exact() {
        let d = DoubleDouble::difference(1.0, 1.0e-20);
        assert_eq!(d.hi, 1.0);
        assert_eq!(d.lo, -1.0e-20);
        assert_eq!(d.signum(), 1);
    }

    #[test]
    fn product_keeps_rounding_error() {
        let a = DoubleDouble::new(1.0 + Real::EPSILON);
        let p = a * a;
        // (1 + e)^2 = 1 + 2e + e^2, where e^2 is lost by a plain float product.
        assert_eq!(p.hi, 1.0 + 2.0 * Real::EPSILON);
        assert_eq!(p.lo, Real::EPSILON * Real::EPSILON);
        assert!((p - DoubleDouble::new(p.hi)).signum() > 0);
        assert!((a - a).is_zero());
    }
}
