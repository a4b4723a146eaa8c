//! Interval arithmetic.
//!
//! Interval-by-interval operations need both bounds of both operands and are
//! fallible (`checked_*`). Scalar shifts and scaling never read the bounds,
//! so they are plain `std::ops` operators.

use std::ops::{Add, Mul, Sub};

use super::{from_min_typ_max, Interval};
use crate::error::{BoundSide, DividerError, Result};

impl Interval {
    /// Both tolerance magnitudes, or the first missing side.
    fn magnitudes(&self) -> Result<(f64, f64)> {
        let plus = self
            .plus()
            .ok_or(DividerError::missing_bound(BoundSide::Upper))?;
        let minus = self
            .minus()
            .ok_or(DividerError::missing_bound(BoundSide::Lower))?;
        Ok((plus, minus))
    }

    /// Worst-case sum: magnitudes accumulate on each side.
    pub fn checked_add(&self, other: &Interval) -> Result<Interval> {
        let (a_plus, a_minus) = self.magnitudes()?;
        let (b_plus, b_minus) = other.magnitudes()?;
        Ok(Interval::from_parts(
            self.typical() + other.typical(),
            Some(a_plus + b_plus),
            Some(a_minus + b_minus),
        ))
    }

    /// Worst-case difference: the subtrahend's bounds cross over.
    pub fn checked_sub(&self, other: &Interval) -> Result<Interval> {
        let (a_plus, a_minus) = self.magnitudes()?;
        let (b_plus, b_minus) = other.magnitudes()?;
        Ok(Interval::from_parts(
            self.typical() - other.typical(),
            Some(a_plus + b_minus),
            Some(a_minus + b_plus),
        ))
    }

    /// Worst-case product over the four corner combinations.
    ///
    /// Handles operands that straddle zero, where the extremes are not
    /// simply `min*min` and `max*max`.
    pub fn checked_mul(&self, other: &Interval) -> Result<Interval> {
        let (a_lo, a_hi) = self.bounds()?;
        let (b_lo, b_hi) = other.bounds()?;
        let typical = self.typical() * other.typical();

        let corners = [a_lo * b_lo, a_lo * b_hi, a_hi * b_lo, a_hi * b_hi];
        let highest = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lowest = corners.iter().copied().fold(f64::INFINITY, f64::min);

        Ok(Interval::from_parts(
            typical,
            Some(highest - typical),
            Some(typical - lowest),
        ))
    }

    /// Reciprocal `1 / self`; fails if the window contains zero.
    pub fn recip(&self) -> Result<Interval> {
        if self.in_range(0.0)? {
            return Err(DividerError::DivideByZeroInterval { divisor: *self });
        }
        let (lo, hi) = self.bounds()?;
        let typical = 1.0 / self.typical();
        Ok(Interval::from_parts(
            typical,
            Some(1.0 / lo - typical),
            Some(typical - 1.0 / hi),
        ))
    }

    /// Worst-case quotient, `self * other.recip()`.
    pub fn checked_div(&self, other: &Interval) -> Result<Interval> {
        self.checked_mul(&other.recip()?)
    }

    /// Divide by a positive scalar.
    ///
    /// Negative divisors are rejected because they would swap the meaning
    /// of the plus/minus magnitudes.
    pub fn checked_div_scalar(&self, divisor: f64) -> Result<Interval> {
        if divisor == 0.0 {
            return Err(DividerError::DivideByZero);
        }
        if divisor < 0.0 {
            return Err(DividerError::NegativeDivisor { divisor });
        }
        Ok(Interval::from_parts(
            self.typical() / divisor,
            self.plus().map(|p| p / divisor),
            self.minus().map(|m| m / divisor),
        ))
    }

    /// Map a monotonic function over the interval.
    ///
    /// The function is evaluated at min, typical and max, then the endpoints
    /// are re-ordered, so decreasing functions are supported too.
    pub fn apply<F>(&self, f: F) -> Result<Interval>
    where
        F: Fn(f64) -> f64,
    {
        let (lo, hi) = self.bounds()?;
        let at_lo = f(lo);
        let at_hi = f(hi);
        from_min_typ_max(
            Some(at_lo.min(at_hi)),
            Some(f(self.typical())),
            Some(at_lo.max(at_hi)),
        )
    }
}

impl Add<f64> for Interval {
    type Output = Interval;

    fn add(self, rhs: f64) -> Interval {
        Interval::from_parts(self.typical() + rhs, self.plus(), self.minus())
    }
}

impl Sub<f64> for Interval {
    type Output = Interval;

    fn sub(self, rhs: f64) -> Interval {
        Interval::from_parts(self.typical() - rhs, self.plus(), self.minus())
    }
}

impl Mul<f64> for Interval {
    type Output = Interval;

    fn mul(self, rhs: f64) -> Interval {
        Interval::from_parts(
            self.typical() * rhs,
            self.plus().map(|p| (p * rhs).abs()),
            self.minus().map(|m| (m * rhs).abs()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::{exact, from_symmetric_percent, min_typ, tolerance};
    use approx::assert_relative_eq;

    fn iv(typical: f64, plus: f64, minus: f64) -> Interval {
        tolerance(typical, Some(plus), Some(minus)).unwrap()
    }

    #[test]
    fn test_add_sub_magnitudes() {
        let a = iv(10.0, 1.0, 0.5);
        let b = iv(3.0, 0.2, 0.1);

        let sum = a.checked_add(&b).unwrap();
        assert_relative_eq!(sum.typical(), 13.0);
        assert_relative_eq!(sum.plus().unwrap(), 1.2);
        assert_relative_eq!(sum.minus().unwrap(), 0.6);

        let diff = a.checked_sub(&b).unwrap();
        assert_relative_eq!(diff.typical(), 7.0);
        assert_relative_eq!(diff.plus().unwrap(), 1.1);
        assert_relative_eq!(diff.minus().unwrap(), 0.7);
    }

    #[test]
    fn test_additive_identity() {
        let a = iv(4.7, 0.3, 0.1);
        let same = a.checked_sub(&exact(0.0)).unwrap().checked_add(&exact(0.0)).unwrap();
        assert_eq!(same, a);
    }

    #[test]
    fn test_arithmetic_requires_full_tolerance() {
        let open = min_typ(1.0, 2.0).unwrap();
        let closed = iv(1.0, 0.1, 0.1);
        assert!(matches!(
            open.checked_add(&closed),
            Err(DividerError::MissingBound { .. })
        ));
        assert!(closed.checked_sub(&open).is_err());
        assert!(closed.checked_mul(&open).is_err());
        assert!(open.checked_div(&closed).is_err());
    }

    #[test]
    fn test_scalar_ops() {
        let a = iv(10.0, 1.0, 2.0);
        let shifted = a + 5.0;
        assert_relative_eq!(shifted.typical(), 15.0);
        assert_eq!(shifted.plus(), Some(1.0));
        let lowered = a - 5.0;
        assert_relative_eq!(lowered.typical(), 5.0);
        assert_eq!(lowered.minus(), Some(2.0));

        let scaled = a * -2.0;
        assert_relative_eq!(scaled.typical(), -20.0);
        assert_relative_eq!(scaled.plus().unwrap(), 2.0);
        assert_relative_eq!(scaled.minus().unwrap(), 4.0);
    }

    #[test]
    fn test_mul_straddling_zero() {
        let around_zero = iv(0.0, 5.0, 5.0);
        let positive = iv(2.0, 1.0, 1.0);
        let product = around_zero.checked_mul(&positive).unwrap();
        assert_relative_eq!(product.typical(), 0.0);
        assert_relative_eq!(product.max().unwrap(), 15.0);
        assert_relative_eq!(product.min().unwrap(), -15.0);
    }

    #[test]
    fn test_mul_negative_operands() {
        let neg = iv(-3.0, 1.0, 1.0); // [-4, -2]
        let pos = iv(2.0, 1.0, 1.0); // [1, 3]
        let product = neg.checked_mul(&pos).unwrap();
        assert_relative_eq!(product.typical(), -6.0);
        assert_relative_eq!(product.min().unwrap(), -12.0);
        assert_relative_eq!(product.max().unwrap(), -2.0);
    }

    #[test]
    fn test_div_by_zero_spanning_interval() {
        let num = iv(1.0, 0.1, 0.1);
        assert!(matches!(
            num.checked_div(&iv(0.0, 1.0, 1.0)),
            Err(DividerError::DivideByZeroInterval { .. })
        ));
        // typical is non-zero but the window still crosses zero
        assert!(matches!(
            num.checked_div(&iv(1.0, 1.0, 2.0)),
            Err(DividerError::DivideByZeroInterval { .. })
        ));
        // zero on the edge of the window
        assert!(num.checked_div(&iv(1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn test_div_bounds() {
        let num = iv(10.0, 0.0, 0.0);
        let den = iv(4.0, 1.0, 2.0); // [2, 5]
        let q = num.checked_div(&den).unwrap();
        assert_relative_eq!(q.typical(), 2.5);
        assert_relative_eq!(q.max().unwrap(), 5.0);
        assert_relative_eq!(q.min().unwrap(), 2.0);
    }

    #[test]
    fn test_div_scalar() {
        let a = iv(10.0, 1.0, 2.0);
        let half = a.checked_div_scalar(2.0).unwrap();
        assert_relative_eq!(half.typical(), 5.0);
        assert_relative_eq!(half.minus().unwrap(), 1.0);
        assert!(matches!(
            a.checked_div_scalar(0.0),
            Err(DividerError::DivideByZero)
        ));
        assert!(matches!(
            a.checked_div_scalar(-1.0),
            Err(DividerError::NegativeDivisor { .. })
        ));
    }

    #[test]
    fn test_apply_decreasing_function() {
        let a = iv(2.0, 2.0, 1.0); // [1, 4]
        let inverted = a.apply(|x| 1.0 / x).unwrap();
        assert_relative_eq!(inverted.typical(), 0.5);
        assert_relative_eq!(inverted.min().unwrap(), 0.25);
        assert_relative_eq!(inverted.max().unwrap(), 1.0);
    }

    #[test]
    fn test_divider_ratio_widens_with_tolerance() {
        let v_in = from_symmetric_percent(10.0, 1.0).unwrap();
        let r_hi = from_symmetric_percent(150e3, 1.0).unwrap();
        let r_lo = from_symmetric_percent(50e3, 1.0).unwrap();
        let out = v_in
            .checked_mul(&r_lo)
            .unwrap()
            .checked_div(&r_lo.checked_add(&r_hi).unwrap())
            .unwrap();
        assert_relative_eq!(out.typical(), 2.5, epsilon = 1e-12);
        assert!(out.max().unwrap() > 2.5 * 1.01);
        assert!(out.min().unwrap() < 2.5 * 0.99);
    }
}
