//! Tolerance-bounded scalar values with worst-case propagating arithmetic.
//!
//! An [`Interval`] is a typical (nominal) value plus two independent,
//! non-negative tolerance magnitudes:
//!
//! ```text
//!   min = typical - minus        max = typical + plus
//! ```
//!
//! Either magnitude may be absent, which leaves that side unbounded. Any
//! operation that needs a missing bound fails with
//! [`DividerError::MissingBound`] instead of assuming zero.
//!
//! Arithmetic between intervals accumulates the worst case: sums add the
//! magnitudes, products and quotients take the extremes over the corner
//! combinations of both operands. Fallible operations are exposed as
//! `checked_*` methods; scalar shifts and scaling are plain operators.
//!
//! # Example
//!
//! ```
//! use divider_core::interval::{exact, from_symmetric_percent};
//!
//! # fn main() -> divider_core::Result<()> {
//! let v_in = from_symmetric_percent(10.0, 1.0)?;
//! let r_hi = from_symmetric_percent(150e3, 1.0)?;
//! let r_lo = from_symmetric_percent(50e3, 1.0)?;
//!
//! let v_out = v_in.checked_mul(&r_lo)?.checked_div(&r_lo.checked_add(&r_hi)?)?;
//! assert!((v_out.typical() - 2.5).abs() < 1e-12);
//! assert!(v_out.max()? > 2.5 && v_out.min()? < 2.5);
//! assert!(exact(2.5).in_range(2.5)?);
//! # Ok(())
//! # }
//! ```

mod construct;
mod ops;

pub use construct::{
    exact, from_fraction_range, from_min_typ_max, from_percent, from_symmetric_percent, min_max,
    min_typ, symmetric, tolerance, typ_max,
};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BoundSide, DividerError, Result};

/// A value with a nominal magnitude and independent upper/lower tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntervalFields")]
pub struct Interval {
    typical: f64,
    plus: Option<f64>,
    minus: Option<f64>,
}

/// Unvalidated wire form of [`Interval`].
#[derive(Deserialize)]
struct IntervalFields {
    typical: f64,
    #[serde(default)]
    plus: Option<f64>,
    #[serde(default)]
    minus: Option<f64>,
}

impl TryFrom<IntervalFields> for Interval {
    type Error = DividerError;

    fn try_from(fields: IntervalFields) -> Result<Self> {
        Interval::new(fields.typical, fields.plus, fields.minus)
    }
}

impl Interval {
    /// Create an interval from a typical value and tolerance magnitudes.
    ///
    /// Magnitudes must be finite and non-negative.
    pub fn new(typical: f64, plus: Option<f64>, minus: Option<f64>) -> Result<Self> {
        if !typical.is_finite() {
            return Err(DividerError::invalid_interval(format!(
                "typical value must be finite, got {typical}"
            )));
        }
        for (name, magnitude) in [("plus", plus), ("minus", minus)] {
            if let Some(m) = magnitude {
                if !(m >= 0.0) || !m.is_finite() {
                    return Err(DividerError::invalid_interval(format!(
                        "{name} tolerance must be a finite non-negative magnitude, got {m}"
                    )));
                }
            }
        }
        Ok(Self::from_parts(typical, plus, minus))
    }

    /// Build without validation. Arithmetic results go through here since
    /// their magnitudes are non-negative by construction.
    pub(crate) const fn from_parts(typical: f64, plus: Option<f64>, minus: Option<f64>) -> Self {
        Self {
            typical,
            plus,
            minus,
        }
    }

    /// Typical (nominal) value.
    pub fn typical(&self) -> f64 {
        self.typical
    }

    /// Upper tolerance magnitude, if bounded above.
    pub fn plus(&self) -> Option<f64> {
        self.plus
    }

    /// Lower tolerance magnitude, if bounded below.
    pub fn minus(&self) -> Option<f64> {
        self.minus
    }

    /// Upper bound, `typical + plus`.
    pub fn max(&self) -> Result<f64> {
        self.plus
            .map(|p| self.typical + p)
            .ok_or(DividerError::missing_bound(BoundSide::Upper))
    }

    /// Lower bound, `typical - minus`.
    pub fn min(&self) -> Result<f64> {
        self.minus
            .map(|m| self.typical - m)
            .ok_or(DividerError::missing_bound(BoundSide::Lower))
    }

    /// Midpoint between the bounds (differs from `typical` when asymmetric).
    pub fn center(&self) -> Result<f64> {
        let (lo, hi) = self.bounds()?;
        Ok(lo + 0.5 * (hi - lo))
    }

    /// Both bounds as `(min, max)`.
    pub fn bounds(&self) -> Result<(f64, f64)> {
        Ok((self.min()?, self.max()?))
    }

    /// Width of the window, `max - min`.
    pub fn tolerance_span(&self) -> Result<f64> {
        let (lo, hi) = self.bounds()?;
        Ok(hi - lo)
    }

    /// True when both tolerance magnitudes are present.
    pub fn is_fully_specified(&self) -> bool {
        self.plus.is_some() && self.minus.is_some()
    }

    /// Check whether a scalar lies inside the closed window.
    pub fn in_range(&self, value: f64) -> Result<bool> {
        let (lo, hi) = self.bounds()?;
        Ok(lo <= value && value <= hi)
    }

    /// Check whether `other` is nested inside this interval (`self ⊇ other`).
    ///
    /// This is the compliance test used by the solver, not an overlap test.
    pub fn contains(&self, other: &Interval) -> Result<bool> {
        let (lo, hi) = self.bounds()?;
        let (other_lo, other_hi) = other.bounds()?;
        Ok(other_lo >= lo && other_hi <= hi)
    }

    /// Upper tolerance as a percentage of the typical value.
    pub fn plus_percent(&self) -> Result<f64> {
        let plus = self
            .plus
            .ok_or(DividerError::missing_bound(BoundSide::Upper))?;
        self.relative_percent(plus)
    }

    /// Lower tolerance as a percentage of the typical value.
    pub fn minus_percent(&self) -> Result<f64> {
        let minus = self
            .minus
            .ok_or(DividerError::missing_bound(BoundSide::Lower))?;
        self.relative_percent(minus)
    }

    fn relative_percent(&self, magnitude: f64) -> Result<f64> {
        if self.typical == 0.0 {
            return Err(DividerError::invalid_interval(
                "typical value must be non-zero to express a relative tolerance",
            ));
        }
        Ok(100.0 * magnitude / self.typical)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min(), self.max()) {
            (Ok(lo), Ok(hi)) => write!(f, "{} <= {} <= {}", lo, self.typical, hi),
            (Ok(lo), Err(_)) => write!(f, "{} <= typ:{}", lo, self.typical),
            (Err(_), Ok(hi)) => write!(f, "typ:{} <= {}", self.typical, hi),
            (Err(_), Err(_)) => write!(f, "{}", self.typical),
        }
    }
}
