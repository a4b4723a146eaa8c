//! Free constructor functions for [`Interval`].

use super::Interval;
use crate::error::{DividerError, Result};

/// A zero-width interval.
pub fn exact(value: f64) -> Interval {
    Interval::from_parts(value, Some(0.0), Some(0.0))
}

/// An interval from absolute tolerance magnitudes.
pub fn tolerance(typical: f64, plus: Option<f64>, minus: Option<f64>) -> Result<Interval> {
    Interval::new(typical, plus, minus)
}

/// An interval with the same absolute magnitude on both sides.
pub fn symmetric(typical: f64, plus_minus: f64) -> Result<Interval> {
    Interval::new(typical, Some(plus_minus), Some(plus_minus))
}

/// An interval from asymmetric percentages of the typical value.
///
/// Percentages are relative to `|typical|` and must lie in `0.0..=100.0`.
pub fn from_percent(typical: f64, plus_pct: f64, minus_pct: f64) -> Result<Interval> {
    check_percent(plus_pct)?;
    check_percent(minus_pct)?;
    let magnitude = typical.abs();
    Interval::new(
        typical,
        Some(magnitude * plus_pct / 100.0),
        Some(magnitude * minus_pct / 100.0),
    )
}

/// An interval with a symmetric percentage tolerance.
pub fn from_symmetric_percent(typical: f64, pct: f64) -> Result<Interval> {
    check_percent(pct)?;
    let delta = (typical * pct / 100.0).abs();
    Interval::new(typical, Some(delta), Some(delta))
}

/// An interval from any two (or all three) of min, typical and max.
///
/// - all three: validates `min <= typ <= max`
/// - min and max: typical is the midpoint
/// - typ and min (or typ and max): the other side is left unbounded
pub fn from_min_typ_max(min: Option<f64>, typ: Option<f64>, max: Option<f64>) -> Result<Interval> {
    for value in [min, typ, max].into_iter().flatten() {
        if !value.is_finite() {
            return Err(DividerError::invalid_interval(format!(
                "min-typ-max values must be finite, got {value}"
            )));
        }
    }

    match (min, typ, max) {
        (Some(lo), Some(t), Some(hi)) => {
            if t < lo || hi < t {
                return Err(DividerError::invalid_interval(format!(
                    "min-typ-max should be [min] <= [typ] <= [max], got {lo} / {t} / {hi}"
                )));
            }
            Interval::new(t, Some(hi - t), Some(t - lo))
        }
        (Some(lo), None, Some(hi)) => {
            if hi < lo {
                return Err(DividerError::invalid_interval(format!(
                    "min-max should have max >= min, got {lo} / {hi}"
                )));
            }
            let t = lo + 0.5 * (hi - lo);
            Interval::new(t, Some(hi - t), Some(t - lo))
        }
        (Some(lo), Some(t), None) => {
            if t < lo {
                return Err(DividerError::invalid_interval(format!(
                    "min-typ should have min <= typ, got {lo} / {t}"
                )));
            }
            Interval::new(t, None, Some(t - lo))
        }
        (None, Some(t), Some(hi)) => {
            if t > hi {
                return Err(DividerError::invalid_interval(format!(
                    "typ-max should have typ <= max, got {t} / {hi}"
                )));
            }
            Interval::new(t, Some(hi - t), None)
        }
        _ => Err(DividerError::invalid_interval(
            "min-typ-max needs at least two of min, typ, max",
        )),
    }
}

/// An interval defined by absolute min and max.
pub fn min_max(min: f64, max: f64) -> Result<Interval> {
    from_min_typ_max(Some(min), None, Some(max))
}

/// An interval with an absolute minimum and no upper bound.
pub fn min_typ(min: f64, typ: f64) -> Result<Interval> {
    from_min_typ_max(Some(min), Some(typ), None)
}

/// An interval with an absolute maximum and no lower bound.
pub fn typ_max(typ: f64, max: f64) -> Result<Interval> {
    from_min_typ_max(None, Some(typ), Some(max))
}

/// Scale `typical` by a relative window, `typical * [1 + min_frac, 1 + max_frac]`.
///
/// Used for part tolerances given as fractions, e.g. `(-0.01, 0.02)`.
pub fn from_fraction_range(typical: f64, min_frac: f64, max_frac: f64) -> Result<Interval> {
    Ok(min_max(1.0 + min_frac, 1.0 + max_frac)? * typical)
}

fn check_percent(pct: f64) -> Result<()> {
    if (0.0..=100.0).contains(&pct) {
        Ok(())
    } else {
        Err(DividerError::InvalidPercent { value: pct })
    }
}
