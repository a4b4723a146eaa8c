//! Sourced resistor part records.

use serde::{Deserialize, Serialize};

use crate::error::{DividerError, Result};
use crate::interval::Interval;

/// Manufacturing tolerance of a resistor, in percent of its nominal value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceSpec {
    /// `±pct` around the nominal value
    SymmetricPercent(f64),
    /// `(min_pct, max_pct)` relative window, e.g. `(-1.0, 2.0)`
    AsymmetricMinMax(f64, f64),
}

impl ToleranceSpec {
    /// Worst-side tolerance in percent, used to compare against a precision tier.
    pub fn precision(&self) -> f64 {
        match *self {
            ToleranceSpec::SymmetricPercent(pct) => pct.abs(),
            ToleranceSpec::AsymmetricMinMax(min, max) => min.abs().max(max.abs()),
        }
    }

    /// Resistance window of a part with this tolerance.
    pub fn around(&self, resistance: f64) -> Interval {
        let (plus_pct, minus_pct) = match *self {
            ToleranceSpec::SymmetricPercent(pct) => (pct, pct),
            ToleranceSpec::AsymmetricMinMax(min, max) => (max, min),
        };
        Interval::from_parts(
            resistance,
            Some((resistance * plus_pct / 100.0).abs()),
            Some((resistance * minus_pct / 100.0).abs()),
        )
    }
}

/// Temperature coefficient of resistance.
///
/// Both magnitudes are in parts-per-unit per °C, so 100 ppm/°C is `100e-6`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tcr {
    /// Upward drift coefficient
    pub pos: f64,
    /// Downward drift coefficient
    pub neg: f64,
}

impl Tcr {
    /// Create a TCR from a symmetric ppm/°C rating.
    pub fn from_ppm(ppm: f64) -> Self {
        let coeff = ppm.abs() / 1e6;
        Self {
            pos: coeff,
            neg: coeff,
        }
    }

    /// Multiplicative drift window `1 + ΔT * tcr` for a temperature offset.
    ///
    /// The upper side always uses `pos` and the lower side `neg`, whatever
    /// the sign of `delta_t`.
    pub fn drift(&self, delta_t: f64) -> Interval {
        Interval::from_parts(
            1.0,
            Some((delta_t * self.pos).abs()),
            Some((delta_t * self.neg).abs()),
        )
    }
}

/// A sourced resistor as returned by a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Manufacturer part number
    pub mpn: String,
    /// Manufacturer name
    pub manufacturer: String,
    /// Nominal resistance in ohms
    pub resistance: f64,
    /// Manufacturing tolerance
    pub tolerance: ToleranceSpec,
    /// Temperature coefficient, when the catalog knows it
    #[serde(default)]
    pub tcr: Option<Tcr>,
}

impl PartRecord {
    /// Nominal resistance widened by the part's tolerance.
    pub fn resistance_interval(&self) -> Interval {
        self.tolerance.around(self.resistance)
    }

    /// Worst-side tolerance in percent.
    pub fn precision(&self) -> f64 {
        self.tolerance.precision()
    }

    /// Drift window at `temperature` relative to `reference`.
    pub fn drift_at(&self, temperature: f64, reference: f64) -> Result<Interval> {
        let tcr = self
            .tcr
            .ok_or_else(|| DividerError::MissingTemperatureCoefficient {
                mpn: self.mpn.clone(),
            })?;
        Ok(tcr.drift(temperature - reference))
    }
}
