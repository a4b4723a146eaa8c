//! Voltage divider constraints.
//!
//! A [`Constraints`] value fixes the input window, the required output
//! window and the current budget of a two-resistor divider, together with
//! the [`SolverConfig`] for the search. The orientation is chosen by
//! [`DividerKind`]:
//!
//! | Kind | Output | Initial guess `(R_high, R_low)` |
//! |------|--------|---------------------------------|
//! | `Forward` | `v_in * R_low / (R_high + R_low)` | `((v_in - v_out) / I, v_out / I)` |
//! | `Inverse` | `v_in * (1 + R_high / R_low)` | `((v_out - v_in) / I, v_in / I)` |
//!
//! The inverse form is the feedback network of a regulator: `v_in` is the
//! reference voltage at the tap and `v_out` the regulated rail. Each
//! resistance may be scaled by a temperature drift window before the
//! formula is applied.

mod config;
mod validate;

pub use config::SolverConfig;
pub use validate::{validate_config, validate_current};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogFilter;
use crate::error::Result;
use crate::interval::{exact, from_symmetric_percent, Interval};

/// Default precision tiers in percent, loosest first.
pub const DEFAULT_PRECISION_SERIES: [f64; 8] = [20.0, 10.0, 5.0, 2.0, 1.0, 0.5, 0.25, 0.1];

/// Default candidate search window in percent.
pub const DEFAULT_SEARCH_RANGE: f64 = 10.0;

/// Default number of sources required per value.
pub const DEFAULT_MIN_SOURCES: usize = 3;

/// Default catalog query cap.
pub const DEFAULT_QUERY_LIMIT: usize = 50;

/// Typical operating window, 0 °C to 25 °C.
pub const DEFAULT_OPERATING_TEMPERATURE: Interval =
    Interval::from_parts(12.5, Some(12.5), Some(12.5));

/// Orientation of the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerKind {
    /// `v_out` is tapped between the resistors
    Forward,
    /// `v_in` is the tap voltage and `v_out` the top of the chain
    Inverse,
}

impl fmt::Display for DividerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DividerKind::Forward => write!(f, "forward"),
            DividerKind::Inverse => write!(f, "inverse"),
        }
    }
}

/// Validated requirements for one divider search.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    kind: DividerKind,
    v_in: Interval,
    v_out: Interval,
    current: f64,
    config: SolverConfig,
}

impl Constraints {
    /// Create constraints, validating the current and configuration.
    ///
    /// The precision series is stored sorted loosest first.
    pub fn new(
        kind: DividerKind,
        v_in: Interval,
        v_out: Interval,
        current: f64,
        mut config: SolverConfig,
    ) -> Result<Self> {
        validate_current(current)?;
        validate_config(&config)?;
        config.precision_series.sort_by(|a, b| b.total_cmp(a));

        Ok(Self {
            kind,
            v_in,
            v_out,
            current,
            config,
        })
    }

    /// Forward divider: `v_out` is a fraction of `v_in`.
    pub fn forward(v_in: Interval, v_out: Interval, current: f64, config: SolverConfig) -> Result<Self> {
        Self::new(DividerKind::Forward, v_in, v_out, current, config)
    }

    /// Inverse divider: `v_in` is the tap voltage, `v_out` the rail.
    pub fn inverse(v_in: Interval, v_out: Interval, current: f64, config: SolverConfig) -> Result<Self> {
        Self::new(DividerKind::Inverse, v_in, v_out, current, config)
    }

    pub fn kind(&self) -> DividerKind {
        self.kind
    }

    pub fn v_in(&self) -> &Interval {
        &self.v_in
    }

    pub fn v_out(&self) -> &Interval {
        &self.v_out
    }

    /// Current budget through the divider, in amperes.
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Precision tiers, loosest first.
    pub fn precision_series(&self) -> &[f64] {
        &self.config.precision_series
    }

    pub fn search_range(&self) -> f64 {
        self.config.search_range
    }

    pub fn min_sources(&self) -> usize {
        self.config.min_sources
    }

    pub fn query_limit(&self) -> usize {
        self.config.query_limit
    }

    pub fn temperature_range(&self) -> Option<Interval> {
        self.config.temperature_range
    }

    pub fn catalog_query(&self) -> &CatalogFilter {
        &self.config.catalog_query
    }

    /// Ideal `(R_high, R_low)` from the typical voltages and the current.
    ///
    /// Either value may come out non-positive when the voltages do not suit
    /// the orientation; the solver rejects that.
    pub fn initial_guess(&self) -> (f64, f64) {
        let (v_in, v_out) = (self.v_in.typical(), self.v_out.typical());
        match self.kind {
            DividerKind::Forward => ((v_in - v_out) / self.current, v_out / self.current),
            DividerKind::Inverse => ((v_out - v_in) / self.current, v_in / self.current),
        }
    }

    /// Output window of a resistor pair, each side scaled by its drift.
    pub fn objective(
        &self,
        r_high: &Interval,
        r_low: &Interval,
        high_drift: &Interval,
        low_drift: &Interval,
    ) -> Result<Interval> {
        let r_high = r_high.checked_mul(high_drift)?;
        let r_low = r_low.checked_mul(low_drift)?;
        match self.kind {
            DividerKind::Forward => self
                .v_in
                .checked_mul(&r_low)?
                .checked_div(&r_low.checked_add(&r_high)?),
            DividerKind::Inverse => self.v_in.checked_mul(&(r_high.checked_div(&r_low)? + 1.0)),
        }
    }

    /// Output window of a resistor pair without drift.
    pub fn objective_ideal(&self, r_high: &Interval, r_low: &Interval) -> Result<Interval> {
        let unity = exact(1.0);
        self.objective(r_high, r_low, &unity, &unity)
    }

    /// Whether an output window lies inside the required `v_out`.
    pub fn is_compliant(&self, v_out: &Interval) -> Result<bool> {
        self.v_out.contains(v_out)
    }

    /// Score a candidate pair with both resistors at `precision` percent.
    ///
    /// Returns the distance between the typical output and the target
    /// typical, or `None` when the output window is not compliant. Only the
    /// typical value is scored; a narrower output window is not preferred.
    pub fn compute_loss(&self, r_high: f64, r_low: f64, precision: f64) -> Result<Option<f64>> {
        let output = self.objective_ideal(
            &from_symmetric_percent(r_high, precision)?,
            &from_symmetric_percent(r_low, precision)?,
        )?;
        if self.is_compliant(&output)? {
            Ok(Some((self.v_out.typical() - output.typical()).abs()))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DividerError;
    use crate::interval::{from_min_typ_max, min_max};
    use approx::assert_relative_eq;

    fn forward() -> Constraints {
        Constraints::forward(
            from_symmetric_percent(10.0, 1.0).unwrap(),
            from_symmetric_percent(2.5, 5.0).unwrap(),
            50e-6,
            SolverConfig::default(),
        )
        .unwrap()
    }

    fn inverse() -> Constraints {
        Constraints::inverse(
            from_min_typ_max(Some(0.788), Some(0.8), Some(0.812)).unwrap(),
            from_symmetric_percent(3.3, 2.0).unwrap(),
            50e-6,
            SolverConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_guess_forward() {
        let (high, low) = forward().initial_guess();
        assert_relative_eq!(high, 150_000.0, max_relative = 1e-12);
        assert_relative_eq!(low, 50_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_initial_guess_inverse() {
        let (high, low) = inverse().initial_guess();
        assert_relative_eq!(high, 50_000.0, max_relative = 1e-12);
        assert_relative_eq!(low, 16_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_objective_ideal_forward() {
        let c = forward();
        let out = c.objective_ideal(&exact(150e3), &exact(50e3)).unwrap();
        assert_relative_eq!(out.typical(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(out.max().unwrap(), 2.525, epsilon = 1e-12);
        assert!(c.is_compliant(&out).unwrap());
    }

    #[test]
    fn test_objective_ideal_inverse() {
        let c = inverse();
        let out = c.objective_ideal(&exact(45e3), &exact(15e3)).unwrap();
        assert_relative_eq!(out.typical(), 3.2, epsilon = 1e-12);
        assert_relative_eq!(out.min().unwrap(), 0.788 * 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_drift_widens_objective() {
        let c = forward();
        let r_high = exact(150e3);
        let r_low = exact(50e3);
        let still = c.objective_ideal(&r_high, &r_low).unwrap();
        let drift = min_max(0.99, 1.01).unwrap();
        let drifting = c.objective(&r_high, &r_low, &drift, &drift).unwrap();
        assert!(drifting.tolerance_span().unwrap() > still.tolerance_span().unwrap());
    }

    #[test]
    fn test_compute_loss() {
        let c = forward();
        let loss = c.compute_loss(150e3, 50e3, 1.0).unwrap().unwrap();
        assert!(loss < 1e-9);

        let off = c.compute_loss(165e3, 54.9e3, 1.0).unwrap().unwrap();
        assert!(off > loss);

        // typical is far outside the ±5 % window
        assert!(c.compute_loss(100e3, 100e3, 1.0).unwrap().is_none());
        // right ratio but 20 % parts blow the window
        assert!(c.compute_loss(150e3, 50e3, 20.0).unwrap().is_none());
    }

    #[test]
    fn test_precision_series_sorted_descending() {
        let config = SolverConfig::new().with_precision_series([0.1, 5.0, 1.0, 20.0]);
        let c = Constraints::forward(exact(10.0), exact(2.5), 1e-3, config).unwrap();
        assert_eq!(c.precision_series(), &[20.0, 5.0, 1.0, 0.1]);
    }

    #[test]
    fn test_rejects_bad_input() {
        let config = SolverConfig::new().with_min_sources(60);
        assert!(matches!(
            Constraints::forward(exact(10.0), exact(2.5), 1e-3, config),
            Err(DividerError::InvalidConfig { .. })
        ));
        assert!(matches!(
            Constraints::forward(exact(10.0), exact(2.5), 0.0, SolverConfig::default()),
            Err(DividerError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_default_operating_temperature() {
        assert_eq!(DEFAULT_OPERATING_TEMPERATURE, min_max(0.0, 25.0).unwrap());
    }
}
