//! Temperature study of a sourced pair.
//!
//! Each resistor is scaled by `1 ± ΔT * tcr` with `ΔT` measured from
//! [`REFERENCE_TEMPERATURE`]. The study evaluates the two ends of the
//! configured temperature range; without a range it evaluates a single
//! point at the reference temperature with no drift, and TCR data is not
//! required.

use serde::Serialize;

use super::REFERENCE_TEMPERATURE;
use crate::catalog::PartRecord;
use crate::constraints::Constraints;
use crate::error::Result;
use crate::interval::exact;
use crate::interval::Interval;

/// Output of a sourced pair at one temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperaturePoint {
    /// Temperature in °C, `None` for the drift-free point
    pub temperature: Option<f64>,
    pub v_out: Interval,
    pub compliant: bool,
}

/// Evaluate a sourced pair across the configured temperature range.
///
/// Fails with `MissingTemperatureCoefficient` when a range is configured
/// and either part has no TCR.
pub fn study_solution(
    constraints: &Constraints,
    r_high: &PartRecord,
    r_low: &PartRecord,
) -> Result<Vec<TemperaturePoint>> {
    let temperatures = match constraints.temperature_range() {
        Some(range) => vec![Some(range.min()?), Some(range.max()?)],
        None => vec![None],
    };

    let high = r_high.resistance_interval();
    let low = r_low.resistance_interval();

    temperatures
        .into_iter()
        .map(|temperature| {
            let (high_drift, low_drift) = match temperature {
                Some(t) => (
                    r_high.drift_at(t, REFERENCE_TEMPERATURE)?,
                    r_low.drift_at(t, REFERENCE_TEMPERATURE)?,
                ),
                None => (exact(1.0), exact(1.0)),
            };
            let v_out = constraints.objective(&high, &low, &high_drift, &low_drift)?;
            Ok(TemperaturePoint {
                temperature,
                v_out,
                compliant: constraints.is_compliant(&v_out)?,
            })
        })
        .collect()
}
