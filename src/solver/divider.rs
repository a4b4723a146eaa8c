//! Voltage divider solver.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::{rank_candidates, study_solution};
use crate::catalog::{Catalog, PartRecord};
use crate::constraints::{Constraints, SolverConfig};
use crate::error::{DividerError, Result};
use crate::interval::{exact, from_symmetric_percent, Interval};

/// A sourced resistor pair and its output window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageDividerSolution {
    r_high: PartRecord,
    r_low: PartRecord,
    v_out: Interval,
    precision: f64,
}

impl VoltageDividerSolution {
    /// Upper resistor of the chain.
    pub fn r_high(&self) -> &PartRecord {
        &self.r_high
    }

    /// Lower resistor of the chain.
    pub fn r_low(&self) -> &PartRecord {
        &self.r_low
    }

    /// Output window at the first studied temperature point.
    ///
    /// With a temperature range this is the value at the cold end, not the
    /// worst case over the range. Every studied point is compliant either
    /// way.
    pub fn v_out(&self) -> &Interval {
        &self.v_out
    }

    /// Precision tier (percent) the pair was found at.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Split into `(r_high, r_low, v_out)`.
    pub fn into_parts(self) -> (PartRecord, PartRecord, Interval) {
        (self.r_high, self.r_low, self.v_out)
    }
}

/// Resistor-pair solver over a catalog.
pub struct Solver<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: Catalog + ?Sized> Solver<'a, C> {
    /// Create a solver that sources parts from `catalog`.
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Find the best sourceable pair for `constraints`.
    pub fn solve(&self, constraints: &Constraints) -> Result<VoltageDividerSolution> {
        let (guess_high, guess_low) = constraints.initial_guess();
        if !(guess_high > 0.0 && guess_low > 0.0) {
            return Err(DividerError::IncompatibleVinVout {
                v_in: *constraints.v_in(),
                v_out: *constraints.v_out(),
            });
        }
        debug!(
            kind = %constraints.kind(),
            guess_high,
            guess_low,
            "initial guess"
        );

        let ideal = constraints.objective_ideal(&exact(guess_high), &exact(guess_low))?;
        if !constraints.is_compliant(&ideal)? {
            return Err(DividerError::VinRangeTooLarge { screened: ideal });
        }

        let tiers = self.pre_screen(constraints, guess_high, guess_low)?;
        for precision in tiers {
            let found = self.solve_tier(constraints, guess_high, guess_low, precision)?;
            if let Some(solution) = found {
                info!(
                    r_high = solution.r_high.resistance,
                    r_low = solution.r_low.resistance,
                    precision,
                    v_out = %solution.v_out,
                    "found divider"
                );
                return Ok(solution);
            }
            debug!(precision, "no sourced pair at this precision");
        }

        Err(DividerError::NoSolutionFound)
    }

    /// Precision tiers worth searching for an ideal pair, loosest first.
    ///
    /// The ideal pair is evaluated with symmetric tolerance at each tier;
    /// the first compliant tier and every tighter one are returned.
    pub fn pre_screen(
        &self,
        constraints: &Constraints,
        r_high: f64,
        r_low: f64,
    ) -> Result<Vec<f64>> {
        let series = constraints.precision_series();
        for (index, &precision) in series.iter().enumerate() {
            let output = constraints.objective_ideal(
                &from_symmetric_percent(r_high, precision)?,
                &from_symmetric_percent(r_low, precision)?,
            )?;
            if constraints.is_compliant(&output)? {
                debug!(precision, "loosest compliant precision");
                return Ok(series[index..].to_vec());
            }
            trace!(precision, output = %output, "precision too loose");
        }

        Err(DividerError::NoPrecisionSatisfiesConstraints {
            tiers: series.to_vec(),
        })
    }

    /// Search one precision tier; `Ok(None)` moves on to the next tier.
    fn solve_tier(
        &self,
        constraints: &Constraints,
        guess_high: f64,
        guess_low: f64,
        precision: f64,
    ) -> Result<Option<VoltageDividerSolution>> {
        let filter = constraints.catalog_query();
        let limit = constraints.query_limit();
        let search_range = constraints.search_range();

        let highs = self.catalog.distinct_resistances(
            filter,
            &from_symmetric_percent(guess_high, search_range)?,
            precision,
            limit,
        )?;
        let lows = self.catalog.distinct_resistances(
            filter,
            &from_symmetric_percent(guess_low, search_range)?,
            precision,
            limit,
        )?;

        let candidates = rank_candidates(constraints, &highs, &lows, precision)?;
        debug!(
            precision,
            highs = highs.len(),
            lows = lows.len(),
            candidates = candidates.len(),
            "ranked candidates"
        );

        for ratio in candidates {
            let high_parts = self
                .catalog
                .full_parts(filter, ratio.high, precision, limit)?;
            let low_parts = self.catalog.full_parts(filter, ratio.low, precision, limit)?;
            if high_parts.len() < constraints.min_sources()
                || low_parts.len() < constraints.min_sources()
            {
                trace!(
                    high = ratio.high,
                    low = ratio.low,
                    high_sources = high_parts.len(),
                    low_sources = low_parts.len(),
                    "not enough sources"
                );
                continue;
            }

            let (Some(r_high), Some(r_low)) =
                (high_parts.into_iter().next(), low_parts.into_iter().next())
            else {
                continue;
            };

            let points = study_solution(constraints, &r_high, &r_low)?;
            if !points.iter().all(|p| p.compliant) {
                trace!(
                    high = ratio.high,
                    low = ratio.low,
                    "not compliant across temperature"
                );
                continue;
            }

            if let Some(first) = points.first() {
                return Ok(Some(VoltageDividerSolution {
                    r_high,
                    r_low,
                    v_out: first.v_out,
                    precision,
                }));
            }
        }

        Ok(None)
    }
}

/// Find the best sourceable pair for `constraints` in `catalog`.
pub fn solve<C: Catalog + ?Sized>(
    constraints: &Constraints,
    catalog: &C,
) -> Result<VoltageDividerSolution> {
    Solver::new(catalog).solve(constraints)
}

/// Solve a forward divider with the default configuration.
pub fn forward_divider<C: Catalog + ?Sized>(
    v_in: Interval,
    v_out: Interval,
    current: f64,
    catalog: &C,
) -> Result<VoltageDividerSolution> {
    let constraints = Constraints::forward(v_in, v_out, current, SolverConfig::default())?;
    solve(&constraints, catalog)
}

/// Solve an inverse divider with the default configuration.
pub fn inverse_divider<C: Catalog + ?Sized>(
    v_in: Interval,
    v_out: Interval,
    current: f64,
    catalog: &C,
) -> Result<VoltageDividerSolution> {
    let constraints = Constraints::inverse(v_in, v_out, current, SolverConfig::default())?;
    solve(&constraints, catalog)
}
