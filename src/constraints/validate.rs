//! Constraint validation.

use crate::error::{DividerError, Result};

use super::SolverConfig;

/// Validate the supply current of a divider.
pub fn validate_current(current: f64) -> Result<()> {
    if !current.is_finite() || current <= 0.0 {
        return Err(DividerError::invalid_config(format!(
            "current must be a finite positive value, got {}",
            current
        )));
    }
    Ok(())
}

/// Validate a solver configuration.
///
/// Checks:
/// - Every precision tier is in `(0, 100]`
/// - The search range is in `[0, 100]`
/// - At least one result per catalog query
/// - `min_sources` does not exceed `query_limit`
/// - A temperature range, when given, has both bounds
pub fn validate_config(config: &SolverConfig) -> Result<()> {
    if let Some(&tier) = config
        .precision_series
        .iter()
        .find(|&&p| !(p > 0.0 && p <= 100.0))
    {
        return Err(DividerError::invalid_config(format!(
            "precision tier {} is outside (0, 100] %",
            tier
        )));
    }

    if !(0.0..=100.0).contains(&config.search_range) {
        return Err(DividerError::invalid_config(format!(
            "search range {} is outside [0, 100] %",
            config.search_range
        )));
    }

    if config.query_limit == 0 {
        return Err(DividerError::invalid_config("query limit must be at least 1"));
    }

    if config.min_sources > config.query_limit {
        return Err(DividerError::invalid_config(format!(
            "min_sources ({}) must not exceed query_limit ({})",
            config.min_sources, config.query_limit
        )));
    }

    if let Some(range) = config.temperature_range {
        if !range.is_fully_specified() {
            return Err(DividerError::invalid_config(format!(
                "temperature range needs both bounds, got {}",
                range
            )));
        }
    }

    Ok(())
}
