//! Solver tuning knobs.

use serde::{de, Deserialize, Deserializer, Serialize};

use super::{
    DEFAULT_MIN_SOURCES, DEFAULT_PRECISION_SERIES, DEFAULT_QUERY_LIMIT, DEFAULT_SEARCH_RANGE,
};
use crate::catalog::CatalogFilter;
use crate::interval::Interval;

/// Configuration for the resistor-pair search.
///
/// Every field is optional in JSON; missing fields take the defaults.
///
/// ```
/// use divider_core::SolverConfig;
///
/// let config: SolverConfig = serde_json::from_str(r#"{
///     "precision_series": [1, 0.1],
///     "temperature_range": "-20..50"
/// }"#).unwrap();
/// assert_eq!(config.min_sources, 3);
/// assert_eq!(config.temperature_range.unwrap().max().unwrap(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Precision tiers in percent, loosest first.
    pub precision_series: Vec<f64>,
    /// Half-width of the candidate search window around each ideal
    /// resistance, in percent.
    pub search_range: f64,
    /// Distinct sourced parts required for each chosen value.
    pub min_sources: usize,
    /// Cap on the results of every catalog query.
    pub query_limit: usize,
    /// Operating temperature window in °C. `None` skips the thermal study.
    ///
    /// Accepts either interval fields or notation such as `"-20..50"`.
    #[serde(deserialize_with = "interval_or_notation")]
    pub temperature_range: Option<Interval>,
    /// Sourcing constraints for every catalog query.
    pub catalog_query: CatalogFilter,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            precision_series: DEFAULT_PRECISION_SERIES.to_vec(),
            search_range: DEFAULT_SEARCH_RANGE,
            min_sources: DEFAULT_MIN_SOURCES,
            query_limit: DEFAULT_QUERY_LIMIT,
            temperature_range: None,
            catalog_query: CatalogFilter::default(),
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON.
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    #[cfg(feature = "cli")]
    pub fn from_path(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::DividerError::FileReadError {
                path: path.display().to_string(),
                source: e,
            }
        })?;
        Self::from_json_str(&content)
    }

    /// Set the precision tiers (percent). Order does not matter.
    pub fn with_precision_series(mut self, series: impl Into<Vec<f64>>) -> Self {
        self.precision_series = series.into();
        self
    }

    /// Set the candidate search window (percent).
    pub fn with_search_range(mut self, search_range: f64) -> Self {
        self.search_range = search_range;
        self
    }

    /// Set the number of sources required per value.
    pub fn with_min_sources(mut self, min_sources: usize) -> Self {
        self.min_sources = min_sources;
        self
    }

    /// Set the catalog query cap.
    pub fn with_query_limit(mut self, query_limit: usize) -> Self {
        self.query_limit = query_limit;
        self
    }

    /// Set or clear the operating temperature window (°C).
    pub fn with_temperature_range(mut self, range: Option<Interval>) -> Self {
        self.temperature_range = range;
        self
    }

    /// Set the catalog filter.
    pub fn with_catalog_query(mut self, filter: CatalogFilter) -> Self {
        self.catalog_query = filter;
        self
    }
}

fn interval_or_notation<'de, D>(deserializer: D) -> std::result::Result<Option<Interval>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Notation(String),
        Fields(Interval),
    }

    match Option::<Repr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Repr::Fields(interval)) => Ok(Some(interval)),
        Some(Repr::Notation(text)) => text.parse().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::new();
        assert_eq!(
            config.precision_series,
            vec![20.0, 10.0, 5.0, 2.0, 1.0, 0.5, 0.25, 0.1]
        );
        assert_eq!(config.search_range, 10.0);
        assert_eq!(config.min_sources, 3);
        assert_eq!(config.query_limit, 50);
        assert!(config.temperature_range.is_none());
        assert_eq!(config.catalog_query, CatalogFilter::default());
    }

    #[test]
    fn test_builders() {
        let config = SolverConfig::new()
            .with_precision_series([5.0, 1.0])
            .with_search_range(20.0)
            .with_min_sources(1)
            .with_query_limit(10);
        assert_eq!(config.precision_series, vec![5.0, 1.0]);
        assert_eq!(config.search_range, 20.0);
        assert_eq!(config.min_sources, 1);
        assert_eq!(config.query_limit, 10);
    }

    #[test]
    fn test_json_partial() {
        let config = SolverConfig::from_json_str(r#"{"query_limit": 20}"#).unwrap();
        assert_eq!(config.query_limit, 20);
        assert_eq!(config.min_sources, 3);
        assert!(config.temperature_range.is_none());
    }

    #[test]
    fn test_json_temperature_forms() {
        let config = SolverConfig::from_json_str(
            r#"{"temperature_range": {"typical": 12.5, "plus": 12.5, "minus": 12.5}}"#,
        )
        .unwrap();
        let range = config.temperature_range.unwrap();
        assert_eq!(range.min().unwrap(), 0.0);
        assert_eq!(range.max().unwrap(), 25.0);

        let config = SolverConfig::from_json_str(r#"{"temperature_range": "0..25"}"#).unwrap();
        assert_eq!(config.temperature_range, Some(range));

        let config = SolverConfig::from_json_str(r#"{"temperature_range": null}"#).unwrap();
        assert!(config.temperature_range.is_none());

        assert!(SolverConfig::from_json_str(r#"{"temperature_range": "hot"}"#).is_err());
    }
}
