//! Parts catalog contract and the in-memory stock catalog.
//!
//! The solver only ever talks to a [`Catalog`]: it asks for the distinct
//! resistances inside a target window, then for the full part records of a
//! chosen value. Both queries are filtered by a [`CatalogFilter`] and a
//! maximum tolerance in percent.
//!
//! | Implementation | Source |
//! |----------------|--------|
//! | [`StockCatalog::from_json_str`] | JSON array of [`StockEntry`] rows |
//! | [`StockCatalog::from_path`] | same, read from disk |
//! | [`StockCatalog::standard`] | synthesized E24/E96/E192 stock |

mod part;
pub mod series;
mod stock;

pub use part::{PartRecord, Tcr, ToleranceSpec};
pub use stock::{StockCatalog, StockEntry, DEFAULT_CASES, DEFAULT_MANUFACTURERS};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interval::Interval;

/// Mounting style of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mounting {
    Smd,
    ThroughHole,
}

/// Sourcing constraints applied to every catalog query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    /// Required mounting style
    pub mounting: Mounting,
    /// Minimum quantity in stock
    pub min_stock: u32,
    /// Accepted case codes; empty accepts any case
    pub cases: Vec<String>,
    /// Only return parts with TCR data
    pub require_tcr: bool,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            mounting: Mounting::Smd,
            min_stock: 10,
            cases: vec!["0603".to_string()],
            require_tcr: true,
        }
    }
}

impl CatalogFilter {
    /// Replace the accepted case codes.
    pub fn with_cases<I, S>(mut self, cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cases = cases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the mounting style.
    pub fn with_mounting(mut self, mounting: Mounting) -> Self {
        self.mounting = mounting;
        self
    }

    /// Set the minimum stock.
    pub fn with_min_stock(mut self, min_stock: u32) -> Self {
        self.min_stock = min_stock;
        self
    }

    /// Set whether parts without TCR data are excluded.
    pub fn with_require_tcr(mut self, require_tcr: bool) -> Self {
        self.require_tcr = require_tcr;
        self
    }

    /// Whether a case code is accepted.
    pub fn accepts_case(&self, case: &str) -> bool {
        self.cases.is_empty() || self.cases.iter().any(|c| c == case)
    }
}

/// Source of sourceable resistor values and part records.
///
/// Results must already satisfy `filter`.
pub trait Catalog {
    /// Distinct nominal resistances inside `target` whose tolerance is no
    /// worse than `tolerance_pct`, ascending, at most `limit` of them.
    fn distinct_resistances(
        &self,
        filter: &CatalogFilter,
        target: &Interval,
        tolerance_pct: f64,
        limit: usize,
    ) -> Result<Vec<f64>>;

    /// Part records with nominal resistance `value` and tolerance no worse
    /// than `tolerance_pct`, at most `limit` of them.
    fn full_parts(
        &self,
        filter: &CatalogFilter,
        value: f64,
        tolerance_pct: f64,
        limit: usize,
    ) -> Result<Vec<PartRecord>>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn distinct_resistances(
        &self,
        filter: &CatalogFilter,
        target: &Interval,
        tolerance_pct: f64,
        limit: usize,
    ) -> Result<Vec<f64>> {
        (**self).distinct_resistances(filter, target, tolerance_pct, limit)
    }

    fn full_parts(
        &self,
        filter: &CatalogFilter,
        value: f64,
        tolerance_pct: f64,
        limit: usize,
    ) -> Result<Vec<PartRecord>> {
        (**self).full_parts(filter, value, tolerance_pct, limit)
    }
}

impl<C: Catalog + ?Sized> Catalog for Box<C> {
    fn distinct_resistances(
        &self,
        filter: &CatalogFilter,
        target: &Interval,
        tolerance_pct: f64,
        limit: usize,
    ) -> Result<Vec<f64>> {
        (**self).distinct_resistances(filter, target, tolerance_pct, limit)
    }

    fn full_parts(
        &self,
        filter: &CatalogFilter,
        value: f64,
        tolerance_pct: f64,
        limit: usize,
    ) -> Result<Vec<PartRecord>> {
        (**self).full_parts(filter, value, tolerance_pct, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = CatalogFilter::default();
        assert_eq!(filter.mounting, Mounting::Smd);
        assert_eq!(filter.min_stock, 10);
        assert!(filter.accepts_case("0603"));
        assert!(!filter.accepts_case("0402"));
        assert!(filter.require_tcr);
    }

    #[test]
    fn test_empty_cases_accept_anything() {
        let filter = CatalogFilter::default().with_cases(Vec::<String>::new());
        assert!(filter.accepts_case("1206"));
    }

    #[test]
    fn test_filter_json_defaults() {
        let filter: CatalogFilter = serde_json::from_str(r#"{"cases": ["0402"]}"#).unwrap();
        assert_eq!(filter.min_stock, 10);
        assert_eq!(filter.cases, vec!["0402".to_string()]);

        let filter: CatalogFilter =
            serde_json::from_str(r#"{"mounting": "through_hole", "require_tcr": false}"#).unwrap();
        assert_eq!(filter.mounting, Mounting::ThroughHole);
        assert!(!filter.require_tcr);
    }

    #[test]
    fn test_boxed_dyn_catalog() {
        let catalog: Box<dyn Catalog> = Box::new(StockCatalog::standard());
        let target = crate::interval::from_symmetric_percent(10_000.0, 1.0).unwrap();
        let values = catalog
            .distinct_resistances(&CatalogFilter::default(), &target, 5.0, 10)
            .unwrap();
        assert!(values.contains(&10_000.0));
    }
}
