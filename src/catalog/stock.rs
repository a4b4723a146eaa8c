//! In-memory stock catalog.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::series::{self, DECADES, STANDARD_GRADES};
use super::{Catalog, CatalogFilter, Mounting, PartRecord, Tcr, ToleranceSpec};
use crate::error::{DividerError, Result};
use crate::interval::Interval;

/// Case codes stocked by [`StockCatalog::standard`].
pub const DEFAULT_CASES: [&str; 2] = ["0402", "0603"];

/// Manufacturers stocked by [`StockCatalog::standard`].
pub const DEFAULT_MANUFACTURERS: [&str; 3] = ["Yageo", "Vishay", "Panasonic"];

/// Quantity on hand for every synthesized row.
const STANDARD_STOCK: u32 = 1000;

/// One stocked part: the part record plus its sourcing attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    #[serde(flatten)]
    pub part: PartRecord,
    /// Package case code, e.g. `"0603"`
    pub case: String,
    pub mounting: Mounting,
    /// Quantity on hand
    pub stock: u32,
}

impl StockEntry {
    /// Whether this row passes a catalog filter.
    pub fn matches(&self, filter: &CatalogFilter) -> bool {
        self.mounting == filter.mounting
            && self.stock >= filter.min_stock
            && filter.accepts_case(&self.case)
            && (!filter.require_tcr || self.part.tcr.is_some())
    }

    fn within_tolerance(&self, tolerance_pct: f64) -> bool {
        self.part.precision() <= tolerance_pct
    }
}

/// A [`Catalog`] backed by a list of stocked parts.
///
/// Row order is significant: [`Catalog::full_parts`] returns matches in the
/// order they were added.
#[derive(Debug, Clone, Default)]
pub struct StockCatalog {
    entries: Vec<StockEntry>,
}

impl StockCatalog {
    /// Create a catalog from pre-built rows.
    pub fn new(entries: Vec<StockEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a JSON array of [`StockEntry`] rows.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<StockEntry> = serde_json::from_str(json)?;
        for entry in &entries {
            let r = entry.part.resistance;
            if !r.is_finite() || r <= 0.0 {
                return Err(DividerError::catalog(format!(
                    "part '{}' has invalid resistance {}",
                    entry.part.mpn, r
                )));
            }
            if !entry.part.precision().is_finite() {
                return Err(DividerError::catalog(format!(
                    "part '{}' has invalid tolerance",
                    entry.part.mpn
                )));
            }
        }
        Ok(Self::new(entries))
    }

    /// Load a catalog from a JSON file.
    #[cfg(feature = "cli")]
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DividerError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Synthesized E-series stock in [`DEFAULT_CASES`] from
    /// [`DEFAULT_MANUFACTURERS`].
    pub fn standard() -> Self {
        Self::standard_with(&DEFAULT_CASES, &DEFAULT_MANUFACTURERS)
    }

    /// Synthesized E-series stock: E24 at 5 %, E96 at 1 % and E192 at
    /// 0.5 %, 0.25 % and 0.1 %, over 1 Ω to 9.88 MΩ. Every value is stocked
    /// once per manufacturer and case, SMD, with the grade's typical TCR.
    pub fn standard_with(cases: &[&str], manufacturers: &[&str]) -> Self {
        let mut entries = Vec::new();
        for grade in STANDARD_GRADES {
            let mantissas = series::mantissas(grade.series);
            for decade in DECADES {
                for &mantissa in &mantissas {
                    let resistance = series::scale(mantissa, decade);
                    for manufacturer in manufacturers {
                        for case in cases {
                            entries.push(StockEntry {
                                part: PartRecord {
                                    mpn: part_number(
                                        manufacturer,
                                        case,
                                        resistance,
                                        grade.tolerance_pct,
                                    ),
                                    manufacturer: manufacturer.to_string(),
                                    resistance,
                                    tolerance: ToleranceSpec::SymmetricPercent(
                                        grade.tolerance_pct,
                                    ),
                                    tcr: Some(Tcr::from_ppm(grade.tcr_ppm)),
                                },
                                case: case.to_string(),
                                mounting: Mounting::Smd,
                                stock: STANDARD_STOCK,
                            });
                        }
                    }
                }
            }
        }
        Self::new(entries)
    }

    /// Append a row.
    pub fn push(&mut self, entry: StockEntry) {
        self.entries.push(entry);
    }

    /// All rows, in catalog order.
    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Catalog for StockCatalog {
    fn distinct_resistances(
        &self,
        filter: &CatalogFilter,
        target: &Interval,
        tolerance_pct: f64,
        limit: usize,
    ) -> Result<Vec<f64>> {
        let (lo, hi) = target.bounds()?;
        let mut values: Vec<f64> = self
            .entries
            .iter()
            .filter(|e| e.matches(filter) && e.within_tolerance(tolerance_pct))
            .map(|e| e.part.resistance)
            .filter(|r| (lo..=hi).contains(r))
            .collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        values.truncate(limit);

        trace!(
            window = %target,
            tolerance_pct,
            found = values.len(),
            "distinct resistances"
        );
        Ok(values)
    }

    fn full_parts(
        &self,
        filter: &CatalogFilter,
        value: f64,
        tolerance_pct: f64,
        limit: usize,
    ) -> Result<Vec<PartRecord>> {
        let parts: Vec<PartRecord> = self
            .entries
            .iter()
            .filter(|e| {
                e.part.resistance == value
                    && e.matches(filter)
                    && e.within_tolerance(tolerance_pct)
            })
            .take(limit)
            .map(|e| e.part.clone())
            .collect();

        trace!(value, tolerance_pct, found = parts.len(), "full parts");
        Ok(parts)
    }
}

/// Synthetic part number, e.g. `YAG-0603-54K9-F`.
fn part_number(manufacturer: &str, case: &str, resistance: f64, tolerance_pct: f64) -> String {
    let prefix: String = manufacturer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_ascii_uppercase();
    format!(
        "{}-{}-{}-{}",
        prefix,
        case,
        resistance_code(resistance),
        tolerance_letter(tolerance_pct)
    )
}

/// RKM code: the multiplier letter stands in for the decimal point.
fn resistance_code(ohms: f64) -> String {
    let (scaled, letter) = if ohms >= 1e6 {
        (ohms / 1e6, 'M')
    } else if ohms >= 1e3 {
        (ohms / 1e3, 'K')
    } else {
        (ohms, 'R')
    };
    let text = format!("{:.3}", scaled);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text.split_once('.') {
        Some((whole, frac)) => format!("{}{}{}", whole, letter, frac),
        None => format!("{}{}", text, letter),
    }
}

/// IEC 60062 tolerance letter.
fn tolerance_letter(pct: f64) -> char {
    match pct {
        p if p <= 0.1 => 'B',
        p if p <= 0.25 => 'C',
        p if p <= 0.5 => 'D',
        p if p <= 1.0 => 'F',
        p if p <= 2.0 => 'G',
        p if p <= 5.0 => 'J',
        _ => 'K',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::from_symmetric_percent;

    const JSON: &str = r#"[
        {
            "mpn": "RC0603FR-07165KL",
            "manufacturer": "Yageo",
            "resistance": 165000.0,
            "tolerance": {"symmetric_percent": 1.0},
            "tcr": {"pos": 1e-4, "neg": 1e-4},
            "case": "0603",
            "mounting": "smd",
            "stock": 5000
        },
        {
            "mpn": "CRCW0603165KFKEA",
            "manufacturer": "Vishay",
            "resistance": 165000.0,
            "tolerance": {"symmetric_percent": 1.0},
            "case": "0603",
            "mounting": "smd",
            "stock": 200
        },
        {
            "mpn": "ERJ-3EKF1653V",
            "manufacturer": "Panasonic",
            "resistance": 165000.0,
            "tolerance": {"symmetric_percent": 1.0},
            "tcr": {"pos": 1e-4, "neg": 1e-4},
            "case": "0603",
            "mounting": "smd",
            "stock": 3
        },
        {
            "mpn": "MFR-25FBF52-150K",
            "manufacturer": "Yageo",
            "resistance": 150000.0,
            "tolerance": {"asymmetric_min_max": [-1.0, 1.0]},
            "tcr": {"pos": 1e-4, "neg": 1e-4},
            "case": "axial",
            "mounting": "through_hole",
            "stock": 1000
        }
    ]"#;

    #[test]
    fn test_json_catalog_filters() {
        let catalog = StockCatalog::from_json_str(JSON).unwrap();
        assert_eq!(catalog.len(), 4);

        let filter = CatalogFilter::default();
        let parts = catalog.full_parts(&filter, 165_000.0, 1.0, 50).unwrap();
        // no TCR on the Vishay row, low stock on the Panasonic row
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].mpn, "RC0603FR-07165KL");

        let relaxed = filter.clone().with_require_tcr(false).with_min_stock(0);
        let parts = catalog.full_parts(&relaxed, 165_000.0, 1.0, 50).unwrap();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].mpn, "CRCW0603165KFKEA");

        let tht = CatalogFilter::default()
            .with_mounting(Mounting::ThroughHole)
            .with_cases(["axial"]);
        let target = from_symmetric_percent(150_000.0, 10.0).unwrap();
        let values = catalog.distinct_resistances(&tht, &target, 1.0, 50).unwrap();
        assert_eq!(values, vec![150_000.0]);
    }

    #[test]
    fn test_json_rejects_bad_rows() {
        let bad = JSON.replacen("165000.0", "-1.0", 1);
        assert!(matches!(
            StockCatalog::from_json_str(&bad),
            Err(DividerError::Catalog { .. })
        ));
        assert!(matches!(
            StockCatalog::from_json_str("{not json"),
            Err(DividerError::Json(_))
        ));
    }

    #[test]
    fn test_distinct_sorted_deduplicated_capped() {
        let catalog = StockCatalog::standard();
        let filter = CatalogFilter::default();
        let target = from_symmetric_percent(150_000.0, 10.0).unwrap();

        let values = catalog.distinct_resistances(&filter, &target, 1.0, 50).unwrap();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(values.iter().all(|v| (135_000.0..=165_000.0).contains(v)));
        assert!(values.contains(&165_000.0));

        let capped = catalog.distinct_resistances(&filter, &target, 1.0, 3).unwrap();
        assert_eq!(capped, values[..3].to_vec());
    }

    #[test]
    fn test_distinct_respects_tolerance() {
        let catalog = StockCatalog::standard();
        let filter = CatalogFilter::default();
        let target = from_symmetric_percent(10_000.0, 10.0).unwrap();

        // only E24 at 5 %
        let loose = catalog.distinct_resistances(&filter, &target, 5.0, 50).unwrap();
        let tight = catalog.distinct_resistances(&filter, &target, 0.5, 50).unwrap();
        assert!(loose.len() > tight.len());
        assert!(loose.contains(&9_100.0));
        assert!(!tight.contains(&9_100.0));
        assert!(catalog
            .distinct_resistances(&filter, &target, 0.05, 50)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_distinct_requires_bounded_target() {
        let catalog = StockCatalog::standard();
        let open = crate::interval::min_typ(1.0, 2.0).unwrap();
        assert!(catalog
            .distinct_resistances(&CatalogFilter::default(), &open, 1.0, 10)
            .is_err());
    }

    #[test]
    fn test_full_parts_in_catalog_order() {
        let catalog = StockCatalog::standard();
        let filter = CatalogFilter::default();
        let parts = catalog.full_parts(&filter, 165_000.0, 1.0, 50).unwrap();

        // three 1 % rows first, then the tighter E192 grades
        assert!(parts.len() >= 3);
        assert_eq!(parts[0].precision(), 1.0);
        assert_eq!(parts[0].manufacturer, "Yageo");
        assert_eq!(parts[0].mpn, "YAG-0603-165K-F");
        assert!(parts.iter().all(|p| p.precision() <= 1.0));

        let capped = catalog.full_parts(&filter, 165_000.0, 1.0, 2).unwrap();
        assert_eq!(capped.len(), 2);
        assert!(catalog.full_parts(&filter, 165_001.0, 1.0, 50).unwrap().is_empty());
    }

    #[test]
    fn test_resistance_code() {
        assert_eq!(resistance_code(165_000.0), "165K");
        assert_eq!(resistance_code(54_900.0), "54K9");
        assert_eq!(resistance_code(1.65), "1R65");
        assert_eq!(resistance_code(4_750_000.0), "4M75");
        assert_eq!(resistance_code(100.0), "100R");
    }

    #[test]
    fn test_standard_size() {
        let catalog = StockCatalog::standard_with(&["0603"], &["Yageo"]);
        assert_eq!(catalog.len(), (24 + 96 + 3 * 192) * DECADES.len());
        assert!(catalog.entries().iter().all(|e| e.part.tcr.is_some()));
    }
}
