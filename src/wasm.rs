//! WASM bindings for Divider Core.
//!
//! This module exposes the solver to JavaScript. Requests and results are
//! exchanged as JSON strings.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmDividerSolver } from 'divider_core';
//!
//! await init();
//!
//! // "" selects the synthesized E-series catalog
//! const solver = new WasmDividerSolver("");
//!
//! const report = JSON.parse(solver.solve(JSON.stringify({
//!   kind: "inverse",
//!   v_in: "0.788..0.8..0.812",
//!   v_out: "3.3 ±2%",
//!   current: "50u",
//!   config: { temperature_range: "-20..50" },
//! })));
//! console.log(report.solution.r_high.mpn, report.solution.r_low.mpn);
//! ```

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::constraints::{Constraints, DividerKind, SolverConfig};
use crate::error::{DividerError, Result};
use crate::notation::{parse_interval, parse_quantity};
use crate::report::Report;
use crate::solver::solve;
use crate::StockCatalog;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A number, or a string in value notation.
#[derive(Deserialize)]
#[serde(untagged)]
enum Quantity {
    Number(f64),
    Text(String),
}

impl Quantity {
    fn value(&self) -> Result<f64> {
        match self {
            Quantity::Number(v) => Ok(*v),
            Quantity::Text(text) => parse_quantity(text),
        }
    }
}

/// JSON body of [`WasmDividerSolver::solve`].
#[derive(Deserialize)]
struct SolveRequest {
    #[serde(default = "default_kind")]
    kind: DividerKind,
    v_in: String,
    v_out: String,
    current: Quantity,
    #[serde(default)]
    config: SolverConfig,
}

fn default_kind() -> DividerKind {
    DividerKind::Forward
}

impl SolveRequest {
    fn into_constraints(self) -> Result<Constraints> {
        Constraints::new(
            self.kind,
            parse_interval(&self.v_in)?,
            parse_interval(&self.v_out)?,
            self.current.value()?,
            self.config,
        )
    }
}

/// WASM-compatible divider solver.
///
/// Holds a parts catalog and answers JSON solve requests against it.
#[wasm_bindgen]
pub struct WasmDividerSolver {
    catalog: StockCatalog,
}

#[wasm_bindgen]
impl WasmDividerSolver {
    /// Create a solver over a JSON parts catalog.
    ///
    /// # Arguments
    /// * `catalog_json` - JSON array of stocked parts, or an empty string
    ///   for the synthesized E-series catalog
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str) -> std::result::Result<WasmDividerSolver, JsValue> {
        Self::load(catalog_json).map_err(to_js)
    }

    /// Solve a divider request.
    ///
    /// # Arguments
    /// * `request_json` - `{ kind?, v_in, v_out, current, config? }` with
    ///   voltages in interval notation
    ///
    /// # Returns
    /// The report JSON, or the error message.
    #[wasm_bindgen]
    pub fn solve(&self, request_json: &str) -> std::result::Result<String, JsValue> {
        self.solve_json(request_json).map_err(to_js)
    }

    /// Number of stocked rows in the catalog.
    #[wasm_bindgen(getter)]
    pub fn part_count(&self) -> usize {
        self.catalog.len()
    }
}

impl WasmDividerSolver {
    fn load(catalog_json: &str) -> Result<Self> {
        if catalog_json.trim().is_empty() {
            return Ok(Self {
                catalog: StockCatalog::standard(),
            });
        }
        let catalog = StockCatalog::from_json_str(catalog_json)?;
        if catalog.is_empty() {
            return Err(DividerError::WasmError {
                message: "catalog has no parts".to_string(),
            });
        }
        Ok(Self { catalog })
    }

    fn solve_json(&self, request_json: &str) -> Result<String> {
        let request: SolveRequest = serde_json::from_str(request_json)?;
        let constraints = request.into_constraints()?;
        let solution = solve(&constraints, &self.catalog)?;
        Report::new(&constraints, &solution)?.to_json()
    }
}

fn to_js(error: DividerError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
