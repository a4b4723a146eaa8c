//! # Divider Core
//!
//! Picks a pair of sourceable resistors for a voltage divider that holds
//! its output window across input variation, part tolerance and
//! temperature.
//!
//! This library provides:
//! - Tolerance intervals with worst-case propagating arithmetic
//! - Forward and inverse (regulator feedback) divider constraints
//! - A precision-ladder search over a parts catalog, with ranking,
//!   multi-source checks and a TCR temperature study
//! - An in-memory catalog loaded from JSON or synthesized from E-series
//!
//! ## Architecture
//!
//! - [`interval`] - Tolerance intervals and their arithmetic
//! - [`notation`] - Text notation for values and intervals (`"2.5 ±5%"`)
//! - [`constraints`] - Divider requirements and solver configuration
//! - [`catalog`] - Catalog contract, part records and the stock catalog
//! - [`solver`] - The resistor-pair search
//! - [`report`] - Text and JSON rendering of a solution
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use divider_core::{forward_divider, StockCatalog};
//! use divider_core::interval::from_symmetric_percent;
//!
//! # fn main() -> divider_core::Result<()> {
//! let catalog = StockCatalog::standard();
//! let solution = forward_divider(
//!     from_symmetric_percent(10.0, 1.0)?,
//!     from_symmetric_percent(2.5, 5.0)?,
//!     50e-6,
//!     &catalog,
//! )?;
//! assert!(from_symmetric_percent(2.5, 5.0)?.contains(solution.v_out())?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! divider --v-in "10 ±1%" --v-out "2.5 ±5%" --current 50u --temperature=-20..50
//! divider --inverse --v-in 0.788..0.8..0.812 --v-out "3.3 ±2%" --current 50u --json
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmDividerSolver } from 'divider_core';
//!
//! const solver = new WasmDividerSolver("");
//! const solution = JSON.parse(solver.solve(JSON.stringify({
//!   kind: "forward", v_in: "10 ±1%", v_out: "2.5 ±5%", current: "50u",
//! })));
//! ```

pub mod catalog;
pub mod constraints;
pub mod error;
pub mod interval;
pub mod notation;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogFilter, Mounting, PartRecord, StockCatalog};
pub use constraints::{
    Constraints, DividerKind, SolverConfig, DEFAULT_MIN_SOURCES, DEFAULT_OPERATING_TEMPERATURE,
    DEFAULT_PRECISION_SERIES, DEFAULT_QUERY_LIMIT, DEFAULT_SEARCH_RANGE,
};
pub use error::{DividerError, Result};
pub use interval::Interval;
pub use solver::{
    forward_divider, inverse_divider, solve, Solver, VoltageDividerSolution,
    REFERENCE_TEMPERATURE,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmDividerSolver;
