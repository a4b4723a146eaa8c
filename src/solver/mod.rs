//! Resistor-pair search.
//!
//! The solver picks a sourceable `(R_high, R_low)` pair whose output window
//! stays inside the required `v_out` across part tolerance and temperature.
//!
//! ## Pipeline
//!
//! 1. **Initial guess**: ideal resistances from the typical voltages and
//!    the current budget. Both must be positive.
//! 2. **Ideal screen**: the ideal pair with exact resistors must already be
//!    compliant, otherwise the input window alone is too wide.
//! 3. **Precision screen**: the ideal pair at each precision tier, loosest
//!    first. The first compliant tier and every tighter one are searched.
//! 4. **Per tier**:
//!    - query distinct catalog values around each ideal resistance
//!    - rank the cross product by distance from the target output
//!    - for each ranked pair, fetch full part records and require enough
//!      independent sources for both values
//!    - study the first record of each value at both ends of the
//!      temperature range
//! 5. The first pair that is compliant at every temperature point wins.
//!
//! ```text
//!   guess ──► ideal screen ──► tiers ──► candidates ──► sourcing ──► thermal
//!     │            │             │                                     │
//!  Incompatible  VinRange    NoPrecision                        solution / next
//! ```

mod divider;
mod ranking;
mod thermal;

pub use divider::{forward_divider, inverse_divider, solve, Solver, VoltageDividerSolution};
pub use ranking::{rank_candidates, Ratio};
pub use thermal::{study_solution, TemperaturePoint};

/// Temperature at which part values are specified, in °C.
pub const REFERENCE_TEMPERATURE: f64 = 25.0;
