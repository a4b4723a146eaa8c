//! Human and JSON rendering of a solved divider.

use std::fmt;

use serde::Serialize;

use crate::catalog::{PartRecord, ToleranceSpec};
use crate::constraints::{Constraints, DividerKind};
use crate::error::Result;
use crate::interval::Interval;
use crate::solver::{study_solution, TemperaturePoint, VoltageDividerSolution};

/// A solution together with the requirements it was solved for and the
/// output at every studied temperature point.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub kind: DividerKind,
    pub v_in: Interval,
    pub v_out_required: Interval,
    pub current: f64,
    pub solution: &'a VoltageDividerSolution,
    /// Nominal `R_high / R_low`
    pub ratio: f64,
    pub temperature: Vec<TemperaturePoint>,
}

impl<'a> Report<'a> {
    /// Build a report, re-running the temperature study for the solution.
    pub fn new(constraints: &Constraints, solution: &'a VoltageDividerSolution) -> Result<Self> {
        let temperature = study_solution(constraints, solution.r_high(), solution.r_low())?;
        Ok(Self {
            kind: constraints.kind(),
            v_in: *constraints.v_in(),
            v_out_required: *constraints.v_out(),
            current: constraints.current(),
            solution,
            ratio: solution.r_high().resistance / solution.r_low().resistance,
            temperature,
        })
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} divider", self.kind)?;
        writeln!(f, "  v_in      {}", self.v_in)?;
        writeln!(f, "  v_out     {} (required)", self.v_out_required)?;
        writeln!(f, "  current   {}A", format_si(self.current))?;
        writeln!(f)?;
        write_part(f, "R_high", self.solution.r_high())?;
        write_part(f, "R_low", self.solution.r_low())?;
        writeln!(f, "  ratio     {:.4}", self.ratio)?;
        writeln!(f, "  precision {}%", self.solution.precision())?;
        writeln!(f)?;
        for point in &self.temperature {
            let label = match point.temperature {
                Some(t) => format!("{} °C", t),
                None => "nominal".to_string(),
            };
            let verdict = if point.compliant { "ok" } else { "FAIL" };
            writeln!(f, "  {:<9} {}  {}", label, point.v_out, verdict)?;
        }
        Ok(())
    }
}

fn write_part(f: &mut fmt::Formatter<'_>, label: &str, part: &PartRecord) -> fmt::Result {
    writeln!(
        f,
        "  {:<9} {}Ω {}  {} ({})",
        label,
        format_si(part.resistance),
        format_tolerance(&part.tolerance),
        part.mpn,
        part.manufacturer
    )
}

/// `±1%` or `-1%/+2%`.
pub fn format_tolerance(tolerance: &ToleranceSpec) -> String {
    match *tolerance {
        ToleranceSpec::SymmetricPercent(pct) => format!("±{}%", pct),
        ToleranceSpec::AsymmetricMinMax(min, max) => format!("{}%/+{}%", min, max),
    }
}

/// Engineering notation with an SI prefix, e.g. `54.9k` or `50u`.
pub fn format_si(value: f64) -> String {
    const PREFIXES: [(f64, &str); 7] = [
        (1e9, "G"),
        (1e6, "M"),
        (1e3, "k"),
        (1.0, ""),
        (1e-3, "m"),
        (1e-6, "u"),
        (1e-9, "n"),
    ];

    let magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return format!("{}", value);
    }
    let (scale, prefix) = PREFIXES
        .iter()
        .find(|(scale, _)| magnitude >= *scale)
        .copied()
        .unwrap_or((1e-12, "p"));

    let text = format!("{:.3}", value / scale);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", text, prefix)
}
