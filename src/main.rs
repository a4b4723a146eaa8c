//! Divider - resistor pair selection for voltage dividers
//!
//! Finds a sourceable resistor pair whose output stays inside the required
//! window across input variation, part tolerance and temperature.
//!
//! # Usage
//!
//! ```bash
//! divider --v-in "10 ±1%" --v-out "2.5 ±5%" --current 50u
//! divider --inverse --v-in 0.788..0.8..0.812 --v-out "3.3 ±2%" --current 50u \
//!     --temperature=-20..50 --catalog parts.json --json
//! ```

use std::path::PathBuf;

use clap::Parser;
use divider_core::{
    error::Result,
    notation::parse_quantity,
    report::Report,
    solve, Constraints, DividerKind, Interval, SolverConfig, StockCatalog,
};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Voltage divider resistor selection
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input voltage window, e.g. "10 ±1%" or "0.788..0.8..0.812"
    #[arg(long, value_name = "NOTATION", allow_hyphen_values = true)]
    v_in: Interval,

    /// Required output voltage window
    #[arg(long, value_name = "NOTATION", allow_hyphen_values = true)]
    v_out: Interval,

    /// Current through the divider, e.g. "50u"
    #[arg(long, value_parser = parse_quantity)]
    current: f64,

    /// Solve the inverse (regulator feedback) form
    #[arg(long)]
    inverse: bool,

    /// JSON parts catalog; defaults to synthesized E-series stock
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// JSON solver configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Operating temperature range in °C, e.g. "-20..50"
    #[arg(long, value_name = "NOTATION", allow_hyphen_values = true)]
    temperature: Option<Interval>,

    /// Precision tiers in percent, comma separated
    #[arg(long, value_delimiter = ',')]
    precision: Option<Vec<f64>>,

    /// Accepted case codes (repeatable)
    #[arg(long = "case", value_name = "CASE")]
    cases: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr, the result to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SolverConfig::from_path(path)?,
        None => SolverConfig::default(),
    };
    if let Some(range) = args.temperature {
        config = config.with_temperature_range(Some(range));
    }
    if let Some(series) = args.precision {
        config = config.with_precision_series(series);
    }
    if !args.cases.is_empty() {
        config.catalog_query = config.catalog_query.with_cases(args.cases);
    }

    let catalog = match &args.catalog {
        Some(path) => StockCatalog::from_path(path)?,
        None => StockCatalog::standard(),
    };
    info!(parts = catalog.len(), "catalog loaded");

    let kind = if args.inverse {
        DividerKind::Inverse
    } else {
        DividerKind::Forward
    };
    let constraints = Constraints::new(kind, args.v_in, args.v_out, args.current, config)?;

    let solution = solve(&constraints, &catalog)?;
    let report = Report::new(&constraints, &solution)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
