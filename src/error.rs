//! Error types for the divider solver.
//!
//! This module provides a unified error type [`DividerError`] that covers
//! every failure that can occur during interval arithmetic, constraint
//! construction, catalog access and the resistor-pair search itself.

use thiserror::Error;

use crate::interval::Interval;

/// Result type alias using [`DividerError`].
pub type Result<T> = std::result::Result<T, DividerError>;

/// Which side of an [`Interval`] a bound belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    /// The upper bound (`typical + plus`)
    Upper,
    /// The lower bound (`typical - minus`)
    Lower,
}

impl std::fmt::Display for BoundSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundSide::Upper => write!(f, "upper"),
            BoundSide::Lower => write!(f, "lower"),
        }
    }
}

/// Unified error type for all divider operations.
#[derive(Error, Debug)]
pub enum DividerError {
    // ============ Solve Errors ============
    /// The initial guess produced a non-positive resistance
    #[error("Incompatible Vin/Vout for this divider orientation: v_in = {v_in}, v_out = {v_out}")]
    IncompatibleVinVout { v_in: Interval, v_out: Interval },

    /// The output window is infeasible even with perfect resistors
    #[error("Vin Range is too large for the requested Vout: ideal output = {screened}")]
    VinRangeTooLarge { screened: Interval },

    /// Every precision tier failed the ideal screen
    #[error("No Precision Series satisfies the constraints (tried {tiers:?} %)")]
    NoPrecisionSatisfiesConstraints { tiers: Vec<f64> },

    /// No sourced pair survived sourcing and temperature validation
    #[error("Failed to source resistors satisfying the voltage divider constraints")]
    NoSolutionFound,

    /// A temperature study was requested on a part without TCR data
    #[error("No TCR data for part '{mpn}'")]
    MissingTemperatureCoefficient { mpn: String },

    // ============ Interval Errors ============
    /// A required bound is absent
    #[error("Interval has no {side} bound")]
    MissingBound { side: BoundSide },

    /// Division by an interval that spans zero
    #[error("Cannot divide by an interval containing zero: {divisor}")]
    DivideByZeroInterval { divisor: Interval },

    /// Division by a scalar zero
    #[error("Cannot divide an interval by zero")]
    DivideByZero,

    /// Division by a negative scalar
    #[error("Cannot divide an interval by a negative value ({divisor})")]
    NegativeDivisor { divisor: f64 },

    /// Ordering or arity violation while building an interval
    #[error("Invalid interval: {message}")]
    InvalidInterval { message: String },

    /// Percentage outside of 0..=100
    #[error("Invalid percentage {value}: expected 0.0 <= pct <= 100.0")]
    InvalidPercent { value: f64 },

    // ============ Configuration Errors ============
    /// Invalid solver configuration or constraint values
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Malformed value or interval notation
    #[error("Cannot parse '{input}': {message}")]
    Notation { input: String, message: String },

    // ============ Catalog / I/O Errors ============
    /// The catalog collaborator failed to answer a query
    #[error("Catalog query failed: {message}")]
    Catalog { message: String },

    /// Error reading a catalog or config file
    #[error("Failed to read file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON document
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl DividerError {
    /// Create an invalid interval error
    pub fn invalid_interval(message: impl Into<String>) -> Self {
        Self::InvalidInterval {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a notation error
    pub fn notation(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Notation {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a missing bound error
    pub fn missing_bound(side: BoundSide) -> Self {
        Self::MissingBound { side }
    }
}
