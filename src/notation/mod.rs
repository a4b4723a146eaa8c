//! Text notation for quantities and tolerance intervals.
//!
//! Used by the CLI and anywhere a human writes a voltage, current or
//! temperature window by hand.
//!
//! # Grammar Overview
//!
//! ```text
//! interval   = value                                  exact
//!            | value plusminus magnitude              symmetric
//!            | value '+' magnitude '/' '-' magnitude  asymmetric
//!            | value '..' value                       min..max
//!            | value '..' value '..' value            min..typ..max
//!
//! plusminus  = '±' | '+-' | '+/-'
//! magnitude  = number ['%']
//! value      = ['-' | '+'] number [si_prefix] [unit]
//!
//! si_prefix  = 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G'
//! unit       = 'V' | 'A' | 'Ω' | 'ohm' | 'C' | '°C'
//! ```
//!
//! Percent magnitudes are relative to the absolute typical value; bare
//! magnitudes are absolute. Units are accepted for readability and ignored.
//!
//! # Examples
//!
//! | Notation | Meaning |
//! |----------|---------|
//! | `50u` | 50e-6 exactly |
//! | `2.5 ±5%` | 2.375 ..= 2.625 |
//! | `10k +- 500` | 9.5k ..= 10.5k |
//! | `10 +2%/-1%` | 9.9 ..= 10.2 |
//! | `-20..50` | -20 ..= 50, typical 15 |
//! | `0.788..0.8..0.812` | min / typ / max |

mod lexer;
mod parser;

pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use std::str::FromStr;

use crate::error::{DividerError, Result};
use crate::interval::Interval;

/// Parse an interval expression.
pub fn parse_interval(input: &str) -> Result<Interval> {
    let mut parser = Parser::new(input)?;
    parser.parse_interval()
}

/// Parse a single quantity such as `"50uA"` or `"165k"`.
pub fn parse_quantity(input: &str) -> Result<f64> {
    parse_value(input).ok_or_else(|| DividerError::notation(input, "not a number"))
}

impl FromStr for Interval {
    type Err = DividerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_interval(s)
    }
}
