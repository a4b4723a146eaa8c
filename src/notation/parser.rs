//! Parser for interval notation.

use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::error::{DividerError, Result};
use crate::interval::{exact, from_min_typ_max, min_max, Interval};

/// Parser for a single interval expression.
pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the given input.
    pub fn new(input: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            input,
            lexer,
            current,
        })
    }

    /// Parse the whole input as one interval.
    pub fn parse_interval(&mut self) -> Result<Interval> {
        let (typical, _) = self.expect_number()?;

        let interval = match self.current.kind {
            TokenKind::Eof => exact(typical),
            TokenKind::PlusMinus => {
                self.advance()?;
                let magnitude = self.parse_magnitude(typical, None)?;
                Interval::new(typical, Some(magnitude), Some(magnitude))?
            }
            TokenKind::Number if self.current.text.starts_with('+') => {
                let plus = self.parse_magnitude(typical, Some('+'))?;
                self.expect(TokenKind::Slash)?;
                let minus = self.parse_magnitude(typical, Some('-'))?;
                Interval::new(typical, Some(plus), Some(minus))?
            }
            TokenKind::Range => {
                self.advance()?;
                let (second, _) = self.expect_number()?;
                if self.current.kind == TokenKind::Range {
                    self.advance()?;
                    let (third, _) = self.expect_number()?;
                    from_min_typ_max(Some(typical), Some(second), Some(third))?
                } else {
                    min_max(typical, second)?
                }
            }
            _ => return Err(self.unexpected()),
        };

        self.expect(TokenKind::Eof)?;
        Ok(interval)
    }

    /// Parse a tolerance magnitude: `<number>` (absolute) or `<number>%`
    /// (relative to `|typical|`). With `sign` set, the number must carry it.
    fn parse_magnitude(&mut self, typical: f64, sign: Option<char>) -> Result<f64> {
        if let Some(sign) = sign {
            if !self.current.text.starts_with(sign) {
                return Err(self.error(format!(
                    "expected a '{}' tolerance at column {}",
                    sign, self.current.column
                )));
            }
        }

        let (value, text) = self.expect_number()?;
        let magnitude = if sign.is_some() { value.abs() } else { value };
        if magnitude < 0.0 {
            return Err(self.error(format!("tolerance '{}' must not be negative", text)));
        }

        if self.current.kind == TokenKind::Percent {
            self.advance()?;
            if magnitude > 100.0 {
                return Err(DividerError::InvalidPercent { value: magnitude });
            }
            Ok(typical.abs() * magnitude / 100.0)
        } else {
            Ok(magnitude)
        }
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(self.error(format!(
                "expected {:?}, got {:?} at column {}",
                kind, self.current.kind, self.current.column
            )))
        }
    }

    fn expect_number(&mut self) -> Result<(f64, String)> {
        let tok = self.expect(TokenKind::Number)?;
        let value = parse_value(&tok.text)
            .ok_or_else(|| self.error(format!("invalid number '{}'", tok.text)))?;
        Ok((value, tok.text))
    }

    fn unexpected(&self) -> DividerError {
        self.error(format!(
            "unexpected '{}' at column {}",
            self.current.text, self.current.column
        ))
    }

    fn error(&self, message: String) -> DividerError {
        DividerError::notation(self.input, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parse(input: &str) -> Result<Interval> {
        Parser::new(input)?.parse_interval()
    }

    #[test]
    fn test_parse_exact() {
        let v = parse("3.3V").unwrap();
        assert_relative_eq!(v.typical(), 3.3);
        assert_eq!(v.plus(), Some(0.0));
        assert_eq!(v.minus(), Some(0.0));
    }

    #[test]
    fn test_parse_symmetric_percent() {
        let v = parse("2.5 ±5%").unwrap();
        assert_relative_eq!(v.max().unwrap(), 2.625);
        assert_relative_eq!(v.min().unwrap(), 2.375);
        assert_eq!(parse("2.5+/-5%").unwrap(), v);
    }

    #[test]
    fn test_parse_symmetric_absolute() {
        let v = parse("10k +- 500").unwrap();
        assert_relative_eq!(v.max().unwrap(), 10_500.0);
        assert_relative_eq!(v.min().unwrap(), 9_500.0);
    }

    #[test]
    fn test_parse_asymmetric() {
        let v = parse("10 +2%/-1%").unwrap();
        assert_relative_eq!(v.max().unwrap(), 10.2);
        assert_relative_eq!(v.min().unwrap(), 9.9);
        assert!(parse("10 +2%/+1%").is_err());
    }

    #[test]
    fn test_parse_ranges() {
        let t = parse("-20..50").unwrap();
        assert_relative_eq!(t.min().unwrap(), -20.0);
        assert_relative_eq!(t.max().unwrap(), 50.0);

        let v = parse("0.788..0.8..0.812").unwrap();
        assert_relative_eq!(v.typical(), 0.8);
        assert_relative_eq!(v.min().unwrap(), 0.788);

        assert!(parse("50..-20").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse("2.5 ±"), Err(DividerError::Notation { .. })));
        assert!(parse("2.5 ±5% extra").is_err());
        assert!(matches!(
            parse("2.5 ±150%"),
            Err(DividerError::InvalidPercent { .. })
        ));
        assert!(parse("").is_err());
    }
}
