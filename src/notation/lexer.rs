//! Lexer (tokenizer) for value and interval notation.

use crate::error::{DividerError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Column number (1-indexed, in characters)
    pub column: usize,
}

/// Token types in the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A number, possibly signed, with optional SI prefix and unit
    Number,
    /// Percent sign '%'
    Percent,
    /// Symmetric tolerance marker: '±', '+-' or '+/-'
    PlusMinus,
    /// Slash '/' separating asymmetric tolerances
    Slash,
    /// Range separator '..'
    Range,
    /// End of input
    Eof,
}

/// SI prefixes accepted after a number.
const SI_PREFIXES: &[char] = &['p', 'n', 'u', 'µ', 'm', 'k', 'K', 'M', 'G'];

/// Unit symbols accepted (and ignored) after a number.
const UNITS: &[&str] = &["°C", "ohm", "Ω", "V", "A", "C"];

/// Lexer for tokenizing notation input.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let column = self.column();
        let rest = self.rest();
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(self.token(TokenKind::Eof, String::new(), column)),
        };

        let (kind, width) = match ch {
            '%' => (TokenKind::Percent, 1),
            '/' => (TokenKind::Slash, 1),
            '±' => (TokenKind::PlusMinus, '±'.len_utf8()),
            '.' if rest.starts_with("..") => (TokenKind::Range, 2),
            '+' if rest.starts_with("+/-") => (TokenKind::PlusMinus, 3),
            '+' if rest.starts_with("+-") => (TokenKind::PlusMinus, 2),
            '+' | '-' | '.' | '0'..='9' => {
                let text = self.read_number();
                return Ok(self.token(TokenKind::Number, text, column));
            }
            _ => {
                return Err(DividerError::notation(
                    self.input,
                    format!("unexpected character '{}' at column {}", ch, column),
                ));
            }
        };

        let text = rest[..width].to_string();
        self.pos += width;
        Ok(self.token(kind, text, column))
    }

    fn token(&self, kind: TokenKind, text: String, column: usize) -> Token {
        Token { kind, text, column }
    }

    fn rest(&self) -> &'a str {
        let input = self.input;
        &input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn column(&self) -> usize {
        self.input[..self.pos].chars().count() + 1
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    fn read_digits(&mut self, text: &mut String) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();

        // Optional sign
        if let Some(ch @ ('-' | '+')) = self.peek() {
            text.push(ch);
            self.advance();
        }

        // Integer part
        self.read_digits(&mut text);

        // Decimal part, unless this is the start of a '..' range
        if self.peek() == Some('.') && self.peek_second() != Some('.') {
            text.push('.');
            self.advance();
            self.read_digits(&mut text);
        }

        // Exponent part
        if let Some(e @ ('e' | 'E')) = self.peek() {
            let exponent_follows = match self.peek_second() {
                Some(c) => c.is_ascii_digit() || c == '-' || c == '+',
                None => false,
            };
            if exponent_follows {
                text.push(e);
                self.advance();
                if let Some(sign @ ('-' | '+')) = self.peek() {
                    text.push(sign);
                    self.advance();
                }
                self.read_digits(&mut text);
            }
        }

        // SI prefix
        if let Some(ch) = self.peek() {
            if SI_PREFIXES.contains(&ch) {
                text.push(ch);
                self.advance();
            }
        }

        // Unit symbol
        if let Some(unit) = UNITS.iter().find(|u| self.rest().starts_with(*u)) {
            text.push_str(unit);
            self.pos += unit.len();
        }

        text
    }
}

/// Parse a number string with optional SI prefix and unit symbol.
///
/// `"10k"`, `"50uA"`, `"2.5V"`, `"4.7e3"` and `"-20°C"` are all accepted.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = UNITS
        .iter()
        .find_map(|unit| text.strip_suffix(unit))
        .unwrap_or(text);
    if text.is_empty() {
        return None;
    }

    let (num_str, multiplier) = match text.chars().last() {
        Some(last) => {
            let mult = match last {
                'p' => 1e-12,
                'n' => 1e-9,
                'u' | 'µ' => 1e-6,
                'm' => 1e-3,
                'k' | 'K' => 1e3,
                'M' => 1e6,
                'G' => 1e9,
                _ => 1.0,
            };
            if mult != 1.0 {
                (&text[..text.len() - last.len_utf8()], mult)
            } else {
                (text, 1.0)
            }
        }
        None => (text, 1.0),
    };

    num_str
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v * multiplier)
}
