//! Recursive-descent formula parser.
//!
//! Grammar (left-associative at each binary level):
//!
//! ```text
//! expr   := term   (('+'|'-') term)*
//! term   := factor (('*'|'/') factor)*
//! factor := '(' expr ')' | ('+'|'-') factor | cellref | number
//! ```
//!
//! The parser evaluates while it parses. Cell references are resolved through
//! a [`Resolve`] handle, which is how the evaluator recurses into other cells.

use super::cell_ref::{CellRef, letter_to_col, row_from_digits};
use super::error::ErrorKind;

/// Resolves a cell reference to its value, or to the error the cell carries.
pub trait Resolve {
    fn resolve(&mut self, at: CellRef) -> Result<f64, ErrorKind>;
}

/// Evaluate formula text (without the leading `=`).
///
/// The whole input must be consumed; trailing residue is a parse error.
pub fn parse_expression<R: Resolve>(src: &str, resolver: &mut R) -> Result<f64, ErrorKind> {
    let mut parser = Parser {
        src: src.as_bytes(),
        pos: 0,
        resolver,
    };
    let value = parser.expr()?;
    parser.skip_ws();
    if parser.pos != parser.src.len() {
        return Err(ErrorKind::Parse);
    }
    Ok(value)
}

/// Parse a whole literal cell text as a number, e.g. `" -1.5e3 "`.
///
/// Surrounding whitespace is ignored; anything else that is not part of the
/// number makes the literal non-numeric.
pub fn parse_literal(text: &str) -> Option<f64> {
    let bytes = text
        .trim_matches(|c: char| c.is_ascii() && is_space(c as u8))
        .as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let (value, end) = scan_number(bytes, start)?;
    if end != bytes.len() || !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Scan `digits [. digits] [(e|E) [+|-] digits]` starting at `pos`.
/// Returns the value and the end offset; at least one mantissa digit is required.
fn scan_number(src: &[u8], pos: usize) -> Option<(f64, usize)> {
    let digits_from = |mut i: usize| {
        while i < src.len() && src[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let int_end = digits_from(pos);
    let mut end = int_end;
    let mut mantissa_digits = int_end - pos;
    if src.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(src.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(src.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    // The scanned slice is pure ASCII digits/sign/dot/exponent.
    let text = std::str::from_utf8(&src[pos..end]).ok()?;
    text.parse::<f64>().ok().map(|value| (value, end))
}

fn finite(value: f64) -> Result<f64, ErrorKind> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ErrorKind::Parse)
    }
}

struct Parser<'a, R> {
    src: &'a [u8],
    pos: usize,
    resolver: &'a mut R,
}

impl<R: Resolve> Parser<'_, R> {
    fn skip_ws(&mut self) {
        while self.pos < self.src.len() && is_space(self.src[self.pos]) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.src.get(self.pos).copied()
    }

    fn expr(&mut self) -> Result<f64, ErrorKind> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value = finite(value + self.term()?)?;
                }
                Some(b'-') => {
                    self.pos += 1;
                    value = finite(value - self.term()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, ErrorKind> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value = finite(value * self.factor()?)?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(ErrorKind::DivZero);
                    }
                    value = finite(value / divisor)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, ErrorKind> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let value = self.expr()?;
                if self.peek() != Some(b')') {
                    return Err(ErrorKind::Parse);
                }
                self.pos += 1;
                Ok(value)
            }
            Some(b'+') => {
                self.pos += 1;
                self.factor()
            }
            Some(b'-') => {
                self.pos += 1;
                Ok(-self.factor()?)
            }
            Some(c) if c.is_ascii_alphabetic() => self.cell_ref(),
            Some(c) if c.is_ascii_digit() || c == b'.' => {
                let (value, end) = scan_number(self.src, self.pos).ok_or(ErrorKind::Parse)?;
                self.pos = end;
                finite(value)
            }
            _ => Err(ErrorKind::Parse),
        }
    }

    fn cell_ref(&mut self) -> Result<f64, ErrorKind> {
        let col = letter_to_col(self.src[self.pos]).ok_or(ErrorKind::BadRef)?;
        self.pos += 1;
        let start = self.pos;
        while self.pos < self.src.len() && self.src[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(ErrorKind::Parse);
        }
        let digits = std::str::from_utf8(&self.src[start..self.pos]).map_err(|_| ErrorKind::Parse)?;
        let row = row_from_digits(digits).ok_or(ErrorKind::BadRef)?;
        self.resolver.resolve(CellRef::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Resolver backed by a fixed table; missing cells are 0.
    #[derive(Default)]
    struct Table {
        cells: HashMap<CellRef, Result<f64, ErrorKind>>,
        seen: Vec<CellRef>,
    }

    impl Resolve for Table {
        fn resolve(&mut self, at: CellRef) -> Result<f64, ErrorKind> {
            self.seen.push(at);
            self.cells.get(&at).copied().unwrap_or(Ok(0.0))
        }
    }

    fn eval(src: &str) -> Result<f64, ErrorKind> {
        parse_expression(src, &mut Table::default())
    }

    #[test]
    fn test_precedence_and_associativity() {
        assert_eq!(eval("1+2*3"), Ok(7.0));
        assert_eq!(eval("10-4-3"), Ok(3.0));
        assert_eq!(eval("64/4/2"), Ok(8.0));
        assert_eq!(eval("(2+3)*-4"), Ok(-20.0));
        assert_eq!(eval("--3"), Ok(3.0));
        assert_eq!(eval("-+-2"), Ok(2.0));
    }

    #[test]
    fn test_whitespace_between_tokens() {
        assert_eq!(eval("  1 +\t2 * ( 3 )  "), Ok(7.0));
        assert_eq!(eval("1 2"), Err(ErrorKind::Parse));
        assert_eq!(eval("A 1"), Err(ErrorKind::Parse));
    }

    #[test]
    fn test_number_literals() {
        assert_eq!(eval("1.5"), Ok(1.5));
        assert_eq!(eval(".5"), Ok(0.5));
        assert_eq!(eval("2."), Ok(2.0));
        assert_eq!(eval("1e3"), Ok(1000.0));
        assert_eq!(eval("2.5E-1"), Ok(0.25));
        assert_eq!(eval("."), Err(ErrorKind::Parse));
        // `e` without digits is not part of the literal, so it becomes residue.
        assert_eq!(eval("1e"), Err(ErrorKind::Parse));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(eval(""), Err(ErrorKind::Parse));
        assert_eq!(eval("   "), Err(ErrorKind::Parse));
        assert_eq!(eval("(1+2"), Err(ErrorKind::Parse));
        assert_eq!(eval("1+"), Err(ErrorKind::Parse));
        assert_eq!(eval("1)"), Err(ErrorKind::Parse));
        assert_eq!(eval("*2"), Err(ErrorKind::Parse));
        assert_eq!(eval("A"), Err(ErrorKind::Parse));
        assert_eq!(eval("AB1"), Err(ErrorKind::Parse));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("1/0"), Err(ErrorKind::DivZero));
        assert_eq!(eval("1/(2-2)"), Err(ErrorKind::DivZero));
        assert_eq!(eval("1/-0"), Err(ErrorKind::DivZero));
        assert_eq!(eval("0/5"), Ok(0.0));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert_eq!(eval("1e308*10"), Err(ErrorKind::Parse));
        assert_eq!(eval("1e999"), Err(ErrorKind::Parse));
    }

    #[test]
    fn test_bad_references() {
        assert_eq!(eval("A0"), Err(ErrorKind::BadRef));
        assert_eq!(eval("A101+1"), Err(ErrorKind::BadRef));
        assert_eq!(eval("z100"), Ok(0.0));
    }

    #[test]
    fn test_references_resolve_through_handle() {
        let mut table = Table::default();
        table.cells.insert(CellRef::new(0, 0), Ok(2.0));
        table.cells.insert(CellRef::new(1, 0), Ok(3.0));
        assert_eq!(parse_expression("A1+a2*2", &mut table), Ok(8.0));
        assert_eq!(table.seen, vec![CellRef::new(0, 0), CellRef::new(1, 0)]);
    }

    #[test]
    fn test_dependency_error_short_circuits() {
        let mut table = Table::default();
        table.cells.insert(CellRef::new(0, 0), Err(ErrorKind::DivZero));
        assert_eq!(parse_expression("A1+B1", &mut table), Err(ErrorKind::DivZero));
        // B1 is never consulted once A1 has failed.
        assert_eq!(table.seen, vec![CellRef::new(0, 0)]);
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_literal("42"), Some(42.0));
        assert_eq!(parse_literal("  -1.5e3 "), Some(-1500.0));
        assert_eq!(parse_literal("+7"), Some(7.0));
        assert_eq!(parse_literal("hello"), None);
        assert_eq!(parse_literal("12abc"), None);
        assert_eq!(parse_literal(""), None);
        assert_eq!(parse_literal("inf"), None);
        assert_eq!(parse_literal("1e999"), None);
    }
}
