use super::cell::Cell;
use super::parser::parse_literal;

/// Significant digits shown for numbers.
const PRECISION: i32 = 10;

/// Marker drawn in the last column of truncated text.
const ELLIPSIS: char = '…';

/// Format a number for display: up to 10 significant digits, trailing zeros
/// trimmed, scientific notation for very large or very small magnitudes.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "#NAN!".to_string();
    } else if n.is_infinite() {
        return "#INF!".to_string();
    } else if n == 0.0 {
        // Also folds -0 into 0.
        return "0".to_string();
    }

    // Round to PRECISION significant digits first; the exponent of the
    // rounded value decides between fixed and scientific form.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, n);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, n)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Display string for an evaluated cell.
///
/// Errors show as `#NAME`, formulas and numeric literals as formatted
/// numbers, and any other literal text verbatim.
pub fn display_cell(cell: &Cell) -> String {
    if let Some(err) = cell.eval.error {
        return err.display();
    }
    if cell.is_empty() {
        return String::new();
    }
    if cell.formula().is_some() {
        return format_number(cell.eval.value);
    }
    match parse_literal(cell.text()) {
        Some(n) => format_number(n),
        None => cell.text().to_string(),
    }
}

/// Fit text into a column `width` wide, leaving one column of separation.
/// Overlong text keeps `width - 2` characters followed by an ellipsis.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let max = width.saturating_sub(1);
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push(ELLIPSIS);
    out
}
