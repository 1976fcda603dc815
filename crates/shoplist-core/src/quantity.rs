//! Quantity text parsing.
//!
//! Accepts the numeric literal forms a form field would: signed decimals
//! with optional fraction and exponent (`2`, `-3`, `.5`, `5.`, `1e3`) and
//! unsigned radix literals (`0x1f`, `0o17`, `0b101`). Words such as `inf`
//! or `NaN` are not numbers here.

use crate::validation::trim_form;

/// Parse a numeric literal. Surrounding whitespace is ignored.
///
/// Returns `None` for anything that is not a complete literal.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = trim_form(text);
    if text.is_empty() {
        return None;
    }

    if let Some(value) = parse_radix_literal(text) {
        return Some(value);
    }

    if is_decimal_literal(text) {
        text.parse::<f64>().ok()
    } else {
        None
    }
}

/// Parse quantity text into a positive, finite amount.
///
/// # Examples
/// ```
/// use shoplist_core::parse_quantity;
/// assert_eq!(parse_quantity("2"), Some(2.0));
/// assert_eq!(parse_quantity("0.25"), Some(0.25));
/// assert_eq!(parse_quantity("-3"), None);
/// assert_eq!(parse_quantity("two"), None);
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn parse_quantity(text: &str) -> Option<f64> {
    parse_number(text).filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    text[2..]
        .chars()
        .try_fold(0.0_f64, |acc, c| c.to_digit(radix).map(|d| acc * radix as f64 + d as f64))
}

// [+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?
fn is_decimal_literal(text: &str) -> bool {
    let mut chars = text.chars().peekable();

    if matches!(chars.peek(), Some('+') | Some('-')) {
        chars.next();
    }

    let mut mantissa_digits = 0;
    while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
        chars.next();
        mantissa_digits += 1;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        let mut exponent_digits = 0;
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}
