//! Conversions between display text and numbers.
//!
//! The display always shows numbers the way a double is stringified on the
//! platform the calculator originated on: shortest round-trip digits, no
//! trailing `.0`, `Infinity`/`NaN` for non-finite values and exponent form
//! for very large or very small magnitudes. Parsing is lenient and only looks
//! at the leading numeric literal.

use lazy_static::lazy_static;
use regex::Regex;

/// Magnitudes at or above `10^21` switch to exponent notation.
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Magnitudes below `10^-6` switch to exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -6;

lazy_static! {
    /// Leading numeric literal, optionally signed. `Infinity` counts as one.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^\s*([+-]?)(Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)"
    ).unwrap();
}

/// Parse the leading number out of `text`.
///
/// Trailing garbage is ignored (`"3."` is 3, `"Infinity5"` is infinite) and
/// text without a numeric prefix yields `NaN`.
pub fn parse_number(text: &str) -> f64 {
    let Some(caps) = NUMERIC_PREFIX.captures(text) else {
        return f64::NAN;
    };

    let negative = &caps[1] == "-";
    let magnitude = match &caps[2] {
        "Infinity" => f64::INFINITY,
        literal => literal.parse::<f64>().unwrap_or(f64::NAN),
    };

    if negative { -magnitude } else { magnitude }
}

/// Format a number for the display.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    // Covers negative zero as well.
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e-7".
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent + 1;

    let body = if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if n - 1 >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, (n - 1).abs())
        }
    };

    format!("{}{}", sign, body)
}
