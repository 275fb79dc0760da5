//! Keypad input.
//!
//! Maps button labels onto [`Key`] events and splits a typed line such as
//! `12+3=` or `1 2 + 3 =` into a sequence of key presses.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::operator::Operator;
use crate::error::CalcError;

lazy_static! {
    /// One key label at the start of the input. Multi-character labels come
    /// first so that `+/-` is not read as `+`.
    static ref KEY_LABEL: Regex = Regex::new(
        r"^(?:AC|ac|\+/-|±|[0-9]|[.=%]|[cC]|[+\-−*/×÷xX])"
    ).unwrap();
}

/// A single keypad button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => write!(f, "{}", op),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("AC"),
            Self::ToggleSign => f.write_str("+/-"),
            Self::Percent => f.write_str("%"),
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        match label {
            "." => Ok(Self::Decimal),
            "=" => Ok(Self::Equals),
            "AC" | "ac" | "C" | "c" => Ok(Self::Clear),
            "+/-" | "±" => Ok(Self::ToggleSign),
            "%" => Ok(Self::Percent),
            _ => {
                if let [b] = label.as_bytes()
                    && b.is_ascii_digit()
                {
                    return Ok(Self::Digit(b - b'0'));
                }
                label
                    .parse::<Operator>()
                    .map(Self::Operator)
                    .map_err(|_| CalcError::UnknownKey(label.to_string()))
            }
        }
    }
}

/// Split a line of typed input into key presses.
///
/// Whitespace between labels is optional. The first unrecognised label
/// aborts parsing so that a half-understood line is never applied.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, CalcError> {
    let mut keys = Vec::new();
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        let Some(found) = KEY_LABEL.find(rest) else {
            let bad: String = rest.chars().take_while(|c| !c.is_whitespace()).collect();
            return Err(CalcError::UnknownKey(bad));
        };
        keys.push(found.as_str().parse()?);
        rest = rest[found.end()..].trim_start();
    }

    Ok(keys)
}
