//! Object identifier parsing
//!
//! Table keys are numeric strings ("3", "17"). They are turned into integer
//! ids with leading-numeric-prefix semantics: parsing stops at the first
//! non-digit, and a key with no leading digits becomes [`SpriteId::NotANumber`]
//! instead of failing the run.

use serde::{Serialize, Serializer};
use std::fmt;

/// Integer id derived from a table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    /// The key started with a base-10 integer.
    Numeric(i64),
    /// The key had no leading digits (or did not fit in an `i64`).
    NotANumber,
}

impl SpriteId {
    /// The numeric value, if any.
    pub fn value(self) -> Option<i64> {
        match self {
            SpriteId::Numeric(n) => Some(n),
            SpriteId::NotANumber => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, SpriteId::Numeric(_))
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteId::Numeric(n) => write!(f, "{}", n),
            SpriteId::NotANumber => write!(f, "NaN"),
        }
    }
}

/// Not-a-number ids serialize as JSON `null`.
impl Serialize for SpriteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SpriteId::Numeric(n) => serializer.serialize_i64(*n),
            SpriteId::NotANumber => serializer.serialize_none(),
        }
    }
}

/// Outcome of parsing one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedId {
    pub id: SpriteId,
    /// True when the whole key is an optionally signed decimal integer,
    /// with nothing before or after the digits.
    pub exact: bool,
}

/// Parse a table key into an id.
///
/// Leading whitespace is skipped, then an optional `+` or `-`, then the
/// longest run of ASCII digits. Anything after the digits is ignored.
///
/// ```
/// use strategy_board_assets::identifier::{parse_identifier, SpriteId};
///
/// assert_eq!(parse_identifier("42").id, SpriteId::Numeric(42));
/// assert_eq!(parse_identifier("12px").id, SpriteId::Numeric(12));
/// assert_eq!(parse_identifier("tower").id, SpriteId::NotANumber);
/// ```
pub fn parse_identifier(key: &str) -> ParsedId {
    let trimmed = key.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return ParsedId { id: SpriteId::NotANumber, exact: false };
    }

    let digits = &unsigned[..digit_len];
    let signed = if negative { format!("-{}", digits) } else { digits.to_string() };
    let id = match signed.parse::<i64>() {
        Ok(n) => SpriteId::Numeric(n),
        Err(_) => SpriteId::NotANumber,
    };

    let exact = id.is_numeric() && trimmed.len() == key.len() && digit_len == unsigned.len();
    ParsedId { id, exact }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimal() {
        let parsed = parse_identifier("3");
        assert_eq!(parsed.id, SpriteId::Numeric(3));
        assert!(parsed.exact);
    }

    #[test]
    fn test_leading_zeros_and_sign() {
        assert_eq!(parse_identifier("007").id, SpriteId::Numeric(7));
        assert_eq!(parse_identifier("-15").id, SpriteId::Numeric(-15));
        assert_eq!(parse_identifier("+8").id, SpriteId::Numeric(8));
        assert!(parse_identifier("-15").exact);
    }

    #[test]
    fn test_prefix_stops_at_first_non_digit() {
        let parsed = parse_identifier("12abc");
        assert_eq!(parsed.id, SpriteId::Numeric(12));
        assert!(!parsed.exact);

        assert_eq!(parse_identifier("4.5").id, SpriteId::Numeric(4));
    }

    #[test]
    fn test_leading_whitespace_is_skipped_but_inexact() {
        let parsed = parse_identifier("  9");
        assert_eq!(parsed.id, SpriteId::Numeric(9));
        assert!(!parsed.exact);
    }

    #[test]
    fn test_no_digits_is_not_a_number() {
        for key in ["", "tower", "-", "+x", " "] {
            let parsed = parse_identifier(key);
            assert_eq!(parsed.id, SpriteId::NotANumber, "key {:?}", key);
            assert!(!parsed.exact);
        }
    }

    #[test]
    fn test_overflow_is_not_a_number() {
        assert_eq!(parse_identifier("99999999999999999999").id, SpriteId::NotANumber);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&SpriteId::Numeric(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&SpriteId::NotANumber).unwrap(), "null");
    }

    #[test]
    fn test_display() {
        assert_eq!(SpriteId::Numeric(-2).to_string(), "-2");
        assert_eq!(SpriteId::NotANumber.to_string(), "NaN");
        assert_eq!(SpriteId::Numeric(5).value(), Some(5));
        assert_eq!(SpriteId::NotANumber.value(), None);
    }
}
