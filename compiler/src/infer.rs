use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Scalar;

lazy_static! {
    static ref INTEGER: Regex = Regex::new(r"^-?\d+$").unwrap();
    static ref DECIMAL: Regex = Regex::new(r"^-?\d+\.\d+$").unwrap();
    static ref LONG:    Regex = Regex::new(r"^-?\d+[lL]$").unwrap();
    static ref FLOAT:   Regex = Regex::new(r"^-?\d+\.\d+[fF]$").unwrap();
}

/// Classifies a raw TOON value into a `Scalar`. Total: every input maps to
/// something, and a literal that looks numeric but fails to parse (overflow)
/// falls back to the raw string instead of erroring.
///
/// Check order, first match wins:
/// empty / `null` → empty string, `true`/`false` → bool, `42L` → long,
/// `3.14F` → float, `42` → int, `3.14` → double, anything else → string.
pub fn infer_value(raw: &str) -> Scalar {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed == "null" {
        return Scalar::Str(String::new());
    }
    if trimmed == "true" {
        return Scalar::Bool(true);
    }
    if trimmed == "false" {
        return Scalar::Bool(false);
    }
    if LONG.is_match(trimmed) {
        let digits = &trimmed[..trimmed.len() - 1];
        return match digits.parse::<i64>() {
            Ok(v) => Scalar::Long(v),
            Err(_) => Scalar::Str(trimmed.to_string()),
        };
    }
    if FLOAT.is_match(trimmed) {
        let digits = &trimmed[..trimmed.len() - 1];
        return match digits.parse::<f32>() {
            Ok(v) => Scalar::Float(v),
            Err(_) => Scalar::Str(trimmed.to_string()),
        };
    }
    if INTEGER.is_match(trimmed) {
        return match trimmed.parse::<i32>() {
            Ok(v) => Scalar::Int(v),
            Err(_) => Scalar::Str(trimmed.to_string()),
        };
    }
    if DECIMAL.is_match(trimmed) {
        return match trimmed.parse::<f64>() {
            Ok(v) => Scalar::Double(v),
            Err(_) => Scalar::Str(trimmed.to_string()),
        };
    }

    Scalar::Str(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_booleans() {
        assert_eq!(infer_value("true"), Scalar::Bool(true));
        assert_eq!(infer_value("false"), Scalar::Bool(false));
        // Case-sensitive: "True" is a string.
        assert_eq!(infer_value("True"), Scalar::Str("True".into()));
    }

    #[test]
    fn test_infer_numbers() {
        assert_eq!(infer_value("42"), Scalar::Int(42));
        assert_eq!(infer_value("-7"), Scalar::Int(-7));
        assert_eq!(infer_value("3.14"), Scalar::Double(3.14));
        assert_eq!(infer_value("42L"), Scalar::Long(42));
        assert_eq!(infer_value("9999999999l"), Scalar::Long(9_999_999_999));
        assert_eq!(infer_value("2.5F"), Scalar::Float(2.5));
        assert_eq!(infer_value("2.5f"), Scalar::Float(2.5));
    }

    #[test]
    fn test_infer_overflow_falls_back_to_string() {
        // Too large for i32; preserved as text rather than rejected.
        assert_eq!(
            infer_value("99999999999999999999"),
            Scalar::Str("99999999999999999999".into())
        );
    }

    #[test]
    fn test_infer_null_and_empty() {
        assert_eq!(infer_value(""), Scalar::Str(String::new()));
        assert_eq!(infer_value("   "), Scalar::Str(String::new()));
        assert_eq!(infer_value("null"), Scalar::Str(String::new()));
    }

    #[test]
    fn test_infer_strings() {
        assert_eq!(infer_value("hello"), Scalar::Str("hello".into()));
        assert_eq!(infer_value("  padded  "), Scalar::Str("padded".into()));
        assert_eq!(infer_value("1.2.3"), Scalar::Str("1.2.3".into()));
        assert_eq!(infer_value("12abc"), Scalar::Str("12abc".into()));
    }
}
