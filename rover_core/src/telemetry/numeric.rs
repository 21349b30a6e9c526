// rover_core/src/telemetry/numeric.rs

//! Locale-tolerant parsing of the string values carried by telemetry records.

use crate::error::ParseError;

/// Separates the entries of coordinate-list fields such as `position`.
pub const LIST_SEPARATOR: char = ';';

/// Converts a telemetry string to `f64` regardless of its decimal convention.
///
/// A comma is read as the decimal separator, so `"12,5"` and `"12.5"` both
/// yield `12.5`. Thousands separators are not supported: `"1,234.5"` is
/// rejected because it normalizes to `"1.234.5"`.
pub fn convert_to_float(input: &str) -> Result<f64, ParseError> {
    let trimmed = input.trim();
    let parsed = if trimmed.contains(',') {
        trimmed.replace(',', ".").parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };
    parsed.map_err(|_| ParseError {
        input: input.to_string(),
    })
}

/// Parses a `;`-separated list of numbers, e.g. `"99,7; 85.2"`.
pub fn parse_float_list(input: &str) -> Result<Vec<f64>, ParseError> {
    input.split(LIST_SEPARATOR).map(convert_to_float).collect()
}

/// Parses a `;`-separated list of numbers and truncates each toward zero.
pub fn parse_truncated_list(input: &str) -> Result<Vec<i32>, ParseError> {
    parse_float_list(input)?
        .into_iter()
        .map(|v| {
            let t = v.trunc();
            if t.is_finite() && t >= i32::MIN as f64 && t <= i32::MAX as f64 {
                Ok(t as i32)
            } else {
                Err(ParseError {
                    input: input.to_string(),
                })
            }
        })
        .collect()
}

/// Parses a plain integer such as a sample count. Decimal points are rejected.
pub fn parse_integer(input: &str) -> Result<i32, ParseError> {
    input.trim().parse::<i32>().map_err(|_| ParseError {
        input: input.to_string(),
    })
}

/// Parses a sample count. Negative values are rejected, so the difference of
/// two counts always fits in an `i32`.
pub fn parse_count(input: &str) -> Result<i32, ParseError> {
    match parse_integer(input)? {
        n if n >= 0 => Ok(n),
        _ => Err(ParseError {
            input: input.to_string(),
        }),
    }
}

/// Parses a 0/1 telemetry flag. Any non-zero integer counts as set.
pub fn parse_flag(input: &str) -> Result<bool, ParseError> {
    parse_integer(input).map(|v| v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn comma_and_dot_conventions_agree() {
        for (comma, dot) in [("12,5", "12.5"), ("-0,25", "-0.25"), ("3", "3"), ("1e3", "1e3")] {
            assert_eq!(convert_to_float(comma).unwrap(), convert_to_float(dot).unwrap());
        }
        assert_abs_diff_eq!(convert_to_float("12,5").unwrap(), 12.5);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_abs_diff_eq!(convert_to_float("  7,75 ").unwrap(), 7.75);
    }

    #[test]
    fn non_numeric_input_is_a_parse_error() {
        for bad in ["", "abc", "1,234.5", "12..5", "1;2"] {
            let err = convert_to_float(bad).unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn float_list_splits_on_semicolons() {
        let values = parse_float_list("99,7; 85.2 ;0").unwrap();
        assert_eq!(values, vec![99.7, 85.2, 0.0]);
    }

    #[test]
    fn truncated_list_rounds_toward_zero() {
        assert_eq!(
            parse_truncated_list("100,9;-3.7;42").unwrap(),
            vec![100, -3, 42]
        );
        assert!(parse_truncated_list("1;inf").is_err());
        assert!(parse_truncated_list("1;1e20").is_err());
        assert!(parse_truncated_list("-3e10;2").is_err());
        assert_eq!(
            parse_truncated_list("2147483647,9").unwrap(),
            vec![i32::MAX]
        );
    }

    #[test]
    fn integers_and_flags() {
        assert_eq!(parse_integer(" 6 ").unwrap(), 6);
        assert!(parse_integer("6.0").is_err());
        assert_eq!(parse_count("0").unwrap(), 0);
        assert_eq!(parse_count("2147483647").unwrap(), i32::MAX);
        assert!(parse_count("-1").is_err());
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("yes").is_err());
    }
}
