use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidAssignment(String),

    #[error("Key cannot be empty in assignment '{0}'.")]
    EmptyKey(String),

    #[error("Invalid {expected} value for {key}: '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Splits a `KEY=VALUE` assignment at the first `=`, trimming both sides.
pub fn parse_assignment(assignment: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidAssignment(assignment.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(assignment.to_string()));
    }
    Ok((key, value.trim()))
}

/// Parses `value` as `T`, describing the failure as `expected` (e.g. "float").
pub fn parse_value<T: FromStr>(
    key: &str,
    value: &str,
    expected: &'static str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assignment_splits_on_first_equals_sign() {
        assert_eq!(
            parse_assignment("regions.min-run-length = 8"),
            Ok(("regions.min-run-length", "8"))
        );
        assert_eq!(parse_assignment("a=b=c"), Ok(("a", "b=c")));
    }

    #[test]
    fn parse_assignment_rejects_missing_equals_sign() {
        assert_eq!(
            parse_assignment("regions.min-run-length"),
            Err(ParseError::InvalidAssignment(
                "regions.min-run-length".to_string()
            ))
        );
    }

    #[test]
    fn parse_assignment_rejects_empty_key() {
        assert!(matches!(
            parse_assignment(" =0.2"),
            Err(ParseError::EmptyKey(_))
        ));
    }

    #[test]
    fn parse_value_reports_expected_type() {
        let ok: Result<f64, _> = parse_value("classification.low-cut", "0.25", "float");
        assert_eq!(ok, Ok(0.25));

        let err: Result<usize, _> = parse_value("regions.min-run-length", "five", "integer");
        assert_eq!(
            err.unwrap_err().to_string(),
            "Invalid integer value for regions.min-run-length: 'five'"
        );
    }
}
