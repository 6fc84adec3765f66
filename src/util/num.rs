use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Parses the text of a number token into a finite `f64`.
///
/// The lexer accepts any run of digits and decimal points, so this is where
/// malformed literals such as `1.2.3` or a bare `.` are rejected. Literals
/// too large to represent also fail instead of becoming infinite.
///
/// ## Errors
/// Returns [`EvalError::InvalidNumber`] when the text is not a finite
/// decimal.
///
/// ## Example
/// ```
/// use rpntrace::{error::EvalError, util::num::parse_decimal_checked};
///
/// assert_eq!(parse_decimal_checked("3.25").unwrap(), 3.25);
/// assert_eq!(parse_decimal_checked(".5").unwrap(), 0.5);
/// assert_eq!(parse_decimal_checked("7.").unwrap(), 7.0);
///
/// assert!(matches!(parse_decimal_checked("1.2.3"),
///                  Err(EvalError::InvalidNumber { .. })));
/// ```
pub fn parse_decimal_checked(text: &str) -> EvalResult<f64> {
    let invalid = || EvalError::InvalidNumber { text: text.to_string() };

    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(invalid());
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

/// Formats a value the way results are shown to users.
///
/// Integral values print without a fractional part; `-0` prints as `0`.
///
/// ## Example
/// ```
/// use rpntrace::util::num::format_value;
///
/// assert_eq!(format_value(11.0), "11");
/// assert_eq!(format_value(-0.0), "0");
/// assert_eq!(format_value(0.25), "0.25");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
