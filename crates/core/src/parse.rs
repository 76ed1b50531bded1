use thiserror::Error;

/// Longest input line accepted for a single coefficient.
pub const MAX_INPUT_LINE_LEN: usize = 25;

/// Errors that can occur when parsing a coefficient from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input line is too long: {len} characters, at most {max} allowed")]
    InputTooLong { len: usize, max: usize },

    #[error("not a correct number: {input:?}")]
    InvalidNumericFormat { input: String },
}

/// Parses one coefficient from a line of user input.
///
/// A trailing line terminator and surrounding whitespace are ignored. The rest
/// of the line must be a single finite decimal number.
///
/// # Errors
///
/// Returns [`ParseError::InputTooLong`] if the line exceeds
/// [`MAX_INPUT_LINE_LEN`] characters, or [`ParseError::InvalidNumericFormat`]
/// if it is empty, not a number, or not finite.
pub fn parse_coefficient(line: &str) -> Result<f64, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);

    let len = line.chars().count();
    if len > MAX_INPUT_LINE_LEN {
        return Err(ParseError::InputTooLong {
            len,
            max: MAX_INPUT_LINE_LEN,
        });
    }

    let text = line.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumericFormat {
            input: text.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_plain_numbers() {
        assert_relative_eq!(parse_coefficient("1").unwrap(), 1.0);
        assert_relative_eq!(parse_coefficient("-12.5\n").unwrap(), -12.5);
        assert_relative_eq!(parse_coefficient("  3e-4 \t\r\n").unwrap(), 3e-4);
        assert_relative_eq!(parse_coefficient("+0.581").unwrap(), 0.581);
    }

    #[test]
    fn rejects_garbage() {
        for input in ["", "   \n", "abc", "1.0x", "1 2", "--1"] {
            assert!(
                matches!(
                    parse_coefficient(input),
                    Err(ParseError::InvalidNumericFormat { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_finite() {
        for input in ["inf", "-inf", "NaN", "1e400"] {
            assert!(
                matches!(
                    parse_coefficient(input),
                    Err(ParseError::InvalidNumericFormat { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_long_lines() {
        let line = "1".repeat(MAX_INPUT_LINE_LEN + 1);
        assert_eq!(
            parse_coefficient(&line),
            Err(ParseError::InputTooLong {
                len: MAX_INPUT_LINE_LEN + 1,
                max: MAX_INPUT_LINE_LEN,
            })
        );

        let line = format!("{}\n", "1".repeat(MAX_INPUT_LINE_LEN));
        assert!(parse_coefficient(&line).is_ok());
    }
}
