// Input boundary: turn raw text into an i64 or refuse.
//
// Nothing here coerces. "15.0" is a float literal and gets rejected even though
// its value is integral.

use crate::error::ClassifyError;
use crate::fizz_buzz::{classify, Label};
use tracing::trace;

/// Parse one textual number for classification.
pub fn parse_input(raw: &str) -> Result<i64, ClassifyError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClassifyError::Empty);
    }

    let digits = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        // Integral syntax: the only way left to fail is magnitude.
        return trimmed
            .strip_prefix('+')
            .unwrap_or(trimmed)
            .parse::<i64>()
            .map_err(|_| ClassifyError::OutOfRange {
                input: trimmed.to_string(),
            });
    }

    // Decided by spelling, not value: "1e400" overflows f64 but is still a float literal.
    let err = match digits.to_ascii_lowercase().as_str() {
        "nan" | "inf" | "infinity" => ClassifyError::NotFinite {
            input: trimmed.to_string(),
        },
        _ => ClassifyError::NotAnInteger {
            input: trimmed.to_string(),
        },
    };
    trace!(input = trimmed, error = %err, "rejected input");
    Err(err)
}

/// Parse then classify.
pub fn classify_input(raw: &str) -> Result<Label, ClassifyError> {
    parse_input(raw).map(classify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_signed_integers() {
        assert_eq!(parse_input("15"), Ok(15));
        assert_eq!(parse_input(" 15 \n"), Ok(15));
        assert_eq!(parse_input("+3"), Ok(3));
        assert_eq!(parse_input("-5"), Ok(-5));
        assert_eq!(parse_input("0"), Ok(0));
        assert_eq!(parse_input("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_input(""), Err(ClassifyError::Empty));
        assert_eq!(parse_input("   "), Err(ClassifyError::Empty));
    }

    #[test]
    fn rejects_fractions_and_float_literals() {
        for raw in ["3.5", "15.0", "1e3", "-2.25", ".5", "1e400", "-1e999"] {
            assert_eq!(
                parse_input(raw),
                Err(ClassifyError::NotAnInteger {
                    input: raw.to_string()
                }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_finite() {
        for raw in ["NaN", "nan", "inf", "-inf", "Infinity", "+infinity"] {
            assert!(
                matches!(parse_input(raw), Err(ClassifyError::NotFinite { .. })),
                "{raw} should be non-finite"
            );
        }
    }

    #[test]
    fn rejects_non_numeric() {
        for raw in ["abc", "3a", "+", "-", "--3", "0x0f", "1_000"] {
            assert!(
                matches!(parse_input(raw), Err(ClassifyError::NotAnInteger { .. })),
                "{raw} should not be an integer"
            );
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            parse_input("9223372036854775808"),
            Err(ClassifyError::OutOfRange {
                input: "9223372036854775808".to_string()
            })
        );
    }

    #[test]
    fn classify_input_composes() {
        assert_eq!(classify_input("30"), Ok(Label::Both));
        assert_eq!(classify_input("7"), Ok(Label::Neither));
        assert!(classify_input("7.5").is_err());
    }
}
