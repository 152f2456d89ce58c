use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Salaries are entered in units of 10,000 KRW (만원).
pub const INPUT_UNIT: i64 = 10_000;

static WHOLE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Error returned when the salary prompt receives unusable input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("정수만 입력해주세요. 예: 5000 (=> 5,000만원)")]
    NotAWholeNumber(String),

    #[error("입력한 연봉이 너무 큽니다: {0}")]
    TooLarge(String),
}

/// Parses an annual salary typed in units of 10,000 and returns the amount
/// in whole currency units.
///
/// Surrounding whitespace is ignored. Anything other than ASCII digits,
/// including an empty line, a sign or a decimal point, is rejected.
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_cli::input::parse_annual_salary;
///
/// assert_eq!(parse_annual_salary("5000\n"), Ok(Decimal::from(50_000_000)));
/// assert!(parse_annual_salary("50.5").is_err());
/// ```
pub fn parse_annual_salary(line: &str) -> Result<Decimal, InputError> {
    let trimmed = line.trim();
    if !WHOLE_NUMBER.is_match(trimmed) {
        tracing::debug!(input = %trimmed, "rejected salary input");
        return Err(InputError::NotAWholeNumber(trimmed.to_string()));
    }

    Decimal::from_str(trimmed)
        .ok()
        .and_then(|units| units.checked_mul(Decimal::from(INPUT_UNIT)))
        .ok_or_else(|| InputError::TooLarge(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn multiplies_by_input_unit() {
        assert_eq!(parse_annual_salary("5000"), Ok(dec!(50000000)));
        assert_eq!(parse_annual_salary("0"), Ok(Decimal::ZERO));
    }

    #[test]
    fn trims_whitespace_and_newline() {
        assert_eq!(parse_annual_salary("  3600 \r\n"), Ok(dec!(36000000)));
    }

    #[test]
    fn leading_zeros_are_accepted() {
        assert_eq!(parse_annual_salary("05000"), Ok(dec!(50000000)));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(
            parse_annual_salary(""),
            Err(InputError::NotAWholeNumber(String::new()))
        );
        assert!(parse_annual_salary("   \n").is_err());
    }

    #[test]
    fn rejects_non_integers() {
        for input in ["abc", "-1", "+1", "50.5", "5,000", "1e3", "٥٠٠٠"] {
            assert_eq!(
                parse_annual_salary(input),
                Err(InputError::NotAWholeNumber(input.to_string())),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn rejects_amounts_beyond_decimal_range() {
        let huge = "9".repeat(40);

        assert_eq!(parse_annual_salary(&huge), Err(InputError::TooLarge(huge)));
    }
}
