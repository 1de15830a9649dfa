//! Money input validation logic for the finance control app.
//!
//! The UI only handles presentation concerns; deciding whether a submitted
//! amount string is acceptable happens here.

use thiserror::Error;

/// Why a submitted amount string was rejected.
///
/// This is the only error the tracker can produce: the amount text was
/// empty or contained something other than decimal digits. The form
/// accepts no sign, no decimal point, and no separators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectedInput {
    #[error("amount is empty")]
    Empty,
    #[error("amount contains a non-digit character {0:?}")]
    NonDigit(char),
}

/// Money input service that handles amount validation and parsing
#[derive(Debug, Clone, Default)]
pub struct MoneyManagementService;

impl MoneyManagementService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and parse a submitted amount string.
    ///
    /// Accepts only non-empty strings made entirely of ASCII decimal
    /// digits. The parsed value is returned as a decimal because the
    /// balance is a running decimal total.
    pub fn validate_amount(&self, raw: &str) -> Result<f64, RejectedInput> {
        if raw.is_empty() {
            return Err(RejectedInput::Empty);
        }

        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_digit()) {
            return Err(RejectedInput::NonDigit(bad));
        }

        // Digit-only strings always parse; the fallback is never hit.
        raw.parse::<f64>().map_err(|_| RejectedInput::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> MoneyManagementService {
        MoneyManagementService::new()
    }

    #[test]
    fn test_validate_amount_accepts_digit_strings() {
        let service = create_test_service();

        assert_eq!(service.validate_amount("100").unwrap(), 100.0);
        assert_eq!(service.validate_amount("0").unwrap(), 0.0);
        assert_eq!(service.validate_amount("007").unwrap(), 7.0);
        assert_eq!(service.validate_amount("9999999").unwrap(), 9_999_999.0);
    }

    #[test]
    fn test_validate_amount_rejects_empty_input() {
        let service = create_test_service();

        assert_eq!(service.validate_amount(""), Err(RejectedInput::Empty));
    }

    #[test]
    fn test_validate_amount_rejects_non_digit_input() {
        let service = create_test_service();

        // Decimal point is not a digit
        assert_eq!(
            service.validate_amount("12.5"),
            Err(RejectedInput::NonDigit('.'))
        );
        // Neither is a sign
        assert_eq!(
            service.validate_amount("-5"),
            Err(RejectedInput::NonDigit('-'))
        );
        assert_eq!(
            service.validate_amount("+5"),
            Err(RejectedInput::NonDigit('+'))
        );
        // Letters, whitespace, separators
        assert_eq!(
            service.validate_amount("abc"),
            Err(RejectedInput::NonDigit('a'))
        );
        assert_eq!(
            service.validate_amount(" 10"),
            Err(RejectedInput::NonDigit(' '))
        );
        assert_eq!(
            service.validate_amount("1,000"),
            Err(RejectedInput::NonDigit(','))
        );
    }

    #[test]
    fn test_validate_amount_rejects_non_ascii_digits() {
        let service = create_test_service();

        // Arabic-Indic digits are digits, but not ASCII decimal digits
        assert!(service.validate_amount("١٢٣").is_err());
    }

    #[test]
    fn test_rejected_input_messages() {
        assert_eq!(RejectedInput::Empty.to_string(), "amount is empty");
        assert_eq!(
            RejectedInput::NonDigit('.').to_string(),
            "amount contains a non-digit character '.'"
        );
    }
}
