use std::str::FromStr;
use thiserror::Error;

use crate::engine::amount::{Amount, AmountError};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid input. Please enter a valid number.")]
    Malformed(#[from] AmountError),

    #[error("Invalid amount. Please enter a positive number.")]
    NotPositive,
}

/// The single validation gate for user-entered amounts: parse, then require
/// a strictly positive value. Runs before any ledger call.
pub fn parse_amount(input: &str) -> Result<Amount, InputError> {
    let amount = Amount::from_str(input)?;
    if !amount.is_positive() {
        return Err(InputError::NotPositive);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use crate::engine::validate::{InputError, parse_amount};

    #[test]
    fn test_that_positive_amounts_pass_validation() {
        assert_eq!(parse_amount("500").unwrap().to_string(), "500.00");
        assert_eq!(parse_amount("0.01").unwrap().to_string(), "0.01");
        assert_eq!(parse_amount("200.5").unwrap().to_string(), "200.50");
    }

    #[test]
    fn test_that_non_numeric_input_is_rejected() {
        assert!(matches!(parse_amount("abc"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_amount(""), Err(InputError::Malformed(_))));
        assert!(matches!(
            parse_amount("12.3.4"),
            Err(InputError::Malformed(_))
        ));
    }

    #[test]
    fn test_that_non_positive_amounts_are_rejected() {
        assert!(matches!(parse_amount("0"), Err(InputError::NotPositive)));
        assert!(matches!(parse_amount("0.00"), Err(InputError::NotPositive)));
        assert!(matches!(parse_amount("-5"), Err(InputError::NotPositive)));
        assert!(matches!(
            parse_amount("-0.01"),
            Err(InputError::NotPositive)
        ));
    }
}
