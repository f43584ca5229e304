//! Input validation for the interactive prompts.
//!
//! Every prompt answer arrives as raw text. These functions turn it into a
//! typed value or an [`InputError`]; the session re-prompts on error, so none
//! of them ever block or loop themselves.

/// Why a prompt answer was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{raw:?} is not a number")]
    NotANumber { raw: String },

    #[error("amount must be greater than zero")]
    NotPositive,

    #[error("{value} is not a whole number")]
    NotWhole { value: f64 },

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: f64, min: usize, max: usize },

    #[error("deposit of {value} exceeds the maximum of {max}")]
    TooLarge { value: f64, max: f64 },

    #[error("bet of {bet} per line exceeds {max_per_line} per line available")]
    ExceedsBalance { bet: f64, max_per_line: f64 },
}

/// Parse an amount. The trimmed text must be a complete, finite number.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber {
            raw: trimmed.to_string(),
        }),
    }
}

/// Largest accepted deposit. Keeps the balance far away from `f64` overflow.
pub const MAX_DEPOSIT: f64 = 1e12;

/// A deposit must be a number strictly greater than zero and at most
/// [`MAX_DEPOSIT`].
pub fn validate_deposit(raw: &str) -> Result<f64, InputError> {
    let amount = parse_amount(raw)?;
    if amount <= 0.0 {
        return Err(InputError::NotPositive);
    }
    if amount > MAX_DEPOSIT {
        return Err(InputError::TooLarge {
            value: amount,
            max: MAX_DEPOSIT,
        });
    }
    Ok(amount)
}

/// A line count must be a whole number within `[min, max]`.
pub fn validate_line_count(raw: &str, min: usize, max: usize) -> Result<usize, InputError> {
    let value = parse_amount(raw)?;
    if value.fract() != 0.0 {
        return Err(InputError::NotWhole { value });
    }
    if value < min as f64 || value > max as f64 {
        return Err(InputError::OutOfRange { value, min, max });
    }
    Ok(value as usize)
}

/// A bet per line must be positive and affordable on every chosen line.
pub fn validate_bet(raw: &str, balance: f64, lines: usize) -> Result<f64, InputError> {
    let bet = parse_amount(raw)?;
    if bet <= 0.0 {
        return Err(InputError::NotPositive);
    }
    let max_per_line = balance / lines as f64;
    if bet > max_per_line {
        return Err(InputError::ExceedsBalance { bet, max_per_line });
    }
    Ok(bet)
}

/// Only a bare lowercase `y` continues; anything else stops.
pub fn is_affirmative(raw: &str) -> bool {
    raw == "y"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_accepts_positive_numbers() {
        assert_eq!(validate_deposit("10"), Ok(10.0));
        assert_eq!(validate_deposit(" 2.5 \n"), Ok(2.5));
        assert_eq!(validate_deposit("0.01"), Ok(0.01));
    }

    #[test]
    fn deposit_rejects_garbage_and_non_positive() {
        assert!(matches!(validate_deposit("abc"), Err(InputError::NotANumber { .. })));
        assert!(matches!(validate_deposit(""), Err(InputError::NotANumber { .. })));
        assert!(matches!(validate_deposit("10abc"), Err(InputError::NotANumber { .. })));
        assert!(matches!(validate_deposit("NaN"), Err(InputError::NotANumber { .. })));
        assert!(matches!(validate_deposit("inf"), Err(InputError::NotANumber { .. })));
        assert_eq!(validate_deposit("0"), Err(InputError::NotPositive));
        assert_eq!(validate_deposit("-5"), Err(InputError::NotPositive));
    }

    #[test]
    fn deposit_is_capped() {
        assert_eq!(validate_deposit("1e12"), Ok(MAX_DEPOSIT));
        assert!(matches!(validate_deposit("1e13"), Err(InputError::TooLarge { .. })));
        assert!(matches!(validate_deposit("1e308"), Err(InputError::TooLarge { .. })));
    }

    #[test]
    fn line_count_bounds_are_inclusive() {
        assert_eq!(validate_line_count("1", 1, 3), Ok(1));
        assert_eq!(validate_line_count("3", 1, 3), Ok(3));
        assert_eq!(validate_line_count("3.0", 1, 3), Ok(3));
        assert!(matches!(
            validate_line_count("0", 1, 3),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_line_count("4", 1, 3),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_line_count("1.5", 1, 3),
            Err(InputError::NotWhole { .. })
        ));
        assert!(matches!(
            validate_line_count("two", 1, 3),
            Err(InputError::NotANumber { .. })
        ));
    }

    #[test]
    fn bet_limits() {
        // Exactly balance / lines is allowed
        assert_eq!(validate_bet("10", 10.0, 1), Ok(10.0));
        assert_eq!(validate_bet("5", 15.0, 3), Ok(5.0));
        assert!(matches!(
            validate_bet("5.01", 15.0, 3),
            Err(InputError::ExceedsBalance { .. })
        ));
        assert_eq!(validate_bet("0", 15.0, 3), Err(InputError::NotPositive));
        assert_eq!(validate_bet("-1", 15.0, 3), Err(InputError::NotPositive));
        assert!(matches!(
            validate_bet("x", 15.0, 3),
            Err(InputError::NotANumber { .. })
        ));
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        for no in ["Y", "yes", "YES", " y", "y ", "n", "", "no", "yep"] {
            assert!(!is_affirmative(no), "{no:?}");
        }
    }
}
