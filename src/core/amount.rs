//! Custom increment amounts typed by the user.
//!
//! The presentation layer hands over the raw text field and a sign.
//! Anything that is not a positive integer means "no adjustment".

use serde::{Deserialize, Serialize};

use crate::error::AmountError;

/// Direction of a custom adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Apply the sign to a positive magnitude.
    #[must_use]
    pub const fn apply(self, amount: i64) -> i64 {
        match self {
            Sign::Plus => amount,
            Sign::Minus => -amount,
        }
    }
}

/// Parse a custom amount. Surrounding whitespace is ignored.
///
/// ```
/// use life_counter::core::parse_amount;
///
/// assert_eq!(parse_amount(" 7 "), Ok(7));
/// assert!(parse_amount("abc").is_err());
/// assert!(parse_amount("0").is_err());
/// ```
pub fn parse_amount(text: &str) -> Result<u32, AmountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;
    if value <= 0 {
        return Err(AmountError::NotPositive(value));
    }
    u32::try_from(value).map_err(|_| AmountError::TooLarge(value))
}

/// Parse a custom amount and apply a sign, yielding the signed delta.
pub fn signed_amount(text: &str, sign: Sign) -> Result<i64, AmountError> {
    parse_amount(text).map(|amount| sign.apply(i64::from(amount)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_amount("1"), Ok(1));
        assert_eq!(parse_amount("  12\n"), Ok(12));
        assert_eq!(parse_amount("+3"), Ok(3));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(parse_amount("abc"), Err(AmountError::NotANumber("abc".into())));
        assert_eq!(parse_amount("1.5"), Err(AmountError::NotANumber("1.5".into())));
        assert!(matches!(
            parse_amount("99999999999999999999"),
            Err(AmountError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_not_positive() {
        assert_eq!(parse_amount("0"), Err(AmountError::NotPositive(0)));
        assert_eq!(parse_amount("-4"), Err(AmountError::NotPositive(-4)));
    }

    #[test]
    fn test_parse_too_large() {
        assert_eq!(parse_amount("4294967295"), Ok(u32::MAX));
        assert_eq!(parse_amount("4294967296"), Err(AmountError::TooLarge(4_294_967_296)));
        assert_eq!(
            parse_amount("9223372036854775807"),
            Err(AmountError::TooLarge(i64::MAX))
        );
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(signed_amount("5", Sign::Plus), Ok(5));
        assert_eq!(signed_amount("5", Sign::Minus), Ok(-5));
        assert_eq!(signed_amount("x", Sign::Minus), Err(AmountError::NotANumber("x".into())));
    }
}
