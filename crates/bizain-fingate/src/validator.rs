//! Argument checks for gated operations.
//!
//! Each check looks at one positional argument and fails with a descriptive
//! [`ValidationError`] carrying the offending value. None of them touch the
//! network.

use chain_jingtum::TokenNamespace;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::gate::Arg;

/// Bizain account address.
pub fn check_address(arg: &Arg<'_>) -> Result<(), ValidationError> {
    match arg.as_text() {
        Some(value) if chain_jingtum::is_valid_address(value, TokenNamespace::Bizain) => Ok(()),
        _ => Err(ValidationError::InvalidAddress(arg.to_string())),
    }
}

/// Bizain secret (family seed).
pub fn check_secret(arg: &Arg<'_>) -> Result<(), ValidationError> {
    match arg.as_text() {
        Some(value) if chain_jingtum::is_valid_secret(value, TokenNamespace::Bizain) => Ok(()),
        _ => Err(ValidationError::InvalidSecret(arg.to_string())),
    }
}

/// Decimal amount strictly greater than zero. Any precision or magnitude.
pub fn check_amount(arg: &Arg<'_>) -> Result<(), ValidationError> {
    match arg.as_text() {
        Some(value) if is_positive_decimal(value.trim()) => Ok(()),
        _ => Err(ValidationError::InvalidAmount(arg.to_string())),
    }
}

/// Memo whose target is a Jingtum (base ledger) address.
pub fn check_memo(arg: &Arg<'_>) -> Result<(), ValidationError> {
    match arg {
        Arg::Memo(memo) => {
            if chain_jingtum::is_valid_address(&memo.target_address, TokenNamespace::Jingtum) {
                Ok(())
            } else {
                Err(ValidationError::InvalidMemoAddress(memo.target_address.clone()))
            }
        }
        Arg::Text(value) => Err(ValidationError::InvalidMemoAddress((*value).to_string())),
    }
}

/// Parse a transfer amount for the payment request. Plain and scientific
/// notation are accepted; the result must be positive.
///
/// Positive amounts that do not fit a [`Decimal`] (more than 28 fractional
/// digits, or above its maximum) fail with `AmountOutOfRange` rather than
/// being rounded.
pub fn parse_amount(value: &str) -> Result<Decimal, ValidationError> {
    let trimmed = value.trim();
    if !is_positive_decimal(trimmed) {
        return Err(ValidationError::InvalidAmount(value.to_string()));
    }

    let parsed = Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::AmountOutOfRange(value.to_string()))?;
    if parsed.is_zero() {
        return Err(ValidationError::AmountOutOfRange(value.to_string()));
    }
    Ok(parsed)
}

/// Lexical decimal check: optional sign, digits with at most one point,
/// optional integer exponent. Positive when not negated and some mantissa
/// digit is non-zero.
fn is_positive_decimal(value: &str) -> bool {
    let (mantissa, exponent) = match value.find(['e', 'E']) {
        Some(at) => (&value[..at], Some(&value[at + 1..])),
        None => (value, None),
    };

    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }

    let (negative, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if integer.is_empty() && fraction.is_empty() {
        return false;
    }

    let mut digits = integer.bytes().chain(fraction.bytes());
    if !digits.clone().all(|b| b.is_ascii_digit()) {
        return false;
    }
    !negative && digits.any(|b| b != b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Memo;

    const TEST_ADDRESS: &str = "bMAy4Pu8CSf5apR44HbYyLFKeC9Dbau16Q";
    const TEST_SECRET: &str = "ssySqG4BhxpngV2FjAe1SJYFD4dcm";
    const JINGTUM_ADDRESS: &str = "jpgWGpfHz8GxqUjz5nb6ej8eZJQtiF6KhH";

    #[test]
    fn address_check() {
        assert!(check_address(&Arg::Text(TEST_ADDRESS)).is_ok());
        assert_eq!(
            check_address(&Arg::Text("111")),
            Err(ValidationError::InvalidAddress("111".into()))
        );
        // A Jingtum address is not a Bizain address.
        assert!(check_address(&Arg::Text(JINGTUM_ADDRESS)).is_err());
    }

    #[test]
    fn secret_check() {
        assert!(check_secret(&Arg::Text(TEST_SECRET)).is_ok());
        assert_eq!(
            check_secret(&Arg::Text("111")).unwrap_err().to_string(),
            "111 is invalid bizain secret."
        );
    }

    #[test]
    fn amount_boundaries() {
        assert_eq!(
            check_amount(&Arg::Text("0")).unwrap_err().to_string(),
            "0 is invalid amount."
        );
        assert!(check_amount(&Arg::Text("-1")).is_err());
        assert!(check_amount(&Arg::Text("0.000000000000000001")).is_ok());
        assert!(check_amount(&Arg::Text("0.1")).is_ok());
        assert!(check_amount(&Arg::Text("1")).is_ok());
    }

    #[test]
    fn amount_must_be_numeric() {
        assert_eq!(
            check_amount(&Arg::Text("abc")).unwrap_err().to_string(),
            "abc is invalid amount."
        );
        assert!(check_amount(&Arg::Text("")).is_err());
    }

    #[test]
    fn amount_scientific_notation() {
        assert_eq!(parse_amount("1e2").unwrap(), Decimal::from(100));
        assert!(parse_amount("0e5").is_err());
    }

    #[test]
    fn amount_beyond_decimal_precision_is_positive() {
        let tiny = "0.00000000000000000000000000000001";
        let huge = "100000000000000000000000000000";
        assert!(check_amount(&Arg::Text(tiny)).is_ok());
        assert!(check_amount(&Arg::Text(huge)).is_ok());
        assert!(check_amount(&Arg::Text("1e30")).is_ok());
        assert!(check_amount(&Arg::Text("1e-40")).is_ok());

        // Accepted by the gate, but never silently rounded for the request.
        assert_eq!(
            parse_amount(tiny),
            Err(ValidationError::AmountOutOfRange(tiny.into()))
        );
        assert_eq!(
            parse_amount(huge),
            Err(ValidationError::AmountOutOfRange(huge.into()))
        );
        assert_eq!(
            parse_amount("1e30"),
            Err(ValidationError::AmountOutOfRange("1e30".into()))
        );
    }

    #[test]
    fn amount_lexical_forms() {
        for ok in ["1.", ".5", "+2", " 3 ", "1.5E+2", "2e-3", "007"] {
            assert!(check_amount(&Arg::Text(ok)).is_ok(), "{ok} should pass");
        }
        for bad in ["-0.1", "0.000", "1.2.3", "e5", "1e", "1e+", "--1", "1,5", ".", "+", "0x10"] {
            assert!(check_amount(&Arg::Text(bad)).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn parse_amount_keeps_scale() {
        assert_eq!(parse_amount("0.10").unwrap().to_string(), "0.10");
    }

    #[test]
    fn memo_check() {
        let ok = Memo::new(JINGTUM_ADDRESS);
        assert!(check_memo(&Arg::Memo(&ok)).is_ok());

        let bad = Memo::new("111");
        assert_eq!(
            check_memo(&Arg::Memo(&bad)).unwrap_err().to_string(),
            "111 is invalid jingtum address in memo."
        );

        // Memos target the base ledger, not Bizain.
        let bizain = Memo::new(TEST_ADDRESS);
        assert!(check_memo(&Arg::Memo(&bizain)).is_err());
    }

    #[test]
    fn wrong_argument_kind_fails() {
        let memo = Memo::new(JINGTUM_ADDRESS);
        assert!(check_address(&Arg::Memo(&memo)).is_err());
        assert!(check_secret(&Arg::Memo(&memo)).is_err());
        assert!(check_amount(&Arg::Memo(&memo)).is_err());
        assert!(check_memo(&Arg::Text(JINGTUM_ADDRESS)).is_err());
    }
}
