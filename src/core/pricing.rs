//! Pricing and request validation
//!
//! The only business rules in the service: a fixed tier price table, a
//! lenient quantity parse, and a single promo code that halves the total.
//! Everything here is pure; amounts are integers in minor currency units.

use super::error::{ChargeError, ChargeResult};
use super::order::BasketType;

/// The one promotional code. Matched after trimming, case-insensitively.
pub const PROMO_CODE: &str = "201FRUIT";

/// Parse a quantity field from the form.
///
/// Unparsable, non-positive, or empty values fall back to 1 rather than
/// rejecting the order. No upper bound is enforced.
pub fn parse_quantity(raw: &str) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => n,
        _ => 1,
    }
}

/// Reject a request that carries no payment token.
///
/// The token is otherwise opaque; it is forwarded to the payment processor
/// unmodified.
pub fn validate_payment_token(token: &str) -> ChargeResult<()> {
    if token.is_empty() {
        return Err(ChargeError::MissingToken);
    }
    Ok(())
}

/// Price an order from already-parsed values.
///
/// The promo code halves the total, rounded down.
pub fn price(basket: BasketType, quantity: u64, promo_code: Option<&str>) -> u64 {
    // No upper bound on quantity; saturate instead of overflowing.
    let mut total = basket.unit_price().saturating_mul(quantity);
    if let Some(code) = promo_code {
        if code.trim().eq_ignore_ascii_case(PROMO_CODE) {
            total /= 2;
        }
    }
    total
}

/// Compute the charge amount in minor currency units from raw form fields.
///
/// `basket_type` must name one of the three tiers; anything else fails with
/// [`ChargeError::InvalidBasketType`].
pub fn compute_amount(
    basket_type: &str,
    quantity: &str,
    promo_code: Option<&str>,
) -> ChargeResult<u64> {
    let basket: BasketType = basket_type.parse()?;
    Ok(price(basket, parse_quantity(quantity), promo_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_prices_at_quantity_one() {
        assert_eq!(compute_amount("Small", "1", None).unwrap(), 3999);
        assert_eq!(compute_amount("Medium", "1", None).unwrap(), 5999);
        assert_eq!(compute_amount("Large", "1", None).unwrap(), 7999);
    }

    #[test]
    fn test_quantity_multiplies_unit_price() {
        assert_eq!(compute_amount("Medium", "3", None).unwrap(), 17997);
    }

    #[test]
    fn test_promo_code_halves_total_case_insensitive() {
        assert_eq!(
            compute_amount("Large", "2", Some("201fruit")).unwrap(),
            7999
        );
    }

    #[test]
    fn test_promo_code_trimmed() {
        assert_eq!(
            compute_amount("Small", "1", Some("  201FRUIT  ")).unwrap(),
            1999
        );
    }

    #[test]
    fn test_promo_halving_rounds_down() {
        // 3999 / 2 = 1999.5, floor to 1999
        assert_eq!(compute_amount("Small", "1", Some("201FRUIT")).unwrap(), 1999);
    }

    #[test]
    fn test_wrong_promo_code_ignored() {
        assert_eq!(
            compute_amount("Small", "1", Some("202FRUIT")).unwrap(),
            3999
        );
    }

    #[test]
    fn test_unparsable_quantity_falls_back_to_one() {
        assert_eq!(compute_amount("Small", "not-a-number", None).unwrap(), 3999);
    }

    #[test]
    fn test_zero_and_negative_quantity_fall_back_to_one() {
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-3"), 1);
        assert_eq!(parse_quantity(""), 1);
    }

    #[test]
    fn test_quantity_with_whitespace() {
        assert_eq!(parse_quantity(" 4 "), 4);
    }

    #[test]
    fn test_unknown_basket_rejected() {
        let err = compute_amount("Huge", "1", None).unwrap_err();
        assert!(matches!(err, ChargeError::InvalidBasketType { .. }));
    }

    #[test]
    fn test_validate_payment_token() {
        assert!(validate_payment_token("tok_visa").is_ok());
        assert!(matches!(
            validate_payment_token("").unwrap_err(),
            ChargeError::MissingToken
        ));
    }
}
