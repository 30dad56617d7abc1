//! The order form value object and basket tiers
//!
//! An [`OrderForm`] is decoded from the URL-encoded request body, lives for
//! one request/response cycle, and is never stored. Field names mirror the
//! HTML form (camelCase); the payment token is accepted under either of its
//! historical names, `stripeToken` or `paymentToken`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ChargeError;

/// One of the three fixed product tiers, each with a fixed unit price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketType {
    Small,
    Medium,
    Large,
}

impl BasketType {
    /// Unit price in minor currency units (cents)
    pub fn unit_price(&self) -> u64 {
        match self {
            BasketType::Small => 3999,
            BasketType::Medium => 5999,
            BasketType::Large => 7999,
        }
    }
}

impl FromStr for BasketType {
    type Err = ChargeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Small" => Ok(BasketType::Small),
            "Medium" => Ok(BasketType::Medium),
            "Large" => Ok(BasketType::Large),
            other => Err(ChargeError::InvalidBasketType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BasketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasketType::Small => write!(f, "Small"),
            BasketType::Medium => write!(f, "Medium"),
            BasketType::Large => write!(f, "Large"),
        }
    }
}

/// A single order submission, decoded from the form body.
///
/// Every field defaults to empty so that an incomplete submission still
/// decodes; the only fields the service rejects on are the payment token
/// (must be present) and the basket type (must be a known tier). Quantity
/// stays a raw string here — parsing and the fallback-to-1 rule live in
/// [`crate::core::pricing`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderForm {
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub quantity: String,
    pub delivery_date: String,
    pub order_frequency: String,
    pub address: String,
    pub notes: String,
    pub promo_code: String,
    pub basket_type: String,
    #[serde(rename = "stripeToken", alias = "paymentToken")]
    pub stripe_token: String,
}

impl OrderForm {
    /// Description line sent to the payment processor with the charge
    pub fn charge_description(&self, basket: BasketType, quantity: u64) -> String {
        format!("{} Basket × {} for {}", basket, quantity, self.company_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basket_type_from_str() {
        assert_eq!("Small".parse::<BasketType>().unwrap(), BasketType::Small);
        assert_eq!("Medium".parse::<BasketType>().unwrap(), BasketType::Medium);
        assert_eq!("Large".parse::<BasketType>().unwrap(), BasketType::Large);
    }

    #[test]
    fn test_basket_type_rejects_unknown() {
        let err = "Huge".parse::<BasketType>().unwrap_err();
        assert!(matches!(err, ChargeError::InvalidBasketType { value } if value == "Huge"));
    }

    #[test]
    fn test_basket_type_is_case_sensitive() {
        assert!("small".parse::<BasketType>().is_err());
        assert!("LARGE".parse::<BasketType>().is_err());
    }

    #[test]
    fn test_unit_prices() {
        assert_eq!(BasketType::Small.unit_price(), 3999);
        assert_eq!(BasketType::Medium.unit_price(), 5999);
        assert_eq!(BasketType::Large.unit_price(), 7999);
    }

    #[test]
    fn test_charge_description_format() {
        let form = OrderForm {
            company_name: "Acme Corp".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.charge_description(BasketType::Medium, 3),
            "Medium Basket × 3 for Acme Corp"
        );
    }

    #[test]
    fn test_form_decodes_with_missing_fields() {
        let form: OrderForm = serde_json::from_str("{}").unwrap();
        assert!(form.stripe_token.is_empty());
        assert!(form.basket_type.is_empty());
    }

    #[test]
    fn test_payment_token_alias() {
        let form: OrderForm =
            serde_json::from_str(r#"{"paymentToken": "tok_visa"}"#).unwrap();
        assert_eq!(form.stripe_token, "tok_visa");

        let form: OrderForm =
            serde_json::from_str(r#"{"stripeToken": "tok_visa"}"#).unwrap();
        assert_eq!(form.stripe_token, "tok_visa");
    }
}
