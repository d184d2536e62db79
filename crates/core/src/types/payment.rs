//! Payment methods and their pricing adjustments.
//!
//! Payment happens on delivery; the chosen method only affects pricing
//! through a surcharge multiplier on the item total. Exactly one method is
//! selected for the whole cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the customer pays on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit card. Carries the card-processing surcharge.
    #[default]
    Credit,
    /// Debit card.
    Debit,
    /// Pix or cash on delivery. No adjustment.
    Cash,
}

impl PaymentMethod {
    /// All methods, in the order the cart page offers them.
    pub const ALL: [Self; 3] = [Self::Credit, Self::Debit, Self::Cash];

    /// Multiplier applied to the sum of all line subtotals.
    #[must_use]
    pub fn surcharge_rate(self) -> Decimal {
        match self {
            Self::Credit => Decimal::new(10385, 4), // 1.0385
            Self::Debit => Decimal::new(185, 2),    // 1.85
            Self::Cash => Decimal::ONE,
        }
    }

    /// Wire/form identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Cash => "cash",
        }
    }

    /// Customer-facing label (pt-BR, matching the storefront copy).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Credit => "Cartão de crédito",
            Self::Debit => "Cartão de débito",
            Self::Cash => "Pix ou Dinheiro",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a payment method identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment method: {0}")]
pub struct ParsePaymentMethodError(pub String);

impl std::str::FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            "cash" => Ok(Self::Cash),
            other => Err(ParsePaymentMethodError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surcharge_rates() {
        assert_eq!(
            PaymentMethod::Credit.surcharge_rate(),
            "1.0385".parse::<Decimal>().expect("decimal")
        );
        assert_eq!(
            PaymentMethod::Debit.surcharge_rate(),
            "1.85".parse::<Decimal>().expect("decimal")
        );
        assert_eq!(PaymentMethod::Cash.surcharge_rate(), Decimal::ONE);
    }

    #[test]
    fn test_default_is_credit() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Credit);
    }

    #[test]
    fn test_parse_roundtrip() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
        }
        assert!("pix".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&PaymentMethod::Debit).expect("serialize");
        assert_eq!(json, "\"debit\"");

        let back: PaymentMethod = serde_json::from_str("\"cash\"").expect("deserialize");
        assert_eq!(back, PaymentMethod::Cash);
    }
}
