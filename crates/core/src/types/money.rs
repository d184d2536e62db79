//! Type-safe money representation using decimal arithmetic.
//!
//! All monetary values go through [`Money`] so that arithmetic stays exact
//! (`rust_decimal`, never floats) and display formatting stays consistent.
//! The storefront sells in Brazilian reais, so display formatting follows
//! pt-BR conventions: `R$ 1.234,56`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new monetary amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create an amount in Brazilian reais.
    #[must_use]
    pub const fn brl(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::BRL)
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Format for display with the currency's locale conventions.
    ///
    /// BRL uses a comma decimal separator and dot thousands grouping
    /// (`R$ 1.234,56`); other currencies use the inverse (`$1,234.56`).
    /// Amounts are rounded to two decimal places, half away from zero.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let (int_part, frac_part) = split_two_decimals(rounded.abs());

        let (thousands_sep, decimal_sep) = self.currency_code.separators();
        let grouped = group_thousands(&int_part, thousands_sep);

        let sign = if negative { "-" } else { "" };
        match self.currency_code {
            CurrencyCode::BRL => format!(
                "{sign}{} {grouped}{decimal_sep}{frac_part}",
                self.currency_code.symbol()
            ),
            _ => format!(
                "{sign}{}{grouped}{decimal_sep}{frac_part}",
                self.currency_code.symbol()
            ),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Split a non-negative decimal into integer digits and exactly two
/// fractional digits.
fn split_two_decimals(amount: Decimal) -> (String, String) {
    let text = amount.to_string();
    let (int_part, frac_part) = text.split_once('.').map_or_else(
        || (text.clone(), String::new()),
        |(i, f)| (i.to_string(), f.to_string()),
    );

    let mut frac: String = frac_part.chars().take(2).collect();
    while frac.len() < 2 {
        frac.push('0');
    }

    (int_part, frac)
}

/// Insert a thousands separator every three digits, right to left.
fn group_thousands(digits: &str, separator: char) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        let remaining = chars.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*c);
    }
    grouped
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency symbol used in display formatting.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 alphabetic code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }

    /// (thousands separator, decimal separator) per locale convention.
    const fn separators(self) -> (char, char) {
        match self {
            Self::BRL | Self::EUR => ('.', ','),
            Self::USD => (',', '.'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl(s: &str) -> Money {
        Money::brl(s.parse().expect("decimal literal"))
    }

    #[test]
    fn test_brl_display_two_decimals() {
        assert_eq!(brl("6.9").display(), "R$ 6,90");
        assert_eq!(brl("9.95").display(), "R$ 9,95");
        assert_eq!(brl("0").display(), "R$ 0,00");
    }

    #[test]
    fn test_brl_display_rounds_half_away_from_zero() {
        // The grand-total reference vector from the pricing rules.
        assert_eq!(brl("39.0818").display(), "R$ 39,08");
        assert_eq!(brl("27.8318").display(), "R$ 27,83");
        assert_eq!(brl("1.005").display(), "R$ 1,01");
    }

    #[test]
    fn test_brl_display_thousands_grouping() {
        assert_eq!(brl("1234.5").display(), "R$ 1.234,50");
        assert_eq!(brl("1234567.89").display(), "R$ 1.234.567,89");
        assert_eq!(brl("999.99").display(), "R$ 999,99");
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(brl("-3.75").display(), "-R$ 3,75");
    }

    #[test]
    fn test_usd_display() {
        let price = Money::new("1234.5".parse().expect("decimal"), CurrencyCode::USD);
        assert_eq!(price.display(), "$1,234.50");
    }

    #[test]
    fn test_serde_amount_is_string() {
        // rust_decimal's serde-with-str keeps wire amounts exact.
        let json = serde_json::to_string(&brl("6.90")).expect("serialize");
        assert!(json.contains("\"6.90\""), "got {json}");

        let back: Money = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, brl("6.90"));
    }

    #[test]
    fn test_currency_metadata() {
        assert_eq!(CurrencyCode::BRL.code(), "BRL");
        assert_eq!(CurrencyCode::BRL.symbol(), "R$");
        assert_eq!(CurrencyCode::default(), CurrencyCode::BRL);
    }
}
