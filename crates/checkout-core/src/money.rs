//! # Money Types
//!
//! Currency and price types for bloom-checkout.
//! The shop sells in a single currency; amounts are stored in the
//! smallest currency unit and rendered as 2-decimal strings on the wire.

use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
///
/// The checkout flow is single-currency: every cart, payment request,
/// and execution amount is USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    USD,
}

impl Currency {
    /// Returns the ISO 4217 currency code as the payment provider expects it
    pub fn as_provider_code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::USD => 2,
        }
    }

    /// Convert a decimal amount to the smallest currency unit (cents)
    pub fn to_smallest_unit(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to decimal
    pub fn from_smallest_unit(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_provider_code())
    }
}

/// Price with amount in smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in smallest currency unit (cents for USD)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from a decimal amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount: currency.to_smallest_unit(amount),
            currency,
        }
    }

    /// Create a price from smallest unit (cents)
    pub fn from_cents(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// A zero price
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_smallest_unit(self.amount)
    }

    /// Whether the amount is negative (rejected at the API boundary)
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Format the amount the way the provider's wire format expects it,
    /// with exactly two decimal places (e.g. "12.50").
    pub fn to_provider_string(&self) -> String {
        format!("{:.2}", self.as_decimal())
    }

    /// Format for display (e.g., "$12.50")
    pub fn display(&self) -> String {
        let symbol = match self.currency {
            Currency::USD => "$",
        };
        format!("{}{:.2}", symbol, self.as_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_conversion() {
        let usd = Currency::USD;
        assert_eq!(usd.to_smallest_unit(10.99), 1099);
        assert_eq!(usd.from_smallest_unit(1099), 10.99);
        assert_eq!(usd.to_smallest_unit(12.50), 1250);
    }

    #[test]
    fn test_provider_string() {
        let price = Price::new(12.5, Currency::USD);
        assert_eq!(price.to_provider_string(), "12.50");

        let whole = Price::new(7.0, Currency::USD);
        assert_eq!(whole.to_provider_string(), "7.00");

        let zero = Price::zero(Currency::USD);
        assert_eq!(zero.to_provider_string(), "0.00");
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(29.99, Currency::USD);
        assert_eq!(price.display(), "$29.99");
    }

    #[test]
    fn test_negative_price() {
        let price = Price::new(-1.0, Currency::USD);
        assert!(price.is_negative());
        assert!(!Price::zero(Currency::USD).is_negative());
    }
}
