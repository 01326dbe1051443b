//! Price type for catalog and cart amounts.
//!
//! Prices are non-negative integers in the smallest unit the storefront
//! trades in (whole rupees for the default INR catalog), so totals never
//! touch floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Supported display currencies.
///
/// A currency only picks the symbol a [`Price`] is printed with; amounts are
/// never converted between currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    /// Format a price with this currency's symbol (e.g., "₹16,000").
    pub fn format(&self, price: Price) -> String {
        format!("{}{}", self.symbol(), price)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A price in the catalog's smallest currency unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero price.
    pub const ZERO: Price = Price(0);

    /// Create a price from an amount in the smallest unit.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The raw amount.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Price {
    type Output = Price;

    /// Saturates instead of wrapping; catalog prices never get close.
    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

/// Thousands-grouped amount without a symbol (e.g., "16,000").
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        f.write_str(&grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display_groups_thousands() {
        assert_eq!(Price::new(0).to_string(), "0");
        assert_eq!(Price::new(950).to_string(), "950");
        assert_eq!(Price::new(16000).to_string(), "16,000");
        assert_eq!(Price::new(1234567).to_string(), "1,234,567");
    }

    #[test]
    fn test_currency_format() {
        assert_eq!(Currency::INR.format(Price::new(12000)), "\u{20b9}12,000");
        assert_eq!(Currency::USD.format(Price::new(45)), "$45");
    }

    #[test]
    fn test_price_sum() {
        let prices = [Price::new(4000), Price::new(12000)];
        let total: Price = prices.iter().sum();
        assert_eq!(total, Price::new(16000));
    }

    #[test]
    fn test_price_add_saturates() {
        assert_eq!(Price::new(u64::MAX) + Price::new(1), Price::new(u64::MAX));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
