//! Shipping details and payment method.

use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Contact and delivery details collected at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShippingDetails {
    /// Full name.
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Street address, possibly multi-line.
    pub address: String,
    pub city: String,
    /// Postal PIN code.
    pub pincode: String,
}

impl ShippingDetails {
    /// Check that every field is filled in.
    ///
    /// Reports the first blank field in form order.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let fields: [(&'static str, &str); 6] = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("city", &self.city),
            ("address", &self.address),
            ("pincode", &self.pincode),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CommerceError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Format the delivery address as a single line.
    pub fn one_line(&self) -> String {
        let address = self
            .address
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}, {} {}", address, self.city.trim(), self.pincode.trim())
    }
}

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Pay when the artwork arrives.
    #[default]
    Cod,
    /// UPI, card, or net banking.
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::Online => "online",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on Delivery",
            PaymentMethod::Online => "Online Payment",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cod" => Ok(PaymentMethod::Cod),
            "online" => Ok(PaymentMethod::Online),
            _ => Err(CommerceError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
