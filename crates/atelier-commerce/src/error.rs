//! Commerce error types.
//!
//! The cart and the catalog filter are total and never produce these; they
//! come from the fallible edges: catalog loading, bracket selection,
//! checkout and artwork submissions.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Artwork not found.
    #[error("Artwork not found: {0}")]
    ArtworkNotFound(String),

    /// Two catalog entries share an identifier.
    #[error("Duplicate artwork id in catalog: {0}")]
    DuplicateArtwork(String),

    /// Price bracket index outside the fixed table.
    #[error("Unknown price bracket {index} (expected 0..{count})")]
    UnknownPriceBracket { index: usize, count: usize },

    /// Unknown payment method name.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A required checkout field was left blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The artwork submission form failed validation.
    #[error("Invalid submission: {}", format_field_errors(.0))]
    InvalidSubmission(BTreeMap<&'static str, String>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

fn format_field_errors(errors: &BTreeMap<&'static str, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}
