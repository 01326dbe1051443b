//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an OrderId where an ArtworkId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix carried by every order number.
pub const ORDER_PREFIX: &str = "DAH";

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ArtworkId);
define_id!(OrderId);
define_id!(SubmissionId);

impl OrderId {
    /// Order number for an order placed at `timestamp_ms`: the prefix plus
    /// the last eight digits of the millisecond timestamp.
    pub fn from_timestamp_ms(timestamp_ms: i64) -> Self {
        let digits = timestamp_ms.unsigned_abs().to_string();
        let tail = &digits[digits.len().saturating_sub(8)..];
        Self(format!("{}{:0>8}", ORDER_PREFIX, tail))
    }
}

impl SubmissionId {
    /// Submission id for a form accepted at `timestamp_ms`.
    pub fn from_timestamp_ms(timestamp_ms: i64) -> Self {
        Self(timestamp_ms.to_string())
    }
}

/// Current Unix timestamp in milliseconds.
pub(crate) fn current_timestamp_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
