//! Strongly typed identifiers for store-keyed entities.
//!
//! Identifiers are opaque strings assigned by the backing store. Wrapping
//! them keeps a task key from being handed to a user operation.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a store key.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the underlying string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier for a platform user.
    UserId
);

string_id!(
    /// Identifier for a task catalog entry.
    TaskId
);

string_id!(
    /// Identifier for a withdrawal request.
    WithdrawalId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_roundtrip_as_plain_strings() {
        let id = UserId::new("u-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"u-123\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert_eq!(back.as_str(), "u-123");
    }

    #[test]
    fn ids_display_as_their_key() {
        assert_eq!(TaskId::new("t-9").to_string(), "t-9");
        assert_eq!(WithdrawalId::from("w-1").as_str(), "w-1");
    }
}
