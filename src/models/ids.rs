//! Strongly-typed ID wrappers for users, cost items and expenses
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generate a UUID-backed identifier type
///
/// Displayed as the prefix plus the first eight hex digits, which is how ids
/// show up in audit history.
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let simple = self.0.simple().to_string();
                write!(f, "{}{}", $display_prefix, &simple[..8])
            }
        }
    };
}

define_id!(ItemId, "itm-");
define_id!(UserId, "usr-");
define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_creation() {
        let id = ItemId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = UserId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("usr-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_equality() {
        let id1 = ItemId::new();
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_ne!(id1, ItemId::new());
    }

    #[test]
    fn test_id_serialization() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_display_uses_uuid_prefix() {
        let id = ItemId::new();
        let hex = id.as_uuid().simple().to_string();
        assert_eq!(id.to_string(), format!("itm-{}", &hex[..8]));
    }
}
