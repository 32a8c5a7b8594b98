//! Cost item model
//!
//! A cost item is the atomic unit of both the need list and the want list:
//! a name and a non-negative cost, tagged with a stable identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;
use super::money::Money;

/// Validation errors for cost items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    NegativeCost(Money),
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Item name cannot be empty"),
            Self::NegativeCost(cost) => write!(f, "Item cost cannot be negative: {}", cost),
        }
    }
}

impl std::error::Error for ItemValidationError {}

/// A named cost, used for both needs and wants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    /// Stable identifier, independent of the item's position in its list
    #[serde(default)]
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Cost of the item
    pub cost: Money,
}

impl CostItem {
    /// Create a new cost item with a fresh identifier, trimming the name
    pub fn new(name: impl Into<String>, cost: Money) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into().trim().to_string(),
            cost,
        }
    }

    /// Create a validated cost item
    pub fn try_new(name: impl Into<String>, cost: Money) -> Result<Self, ItemValidationError> {
        let item = Self::new(name, cost);
        item.validate()?;
        Ok(item)
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        if self.cost.is_negative() {
            return Err(ItemValidationError::NegativeCost(self.cost));
        }

        Ok(())
    }

    /// Compare name and cost, ignoring the identifier
    pub fn same_contents(&self, other: &CostItem) -> bool {
        self.name == other.name && self.cost == other.cost
    }
}

impl fmt::Display for CostItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.cost)
    }
}
