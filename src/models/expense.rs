//! Expense model
//!
//! A dated, categorised purchase recorded by a user. Expenses are kept apart
//! from the need/want budget; they only feed the running total.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, UserId};
use super::money::Money;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    EmptyCategory,
    NegativePrice(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
            Self::NegativePrice(price) => write!(f, "Expense price cannot be negative: {}", price),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Owner of the expense
    pub user_id: UserId,

    pub name: String,

    pub price: Money,

    /// Day the money was spent
    pub date: NaiveDate,

    /// Free-form category, e.g. "Food" or "Transport"
    pub category: String,

    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        price: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            user_id,
            name: name.into().trim().to_string(),
            price,
            date,
            category: category.into().trim().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if self.category.is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        if self.price.is_negative() {
            return Err(ExpenseValidationError::NegativePrice(self.price));
        }
        Ok(())
    }
}
