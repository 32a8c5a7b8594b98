//! Per-user budget state
//!
//! The whole state is loaded and saved as one unit; there are no partial
//! updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lists::{NeedList, WantList};
use super::money::Money;
use crate::error::{BuddyError, BuddyResult};

/// Needs, wants and the income figures derived from them for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    #[serde(default)]
    pub needs: NeedList,

    /// Wants in priority order
    #[serde(default)]
    pub wants: WantList,

    /// Income left after needs, floored at zero
    #[serde(default)]
    pub remaining_income: Money,

    /// Monthly income used for the last calculation, if one was made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<Money>,

    /// When the state was last saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BudgetState {
    /// An empty state, as seen by a user who has never saved
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.needs.is_empty() && self.wants.is_empty() && self.monthly_income.is_none()
    }

    /// Check a state read from outside the list operations
    ///
    /// Every item must be valid, both list totals must fit in cents and the
    /// income figures must not be negative.
    pub fn validate(&self) -> BuddyResult<()> {
        for (list, items) in [("need", self.needs.iter()), ("want", self.wants.iter())] {
            for (position, item) in items.enumerate() {
                item.validate().map_err(|e| {
                    BuddyError::Validation(format!(
                        "{} {} ('{}'): {}",
                        list, position, item.name, e
                    ))
                })?;
            }
        }
        self.needs.total()?;
        self.wants.total()?;

        if self.remaining_income.is_negative() {
            return Err(BuddyError::Validation(format!(
                "remaining income is negative: {}",
                self.remaining_income
            )));
        }
        if let Some(income) = self.monthly_income.filter(Money::is_negative) {
            return Err(BuddyError::Validation(format!(
                "monthly income is negative: {}",
                income
            )));
        }
        Ok(())
    }

    /// Stamp the state before it is persisted
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
