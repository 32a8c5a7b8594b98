//! Budget state repository for JSON storage
//!
//! Keeps one [`BudgetState`] per user in budgets.json. A save replaces the
//! user's whole state; there are no partial updates.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{BuddyError, BuddyResult};
use crate::models::{BudgetState, UserId};

use super::file_io::{read_json, write_json_atomic};
use super::BudgetStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredBudget {
    user_id: UserId,
    #[serde(flatten)]
    state: BudgetState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<StoredBudget>,
}

/// Repository for per-user budget state
pub struct BudgetRepository {
    path: PathBuf,
    states: RwLock<HashMap<UserId, BudgetState>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            states: RwLock::new(HashMap::new()),
        }
    }

    /// Load all budget states from disk
    pub fn load(&self) -> BuddyResult<()> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut states = self.states.write().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut loaded = HashMap::with_capacity(file_data.budgets.len());
        for stored in file_data.budgets {
            stored.state.validate().map_err(|e| {
                BuddyError::Persistence(format!(
                    "{} holds a bad budget for user {}: {}",
                    self.path.display(),
                    stored.user_id,
                    e
                ))
            })?;
            loaded.insert(stored.user_id, stored.state);
        }

        *states = loaded;
        Ok(())
    }

    fn to_file_data(states: &HashMap<UserId, BudgetState>) -> BudgetData {
        let mut budgets: Vec<_> = states
            .iter()
            .map(|(user_id, state)| StoredBudget {
                user_id: *user_id,
                state: state.clone(),
            })
            .collect();
        budgets.sort_by_key(|b| *b.user_id.as_uuid());
        BudgetData { budgets }
    }
}

impl BudgetStore for BudgetRepository {
    fn load_state(&self, user: UserId) -> BuddyResult<BudgetState> {
        let states = self.states.read().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        states
            .get(&user)
            .cloned()
            .ok_or_else(|| BuddyError::budget_not_found(user.to_string()))
    }

    fn save_state(&self, user: UserId, state: &BudgetState) -> BuddyResult<()> {
        let mut states = self.states.write().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        // Only commit in memory once the file write has succeeded
        let mut next = states.clone();
        next.insert(user, state.clone());
        write_json_atomic(&self.path, &Self::to_file_data(&next))?;
        *states = next;

        Ok(())
    }
}
