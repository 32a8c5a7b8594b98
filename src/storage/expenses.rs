//! Expense repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BuddyError, BuddyResult};
use crate::models::{Expense, ExpenseId, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for recorded expenses of every user
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> BuddyResult<()> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut expenses = self.expenses.write().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        expenses.clear();
        for expense in file_data.expenses {
            expenses.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Insert or update an expense and write the file
    ///
    /// The in-memory copy only changes once the write has succeeded.
    pub fn upsert(&self, expense: Expense) -> BuddyResult<()> {
        let mut expenses = self.expenses.write().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut next = expenses.clone();
        next.insert(expense.id, expense);

        let mut list: Vec<_> = next.values().cloned().collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));
        write_json_atomic(&self.path, &ExpenseData { expenses: list })?;

        *expenses = next;
        Ok(())
    }

    /// All expenses of one user, oldest first
    pub fn get_for_user(&self, user_id: UserId) -> BuddyResult<Vec<Expense>> {
        let expenses = self.expenses.read().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut list: Vec<_> = expenses
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));
        Ok(list)
    }
}
