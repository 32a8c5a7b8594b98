//! User repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BuddyError, BuddyResult};
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    #[serde(default)]
    users: Vec<User>,
}

/// Repository for registered users
pub struct UserRepository {
    path: PathBuf,
    users: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> BuddyResult<()> {
        let file_data: UserData = read_json(&self.path)?;

        let mut users = self.users.write().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        users.clear();
        for user in file_data.users {
            users.insert(user.id, user);
        }

        Ok(())
    }

    pub fn get(&self, id: UserId) -> BuddyResult<Option<User>> {
        let users = self.users.read().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(users.get(&id).cloned())
    }

    /// Find a user by name, ignoring case and surrounding whitespace
    pub fn get_by_username(&self, username: &str) -> BuddyResult<Option<User>> {
        let users = self.users.read().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        let wanted = username.trim().to_lowercase();
        Ok(users
            .values()
            .find(|u| u.username.to_lowercase() == wanted)
            .cloned())
    }

    /// Insert or update a user and write the file
    ///
    /// The in-memory copy only changes once the write has succeeded.
    pub fn upsert(&self, user: User) -> BuddyResult<()> {
        let mut users = self.users.write().map_err(|e| {
            BuddyError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut next = users.clone();
        next.insert(user.id, user);
        write_json_atomic(&self.path, &Self::to_file_data(&next))?;
        *users = next;

        Ok(())
    }

    fn to_file_data(users: &HashMap<UserId, User>) -> UserData {
        let mut list: Vec<_> = users.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        UserData { users: list }
    }
}
