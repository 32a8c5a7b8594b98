//! Storage layer for finance-buddy
//!
//! JSON file storage with atomic writes. Each repository owns one file under
//! the data directory and keeps its contents in memory behind an `RwLock`.

pub mod budgets;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod session;
pub mod users;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use session::SessionRepository;
pub use users::UserRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{BuddyPaths, Settings};
use crate::error::{BuddyError, BuddyResult};
use crate::models::{BudgetState, Session, User, UserId};

/// Loads and saves one user's budget state
pub trait BudgetStore {
    /// Returns `NotFound` when the user has never saved a budget
    fn load_state(&self, user: UserId) -> BuddyResult<BudgetState>;

    /// Replace the user's stored state with `state`
    fn save_state(&self, user: UserId, state: &BudgetState) -> BuddyResult<()>;
}

/// Answers who is logged in
pub trait SessionProvider {
    /// The current user's id, or `Unauthorized` when nobody is logged in
    fn require_authenticated(&self) -> BuddyResult<UserId>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BuddyPaths,
    settings: Settings,
    pub users: UserRepository,
    pub budgets: BudgetRepository,
    pub expenses: ExpenseRepository,
    pub session: SessionRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open storage rooted at `paths`, creating directories as needed
    pub fn new(paths: BuddyPaths) -> BuddyResult<Self> {
        paths.ensure_directories()?;
        let settings = Settings::load_or_create(&paths)?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            session: SessionRepository::new(paths.session_file()),
            audit,
            settings,
            paths,
        })
    }

    pub fn paths(&self) -> &BuddyPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The audit logger, or `None` when auditing is turned off
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&self) -> BuddyResult<()> {
        self.users.load()?;
        self.budgets.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// The logged-in user
    pub fn current_user(&self) -> BuddyResult<User> {
        let session: Session = self.session.current()?.ok_or_else(|| {
            BuddyError::Unauthorized("no active session; run `buddy login`".into())
        })?;

        self.users.get(session.user_id)?.ok_or_else(|| {
            BuddyError::Unauthorized(format!(
                "session refers to unknown user '{}'; log in again",
                session.username
            ))
        })
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> BuddyResult<()> {
        self.log(|| AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> BuddyResult<()> {
        self.log(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> BuddyResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}

impl SessionProvider for Storage {
    fn require_authenticated(&self) -> BuddyResult<UserId> {
        self.current_user().map(|user| user.id)
    }
}

impl BudgetStore for Storage {
    fn load_state(&self, user: UserId) -> BuddyResult<BudgetState> {
        self.budgets.load_state(user)
    }

    fn save_state(&self, user: UserId, state: &BudgetState) -> BuddyResult<()> {
        self.budgets.save_state(user, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BuddyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_no_session_is_unauthorized() {
        let (_temp_dir, storage) = create_storage();
        storage.load_all().unwrap();

        let err = storage.require_authenticated().unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_session_for_deleted_user_is_unauthorized() {
        let (_temp_dir, storage) = create_storage();
        let ghost = User::new("ghost", "hash");
        storage.session.start(&Session::for_user(&ghost)).unwrap();

        let err = storage.current_user().unwrap_err();
        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_session_resolves_user() {
        let (_temp_dir, storage) = create_storage();
        let user = User::new("alice", "hash");
        storage.users.upsert(user.clone()).unwrap();
        storage.session.start(&Session::for_user(&user)).unwrap();

        assert_eq!(storage.require_authenticated().unwrap(), user.id);
    }

    #[test]
    fn test_audit_disabled_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BuddyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let storage = Storage::new(paths.clone()).unwrap();
        storage
            .log_create(EntityType::User, "usr-1", None, &"alice")
            .unwrap();

        assert!(storage.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
