//! Authentication service
//!
//! Local sign-up and log-in. Passwords are stored as Argon2id PHC strings;
//! a successful login writes the session file that every other command
//! checks through [`SessionProvider`].

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::audit::EntityType;
use crate::error::{BuddyError, BuddyResult};
use crate::models::{Session, User, UserId};
use crate::storage::{SessionProvider, Storage};

/// Service for user accounts and sessions
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    ///
    /// Usernames are unique regardless of case. The password has to satisfy
    /// the policy in [`User::validate_password`].
    pub fn signup(&self, username: &str, password: &str) -> BuddyResult<User> {
        User::validate_username(username).map_err(|e| BuddyError::Validation(e.to_string()))?;
        User::validate_password(password, self.storage.settings().min_password_length)
            .map_err(|e| BuddyError::Validation(e.to_string()))?;

        if self.storage.users.get_by_username(username)?.is_some() {
            return Err(BuddyError::Duplicate {
                entity_type: "User",
                identifier: username.trim().to_string(),
            });
        }

        let user = User::new(username, hash_password(password)?);
        self.storage.users.upsert(user.clone())?;

        self.storage.log_create(
            EntityType::User,
            user.id.to_string(),
            Some(user.username.clone()),
            &user.username,
        )?;

        Ok(user)
    }

    /// Verify credentials and start a session
    ///
    /// Unknown users and wrong passwords fail the same way.
    pub fn login(&self, username: &str, password: &str) -> BuddyResult<User> {
        let user = self
            .storage
            .users
            .get_by_username(username)?
            .ok_or(BuddyError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(BuddyError::InvalidCredentials);
        }

        let session = Session::for_user(&user);
        self.storage.session.start(&session)?;
        self.storage.log_create(
            EntityType::Session,
            user.id.to_string(),
            Some(user.username.clone()),
            &session,
        )?;

        Ok(user)
    }

    /// End the active session, returning it if there was one
    pub fn logout(&self) -> BuddyResult<Option<Session>> {
        let session = self.storage.session.current()?;
        self.storage.session.clear()?;

        if let Some(ended) = &session {
            self.storage.log_delete(
                EntityType::Session,
                ended.user_id.to_string(),
                Some(ended.username.clone()),
                ended,
            )?;
        }

        Ok(session)
    }

    pub fn current_user(&self) -> BuddyResult<User> {
        self.storage.current_user()
    }

    pub fn require_authenticated(&self) -> BuddyResult<UserId> {
        self.storage.require_authenticated()
    }
}

fn hash_password(password: &str) -> BuddyResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| BuddyError::Config(format!("Password hashing failed: {}", e)))
}

fn verify_password(password: &str, stored: &str) -> BuddyResult<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| BuddyError::Persistence(format!("Stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuddyPaths;
    use tempfile::TempDir;

    const GOOD_PASSWORD: &str = "Sunny$day1";

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BuddyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_signup_stores_hash_not_password() {
        let (_temp_dir, storage) = create_test_storage();
        let user = AuthService::new(&storage)
            .signup("alice", GOOD_PASSWORD)
            .unwrap();

        assert!(user.password_hash.starts_with("$argon2id$"));
        assert!(!user.password_hash.contains(GOOD_PASSWORD));
        assert_eq!(storage.users.get_by_username("alice").unwrap().unwrap().id, user.id);
    }

    #[test]
    fn test_signup_rejects_weak_passwords() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        for weak in ["Sh0rt!", "alllower1!", "ALLUPPER1!", "NoDigits!!", "NoSymbol12", "Bad space1!"] {
            let err = auth.signup("alice", weak).unwrap_err();
            assert!(err.is_validation(), "{} accepted", weak);
        }
        assert!(storage.users.get_by_username("alice").unwrap().is_none());

        // Exactly the minimum length is enough
        auth.signup("alice", "Eight1A!").unwrap();
    }

    #[test]
    fn test_failed_signup_write_keeps_no_user() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BuddyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(paths.users_file().join("occupied")).unwrap();
        let storage = Storage::new(paths).unwrap();
        let auth = AuthService::new(&storage);

        let err = auth.signup("alice", GOOD_PASSWORD).unwrap_err();
        assert!(matches!(err, BuddyError::Persistence(_)));
        assert!(storage.users.get_by_username("alice").unwrap().is_none());
        assert!(matches!(
            auth.login("alice", GOOD_PASSWORD),
            Err(BuddyError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_signup_duplicate_ignores_case() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        auth.signup("alice", GOOD_PASSWORD).unwrap();
        let err = auth.signup("ALICE", GOOD_PASSWORD).unwrap_err();
        assert!(matches!(err, BuddyError::Duplicate { .. }));
    }

    #[test]
    fn test_login_and_logout() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);
        let user = auth.signup("alice", GOOD_PASSWORD).unwrap();

        assert!(auth.require_authenticated().unwrap_err().is_unauthorized());

        auth.login("Alice", GOOD_PASSWORD).unwrap();
        assert_eq!(auth.require_authenticated().unwrap(), user.id);
        assert_eq!(auth.current_user().unwrap().username, "alice");

        let ended = auth.logout().unwrap().unwrap();
        assert_eq!(ended.user_id, user.id);
        assert!(auth.require_authenticated().unwrap_err().is_unauthorized());
        assert!(auth.logout().unwrap().is_none());
    }

    #[test]
    fn test_login_failures_look_the_same() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);
        auth.signup("alice", GOOD_PASSWORD).unwrap();

        let wrong_password = auth.login("alice", "Other$pass2").unwrap_err();
        let unknown_user = auth.login("bob", GOOD_PASSWORD).unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert!(matches!(wrong_password, BuddyError::InvalidCredentials));
        assert!(storage.session.current().unwrap().is_none());
    }

    #[test]
    fn test_auth_events_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);
        auth.signup("alice", GOOD_PASSWORD).unwrap();
        auth.login("alice", GOOD_PASSWORD).unwrap();
        auth.logout().unwrap();

        let kinds: Vec<_> = storage
            .audit()
            .unwrap()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| (e.entity_type, e.operation.to_string()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (EntityType::User, "CREATE".to_string()),
                (EntityType::Session, "CREATE".to_string()),
                (EntityType::Session, "DELETE".to_string()),
            ]
        );
    }
}
