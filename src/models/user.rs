//! User and session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// Maximum accepted username length
pub const MAX_USERNAME_LEN: usize = 32;

/// Symbols accepted in passwords
pub const PASSWORD_SYMBOLS: &str = "@$!%?&";

/// Validation errors for users and passwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    UsernameTooLong(usize),
    UsernameWhitespace,
    PasswordTooShort { min: usize },
    PasswordMissing(&'static str),
    PasswordInvalidChar(char),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username cannot be empty"),
            Self::UsernameTooLong(len) => write!(
                f,
                "Username too long ({} characters, max {})",
                len, MAX_USERNAME_LEN
            ),
            Self::UsernameWhitespace => write!(f, "Username cannot contain whitespace"),
            Self::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters", min)
            }
            Self::PasswordMissing(what) => write!(f, "Password must contain {}", what),
            Self::PasswordInvalidChar(c) => write!(
                f,
                "Password contains '{}'; only letters, digits and {} are allowed",
                c, PASSWORD_SYMBOLS
            ),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Login name, unique ignoring case
    pub username: String,

    /// Argon2 hash in PHC string format
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from an already hashed password
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into().trim().to_string(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// Validate a username
    pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if username.chars().any(char::is_whitespace) {
            return Err(UserValidationError::UsernameWhitespace);
        }
        let len = username.chars().count();
        if len > MAX_USERNAME_LEN {
            return Err(UserValidationError::UsernameTooLong(len));
        }
        Ok(())
    }

    /// Check a candidate password against the password policy
    ///
    /// Requires a lowercase letter, an uppercase letter, a digit and one of
    /// [`PASSWORD_SYMBOLS`], using only ASCII letters, digits and those symbols.
    pub fn validate_password(password: &str, min_len: usize) -> Result<(), UserValidationError> {
        if let Some(bad) = password
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !PASSWORD_SYMBOLS.contains(*c))
        {
            return Err(UserValidationError::PasswordInvalidChar(bad));
        }
        if password.chars().count() < min_len {
            return Err(UserValidationError::PasswordTooShort { min: min_len });
        }

        let checks: [(fn(&char) -> bool, &'static str); 4] = [
            (char::is_ascii_lowercase, "a lowercase letter"),
            (char::is_ascii_uppercase, "an uppercase letter"),
            (char::is_ascii_digit, "a digit"),
            (|c| PASSWORD_SYMBOLS.contains(*c), "one of @$!%?&"),
        ];
        for (check, what) in checks {
            if !password.chars().any(|c| check(&c)) {
                return Err(UserValidationError::PasswordMissing(what));
            }
        }

        Ok(())
    }
}

/// The logged-in user, persisted between invocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(User::validate_username("alice").is_ok());
        assert_eq!(
            User::validate_username("  "),
            Err(UserValidationError::EmptyUsername)
        );
        assert_eq!(
            User::validate_username("alice smith"),
            Err(UserValidationError::UsernameWhitespace)
        );
        assert!(matches!(
            User::validate_username(&"a".repeat(33)),
            Err(UserValidationError::UsernameTooLong(33))
        ));
    }

    #[test]
    fn test_password_policy_accepts_strong_password() {
        assert!(User::validate_password("Secr3t!pw", 8).is_ok());
    }

    #[test]
    fn test_password_policy_rejections() {
        assert_eq!(
            User::validate_password("Sh0rt!", 8),
            Err(UserValidationError::PasswordTooShort { min: 8 })
        );
        assert_eq!(
            User::validate_password("nouppercase1!", 8),
            Err(UserValidationError::PasswordMissing("an uppercase letter"))
        );
        assert_eq!(
            User::validate_password("NOLOWERCASE1!", 8),
            Err(UserValidationError::PasswordMissing("a lowercase letter"))
        );
        assert_eq!(
            User::validate_password("NoDigitsHere!", 8),
            Err(UserValidationError::PasswordMissing("a digit"))
        );
        assert_eq!(
            User::validate_password("NoSymbols123", 8),
            Err(UserValidationError::PasswordMissing("one of @$!%?&"))
        );
        assert_eq!(
            User::validate_password("Has Space1!", 8),
            Err(UserValidationError::PasswordInvalidChar(' '))
        );
    }

    #[test]
    fn test_session_for_user() {
        let user = User::new(" alice ", "hash");
        let session = Session::for_user(&user);
        assert_eq!(session.user_id, user.id);
        assert_eq!(session.username, "alice");
    }
}
