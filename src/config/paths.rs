//! Path management for finance-buddy
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCE_BUDDY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finance-buddy` or `~/.config/finance-buddy`
//! 3. Windows: `%APPDATA%\finance-buddy`
//! 4. The platform config directory reported by `directories`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BuddyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINANCE_BUDDY_DATA_DIR";

/// Manages all paths used by finance-buddy
#[derive(Debug, Clone)]
pub struct BuddyPaths {
    /// Base directory for all finance-buddy data
    base_dir: PathBuf,
}

impl BuddyPaths {
    /// Create a new BuddyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, BuddyError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BuddyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/finance-buddy/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/finance-buddy/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the active session
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to budgets.json (needs, wants and income per user)
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BuddyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BuddyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BuddyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if finance-buddy has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BuddyError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("finance-buddy"));
    }
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home).join(".config").join("finance-buddy"));
    }
    project_dirs_fallback()
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BuddyError> {
    match std::env::var("APPDATA") {
        Ok(appdata) => Ok(PathBuf::from(appdata).join("finance-buddy")),
        Err(_) => project_dirs_fallback(),
    }
}

fn project_dirs_fallback() -> Result<PathBuf, BuddyError> {
    ProjectDirs::from("", "", "finance-buddy")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BuddyError::Config("Could not determine a configuration directory".into()))
}
