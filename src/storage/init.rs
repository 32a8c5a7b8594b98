//! First-run setup

use serde_json::json;

use crate::config::{BuddyPaths, Settings};
use crate::error::BuddyResult;

use super::file_io::write_json_atomic;

/// Create the directory layout, default settings and empty data files
///
/// Existing files are left untouched, so running it twice is harmless.
pub fn initialize_storage(paths: &BuddyPaths) -> BuddyResult<()> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    let empty_files = [
        (paths.users_file(), json!({ "users": [] })),
        (paths.budgets_file(), json!({ "budgets": [] })),
        (paths.expenses_file(), json!({ "expenses": [] })),
    ];
    for (path, empty) in empty_files {
        if !path.exists() {
            write_json_atomic(&path, &empty)?;
        }
    }

    Ok(())
}
