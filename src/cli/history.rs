//! Audit history command

use crate::audit::AuditLogger;
use crate::error::BuddyResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> BuddyResult<()> {
    if storage.audit().is_none() {
        println!("Audit logging is disabled in settings; showing earlier entries only.");
    }

    let logger = AuditLogger::new(storage.paths().audit_log());
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
