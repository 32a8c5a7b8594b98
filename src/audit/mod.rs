//! Audit trail for budget changes
//!
//! Every successful mutation (signup, login, list edits, income updates,
//! expenses) appends one JSON line to `audit.log`. Entries carry the
//! before/after snapshot of the affected entity so `buddy history` can show
//! what changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
