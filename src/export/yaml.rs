//! YAML export

use std::io::Write;

use crate::error::{BuddyError, BuddyResult};
use crate::models::{BudgetState, Expense};

use super::json::BudgetExport;

/// Write the same snapshot as the JSON export, as YAML with a comment header
pub fn export_yaml<W: Write>(
    username: &str,
    state: &BudgetState,
    expenses: &[Expense],
    writer: &mut W,
) -> BuddyResult<()> {
    let export = BudgetExport::new(username, state, expenses)?;
    let to_export_err = |e: std::io::Error| BuddyError::Export(e.to_string());

    writeln!(writer, "# finance-buddy export for {}", export.username).map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BuddyError::Export(e.to_string()))
}
