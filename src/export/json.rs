//! JSON export with schema versioning

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BuddyError, BuddyResult};
use crate::models::{BudgetState, Expense, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of one user's data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,

    /// Version of finance-buddy that wrote the export
    pub app_version: String,

    pub username: String,
    pub budget: BudgetState,
    pub expenses: Vec<Expense>,
    pub summary: ExportSummary,
}

/// Totals computed at export time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub need_count: usize,
    pub want_count: usize,
    pub expense_count: usize,
    pub total_needs: Money,
    pub total_wants: Money,
    pub total_expenses: Money,
    pub earliest_expense: Option<NaiveDate>,
    pub latest_expense: Option<NaiveDate>,
}

impl BudgetExport {
    pub fn new(username: &str, state: &BudgetState, expenses: &[Expense]) -> BuddyResult<Self> {
        let total_expenses = Money::checked_sum(expenses.iter().map(|e| e.price)).ok_or_else(|| {
            BuddyError::amount_out_of_range("expense prices do not fit in one total")
        })?;

        let summary = ExportSummary {
            need_count: state.needs.len(),
            want_count: state.wants.len(),
            expense_count: expenses.len(),
            total_needs: state.needs.total()?,
            total_wants: state.wants.total()?,
            total_expenses,
            earliest_expense: expenses.iter().map(|e| e.date).min(),
            latest_expense: expenses.iter().map(|e| e.date).max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            username: username.to_string(),
            budget: state.clone(),
            expenses: expenses.to_vec(),
            summary,
        })
    }
}

/// Write a pretty-printed JSON snapshot
pub fn export_json<W: Write>(
    username: &str,
    state: &BudgetState,
    expenses: &[Expense],
    writer: &mut W,
) -> BuddyResult<()> {
    let export = BudgetExport::new(username, state, expenses)?;
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| BuddyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BuddyError::Export(e.to_string()))
}
