//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod auth;
pub mod budget;
pub mod expense;
pub mod export;
pub mod history;

pub use auth::{handle_login, handle_logout, handle_signup, handle_whoami, CredentialArgs};
pub use budget::{
    handle_budget_command, handle_need_command, handle_want_command, BudgetCommands,
    NeedCommands, WantCommands,
};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::handle_history_command;

use crate::error::{BuddyError, BuddyResult};
use crate::models::Money;

/// Parse an amount typed on the command line
pub(crate) fn parse_amount(input: &str) -> BuddyResult<Money> {
    Money::parse(input)
        .map_err(|e| BuddyError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

pub(crate) fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
