//! Display formatting for terminal output
//!
//! Formatters return `String`s; printing is left to the CLI handlers.

pub mod budget;
pub mod expense;

pub use budget::{
    format_affordability, format_budget_overview, format_item_list, format_remaining,
    format_schedule,
};
pub use expense::{format_expense_table, format_expense_totals};
