//! Export of a user's data
//!
//! - JSON and YAML: full snapshot of the budget and expenses with schema and
//!   app versions
//! - CSV: flat rows for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_budget_csv, export_expenses_csv};
pub use json::{export_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
