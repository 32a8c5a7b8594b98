//! Export command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{BuddyError, BuddyResult};
use crate::export::{export_budget_csv, export_expenses_csv, export_json, export_yaml};
use crate::services::{AuthService, BudgetService, ExpenseService};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Budget and expenses as JSON
    Json,
    /// Budget and expenses as YAML
    Yaml,
    /// Needs and wants as CSV rows
    Csv,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Write to a file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// With csv, export expenses instead of needs and wants
    #[arg(long)]
    pub expenses: bool,
}

pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> BuddyResult<()> {
    let user = AuthService::new(storage).current_user()?;
    let state = BudgetService::new(storage).load()?;
    let expenses = ExpenseService::new(storage).list_expenses(None)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            BuddyError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Json => export_json(&user.username, &state, &expenses, &mut writer)?,
        ExportFormat::Yaml => export_yaml(&user.username, &state, &expenses, &mut writer)?,
        ExportFormat::Csv if args.expenses => export_expenses_csv(&expenses, &mut writer)?,
        ExportFormat::Csv => export_budget_csv(&state, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| BuddyError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        eprintln!("Exported to {}", path.display());
    }

    Ok(())
}
