//! Expense commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_expense_table, format_expense_totals};
use crate::error::{BuddyError, BuddyResult};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{parse_amount, with_newline};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record something you bought
    Add {
        /// What was bought
        name: String,
        /// Price (e.g., "12.50")
        price: String,
        /// Category, e.g. "Food"
        #[arg(short, long)]
        category: String,
        /// Date of the purchase (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses by date
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the total spent, overall and per category
    Total,
}

pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> BuddyResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = &storage.settings().currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            name,
            price,
            category,
            date,
        } => {
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => Local::now().date_naive(),
            };
            let expense = service.add_expense(&name, parse_amount(&price)?, date, &category)?;
            println!(
                "Recorded {} ({}) in {} on {}",
                expense.name,
                expense.price.format_with_symbol(symbol),
                expense.category,
                expense.date
            );
        }
        ExpenseCommands::List { category } => {
            let expenses = service.list_expenses(category.as_deref())?;
            print!("{}", with_newline(format_expense_table(&expenses, symbol)));
        }
        ExpenseCommands::Total => {
            let total = service.total_expenses()?;
            let by_category = service.totals_by_category()?;
            print!("{}", format_expense_totals(total, &by_category, symbol));
        }
    }

    Ok(())
}

fn parse_date(text: &str) -> BuddyResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        BuddyError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", text))
    })
}
