//! CSV export

use std::io::Write;

use crate::error::{BuddyError, BuddyResult};
use crate::models::{BudgetState, CostItem, Expense};

fn export_err(e: ::csv::Error) -> BuddyError {
    BuddyError::Export(e.to_string())
}

/// One row per need and want: `list,position,name,cost`
///
/// Costs are plain decimals without a currency symbol.
pub fn export_budget_csv<W: Write>(state: &BudgetState, writer: W) -> BuddyResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["list", "position", "name", "cost"])
        .map_err(export_err)?;

    let rows = state
        .needs
        .iter()
        .enumerate()
        .map(|(i, item)| ("need", i, item))
        .chain(state.wants.iter().enumerate().map(|(i, item)| ("want", i, item)));

    for (list, position, item) in rows {
        write_item(&mut csv, list, position, item)?;
    }

    csv.flush().map_err(|e| BuddyError::Export(e.to_string()))
}

/// One row per expense: `date,name,category,price`
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> BuddyResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["date", "name", "category", "price"])
        .map_err(export_err)?;

    for expense in expenses {
        csv.write_record([
            expense.date.format("%Y-%m-%d").to_string(),
            expense.name.clone(),
            expense.category.clone(),
            expense.price.format_with_symbol(""),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(|e| BuddyError::Export(e.to_string()))
}

fn write_item<W: Write>(
    csv: &mut ::csv::Writer<W>,
    list: &str,
    position: usize,
    item: &CostItem,
) -> BuddyResult<()> {
    csv.write_record([
        list.to_string(),
        position.to_string(),
        item.name.clone(),
        item.cost.format_with_symbol(""),
    ])
    .map_err(export_err)
}
