//! Expense display formatting

use std::collections::BTreeMap;

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Expense, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        date: e.date.format("%Y-%m-%d").to_string(),
        name: e.name.clone(),
        category: e.category.clone(),
        price: e.price.format_with_symbol(symbol),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format the overall total followed by one line per category
pub fn format_expense_totals(
    total: Money,
    by_category: &BTreeMap<String, Money>,
    symbol: &str,
) -> String {
    let mut output = format!("Total expenses: {}\n", total.format_with_symbol(symbol));
    for (category, amount) in by_category {
        output.push_str(&format!(
            "  {:<20} {:>12}\n",
            category,
            amount.format_with_symbol(symbol)
        ));
    }
    output
}
