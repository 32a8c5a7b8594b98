//! Need, want and budget commands
//!
//! Positions on the command line are 0-based, matching `list` output.

use clap::Subcommand;

use crate::display::{
    format_affordability, format_budget_overview, format_item_list, format_remaining,
    format_schedule,
};
use crate::error::BuddyResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, with_newline};

/// Need subcommands
#[derive(Subcommand, Debug)]
pub enum NeedCommands {
    /// Record a necessary expense
    Add {
        /// Name, e.g. "rent"
        name: String,
        /// Monthly cost (e.g., "1200" or "1200.50")
        cost: String,
    },

    /// List needs with their positions
    List,

    /// Delete the need at a position
    #[command(alias = "rm")]
    Delete {
        /// Position shown by `buddy need list`
        index: usize,
    },
}

/// Want subcommands
#[derive(Subcommand, Debug)]
pub enum WantCommands {
    /// Record a want at the lowest priority
    Add {
        /// Name, e.g. "laptop"
        name: String,
        /// Cost (e.g., "1000" or "999.99")
        cost: String,
    },

    /// List wants, highest priority first
    List,

    /// Delete the want at a position
    #[command(alias = "rm")]
    Delete {
        /// Position shown by `buddy want list`
        index: usize,
    },

    /// Swap the priorities of two wants
    Swap { a: usize, b: usize },
}

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show income, needs and wants
    Show,

    /// Set the monthly income and compute what is left after needs
    Income {
        /// Monthly income (e.g., "2000")
        amount: String,
    },

    /// When can I afford my top want?
    Afford {
        /// Monthly income to use instead of the remembered one
        #[arg(short, long)]
        income: Option<String>,
    },

    /// Plan buying every want in priority order
    Schedule {
        /// Monthly income to use instead of the remembered one
        #[arg(short, long)]
        income: Option<String>,
    },
}

pub fn handle_need_command(storage: &Storage, cmd: NeedCommands) -> BuddyResult<()> {
    let service = BudgetService::new(storage);
    let symbol = &storage.settings().currency_symbol;

    match cmd {
        NeedCommands::Add { name, cost } => {
            let item = service.add_need(&name, parse_amount(&cost)?)?;
            println!("Added need: {}", format_item(&item.name, item.cost, symbol));
        }
        NeedCommands::List => {
            let state = service.load()?;
            print!("{}", with_newline(format_item_list("Needs", &state.needs, symbol)));
        }
        NeedCommands::Delete { index } => {
            let item = service.delete_need(index)?;
            println!("Deleted need: {}", format_item(&item.name, item.cost, symbol));
        }
    }

    Ok(())
}

pub fn handle_want_command(storage: &Storage, cmd: WantCommands) -> BuddyResult<()> {
    let service = BudgetService::new(storage);
    let symbol = &storage.settings().currency_symbol;

    match cmd {
        WantCommands::Add { name, cost } => {
            let item = service.add_want(&name, parse_amount(&cost)?)?;
            println!("Added want: {}", format_item(&item.name, item.cost, symbol));
        }
        WantCommands::List => {
            let state = service.load()?;
            print!("{}", with_newline(format_item_list("Wants", &state.wants, symbol)));
        }
        WantCommands::Delete { index } => {
            let item = service.delete_want(index)?;
            println!("Deleted want: {}", format_item(&item.name, item.cost, symbol));
        }
        WantCommands::Swap { a, b } => {
            let wants = service.reorder_want(a, b)?;
            print!("{}", with_newline(format_item_list("Wants", &wants, symbol)));
        }
    }

    Ok(())
}

pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> BuddyResult<()> {
    let service = BudgetService::new(storage);
    let symbol = &storage.settings().currency_symbol;

    match cmd {
        BudgetCommands::Show => {
            let state = service.load()?;
            print!("{}", with_newline(format_budget_overview(&state, symbol)));
        }
        BudgetCommands::Income { amount } => {
            let result = service.calculate_remaining(parse_amount(&amount)?)?;
            print!("{}", format_remaining(&result, symbol));
        }
        BudgetCommands::Afford { income } => {
            let income = income.as_deref().map(parse_amount).transpose()?;
            let result = service.affordability(income)?;
            println!("{}", format_affordability(&result, symbol));
        }
        BudgetCommands::Schedule { income } => {
            let income = income.as_deref().map(parse_amount).transpose()?;
            let plan = service.schedule(income)?;
            print!("{}", with_newline(format_schedule(&plan, symbol)));
        }
    }

    Ok(())
}

fn format_item(name: &str, cost: crate::models::Money, symbol: &str) -> String {
    format!("{} ({})", name, cost.format_with_symbol(symbol))
}
