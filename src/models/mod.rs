//! Core data models for finance-buddy
//!
//! This module contains the data structures of the budgeting domain: cost
//! items and the need/want lists that hold them, per-user budget state,
//! users and sessions, and recorded expenses.

pub mod expense;
pub mod ids;
pub mod item;
pub mod lists;
pub mod money;
pub mod state;
pub mod user;

pub use expense::Expense;
pub use ids::{ExpenseId, ItemId, UserId};
pub use item::CostItem;
pub use lists::{NeedList, WantList};
pub use money::{Money, MoneyParseError};
pub use state::BudgetState;
pub use user::{Session, User};
