//! Service layer for finance-buddy
//!
//! Business logic on top of the storage layer: authentication, the budget
//! workflow around the pure affordability calculator, and expense tracking.

pub mod affordability;
pub mod auth;
pub mod budget;
pub mod expense;

pub use affordability::{
    compute_affordability, compute_priority_schedule, compute_remaining_income,
    AffordabilityResult, Projection, RemainingIncome, ScheduleEntry,
};
pub use auth::AuthService;
pub use budget::BudgetService;
pub use expense::ExpenseService;
