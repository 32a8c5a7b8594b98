//! finance-buddy - a personal budget and affordability tracker
//!
//! Users record the things they need and the things they want, enter a
//! monthly income, and get back what is left after needs and how long until
//! each want becomes affordable.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: the [`BuddyError`] type
//! - `models`: money, cost items, need/want lists, users and expenses
//! - `storage`: JSON file repositories and the collaborator traits
//! - `services`: the affordability calculator and the budget, auth and
//!   expense workflows
//! - `audit`: append-only change log
//! - `display`: plain-text formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: command handlers for the `buddy` binary
//!
//! # Example
//!
//! ```
//! use finance_buddy::models::{Money, NeedList, WantList};
//! use finance_buddy::services::{compute_affordability, compute_remaining_income};
//!
//! let mut needs = NeedList::new();
//! needs.add("rent", Money::from_dollars(1200)).unwrap();
//!
//! let mut wants = WantList::new();
//! wants.add("laptop", Money::from_dollars(1000)).unwrap();
//!
//! let income = Money::from_dollars(2000);
//! let remaining = compute_remaining_income(income, &needs).unwrap();
//! assert_eq!(remaining.remaining_income, Money::from_dollars(800));
//!
//! let result = compute_affordability(remaining.remaining_income, income, &wants).unwrap();
//! assert_eq!(result.projection().unwrap().months_needed, 1);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BuddyError;
