//! Expense service
//!
//! Records what the logged-in user actually spent and sums it up.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{BuddyError, BuddyResult};
use crate::models::{Expense, Money};
use crate::storage::{SessionProvider, Storage};

/// Service for expense tracking
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense for the current user
    pub fn add_expense(
        &self,
        name: &str,
        price: Money,
        date: NaiveDate,
        category: &str,
    ) -> BuddyResult<Expense> {
        let user = self.storage.require_authenticated()?;

        let expense = Expense::new(user, name, price, date, category);
        expense
            .validate()
            .map_err(|e| BuddyError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// The current user's expenses by date, optionally for one category
    ///
    /// Category matching ignores case.
    pub fn list_expenses(&self, category: Option<&str>) -> BuddyResult<Vec<Expense>> {
        let user = self.storage.require_authenticated()?;
        let mut expenses = self.storage.expenses.get_for_user(user)?;

        if let Some(category) = category {
            let wanted = category.trim().to_lowercase();
            expenses.retain(|e| e.category.to_lowercase() == wanted);
        }

        Ok(expenses)
    }

    /// Sum of every expense the current user recorded
    pub fn total_expenses(&self) -> BuddyResult<Money> {
        let expenses = self.list_expenses(None)?;
        Money::checked_sum(expenses.iter().map(|e| e.price)).ok_or_else(|| {
            BuddyError::amount_out_of_range("expense prices do not fit in one total")
        })
    }

    /// Per-category sums, keyed by the earliest spelling of each category
    pub fn totals_by_category(&self) -> BuddyResult<BTreeMap<String, Money>> {
        let mut totals: BTreeMap<String, Money> = BTreeMap::new();
        let mut spelling: BTreeMap<String, String> = BTreeMap::new();

        for expense in self.list_expenses(None)? {
            let key = spelling
                .entry(expense.category.to_lowercase())
                .or_insert_with(|| expense.category.clone())
                .clone();
            let total = totals.entry(key).or_default();
            *total = total.checked_add(expense.price).ok_or_else(|| {
                BuddyError::amount_out_of_range(format!("{} expenses", expense.category))
            })?;
        }

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuddyPaths;
    use crate::models::{Session, User};
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    fn logged_in_storage(username: &str) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BuddyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let user = User::new(username, "hash");
        storage.users.upsert(user.clone()).unwrap();
        storage.session.start(&Session::for_user(&user)).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_requires_login() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(BuddyPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let service = ExpenseService::new(&storage);

        let err = service
            .add_expense("Lunch", Money::from_cents(1250), day(1), "Food")
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(service.total_expenses().unwrap_err().is_unauthorized());
    }

    #[test]
    fn test_total_is_zero_without_expenses() {
        let (_temp_dir, storage) = logged_in_storage("alice");
        assert_eq!(
            ExpenseService::new(&storage).total_expenses().unwrap(),
            Money::zero()
        );
    }

    #[test]
    fn test_add_list_and_total() {
        let (_temp_dir, storage) = logged_in_storage("alice");
        let service = ExpenseService::new(&storage);

        service
            .add_expense("Dinner", Money::from_cents(3050), day(9), "Food")
            .unwrap();
        service
            .add_expense("Bus", Money::from_cents(275), day(2), "Transport")
            .unwrap();
        service
            .add_expense("Groceries", Money::from_cents(6400), day(5), "food")
            .unwrap();

        let names: Vec<_> = service
            .list_expenses(None)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Bus", "Groceries", "Dinner"]);

        assert_eq!(service.list_expenses(Some("FOOD")).unwrap().len(), 2);
        assert_eq!(service.total_expenses().unwrap(), Money::from_cents(9725));

        let by_category = service.totals_by_category().unwrap();
        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category["food"], Money::from_cents(9450));
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let (_temp_dir, storage) = logged_in_storage("alice");
        let service = ExpenseService::new(&storage);
        let huge = Money::parse("90000000000000000").unwrap();

        service.add_expense("Yacht", huge, day(1), "Fun").unwrap();
        service.add_expense("Jet", huge, day(2), "fun").unwrap();

        assert!(service.total_expenses().unwrap_err().is_validation());
        assert!(service.totals_by_category().unwrap_err().is_validation());
    }

    #[test]
    fn test_invalid_expense_is_not_stored() {
        let (_temp_dir, storage) = logged_in_storage("alice");
        let service = ExpenseService::new(&storage);

        let err = service
            .add_expense("Lunch", Money::from_cents(-1), day(1), "Food")
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .add_expense("Lunch", Money::from_cents(100), day(1), "  ")
            .unwrap_err();
        assert!(err.is_validation());

        assert!(service.list_expenses(None).unwrap().is_empty());
    }
}
