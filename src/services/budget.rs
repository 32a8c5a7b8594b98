//! Budget service
//!
//! Orchestrates one authenticated user's needs, wants and income: load the
//! state, apply a change or a calculation, save the whole state back and
//! record what changed.

use std::collections::BTreeMap;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{BuddyError, BuddyResult};
use crate::models::{BudgetState, CostItem, Money, UserId, WantList};
use crate::storage::{BudgetStore, SessionProvider, Storage};

use super::affordability::{
    compute_affordability, compute_priority_schedule, compute_remaining_income,
    AffordabilityResult, RemainingIncome, ScheduleEntry,
};

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a dyn BudgetStore,
    session: &'a dyn SessionProvider,
    audit: Option<&'a AuditLogger>,
}

impl<'a> BudgetService<'a> {
    /// Create a budget service backed by file storage
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_collaborators(storage, storage, storage.audit())
    }

    /// Create a budget service over arbitrary collaborators
    pub fn with_collaborators(
        store: &'a dyn BudgetStore,
        session: &'a dyn SessionProvider,
        audit: Option<&'a AuditLogger>,
    ) -> Self {
        Self {
            store,
            session,
            audit,
        }
    }

    /// The caller's budget, empty if nothing was saved yet
    pub fn load(&self) -> BuddyResult<BudgetState> {
        let user = self.session.require_authenticated()?;
        self.load_for(user)
    }

    pub fn add_need(&self, name: &str, cost: Money) -> BuddyResult<CostItem> {
        self.apply(
            |state| state.needs.add(name, cost),
            |_, _, _, item| {
                AuditEntry::create(EntityType::Need, item.id.to_string(), Some(item.name.clone()), item)
            },
        )
    }

    pub fn add_want(&self, name: &str, cost: Money) -> BuddyResult<CostItem> {
        self.apply(
            |state| state.wants.add(name, cost),
            |_, _, _, item| {
                AuditEntry::create(EntityType::Want, item.id.to_string(), Some(item.name.clone()), item)
            },
        )
    }

    /// Remove the need at `index`; later needs move up by one
    pub fn delete_need(&self, index: usize) -> BuddyResult<CostItem> {
        self.apply(
            |state| state.needs.delete(index),
            |_, _, _, item| {
                AuditEntry::delete(EntityType::Need, item.id.to_string(), Some(item.name.clone()), item)
            },
        )
    }

    /// Remove the want at `index`; later wants move up by one
    pub fn delete_want(&self, index: usize) -> BuddyResult<CostItem> {
        self.apply(
            |state| state.wants.delete(index),
            |_, _, _, item| {
                AuditEntry::delete(EntityType::Want, item.id.to_string(), Some(item.name.clone()), item)
            },
        )
    }

    /// Swap the priorities of the wants at `a` and `b`
    pub fn reorder_want(&self, a: usize, b: usize) -> BuddyResult<WantList> {
        self.apply(
            |state| {
                state.wants.reorder(a, b)?;
                Ok(state.wants.clone())
            },
            |user, before, after, _| {
                AuditEntry::update(
                    EntityType::Want,
                    user.to_string(),
                    Some("priorities".to_string()),
                    &priorities(&before.wants),
                    &priorities(&after.wants),
                )
            },
        )
    }

    /// Compute and remember the income left after needs
    pub fn calculate_remaining(&self, monthly_income: Money) -> BuddyResult<RemainingIncome> {
        self.apply(
            |state| {
                let result = compute_remaining_income(monthly_income, &state.needs)?;
                state.monthly_income = Some(monthly_income);
                state.remaining_income = result.remaining_income;
                Ok(result)
            },
            |user, before, after, _| {
                AuditEntry::update(
                    EntityType::Budget,
                    user.to_string(),
                    None,
                    &income_snapshot(before),
                    &income_snapshot(after),
                )
            },
        )
    }

    /// Project the top want using the given or remembered monthly income
    pub fn affordability(&self, monthly_income: Option<Money>) -> BuddyResult<AffordabilityResult> {
        let state = self.load()?;
        let income = resolve_income(&state, monthly_income)?;
        compute_affordability(state.remaining_income, income, &state.wants)
    }

    /// Plan every want in priority order
    pub fn schedule(&self, monthly_income: Option<Money>) -> BuddyResult<Vec<ScheduleEntry>> {
        let state = self.load()?;
        let income = resolve_income(&state, monthly_income)?;
        compute_priority_schedule(state.remaining_income, income, &state.wants)
    }

    fn load_for(&self, user: UserId) -> BuddyResult<BudgetState> {
        let mut state = match self.store.load_state(user) {
            Ok(state) => state,
            Err(e) if e.is_not_found() => BudgetState::new(),
            Err(e) => return Err(e),
        };
        refresh_remaining(&mut state)?;
        Ok(state)
    }

    /// Load, change, save, audit
    ///
    /// Nothing is saved or logged if `change` fails.
    fn apply<T>(
        &self,
        change: impl FnOnce(&mut BudgetState) -> BuddyResult<T>,
        describe: impl FnOnce(UserId, &BudgetState, &BudgetState, &T) -> AuditEntry,
    ) -> BuddyResult<T> {
        let user = self.session.require_authenticated()?;
        let before = self.load_for(user)?;

        let mut state = before.clone();
        let outcome = change(&mut state)?;
        refresh_remaining(&mut state)?;
        state.touch();

        self.store.save_state(user, &state)?;

        if let Some(logger) = self.audit {
            logger.log(&describe(user, &before, &state, &outcome))?;
        }

        Ok(outcome)
    }
}

/// Recompute remaining income from the remembered monthly income
fn refresh_remaining(state: &mut BudgetState) -> BuddyResult<()> {
    if let Some(income) = state.monthly_income {
        state.remaining_income = compute_remaining_income(income, &state.needs)?.remaining_income;
    }
    Ok(())
}

fn resolve_income(state: &BudgetState, supplied: Option<Money>) -> BuddyResult<Money> {
    supplied.or(state.monthly_income).ok_or_else(|| {
        BuddyError::Validation(
            "no monthly income known; run `buddy budget income <amount>` or pass --income"
                .to_string(),
        )
    })
}

fn priorities(wants: &WantList) -> BTreeMap<usize, String> {
    wants
        .iter()
        .enumerate()
        .map(|(i, item)| (i, item.name.clone()))
        .collect()
}

fn income_snapshot(state: &BudgetState) -> serde_json::Value {
    serde_json::json!({
        "monthly_income": state.monthly_income,
        "remaining_income": state.remaining_income,
    })
}
