//! Affordability calculator
//!
//! Pure functions that turn a monthly income, the need list and the want list
//! into the income left over after needs and a projection of when the
//! top-priority want becomes affordable. Month counts are computed in closed
//! form, never by stepping through months.

use serde::Serialize;

use crate::error::{BuddyError, BuddyResult};
use crate::models::{CostItem, Money, NeedList, WantList};

/// Income left after paying for needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemainingIncome {
    /// Income minus needs, floored at zero
    pub remaining_income: Money,

    /// True when needs cost more than the income
    pub overspent: bool,

    /// Sum of all need costs
    pub total_needs: Money,
}

/// Projection for the highest-priority want
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub target: CostItem,

    /// Whether the target can be bought right now
    pub affordable: bool,

    /// Months of saving before the target can be bought (0 if affordable)
    pub months_needed: u64,

    /// Money left over once the target is bought
    pub surplus: Money,
}

/// Outcome of an affordability calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AffordabilityResult {
    /// The want list is empty
    NoTarget,
    Projection(Projection),
}

impl AffordabilityResult {
    pub fn projection(&self) -> Option<&Projection> {
        match self {
            Self::NoTarget => None,
            Self::Projection(p) => Some(p),
        }
    }
}

/// One want in a sequential purchase plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub item: CostItem,

    /// Months of saving after the previous purchase
    pub months_waiting: u64,

    /// Months from now until this item is bought
    pub months_from_now: u64,

    /// Savings left after buying this item
    pub surplus_after: Money,
}

/// Compute the income left after needs
///
/// A negative result is clamped to zero and flagged as overspent.
pub fn compute_remaining_income(
    monthly_income: Money,
    needs: &NeedList,
) -> BuddyResult<RemainingIncome> {
    if monthly_income.is_negative() {
        return Err(BuddyError::Validation(format!(
            "Monthly income cannot be negative: {}",
            monthly_income
        )));
    }

    let total_needs = needs.total()?;
    let remaining = monthly_income
        .checked_sub(total_needs)
        .ok_or_else(|| BuddyError::amount_out_of_range("income minus needs"))?;

    Ok(RemainingIncome {
        remaining_income: remaining.floor_zero(),
        overspent: remaining.is_negative(),
        total_needs,
    })
}

/// Project when the highest-priority want becomes affordable
///
/// Savings start at `remaining_income` and grow by `monthly_income` each
/// month. Fails with a division-by-zero error when the target is not yet
/// affordable and there is no positive income to accrue.
pub fn compute_affordability(
    remaining_income: Money,
    monthly_income: Money,
    wants: &WantList,
) -> BuddyResult<AffordabilityResult> {
    check_remaining(remaining_income)?;

    let Some(target) = wants.top() else {
        return Ok(AffordabilityResult::NoTarget);
    };

    let months_needed = months_to_cover(remaining_income, target.cost, monthly_income)?;
    let surplus = savings_after(remaining_income, monthly_income, months_needed, target.cost)?;

    Ok(AffordabilityResult::Projection(Projection {
        target: target.clone(),
        affordable: months_needed == 0,
        months_needed,
        surplus,
    }))
}

/// Plan buying every want in priority order
///
/// Whatever is left after one purchase keeps accruing toward the next. The
/// first entry always matches [`compute_affordability`] for the same inputs.
pub fn compute_priority_schedule(
    remaining_income: Money,
    monthly_income: Money,
    wants: &WantList,
) -> BuddyResult<Vec<ScheduleEntry>> {
    check_remaining(remaining_income)?;

    let mut saved = remaining_income;
    let mut elapsed: u64 = 0;
    let mut schedule = Vec::with_capacity(wants.len());

    for item in wants {
        let months_waiting = months_to_cover(saved, item.cost, monthly_income)?;
        saved = savings_after(saved, monthly_income, months_waiting, item.cost)?;
        elapsed = elapsed.checked_add(months_waiting).ok_or_else(|| {
            BuddyError::Validation(format!("purchase plan for {} runs past any date", item.name))
        })?;

        schedule.push(ScheduleEntry {
            item: item.clone(),
            months_waiting,
            months_from_now: elapsed,
            surplus_after: saved,
        });
    }

    Ok(schedule)
}

fn check_remaining(remaining_income: Money) -> BuddyResult<()> {
    if remaining_income.is_negative() {
        return Err(BuddyError::Validation(format!(
            "Remaining income cannot be negative: {}",
            remaining_income
        )));
    }
    Ok(())
}

/// Smallest number of months `m` with `saved + m * monthly_income >= cost`
fn months_to_cover(saved: Money, cost: Money, monthly_income: Money) -> BuddyResult<u64> {
    if saved >= cost {
        return Ok(0);
    }
    if !monthly_income.is_positive() {
        return Err(BuddyError::DivisionByZero(format!(
            "monthly income is {} and {} more is needed",
            monthly_income,
            cost - saved
        )));
    }

    let deficit = (cost - saved).cents();
    let income = monthly_income.cents();
    let months = deficit / income + i64::from(deficit % income != 0);
    Ok(months as u64)
}

/// `saved + months * monthly_income - cost`, checked at every step
fn savings_after(
    saved: Money,
    monthly_income: Money,
    months: u64,
    cost: Money,
) -> BuddyResult<Money> {
    i64::try_from(months)
        .ok()
        .and_then(|m| monthly_income.checked_mul(m))
        .and_then(|accrued| saved.checked_add(accrued))
        .and_then(|total| total.checked_sub(cost))
        .ok_or_else(|| {
            BuddyError::amount_out_of_range(format!(
                "saving {} for {} months toward {}",
                monthly_income, months, cost
            ))
        })
}
