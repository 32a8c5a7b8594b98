//! Budget display formatting
//!
//! Plain-text views of needs, wants and the affordability results. Every
//! function takes the currency symbol from the user's settings.

use crate::models::{BudgetState, CostItem, Money};
use crate::services::{AffordabilityResult, RemainingIncome, ScheduleEntry};

/// Format a numbered item list, positions starting at 0
pub fn format_item_list<'a>(
    title: &str,
    items: impl IntoIterator<Item = &'a CostItem>,
    symbol: &str,
) -> String {
    let items: Vec<_> = items.into_iter().collect();
    if items.is_empty() {
        return format!("No {} recorded.", title.to_lowercase());
    }

    let name_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = format!("{}:\n", title);
    for (position, item) in items.iter().enumerate() {
        output.push_str(&format!(
            "  {:>3}  {:<name_width$}  {:>12}\n",
            position,
            item.name,
            item.cost.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    if let Some(total) = Money::checked_sum(items.iter().map(|i| i.cost)) {
        output.push_str(&format!(
            "  {:>3}  {:<name_width$}  {:>12}\n",
            "",
            "Total",
            total.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output
}

/// Format the whole budget: income figures, needs and wants
pub fn format_budget_overview(state: &BudgetState, symbol: &str) -> String {
    let mut output = String::from("Budget\n");

    match state.monthly_income {
        Some(income) => output.push_str(&format!(
            "  Monthly income:   {}\n",
            income.format_with_symbol(symbol)
        )),
        None => output.push_str("  Monthly income:   (not set)\n"),
    }
    output.push_str(&format!(
        "  Remaining income: {}\n",
        state.remaining_income.format_with_symbol(symbol)
    ));
    output.push('\n');

    output.push_str(&format_item_list("Needs", &state.needs, symbol));
    output.push('\n');
    output.push_str(&format_item_list("Wants", &state.wants, symbol));

    output
}

pub fn format_remaining(result: &RemainingIncome, symbol: &str) -> String {
    let mut output = format!(
        "Needs total:      {}\nRemaining income: {}\n",
        result.total_needs.format_with_symbol(symbol),
        result.remaining_income.format_with_symbol(symbol)
    );
    if result.overspent {
        output.push_str("Warning: your needs cost more than your monthly income.\n");
    }
    output
}

pub fn format_affordability(result: &AffordabilityResult, symbol: &str) -> String {
    let Some(projection) = result.projection() else {
        return "No wants recorded; nothing to project.".to_string();
    };

    let name = &projection.target.name;
    let cost = projection.target.cost.format_with_symbol(symbol);
    let surplus = projection.surplus.format_with_symbol(symbol);

    if projection.affordable {
        format!(
            "You can afford {} ({}) now, with {} to spare.",
            name, cost, surplus
        )
    } else {
        format!(
            "You can afford {} ({}) in {} {}, with {} to spare.",
            name,
            cost,
            projection.months_needed,
            months(projection.months_needed),
            surplus
        )
    }
}

/// Format the purchase plan for every want
pub fn format_schedule(entries: &[ScheduleEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No wants recorded; nothing to plan.".to_string();
    }

    let name_width = entries
        .iter()
        .map(|e| e.item.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = format!(
        "  {:>3}  {:<name_width$}  {:>12}  {:>8}  {:>12}\n",
        "#",
        "Want",
        "Cost",
        "Month",
        "Left over",
        name_width = name_width,
    );

    for (position, entry) in entries.iter().enumerate() {
        let when = if entry.months_from_now == 0 {
            "now".to_string()
        } else {
            format!("+{}", entry.months_from_now)
        };
        output.push_str(&format!(
            "  {:>3}  {:<name_width$}  {:>12}  {:>8}  {:>12}\n",
            position,
            entry.item.name,
            entry.item.cost.format_with_symbol(symbol),
            when,
            entry.surplus_after.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output
}

fn months(n: u64) -> &'static str {
    if n == 1 {
        "month"
    } else {
        "months"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WantList;
    use crate::services::{compute_affordability, compute_priority_schedule};

    fn wants(items: &[(&str, i64)]) -> WantList {
        let mut list = WantList::new();
        for (name, cost) in items {
            list.add(name, Money::from_dollars(*cost)).unwrap();
        }
        list
    }

    #[test]
    fn test_empty_list() {
        let list = WantList::new();
        assert_eq!(format_item_list("Wants", &list, "$"), "No wants recorded.");
    }

    #[test]
    fn test_item_list_shows_positions_and_total() {
        let list = wants(&[("laptop", 1000), ("bike", 300)]);
        let text = format_item_list("Wants", &list, "€");

        assert!(text.contains("0  laptop"));
        assert!(text.contains("1  bike"));
        assert!(text.contains("€1300.00"));
    }

    #[test]
    fn test_overview_without_income() {
        let text = format_budget_overview(&BudgetState::new(), "$");
        assert!(text.contains("(not set)"));
        assert!(text.contains("No needs recorded."));
    }

    #[test]
    fn test_overspent_warning() {
        let result = RemainingIncome {
            remaining_income: Money::zero(),
            overspent: true,
            total_needs: Money::from_dollars(2500),
        };
        assert!(format_remaining(&result, "$").contains("Warning"));
    }

    #[test]
    fn test_affordability_messages() {
        let list = wants(&[("laptop", 1000)]);

        let now = compute_affordability(Money::from_dollars(1200), Money::from_dollars(100), &list)
            .unwrap();
        assert_eq!(
            format_affordability(&now, "$"),
            "You can afford laptop ($1000.00) now, with $200.00 to spare."
        );

        let later = compute_affordability(Money::from_dollars(500), Money::from_dollars(500), &list)
            .unwrap();
        assert_eq!(
            format_affordability(&later, "$"),
            "You can afford laptop ($1000.00) in 1 month, with $0.00 to spare."
        );

        assert!(format_affordability(&AffordabilityResult::NoTarget, "$").contains("No wants"));
    }

    #[test]
    fn test_schedule_table() {
        let list = wants(&[("phone", 100), ("bike", 300)]);
        let plan = compute_priority_schedule(Money::from_dollars(200), Money::from_dollars(100), &list)
            .unwrap();

        let text = format_schedule(&plan, "$");
        assert!(text.contains("now"));
        assert!(text.contains("+2"));
    }
}
