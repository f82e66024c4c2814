//! Budget display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Budget;
use crate::reports::BudgetStatus;

use super::{format_bar, format_percentage};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly Limit")]
    limit: String,
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    flag: String,
}

/// Format configured budgets as a table
pub fn format_budget_table(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            category: b.category.to_string(),
            limit: b.monthly_limit.format_with_symbol(symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Format budget status with a usage bar per category
pub fn format_status_table(statuses: &[BudgetStatus], symbol: &str, bar_width: usize) -> String {
    if statuses.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows: Vec<StatusRow> = statuses
        .iter()
        .map(|s| StatusRow {
            category: s.category.to_string(),
            limit: s.limit.format_with_symbol(symbol),
            spent: s.actual_expense.format_with_symbol(symbol),
            remaining: s.remaining.format_with_symbol(symbol),
            used: format!(
                "{} {:>5}",
                format_bar(s.percent_used().min(100.0), 100.0, bar_width),
                format_percentage(s.percent_used())
            ),
            flag: if s.over_budget { "OVER".into() } else { String::new() },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()));

    let mut output = format!("{}\n", table);
    let over = statuses.iter().filter(|s| s.over_budget).count();
    if over > 0 {
        output.push_str(&format!("{} budget(s) exceeded.\n", over));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryName, Money};
    use crate::reports::budget_status;

    fn food_budget(cents: i64) -> Budget {
        Budget::new(CategoryName::new("Food").unwrap(), Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_budget_table() {
        let text = format_budget_table(&[food_budget(6000)], "$");
        assert!(text.contains("Monthly Limit"));
        assert!(text.contains("Food"));
        assert!(text.contains("$60.00"));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_budget_table(&[], "$"), "No budgets set.\n");
        assert_eq!(format_status_table(&[], "$", 10), "No budgets set.\n");
    }

    #[test]
    fn test_status_table_flags_overspending() {
        let statuses = budget_status(&[], &[food_budget(6000)]);
        let text = format_status_table(&statuses, "$", 10);
        assert!(!text.contains("OVER"));
        assert!(text.contains("$60.00"));

        let mut over = statuses[0].clone();
        over.actual_expense = Money::from_cents(8000);
        over.remaining = Money::from_cents(-2000);
        over.over_budget = true;
        let text = format_status_table(&[over], "$", 10);
        assert!(text.contains("OVER"));
        assert!(text.contains("-$20.00"));
        assert!(text.contains("1 budget(s) exceeded."));
    }
}
