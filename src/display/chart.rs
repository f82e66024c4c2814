//! Horizontal bar charts for the terminal
//!
//! Bars are scaled against the largest value in the chart, so the biggest
//! entry always spans the full width.

use crate::models::Money;
use crate::reports::{CategoryBreakdown, MonthlyTotals};

use super::{format_bar, format_percentage, truncate};

const NO_DATA: &str = "No data to chart.\n";

/// Expense share per category, largest first
pub fn category_chart(breakdown: &CategoryBreakdown, symbol: &str, width: usize) -> String {
    if breakdown.is_empty() {
        return NO_DATA.to_string();
    }

    let max = breakdown
        .categories
        .iter()
        .map(|c| c.total.cents())
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::from("Expenses by category\n\n");
    for row in &breakdown.categories {
        output.push_str(&format!(
            "{:<20} {} {:>12} {:>6}\n",
            truncate(row.category.as_str(), 20),
            format_bar(row.total.cents() as f64, max, width),
            row.total.format_with_symbol(symbol),
            format_percentage(row.percentage)
        ));
    }
    output
}

/// Income and expense bars for each month
pub fn monthly_chart(series: &[MonthlyTotals], symbol: &str, width: usize) -> String {
    if series.is_empty() {
        return NO_DATA.to_string();
    }

    let max = series
        .iter()
        .flat_map(|m| [m.income, m.expense])
        .max()
        .unwrap_or_else(Money::zero)
        .cents() as f64;

    let mut output = String::from("Monthly income and expenses\n\n");
    for row in series {
        output.push_str(&format!(
            "{} in  {} {:>12}\n",
            row.month,
            format_bar(row.income.cents() as f64, max, width),
            row.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:7} out {} {:>12}\n",
            "",
            format_bar(row.expense.cents() as f64, max, width),
            row.expense.format_with_symbol(symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    #[test]
    fn test_empty_charts() {
        assert_eq!(category_chart(&CategoryBreakdown::from_transactions(&[]), "$", 10), NO_DATA);
        assert_eq!(monthly_chart(&[], "$", 10), NO_DATA);
    }

    #[test]
    fn test_monthly_chart_scales_to_largest() {
        let series = vec![
            MonthlyTotals {
                month: Month::new(2024, 1).unwrap(),
                income: Money::from_cents(1000),
                expense: Money::from_cents(500),
            },
            MonthlyTotals {
                month: Month::new(2024, 2).unwrap(),
                income: Money::zero(),
                expense: Money::from_cents(250),
            },
        ];
        let text = monthly_chart(&series, "$", 4);
        let lines: Vec<&str> = text.lines().skip(2).collect();

        assert!(lines[0].starts_with("2024-01 in  ████"));
        assert!(lines[1].contains("out ██░░"));
        assert!(lines[2].starts_with("2024-02 in "));
        assert!(lines[2].contains("$0.00"));
        assert!(lines[3].contains("$2.50"));
    }
}
