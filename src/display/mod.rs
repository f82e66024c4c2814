//! Display formatting for terminal output
//!
//! Tables are built with `tabled`; charts are plain block characters so they
//! survive being piped into a file.

pub mod budget;
pub mod chart;
pub mod transaction;

pub use budget::{format_budget_table, format_status_table};
pub use chart::{category_chart, monthly_chart};
pub use transaction::{format_transaction_short, format_transaction_table};

use crate::audit::AuditEntry;
use crate::models::CategoryName;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// A filled bar of `width` cells, `value / max_value` of it solid
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Shorten text to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// One category per line
pub fn format_category_list(categories: &[CategoryName]) -> String {
    if categories.is_empty() {
        return "No categories yet. Add a transaction or set a budget first.\n".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(category.as_str());
        output.push('\n');
    }
    output
}

/// Audit entries, oldest first
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.to_string());
        output.push('\n');
    }
    output
}
