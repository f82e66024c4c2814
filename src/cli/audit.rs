//! Audit log viewing

use crate::audit::AuditLogger;
use crate::config::paths::FinancePaths;
use crate::display::format_audit_entries;
use crate::error::FinanceResult;

/// Print the most recent audit entries
///
/// Reads the log file directly, so entries written before auditing was
/// switched off are still shown.
pub fn handle_audit_command(paths: &FinancePaths, count: usize) -> FinanceResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.recent(count)?;
    print!("{}", format_audit_entries(&entries));
    Ok(())
}
