//! Shared helpers for command implementations

use gradebook_core::error::{GradebookError, Result};
use gradebook_core::gpa::recompute;
use gradebook_core::model::RecordBook;

use crate::cli::Cli;

/// Load the record book named by `--records` and rebuild its derived
/// fields. Commands never see stale averages from the export.
pub fn load_book(cli: &Cli) -> Result<RecordBook> {
    let path = cli.records.as_deref().ok_or_else(|| {
        GradebookError::UsageError(
            "--records <path> is required for this command (or set GRADEBOOK_RECORDS)".to_string(),
        )
    })?;

    let mut book = RecordBook::load(path)?;
    recompute(&mut book);
    Ok(book)
}

/// Render an optional 1-decimal average for human output
pub fn fmt_avg(avg: Option<f64>) -> String {
    match avg {
        Some(avg) => format!("{:.1}", avg),
        None => "-".to_string(),
    }
}
