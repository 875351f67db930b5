//! `gradebook check` command - validate a record export
//!
//! Prints every problem found and exits with the data-error code when the
//! file is inconsistent.

use gradebook_core::audit::audit;
use gradebook_core::error::{GradebookError, Result};
use gradebook_core::model::RecordBook;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli) -> Result<()> {
    let path = cli.records.as_deref().ok_or_else(|| {
        GradebookError::UsageError(
            "--records <path> is required for this command (or set GRADEBOOK_RECORDS)".to_string(),
        )
    })?;

    // No recompute here: check validates the file as-is.
    let book = RecordBook::load(path)?;
    let problems = audit(&book);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "problems": problems,
                "count": problems.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for problem in &problems {
                println!("{}", problem);
            }
            if problems.is_empty() && !cli.quiet {
                println!(
                    "ok: {} semesters, {} subjects, {} grades, {} documents",
                    book.semesters.len(),
                    book.subjects.len(),
                    book.grades.len(),
                    book.documents.len()
                );
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(GradebookError::InvalidRecords {
            path: path.to_path_buf(),
            reason: format!("{} problem(s) found", problems.len()),
        })
    }
}
