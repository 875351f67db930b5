//! Command dispatch logic for gradebook

use std::time::Instant;

use chrono::{DateTime, Utc};

use gradebook_core::bail_usage;
use gradebook_core::error::{GradebookError, Result};

use crate::cli::{Cli, Commands, ListCommands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        None => handle_no_command(),

        Some(Commands::Templates) => commands::templates::execute(cli),

        Some(Commands::Average { template, score }) => {
            commands::average::execute(cli, template.as_deref(), score)
        }

        Some(Commands::List { what }) => match what {
            ListCommands::Semesters => commands::list::semesters(cli),
            ListCommands::Subjects { semester, term } => {
                commands::list::subjects(cli, *semester, term.as_deref())
            }
            ListCommands::Grades { subject, since } => {
                let since = since.as_deref().map(parse_since).transpose()?;
                commands::list::grades(cli, *subject, since)
            }
            ListCommands::Documents {
                bookmarked,
                subject,
                ext,
                term,
            } => commands::list::documents(cli, *bookmarked, *subject, ext.as_deref(), term.as_deref()),
        },

        Some(Commands::Gpa { semester }) => commands::gpa::execute(cli, *semester),

        Some(Commands::Chart) => commands::chart::execute(cli),

        Some(Commands::Check) => commands::check::execute(cli),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "dispatch complete");
    result
}

fn handle_no_command() -> Result<()> {
    bail_usage!("no command given (try 'gradebook --help')");
}

/// Parse `--since` as an RFC 3339 instant
fn parse_since(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| GradebookError::invalid_value("--since (expected RFC 3339)", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_parses_rfc3339() {
        let parsed = parse_since("2026-01-15T00:00:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-01-15T00:00:00+00:00");
    }

    #[test]
    fn since_rejects_bare_dates() {
        assert!(parse_since("2026-01-15").is_err());
        assert!(parse_since("yesterday").is_err());
    }
}
