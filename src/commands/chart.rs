//! `gradebook chart` command - semester GPA series for the dashboard

use gradebook_core::error::Result;
use gradebook_core::gpa::semester_chart;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::load_book;

pub fn execute(cli: &Cli) -> Result<()> {
    let book = load_book(cli)?;
    let chart = semester_chart(&book);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        OutputFormat::Human => {
            for ((label, gpa), subjects) in chart
                .labels
                .iter()
                .zip(&chart.gpa)
                .zip(&chart.subject_counts)
            {
                // Quarter-point bar on the 4.0 scale.
                let bar = "#".repeat((gpa * 4.0).round() as usize);
                println!("{:<20} {:.2} {:<16} ({} subjects)", label, gpa, bar, subjects);
            }
            if chart.labels.is_empty() && !cli.quiet {
                println!("no graded semesters");
            }
        }
    }

    Ok(())
}
