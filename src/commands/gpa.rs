//! `gradebook gpa` command - semester or cumulative GPA

use gradebook_core::error::Result;
use gradebook_core::gpa::{overall_gpa, semester_gpa};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::load_book;

pub fn execute(cli: &Cli, semester: Option<u64>) -> Result<()> {
    let book = load_book(cli)?;

    match semester {
        Some(semester_id) => {
            let summary = semester_gpa(&book, semester_id)?;
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                OutputFormat::Human => {
                    println!(
                        "{}: gpa {:.2} / 4.0 ({} subjects, {} credits)",
                        summary.name, summary.gpa, summary.subject_count, summary.total_credits
                    );
                }
            }
        }
        None => {
            let overall = overall_gpa(&book);
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&overall)?);
                }
                OutputFormat::Human => {
                    println!(
                        "{}: cumulative gpa {:.2} / 4.0 ({} semesters, {} credits)",
                        book.student.label(),
                        overall.gpa,
                        overall.semester_count,
                        overall.total_credits
                    );
                }
            }
        }
    }

    Ok(())
}
