//! `gradebook list` commands - semesters, subjects, grades, documents
//!
//! Listing order is record order from the export file; filters only ever
//! narrow it.

use chrono::{DateTime, Utc};

use gradebook_core::error::Result;
use gradebook_core::query::{DocumentFilter, GradeFilter, SubjectFilter};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{fmt_avg, load_book};

pub fn semesters(cli: &Cli) -> Result<()> {
    let book = load_book(cli)?;

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = book
                .semesters
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "id": s.id,
                        "name": s.name,
                        "startDate": s.start_date,
                        "endDate": s.end_date,
                        "gpa": s.semester_gpa,
                        "subjectCount": book.subjects_in_semester(s.id).len(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "semesters": output }))?
            );
        }
        OutputFormat::Human => {
            for s in &book.semesters {
                let gpa = s
                    .semester_gpa
                    .map(|g| format!("{:.2}", g))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<6} {:<20} gpa={:<5} subjects={}",
                    s.id,
                    s.name,
                    gpa,
                    book.subjects_in_semester(s.id).len()
                );
            }
        }
    }

    Ok(())
}

pub fn subjects(cli: &Cli, semester: Option<u64>, term: Option<&str>) -> Result<()> {
    let book = load_book(cli)?;
    if let Some(id) = semester {
        book.require_semester(id)?;
    }

    let filter = SubjectFilter {
        semester_id: semester,
        term: term.map(str::to_string),
    };
    let subjects = filter.apply(&book);

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = subjects
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "id": s.id,
                        "semesterId": s.semester_id,
                        "name": s.name,
                        "credits": s.credits,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "subjects": output }))?
            );
        }
        OutputFormat::Human => {
            for s in subjects {
                println!(
                    "{:<6} {:<24} credits={} semester={}",
                    s.id, s.name, s.credits, s.semester_id
                );
            }
        }
    }

    Ok(())
}

pub fn grades(cli: &Cli, subject: Option<u64>, since: Option<DateTime<Utc>>) -> Result<()> {
    let book = load_book(cli)?;
    if let Some(id) = subject {
        book.require_subject(id)?;
    }

    let filter = GradeFilter {
        subject_id: subject,
        since,
    };
    let grades = filter.apply(&book);

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = grades
                .iter()
                .map(|g| {
                    serde_json::json!({
                        "id": g.id,
                        "subjectId": g.subject_id,
                        "subjectName": book.subject_name(g.subject_id),
                        "templateId": g.template_id,
                        "scores": g.scores,
                        "average": g.avg_score,
                        "letter": g.letter_grade,
                        "gradePoints": g.gpa_score,
                        "createdAt": g.created_at,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "grades": output }))?
            );
        }
        OutputFormat::Human => {
            for g in grades {
                let letter = g
                    .letter_grade
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<6} {:<24} {:<12} avg={:<5} letter={}",
                    g.id,
                    book.subject_name(g.subject_id).unwrap_or("?"),
                    g.template_id,
                    fmt_avg(g.avg_score),
                    letter
                );
            }
        }
    }

    Ok(())
}

pub fn documents(
    cli: &Cli,
    bookmarked: bool,
    subject: Option<u64>,
    ext: Option<&str>,
    term: Option<&str>,
) -> Result<()> {
    let book = load_book(cli)?;
    if let Some(id) = subject {
        book.require_subject(id)?;
    }

    let filter = DocumentFilter {
        bookmarked_only: bookmarked,
        subject_id: subject,
        extension: ext.map(str::to_string),
        term: term.map(str::to_string),
    };
    let documents = filter.apply(&book);

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = documents
                .iter()
                .map(|d| {
                    serde_json::json!({
                        "id": d.id,
                        "fileName": d.file_name,
                        "customName": d.custom_name,
                        "subjectId": d.subject_id,
                        "subjectName": d.subject_id.and_then(|id| book.subject_name(id)),
                        "mimeType": d.mime_type(),
                        "bookmarked": d.bookmarked,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "documents": output }))?
            );
        }
        OutputFormat::Human => {
            for d in documents {
                let name = d.custom_name.as_deref().unwrap_or(&d.file_name);
                let mark = if d.bookmarked { "*" } else { " " };
                println!(
                    "{:<6} {} {:<28} {:<24} {}",
                    d.id,
                    mark,
                    name,
                    d.subject_id
                        .and_then(|id| book.subject_name(id))
                        .unwrap_or("-"),
                    d.mime_type()
                );
            }
        }
    }

    Ok(())
}
