//! GPA aggregation and analytics over a record book.
//!
//! Derived fields are never trusted from the export: [`recompute`] rebuilds
//! every grade's average, letter, and grade points, then the credit-weighted
//! semester GPAs, exactly once per load.

use serde::Serialize;

use crate::error::Result;
use crate::model::RecordBook;
use crate::scale::{grade_point, letter_for};
use crate::score::round2;

/// Per-semester GPA summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterGpa {
    pub semester_id: u64,
    pub name: String,
    /// Credit-weighted mean of subject grade points, 4.0 scale
    pub gpa: f64,
    /// Credits across all subjects in the semester, graded or not
    pub total_credits: u32,
    pub subject_count: usize,
}

/// Cumulative GPA across all semesters with grades
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallGpa {
    pub gpa: f64,
    pub total_credits: u32,
    pub semester_count: usize,
}

/// Series for the semester GPA chart: one point per semester that has a
/// positive GPA, in record order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub gpa: Vec<f64>,
    pub subject_counts: Vec<usize>,
}

/// Rebuild all derived fields on the book.
///
/// Every grade gets its average, letter, and grade points recomputed from
/// the raw component scores, then each semester gets its credit-weighted
/// GPA. Mirrors the management backend's startup recalculation pass.
pub fn recompute(book: &mut RecordBook) {
    for grade in &mut book.grades {
        let avg = grade.computed_average();
        grade.avg_score = Some(avg);
        grade.letter_grade = Some(letter_for(avg));
        grade.gpa_score = Some(grade_point(avg));
    }

    let semester_ids: Vec<u64> = book.semesters.iter().map(|s| s.id).collect();
    for id in semester_ids {
        let gpa = graded_semester_gpa(book, id);
        if let Some(semester) = book.semesters.iter_mut().find(|s| s.id == id) {
            semester.semester_gpa = gpa;
        }
    }

    tracing::debug!(grades = book.grades.len(), "derived fields recomputed");
}

/// Credit-weighted GPA over the semester's graded subjects, or `None` when
/// no subject has a grade record.
fn graded_semester_gpa(book: &RecordBook, semester_id: u64) -> Option<f64> {
    let mut total_weighted = 0.0;
    let mut graded_credits = 0u32;

    for subject in book.subjects_in_semester(semester_id) {
        // Subjects carry at most one grade record; take the first.
        if let Some(grade) = book.grades_for_subject(subject.id).first() {
            let points = grade_point(grade.computed_average());
            total_weighted += points * f64::from(subject.credits);
            graded_credits += subject.credits;
        }
    }

    if graded_credits > 0 {
        Some(round2(total_weighted / f64::from(graded_credits)))
    } else {
        None
    }
}

/// GPA summary for one semester
pub fn semester_gpa(book: &RecordBook, semester_id: u64) -> Result<SemesterGpa> {
    let semester = book.require_semester(semester_id)?;
    let subjects = book.subjects_in_semester(semester_id);

    Ok(SemesterGpa {
        semester_id,
        name: semester.name.clone(),
        gpa: graded_semester_gpa(book, semester_id).unwrap_or(0.0),
        total_credits: subjects.iter().map(|s| s.credits).sum(),
        subject_count: subjects.len(),
    })
}

/// Cumulative GPA, weighting each semester's GPA by its credit load.
/// Semesters without any graded subject are excluded entirely.
pub fn overall_gpa(book: &RecordBook) -> OverallGpa {
    let mut total_weighted = 0.0;
    let mut total_credits = 0u32;
    let mut semester_count = 0usize;

    for semester in &book.semesters {
        let Some(gpa) = graded_semester_gpa(book, semester.id) else {
            continue;
        };
        if gpa <= 0.0 {
            continue;
        }

        let credits: u32 = book
            .subjects_in_semester(semester.id)
            .iter()
            .map(|s| s.credits)
            .sum();

        total_weighted += gpa * f64::from(credits);
        total_credits += credits;
        semester_count += 1;
    }

    let gpa = if total_credits > 0 {
        round2(total_weighted / f64::from(total_credits))
    } else {
        0.0
    };

    OverallGpa {
        gpa,
        total_credits,
        semester_count,
    }
}

/// Chart series for the analytics dashboard. Semesters with a zero (or
/// missing) GPA produce no point, matching the reference dashboard.
pub fn semester_chart(book: &RecordBook) -> ChartData {
    let mut chart = ChartData {
        labels: Vec::new(),
        gpa: Vec::new(),
        subject_counts: Vec::new(),
    };

    for semester in &book.semesters {
        let Some(gpa) = graded_semester_gpa(book, semester.id) else {
            continue;
        };
        if gpa <= 0.0 {
            continue;
        }

        chart.labels.push(semester.name.clone());
        chart.gpa.push(gpa);
        chart
            .subject_counts
            .push(book.subjects_in_semester(semester.id).len());
    }

    chart
}
