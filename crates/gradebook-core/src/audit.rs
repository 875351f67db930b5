//! Record file validation backing `gradebook check`.
//!
//! Reports every problem found rather than stopping at the first, so a
//! record export can be fixed in one pass.

use std::fmt;

use serde::Serialize;

use crate::model::RecordBook;
use crate::template::{template_by_id, weights_from_id};

/// One consistency problem in a record book
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    /// Grade references a template that is neither in the catalog nor a
    /// parseable dash-joined weight sequence
    UnresolvableTemplate { grade_id: u64, template_id: String },
    /// Component score outside 0..=10
    ScoreOutOfRange {
        grade_id: u64,
        component: usize,
        value: f64,
    },
    /// Grade references a subject that does not exist
    OrphanGrade { grade_id: u64, subject_id: u64 },
    /// Subject references a semester that does not exist
    OrphanSubject { subject_id: u64, semester_id: u64 },
    /// Document references a subject that does not exist
    OrphanDocument { document_id: u64, subject_id: u64 },
    /// Subject carries more than one grade record; only the first counts
    DuplicateGrades { subject_id: u64, count: usize },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::UnresolvableTemplate {
                grade_id,
                template_id,
            } => write!(f, "grade {grade_id}: unresolvable template '{template_id}'"),
            Problem::ScoreOutOfRange {
                grade_id,
                component,
                value,
            } => write!(
                f,
                "grade {grade_id}: component {} score {value} out of range 0..=10",
                component + 1
            ),
            Problem::OrphanGrade {
                grade_id,
                subject_id,
            } => write!(f, "grade {grade_id}: unknown subject {subject_id}"),
            Problem::OrphanSubject {
                subject_id,
                semester_id,
            } => write!(f, "subject {subject_id}: unknown semester {semester_id}"),
            Problem::OrphanDocument {
                document_id,
                subject_id,
            } => write!(f, "document {document_id}: unknown subject {subject_id}"),
            Problem::DuplicateGrades { subject_id, count } => write!(
                f,
                "subject {subject_id}: {count} grade records (only the first is used)"
            ),
        }
    }
}

/// Validate a record book, returning every problem found.
pub fn audit(book: &RecordBook) -> Vec<Problem> {
    let mut problems = Vec::new();

    for subject in &book.subjects {
        if book.semester(subject.semester_id).is_none() {
            problems.push(Problem::OrphanSubject {
                subject_id: subject.id,
                semester_id: subject.semester_id,
            });
        }

        let grades = book.grades_for_subject(subject.id);
        if grades.len() > 1 {
            problems.push(Problem::DuplicateGrades {
                subject_id: subject.id,
                count: grades.len(),
            });
        }
    }

    for grade in &book.grades {
        if book.subject(grade.subject_id).is_none() {
            problems.push(Problem::OrphanGrade {
                grade_id: grade.id,
                subject_id: grade.subject_id,
            });
        }

        if template_by_id(&grade.template_id).is_none()
            && weights_from_id(&grade.template_id).is_none()
        {
            problems.push(Problem::UnresolvableTemplate {
                grade_id: grade.id,
                template_id: grade.template_id.clone(),
            });
        }

        for (component, score) in grade.scores.components.iter().enumerate() {
            if let Some(value) = score {
                if !(0.0..=10.0).contains(value) {
                    problems.push(Problem::ScoreOutOfRange {
                        grade_id: grade.id,
                        component,
                        value: *value,
                    });
                }
            }
        }
    }

    for document in &book.documents {
        if let Some(subject_id) = document.subject_id {
            if book.subject(subject_id).is_none() {
                problems.push(Problem::OrphanDocument {
                    document_id: document.id,
                    subject_id,
                });
            }
        }
    }

    problems
}
