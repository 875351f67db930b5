//! Record model: the entities a gradebook export file carries.
//!
//! The record file is a JSON snapshot of one student's data (camelCase
//! keys, matching the management API it is exported from). Everything
//! here is plain data; derived fields (`avgScore`, `letterGrade`,
//! `gpaScore`, semester GPA) are recomputed by [`crate::gpa::recompute`]
//! rather than trusted from the file.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};
use crate::scale::LetterGrade;
use crate::score::{weighted_average, ScoreSet};
use crate::template::{template_by_id, weights_from_id};

/// The student owning the record file.
///
/// Loaded once with the book and passed by reference wherever the current
/// user identity is needed; nothing reads it ad hoc mid-call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Student {
    /// Preferred display string: display name when set, else username
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Credit-weighted GPA over the semester's subjects; derived
    #[serde(default)]
    pub semester_gpa: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: u64,
    pub semester_id: u64,
    pub name: String,
    pub credits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: u64,
    pub subject_id: u64,
    /// References a catalog template; legacy ids are parsed as dash-joined
    /// weights when not in the catalog
    pub template_id: String,
    #[serde(default)]
    pub scores: ScoreSet,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    // Derived fields, recomputed on load
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub letter_grade: Option<LetterGrade>,
    #[serde(default)]
    pub gpa_score: Option<f64>,
}

impl Grade {
    /// Weights this grade is scored against: the catalog entry for its
    /// template id, or the weights recovered from the id itself.
    pub fn resolved_weights(&self) -> Option<Vec<u32>> {
        if let Some(template) = template_by_id(&self.template_id) {
            return Some(template.weights.to_vec());
        }
        weights_from_id(&self.template_id)
    }

    /// Weighted average over the entered components; 0.0 when the template
    /// id resolves to nothing
    pub fn computed_average(&self) -> f64 {
        match self.resolved_weights() {
            Some(weights) => weighted_average(&self.scores, &weights),
            None => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u64,
    #[serde(default)]
    pub subject_id: Option<u64>,
    pub file_name: String,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub bookmarked: bool,
}

impl Document {
    /// Lowercased file extension, if any
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }

    /// Best-effort MIME type from the file name
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

/// One student's complete academic record, loaded from a JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBook {
    pub student: Student,
    #[serde(default)]
    pub semesters: Vec<Semester>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub grades: Vec<Grade>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl RecordBook {
    /// Load a record book from a JSON export file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GradebookError::RecordsNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let book: RecordBook =
            serde_json::from_str(&contents).map_err(|e| GradebookError::InvalidRecords {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            student = %book.student.username,
            semesters = book.semesters.len(),
            subjects = book.subjects.len(),
            grades = book.grades.len(),
            "record book loaded"
        );

        Ok(book)
    }

    pub fn semester(&self, id: u64) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    pub fn subject(&self, id: u64) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn subjects_in_semester(&self, semester_id: u64) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| s.semester_id == semester_id)
            .collect()
    }

    /// Grades for a subject, oldest first (stable record order)
    pub fn grades_for_subject(&self, subject_id: u64) -> Vec<&Grade> {
        self.grades
            .iter()
            .filter(|g| g.subject_id == subject_id)
            .collect()
    }

    /// Subject display name, for listings that join across records
    pub fn subject_name(&self, subject_id: u64) -> Option<&str> {
        self.subject(subject_id).map(|s| s.name.as_str())
    }

    pub fn require_semester(&self, id: u64) -> Result<&Semester> {
        self.semester(id)
            .ok_or_else(|| GradebookError::not_found("semester", id))
    }

    pub fn require_subject(&self, id: u64) -> Result<&Subject> {
        self.subject(id)
            .ok_or_else(|| GradebookError::not_found("subject", id))
    }
}
