//! In-memory filter predicates for listings.
//!
//! These mirror the management UI filters: every filter field is optional
//! and unset fields match everything, so filters compose by AND.

use chrono::{DateTime, Utc};

use crate::model::{Document, Grade, RecordBook, Subject};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter over document listings
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    /// Keep only bookmarked documents
    pub bookmarked_only: bool,
    /// Keep documents attached to this subject
    pub subject_id: Option<u64>,
    /// Keep documents whose file extension equals this (case-insensitive)
    pub extension: Option<String>,
    /// Case-insensitive substring over file name, custom name, subject name
    pub term: Option<String>,
}

impl DocumentFilter {
    pub fn matches(&self, doc: &Document, book: &RecordBook) -> bool {
        if self.bookmarked_only && !doc.bookmarked {
            return false;
        }

        if let Some(subject_id) = self.subject_id {
            if doc.subject_id != Some(subject_id) {
                return false;
            }
        }

        if let Some(ext) = &self.extension {
            match doc.extension() {
                Some(doc_ext) if doc_ext == ext.to_lowercase() => {}
                _ => return false,
            }
        }

        if let Some(term) = &self.term {
            let subject_name = doc
                .subject_id
                .and_then(|id| book.subject_name(id))
                .unwrap_or("");
            let in_names = contains_ci(&doc.file_name, term)
                || doc
                    .custom_name
                    .as_deref()
                    .is_some_and(|name| contains_ci(name, term))
                || contains_ci(subject_name, term);
            if !in_names {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, book: &'a RecordBook) -> Vec<&'a Document> {
        book.documents
            .iter()
            .filter(|doc| self.matches(doc, book))
            .collect()
    }
}

/// Filter over subject listings
#[derive(Debug, Clone, Default)]
pub struct SubjectFilter {
    pub semester_id: Option<u64>,
    /// Case-insensitive substring over the subject name
    pub term: Option<String>,
}

impl SubjectFilter {
    pub fn matches(&self, subject: &Subject) -> bool {
        if let Some(semester_id) = self.semester_id {
            if subject.semester_id != semester_id {
                return false;
            }
        }
        if let Some(term) = &self.term {
            if !contains_ci(&subject.name, term) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, book: &'a RecordBook) -> Vec<&'a Subject> {
        book.subjects
            .iter()
            .filter(|subject| self.matches(subject))
            .collect()
    }
}

/// Filter over grade listings
#[derive(Debug, Clone, Default)]
pub struct GradeFilter {
    pub subject_id: Option<u64>,
    /// Keep grades created at or after this instant
    pub since: Option<DateTime<Utc>>,
}

impl GradeFilter {
    pub fn matches(&self, grade: &Grade) -> bool {
        if let Some(subject_id) = self.subject_id {
            if grade.subject_id != subject_id {
                return false;
            }
        }
        if let Some(since) = self.since {
            if !grade.created_at.is_some_and(|created| created >= since) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, book: &'a RecordBook) -> Vec<&'a Grade> {
        book.grades
            .iter()
            .filter(|grade| self.matches(grade))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::sample_json;

    fn sample_book() -> RecordBook {
        serde_json::from_str(sample_json()).unwrap()
    }

    #[test]
    fn unset_filter_matches_everything() {
        let book = sample_book();
        assert_eq!(DocumentFilter::default().apply(&book).len(), 2);
        assert_eq!(SubjectFilter::default().apply(&book).len(), 3);
        assert_eq!(GradeFilter::default().apply(&book).len(), 2);
    }

    #[test]
    fn bookmarked_only_keeps_bookmarks() {
        let book = sample_book();
        let filter = DocumentFilter {
            bookmarked_only: true,
            ..Default::default()
        };
        let docs = filter.apply(&book);
        assert_eq!(docs.len(), 1);
        assert!(docs[0].bookmarked);
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        let book = sample_book();
        let filter = DocumentFilter {
            extension: Some("PDF".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&book).len(), 1);
    }

    #[test]
    fn term_matches_custom_name_and_subject_name() {
        let book = sample_book();

        let by_custom = DocumentFilter {
            term: Some("week 1".into()),
            ..Default::default()
        };
        assert_eq!(by_custom.apply(&book).len(), 1);

        // "limits.pdf" is attached to Calculus; match via the subject name.
        let by_subject = DocumentFilter {
            term: Some("calculus".into()),
            ..Default::default()
        };
        assert_eq!(by_subject.apply(&book).len(), 1);

        let no_match = DocumentFilter {
            term: Some("zzz".into()),
            ..Default::default()
        };
        assert!(no_match.apply(&book).is_empty());
    }

    #[test]
    fn filters_compose_by_and() {
        let book = sample_book();
        let filter = DocumentFilter {
            bookmarked_only: true,
            extension: Some("docx".into()),
            ..Default::default()
        };
        assert!(filter.apply(&book).is_empty());
    }

    #[test]
    fn subject_filter_by_semester_and_term() {
        let book = sample_book();
        let filter = SubjectFilter {
            semester_id: Some(10),
            term: Some("phys".into()),
        };
        let subjects = filter.apply(&book);
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].name, "Physics");
    }

    #[test]
    fn grade_filter_since_excludes_undated_grades() {
        let book = sample_book();
        let filter = GradeFilter {
            since: Some(Utc::now()),
            ..Default::default()
        };
        // Sample grades carry no createdAt; a since filter drops them.
        assert!(filter.apply(&book).is_empty());
    }
}
