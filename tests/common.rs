use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub fn gradebook() -> Command {
    cargo_bin_cmd!("gradebook")
}

/// A small consistent record export: two semesters, one fully graded.
pub const SAMPLE_RECORDS: &str = r#"{
    "student": {"id": 1, "username": "minh", "displayName": "Minh Tran"},
    "semesters": [
        {"id": 10, "name": "Fall 2025", "startDate": "2025-09-01", "endDate": "2025-12-20"},
        {"id": 11, "name": "Spring 2026"}
    ],
    "subjects": [
        {"id": 100, "semesterId": 10, "name": "Calculus", "credits": 4},
        {"id": 101, "semesterId": 10, "name": "Physics", "credits": 3},
        {"id": 102, "semesterId": 11, "name": "Databases", "credits": 3}
    ],
    "grades": [
        {"id": 1000, "subjectId": 100, "templateId": "10-10-10-70",
         "scores": [8, null, 7, 9], "createdAt": "2025-12-01T09:00:00Z"},
        {"id": 1001, "subjectId": 101, "templateId": "10-30-60",
         "scores": [5, 5, 5, null]}
    ],
    "documents": [
        {"id": 5000, "subjectId": 100, "fileName": "limits.pdf", "bookmarked": true},
        {"id": 5001, "fileName": "notes.docx", "customName": "Week 1 notes"}
    ]
}"#;

#[allow(dead_code)]
pub fn write_sample_records(path: &Path) {
    fs::write(path, SAMPLE_RECORDS).expect("write sample records");
}
