//! End-to-end CLI tests

mod common;

use common::{gradebook, write_sample_records};
use predicates::prelude::*;
use std::fs;

#[test]
fn templates_lists_catalog() {
    gradebook()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("10-10-10-70"))
        .stdout(predicate::str::contains("10% - 10% - 80%"));
}

#[test]
fn templates_json_has_seven_entries() {
    let output = gradebook()
        .args(["templates", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let templates = json["templates"].as_array().unwrap();
    assert_eq!(templates.len(), 7);
    assert_eq!(templates[0]["id"], "10-10-10-70");
    assert_eq!(templates[0]["fields"], 4);
}

#[test]
fn average_renormalizes_partial_scores() {
    gradebook()
        .args([
            "average", "-t", "10-10-10-70", "-s", "8", "-s", "-", "-s", "7", "-s", "9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.7 (A, 3.7 points)"));
}

#[test]
fn average_uses_default_template_when_omitted() {
    gradebook()
        .args(["average", "-s", "10", "-s", "10", "-s", "10", "-s", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("template 10-10-10-70"));
}

#[test]
fn average_without_scores_reports_zero() {
    gradebook()
        .args(["average", "-t", "10-20-70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no components entered"));
}

#[test]
fn average_unknown_template_is_data_error() {
    gradebook()
        .args(["average", "-t", "5-95", "-s", "8"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unknown grade template"));
}

#[test]
fn average_malformed_score_is_usage_error() {
    gradebook()
        .args(["average", "-t", "10-20-70", "-s", "eight"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid score"));
}

#[test]
fn average_too_many_scores_for_template() {
    gradebook()
        .args([
            "average", "-t", "10-20-70", "-s", "8", "-s", "8", "-s", "8", "-s", "8",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("3 components"));
}

#[test]
fn json_format_emits_error_envelope() {
    let output = gradebook()
        .args(["--format", "json", "average", "-t", "5-95", "-s", "8"])
        .assert()
        .failure()
        .code(3)
        .get_output()
        .stderr
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["error"]["type"], "unknown_template");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn gpa_requires_records() {
    gradebook()
        .arg("gpa")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--records"));
}

#[test]
fn gpa_missing_records_file_is_data_error() {
    gradebook()
        .args(["--records", "/nonexistent/records.json", "gpa"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("record file not found"));
}

#[test]
fn gpa_overall_weights_semesters_by_credits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    gradebook()
        .arg("--records")
        .arg(&path)
        .arg("gpa")
        .assert()
        .success()
        .stdout(predicate::str::contains("cumulative gpa 2.76 / 4.0"))
        .stdout(predicate::str::contains("Minh Tran"));
}

#[test]
fn gpa_for_one_semester() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    gradebook()
        .arg("--records")
        .arg(&path)
        .args(["gpa", "--semester", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fall 2025: gpa 2.76 / 4.0 (2 subjects, 7 credits)",
        ));
}

#[test]
fn gpa_unknown_semester_is_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    gradebook()
        .arg("--records")
        .arg(&path)
        .args(["gpa", "--semester", "999"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("semester not found"));
}

#[test]
fn records_path_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    gradebook()
        .env("GRADEBOOK_RECORDS", &path)
        .arg("gpa")
        .assert()
        .success()
        .stdout(predicate::str::contains("cumulative gpa"));
}

#[test]
fn list_grades_shows_computed_letters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    let output = gradebook()
        .arg("--records")
        .arg(&path)
        .args(["list", "grades", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let grades = json["grades"].as_array().unwrap();
    assert_eq!(grades.len(), 2);
    assert_eq!(grades[0]["average"], 8.7);
    assert_eq!(grades[0]["letter"], "A");
    assert_eq!(grades[1]["letter"], "D+");
}

#[test]
fn list_grades_since_filters_undated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    gradebook()
        .arg("--records")
        .arg(&path)
        .args(["list", "grades", "--since", "2025-11-01T00:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculus"))
        .stdout(predicate::str::contains("Physics").not());
}

#[test]
fn list_documents_bookmarked_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    gradebook()
        .arg("--records")
        .arg(&path)
        .args(["list", "documents", "--bookmarked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("limits.pdf"))
        .stdout(predicate::str::contains("notes.docx").not());
}

#[test]
fn list_subjects_by_term() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    gradebook()
        .arg("--records")
        .arg(&path)
        .args(["list", "subjects", "-T", "phys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics"))
        .stdout(predicate::str::contains("Calculus").not());
}

#[test]
fn chart_skips_ungraded_semesters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    let output = gradebook()
        .arg("--records")
        .arg(&path)
        .args(["chart", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["labels"], serde_json::json!(["Fall 2025"]));
    assert_eq!(json["gpa"], serde_json::json!([2.76]));
    assert_eq!(json["subjectCounts"], serde_json::json!([2]));
}

#[test]
fn check_passes_clean_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    write_sample_records(&path);

    gradebook()
        .arg("--records")
        .arg(&path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 2 semesters"));
}

#[test]
fn check_reports_problems_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    fs::write(
        &path,
        r#"{
            "student": {"id": 1, "username": "minh"},
            "semesters": [{"id": 10, "name": "Fall 2025"}],
            "subjects": [{"id": 100, "semesterId": 10, "name": "Calculus", "credits": 4}],
            "grades": [
                {"id": 1000, "subjectId": 100, "templateId": "mystery",
                 "scores": [12, null, null, null]},
                {"id": 1001, "subjectId": 999, "templateId": "10-20-70",
                 "scores": [5, null, null, null]}
            ]
        }"#,
    )
    .unwrap();

    gradebook()
        .arg("--records")
        .arg(&path)
        .arg("check")
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("unresolvable template 'mystery'"))
        .stdout(predicate::str::contains("out of range"))
        .stdout(predicate::str::contains("unknown subject 999"));
}

#[test]
fn no_command_is_usage_error() {
    gradebook()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--help"));
}

#[test]
fn config_default_template_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("gradebook.toml");
    fs::write(&config, "default_template = \"10-30-60\"\n").unwrap();

    gradebook()
        .arg("--config")
        .arg(&config)
        .args(["average", "-s", "5", "-s", "5", "-s", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.0"))
        .stdout(predicate::str::contains("template 10-30-60"));
}
