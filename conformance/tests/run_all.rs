//! End-to-end conformance runs over artifacts written to a temp directory.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use triglut::serializer::coe::{to_coe, to_single_coe, write_coe};
use triglut::serializer::json::to_json;
use triglut::TrigTable;
use triglut_conformance::{run_all, ArtifactPaths, ConformanceReport, Severity};

fn run(dir: &Path) -> ConformanceReport {
    run_all(&ArtifactPaths {
        artifacts: dir.to_path_buf(),
    })
    .expect("conformance run failed")
}

fn failures(report: &ConformanceReport) -> Vec<String> {
    report
        .results
        .iter()
        .filter(|r| r.is_failure())
        .map(ToString::to_string)
        .collect()
}

fn write_combined(dir: &Path) -> String {
    let text = to_coe(TrigTable::full());
    write_coe(&dir.join("triglut.coe"), &text).expect("write triglut.coe");
    text
}

#[test]
fn freshly_built_artifact_passes() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_combined(dir.path());

    let report = run(dir.path());
    assert!(report.all_passed(), "failures: {:#?}", failures(&report));
    assert_eq!(report.warning_count(), 0);
}

#[test]
fn split_and_json_artifacts_pass() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_combined(dir.path());
    let table = TrigTable::full();
    for (name, column) in table.columns() {
        write_coe(&dir.path().join(format!("{name}.coe")), &to_single_coe(column, name))
            .expect("write column");
    }
    let json = serde_json::to_string_pretty(&to_json(table)).expect("serialize json");
    fs::write(dir.path().join("triglut.json"), json).expect("write json");

    let report = run(dir.path());
    assert!(report.all_passed(), "failures: {:#?}", failures(&report));
    let column_passes = report
        .results
        .iter()
        .filter(|r| r.validator == "coe/columns" && r.severity == Severity::Pass)
        .count();
    assert_eq!(column_passes, 4);
}

#[test]
fn missing_artifact_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let report = run(dir.path());
    let failed = failures(&report);
    assert_eq!(failed.len(), 1, "{failed:#?}");
    assert!(failed[0].contains("triglut.coe not found"));
}

#[test]
fn altered_record_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let text = write_combined(dir.path());
    // index 0: cot 7fff -> 7ffe
    let tampered = text.replacen("0000008000007fff,", "0000008000007ffe,", 1);
    fs::write(dir.path().join("triglut.coe"), tampered).expect("rewrite");

    let report = run(dir.path());
    let failed = failures(&report);
    assert_eq!(failed.len(), 1, "{failed:#?}");
    assert!(failed[0].contains("coe/records"));
    assert!(failed[0].contains("index 0"));
}

#[test]
fn truncated_vector_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let text = write_combined(dir.path());
    let kept: Vec<&str> = text.lines().take(3 + 10).collect();
    let mut truncated = kept.join("\n");
    truncated.pop(); // drop the trailing ','
    truncated.push_str(";\n");
    fs::write(dir.path().join("triglut.coe"), truncated).expect("rewrite");

    let report = run(dir.path());
    assert!(failures(&report)
        .iter()
        .any(|f| f.contains("Wrong record count: expected 1024, got 10")));
}

#[test]
fn wrong_terminator_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let text = write_combined(dir.path());
    let broken = text.replacen(",\n", "\n", 1);
    fs::write(dir.path().join("triglut.coe"), broken).expect("rewrite");

    let report = run(dir.path());
    let failed = failures(&report);
    assert!(
        failed.iter().any(|f| f.contains("not a valid COE document")),
        "{failed:#?}"
    );
}

#[test]
fn partial_column_set_warns() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_combined(dir.path());
    let table = TrigTable::full();
    write_coe(&dir.path().join("sin.coe"), &to_single_coe(table.sin(), "sin"))
        .expect("write sin");

    let report = run(dir.path());
    assert!(report.all_passed());
    assert_eq!(report.warning_count(), 1);
}

#[test]
fn malformed_sidecar_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_combined(dir.path());
    fs::write(dir.path().join("triglut.json"), "{not json").expect("write json");

    let report = run(dir.path());
    let failed = failures(&report);
    assert_eq!(failed.len(), 1, "{failed:#?}");
    assert!(failed[0].contains("json/sidecar"));
    assert!(failed[0].contains("triglut.json is not valid JSON"));
}

#[test]
fn non_utf8_artifact_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let mut bytes = to_coe(TrigTable::full()).into_bytes();
    bytes[0] = 0xff;
    fs::write(dir.path().join("triglut.coe"), bytes).expect("write coe");

    let report = run(dir.path());
    let failed = failures(&report);
    assert_eq!(failed.len(), 1, "{failed:#?}");
    assert!(failed[0].contains("triglut.coe is not valid UTF-8 text"));
}

#[test]
fn non_utf8_column_file_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_combined(dir.path());
    let table = TrigTable::full();
    for (name, column) in table.columns() {
        write_coe(&dir.path().join(format!("{name}.coe")), &to_single_coe(column, name))
            .expect("write column");
    }
    fs::write(dir.path().join("cot.coe"), [0xfe, 0xff, b'\n']).expect("write cot");

    let report = run(dir.path());
    let failed = failures(&report);
    assert_eq!(failed.len(), 1, "{failed:#?}");
    assert!(failed[0].contains("cot.coe is not a valid COE document"));
}
