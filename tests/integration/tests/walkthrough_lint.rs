//! End-to-end tests for the walklint binary.
//!
//! Each fixture directory mirrors a walkthrough repository: one
//! subdirectory per walkthrough holding `walkthrough.md` and
//! `walkthrough.json`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn walklint_cmd() -> Command {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Failed to find workspace root");
    let bin_path = workspace_root.join("target/debug/walklint");
    Command::new(bin_path)
}

mod valid_repositories {
    use super::*;

    #[test]
    fn passes_a_complete_walkthrough() {
        walklint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("valid"))
            .assert()
            .success()
            .stdout(predicate::str::contains("0 failed"));
    }

    #[test]
    fn warnings_do_not_fail_by_default() {
        walklint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("sloppy"))
            .assert()
            .success()
            .stderr(predicate::str::contains("WARN Unused attribute annotation"));
    }

    #[test]
    fn json_format_reports_per_file() {
        walklint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("valid"))
            .arg("--format")
            .arg("json")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"success\": true"));
    }
}

mod invalid_repositories {
    use super::*;

    #[test]
    fn model_errors_fail_the_run() {
        walklint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("invalid"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "ERROR No tasks defined at Broken walkthrough",
            ))
            .stderr(predicate::str::contains("ERROR No time defined"));
    }

    #[test]
    fn metadata_schema_violations_fail_the_run() {
        walklint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("invalid"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("displayName"));
    }

    #[test]
    fn pedantic_escalates_warnings() {
        walklint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("sloppy"))
            .arg("--pedantic")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("WARN Unused attribute annotation"));
    }

    #[test]
    fn missing_walkthrough_files_fail_the_run() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("empty-walkthrough")).unwrap();

        walklint_cmd()
            .arg("lint")
            .arg(root.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("walkthrough.md missing"))
            .stderr(predicate::str::contains("walkthrough.json missing"));
    }

    #[test]
    fn missing_directory_is_an_internal_error() {
        walklint_cmd()
            .arg("lint")
            .arg(fixtures_dir().join("does-not-exist"))
            .assert()
            .code(2);
    }
}

mod model_command {
    use super::*;

    #[test]
    fn prints_the_walkthrough_model_as_json() {
        walklint_cmd()
            .arg("model")
            .arg(
                fixtures_dir()
                    .join("valid/getting-started/walkthrough.md"),
            )
            .assert()
            .success()
            .stdout(predicate::str::contains("\"title\": \"Getting started\""))
            .stdout(predicate::str::contains("\"time\": 15"))
            .stdout(predicate::str::contains("\"serviceName\": \"console\""));
    }

    #[test]
    fn empty_document_is_an_internal_error() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("empty.md");
        std::fs::write(&path, "").unwrap();

        walklint_cmd().arg("model").arg(&path).assert().code(2);
    }
}
