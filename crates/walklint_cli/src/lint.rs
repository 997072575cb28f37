//! Directory linting.
//!
//! A walkthrough repository is a directory with one subdirectory per
//! walkthrough. Each subdirectory must carry a `walkthrough.md` document
//! and a `walkthrough.json` metadata file. Documents are checked against
//! the walkthrough model, metadata files against the embedded schema.

use std::fs;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;
use walklint_core::{CheckOptions, Message};

use crate::metadata;

const DOCUMENT_FILE: &str = "walkthrough.md";
const METADATA_FILE: &str = "walkthrough.json";

/// Outcome of checking a single file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub success: bool,
    pub messages: Vec<Message>,
}

/// Lints every walkthrough under `directory`. Returns `true` when at
/// least one file failed.
pub fn run(directory: &Path, pedantic: bool, format: &str) -> Result<bool> {
    if !directory.is_dir() {
        return Err(miette::miette!(
            "Not a directory: {}",
            directory.display()
        ));
    }

    let mut reports = verify_structure(directory).into_diagnostic()?;

    let (documents, metadata_files) = discover_files(directory);
    debug!(
        "found {} documents and {} metadata files",
        documents.len(),
        metadata_files.len()
    );

    let options = CheckOptions {
        pedantic_warnings: pedantic,
    };

    reports.extend(
        documents
            .par_iter()
            .map(|path| check_document(path, &options))
            .collect::<Vec<_>>(),
    );
    reports.extend(
        metadata_files
            .par_iter()
            .map(|path| check_metadata(path))
            .collect::<Vec<_>>(),
    );

    output_reports(&reports, format)?;

    Ok(reports.iter().any(|r| !r.success))
}

/// Every immediate subdirectory must contain both walkthrough files.
/// Plain files at the top level are ignored.
fn verify_structure(directory: &Path) -> std::io::Result<Vec<FileReport>> {
    let mut reports = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let subdir = entry.path();
        let mut messages = Vec::new();
        for required in [DOCUMENT_FILE, METADATA_FILE] {
            if !subdir.join(required).is_file() {
                messages.push(Message::error(
                    format!("{required} missing"),
                    subdir.display().to_string(),
                ));
            }
        }

        if !messages.is_empty() {
            reports.push(FileReport {
                path: subdir,
                success: false,
                messages,
            });
        }
    }

    Ok(reports)
}

fn discover_files(directory: &Path) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut documents = Vec::new();
    let mut metadata_files = Vec::new();

    for entry in WalkDir::new(directory) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        match entry.path().extension().and_then(|ext| ext.to_str()) {
            Some("md") => documents.push(entry.into_path()),
            Some("json") => metadata_files.push(entry.into_path()),
            _ => {}
        }
    }

    (documents, metadata_files)
}

fn check_document(path: &Path, options: &CheckOptions) -> FileReport {
    debug!("processing {}", path.display());

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => return read_failure(path, e),
    };

    match walklint_core::check(&source, options) {
        Ok(report) => FileReport {
            path: path.to_path_buf(),
            success: report.success,
            messages: report.messages,
        },
        Err(e) => FileReport {
            path: path.to_path_buf(),
            success: false,
            messages: vec![Message::error(
                e.to_string(),
                path.display().to_string(),
            )],
        },
    }
}

fn check_metadata(path: &Path) -> FileReport {
    debug!("processing {}", path.display());

    let messages = match fs::read_to_string(path) {
        Ok(content) => metadata::validate_str(&content)
            .err()
            .map(|text| Message::error(text, path.display().to_string()))
            .into_iter()
            .collect::<Vec<_>>(),
        Err(e) => return read_failure(path, e),
    };

    FileReport {
        path: path.to_path_buf(),
        success: messages.is_empty(),
        messages,
    }
}

fn read_failure(path: &Path, e: std::io::Error) -> FileReport {
    FileReport {
        path: path.to_path_buf(),
        success: false,
        messages: vec![Message::error(
            format!("Failed to read file: {e}"),
            path.display().to_string(),
        )],
    }
}

fn output_reports(reports: &[FileReport], format: &str) -> Result<()> {
    let failed = reports.iter().filter(|r| !r.success).count();

    match format {
        "json" => {
            println!(
                "{}",
                serde_json::to_string_pretty(reports).into_diagnostic()?
            );
        }
        _ => {
            // Text format
            for report in reports {
                if report.messages.is_empty() {
                    continue;
                }

                eprintln!("\n{}:", report.path.display());
                for message in &report.messages {
                    eprintln!("  {message}");
                }
            }

            println!();
            println!("Checked {} files, {} failed", reports.len(), failed);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn verify_structure_flags_missing_files() {
        let root = tempfile::tempdir().unwrap();
        let complete = root.path().join("intro");
        fs::create_dir(&complete).unwrap();
        fs::write(complete.join(DOCUMENT_FILE), "# Intro\n").unwrap();
        fs::write(complete.join(METADATA_FILE), "{}").unwrap();

        let partial = root.path().join("broken");
        fs::create_dir(&partial).unwrap();
        fs::write(partial.join(DOCUMENT_FILE), "# Broken\n").unwrap();

        let reports = verify_structure(root.path()).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].path, partial);
        assert_eq!(reports[0].messages.len(), 1);
        assert_eq!(reports[0].messages[0].text, "walkthrough.json missing");
    }

    #[test]
    fn verify_structure_ignores_top_level_files() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("README.md"), "readme").unwrap();

        let reports = verify_structure(root.path()).unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn discover_files_partitions_by_extension() {
        let root = tempfile::tempdir().unwrap();
        let subdir = root.path().join("intro");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join(DOCUMENT_FILE), "# Intro\n").unwrap();
        fs::write(subdir.join(METADATA_FILE), "{}").unwrap();
        fs::write(subdir.join("notes.txt"), "ignored").unwrap();

        let (documents, metadata_files) = discover_files(root.path());
        assert_eq!(documents.len(), 1);
        assert_eq!(metadata_files.len(), 1);
    }
}
