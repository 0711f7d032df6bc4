//! Integration tests for loccount CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_loccount(args: &[&str], dir: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_loccount"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn create_project(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(
        root.join("src/app.js"),
        "/* start\nstill comment\nend */ code();\n\n// note\nrun();\n",
    )
    .unwrap();
    fs::write(root.join("src/note.cpp"), "# pragma once\nint x;\n").unwrap();
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_loccount(&["--help"], temp.path());

    assert!(success);
    assert!(stdout.contains("loccount"));
    assert!(stdout.contains("PATHS"));
}

#[test]
fn test_cli_version() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_loccount(&["--version"], temp.path());

    assert!(success);
    assert!(stdout.contains("loccount"));
}

#[test]
fn test_table_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_loccount(&["src/app.js", "src/note.cpp"], temp.path());

    assert!(success);
    assert!(stdout.contains("Code"));
    assert!(stdout.contains("Comment"));
    assert!(stdout.contains("src/app.js"));
    assert!(stdout.contains("src/note.cpp"));

    let total = stdout
        .lines()
        .find(|l| l.starts_with("Total (2 files)"))
        .expect("missing total row");
    let cells: Vec<&str> = total.split_whitespace().collect();
    // Total, (2, files), code, comment, blank, total
    assert_eq!(&cells[3..], &["4", "3", "1", "8"]);
}

#[test]
fn test_default_path_is_current_directory() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_loccount(&[], temp.path());

    assert!(success);
    assert!(stdout.contains("Total (2 files)"));
}

#[test]
fn test_missing_file_fails() {
    let temp = tempdir().unwrap();

    let (_, stderr, success) = run_loccount(&["missing.js"], temp.path());

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("missing.js"));
}
