//! Integration tests for the `mdcanon` command-line interface.
//!
//! Covers standard input, file arguments, `--in-place`, `--width` and
//! `--number-items`.

use std::fs;

use tempfile::tempdir;

mod prelude;
use prelude::*;

fn mdcanon() -> Command {
    Command::cargo_bin("mdcanon").expect("Failed to create cargo command for mdcanon")
}

#[test]
fn test_cli_in_place_requires_file() {
    mdcanon().arg("--in-place").assert().failure();
}

#[test]
fn test_cli_version_flag() {
    mdcanon()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("mdcanon {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_formats_stdin() {
    mdcanon()
        .write_stdin("Title\n-----\n\n*  a_b\n")
        .assert()
        .success()
        .stdout("## Title\n\n- a\\_b\n\n");
}

#[test]
fn test_cli_width_option() {
    mdcanon()
        .args(["--width", "10"])
        .write_stdin("aaaa bbbb cccc\n")
        .assert()
        .success()
        .stdout("aaaa bbbb\ncccc\n\n");
}

#[test]
fn test_cli_number_items_option() {
    mdcanon()
        .arg("--number-items")
        .write_stdin("1. a\n1. b\n")
        .assert()
        .success()
        .stdout("1.  a\n\n2.  b\n\n");
}

#[test]
fn test_cli_process_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file = dir.path().join("sample.md");
    fs::write(&file, "> *quoted*\n").expect("failed to write file");
    mdcanon()
        .arg(&file)
        .assert()
        .success()
        .stdout("> *quoted*\n\n");
}

#[test]
fn test_cli_in_place_rewrites_every_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let first = dir.path().join("one.md");
    let second = dir.path().join("two.md");
    fs::write(&first, "+ x\n").expect("failed to write file");
    fs::write(&second, "Heading\n===\n").expect("failed to write file");
    mdcanon()
        .arg("--in-place")
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(&first).unwrap(), "- x\n\n");
    assert_eq!(fs::read_to_string(&second).unwrap(), "# Heading\n\n");
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = tempdir().expect("failed to create temporary directory");
    mdcanon()
        .arg(dir.path().join("absent.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
