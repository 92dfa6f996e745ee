//! Focused CLI argument parsing tests.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_command_succeeds() {
    Command::cargo_bin("brewbook")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brewbook"));
}

#[test]
fn version_flag_shows_version() {
    Command::cargo_bin("brewbook")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brewbook"));
}

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("brewbook")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("closures"));
}

#[test]
fn no_command_shows_help() {
    Command::cargo_bin("brewbook")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("brewbook")
        .unwrap()
        .arg("brew")
        .assert()
        .failure();
}

#[test]
fn run_rejects_unknown_format() {
    Command::cargo_bin("brewbook")
        .unwrap()
        .args(["run", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn run_help_shows_options() {
    Command::cargo_bin("brewbook")
        .unwrap()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--corrected"))
        .stdout(predicate::str::contains("--values"));
}

#[test]
fn list_shows_both_lessons() {
    Command::cargo_bin("brewbook")
        .unwrap()
        .args(["--no-color", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("functions"))
        .stdout(predicate::str::contains("objects"));
}
