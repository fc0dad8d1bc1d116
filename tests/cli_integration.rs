use assert_cmd::Command;
use predicates::prelude::*;

fn diskman() -> Command {
    Command::cargo_bin("diskman").unwrap()
}

#[test]
fn shows_help() {
    diskman()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("largest entries first"));
}

#[test]
fn shows_version() {
    diskman()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    diskman()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn list_subcommand_help() {
    diskman()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted by size"));
}

#[test]
fn browse_subcommand_help() {
    diskman()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interactively"));
}

#[test]
fn generates_completions() {
    diskman()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("diskman"));
}

#[test]
fn missing_config_file_fails() {
    diskman()
        .args(["--config", "/nonexistent/diskman.toml", "size", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
