//! CLI subprocess integration tests.
//!
//! The menu itself is interactive, so these only cover the non-interactive
//! surface: flag parsing and exit behavior.

use std::process::Command;

fn strato_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_strato"))
}

#[test]
fn version_exits_zero() {
    let out = strato_bin().arg("--version").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("strato"));
}

#[test]
fn help_mentions_journal_flag() {
    let out = strato_bin().arg("--help").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--journal"));
    assert!(stdout.contains("--verbose"));
}

#[test]
fn unknown_flag_fails() {
    let out = strato_bin().arg("--definitely-not-a-flag").output().unwrap();
    assert!(!out.status.success());
}
