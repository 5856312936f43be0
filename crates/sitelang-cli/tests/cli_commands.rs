// crates/sitelang-cli/tests/cli_commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: Integration tests driving the sitelang binary.
// Purpose: Ensure offline commands and config validation behave end to end.
// Dependencies: sitelang-cli binary
// ============================================================================
//! ## Overview
//! Runs the `sitelang` binary for `config validate`, `resolve`, and
//! `translate`, checking exit status and output.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn sitelang_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sitelang"))
}

fn run(args: &[&str]) -> Output {
    Command::new(sitelang_bin())
        .args(args)
        .env_remove("SITELANG_CONFIG")
        .output()
        .expect("run sitelang")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Verifies a valid config file passes validation.
#[test]
fn config_validate_accepts_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitelang.toml");
    fs::write(&path, "[locales]\nsupported = [\"en-US\", \"es-MX\"]\n").unwrap();
    let output = run(&["config", "validate", "--config", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Config valid.");
}

/// Verifies invalid configs fail with a message on stderr.
#[test]
fn config_validate_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitelang.toml");
    fs::write(&path, "[routing]\noverride_param = \"\"\n").unwrap();
    let output = run(&["config", "validate", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("routing.override_param must be non-empty"));
}

/// Verifies a broken translation file fails validation.
#[test]
fn config_validate_checks_translation_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("messages.toml"), "[messages.\"Hi\"]\nes-MX = \"Hola\"\n").unwrap();
    let path = dir.path().join("sitelang.toml");
    fs::write(&path, "[translations]\npath = \"messages.toml\"\n").unwrap();
    let output = run(&["config", "validate", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed translation language"));
}

/// Verifies `resolve` prints the negotiation as JSON.
#[test]
fn resolve_prints_json_report() {
    let output = run(&["resolve", "--accept-language", "es-ES,es;q=0.9"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["locale"], "es-MX");
    assert_eq!(value["source"], "header_language");
    assert_eq!(value["ranges"][0]["tag"], "es-ES");
}

/// Verifies `resolve` honors overrides and custom catalogs.
#[test]
fn resolve_uses_config_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitelang.toml");
    fs::write(&path, "[locales]\nsupported = [\"pt-BR\", \"en-US\"]\n").unwrap();
    let output = run(&["resolve", "--config", path.to_str().unwrap(), "--override", "xx"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["locale"], "pt-BR");
    assert_eq!(value["source"], "default");
}

/// Verifies `translate` uses built-in messages and falls back to the source.
#[test]
fn translate_prints_message() {
    let output = run(&["translate", "--locale", "es-MX", "My projects"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Mis proyectos");
    let fallback = run(&["translate", "--locale", "de-DE", "My projects"]);
    assert_eq!(stdout(&fallback).trim(), "My projects");
}

/// Verifies `--version` prints the package version.
#[test]
fn version_flag_prints_version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("sitelang "));
}
