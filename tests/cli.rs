//! End-to-end tests for the breaktime binary.
//!
//! Tests cover:
//! 1. load: summary output, skipped-line reporting, missing files
//! 2. Load policies (--all-or-nothing, --strict-endpoints)
//! 3. interactive: piped sessions
//! 4. generate: output that load accepts

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

/// Helper to create a temporary break file.
fn create_break_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Helper to run breaktime and return output.
fn run_breaktime(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_breaktime"))
        .args(args)
        .output()
        .expect("Failed to run breaktime")
}

/// Helper to run breaktime with piped stdin.
fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_breaktime"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run breaktime");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// load
// =============================================================================

#[test]
fn test_load_reports_most_common_break() {
    let file = create_break_file("10:0011:00\n10:3012:00\n10:4511:15\n");
    let output = run_breaktime(&["load", "-i", file.path().to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Most common break time is 10:45 - 11:00 with 3 people on break.\n"
    );
}

#[test]
fn test_load_skips_bad_lines_by_default() {
    let file = create_break_file("10:0011:00\nnot a break\n11:0010:00\n10:3012:00\n");
    let output = run_breaktime(&["load", "-i", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Skipped line 2: Invalid format"), "{}", err);
    assert!(err.contains("Skipped line 3: Invalid ordering"), "{}", err);
    assert!(stdout(&output).contains("10:30 - 11:00 with 2 people"));
}

#[test]
fn test_load_all_or_nothing_fails() {
    let file = create_break_file("10:0011:00\n10:3012:00\n10:45\n");
    let output = run_breaktime(&[
        "--all-or-nothing",
        "load",
        "-i",
        file.path().to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Load aborted at line 3"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_load_blank_line_counts_as_bad_line() {
    let file = create_break_file("10:0011:00\n\n10:3012:00\n");

    let partial = run_breaktime(&["load", "-i", file.path().to_str().unwrap()]);
    assert!(partial.status.success());
    assert!(stderr(&partial).contains("Skipped line 2: Invalid format"));
    // Logged at the default warn level.
    assert!(stderr(&partial).contains("skipping invalid interval"));
    assert!(stdout(&partial).contains("with 2 people"));

    let strict = run_breaktime(&[
        "--all-or-nothing",
        "load",
        "-i",
        file.path().to_str().unwrap(),
    ]);
    assert!(!strict.status.success());
    assert!(stderr(&strict).contains("Load aborted at line 2"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("breaks.txt");
    let output = run_breaktime(&["load", "-i", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("File not found"));
}

#[test]
fn test_strict_endpoints_rejects_zero_length() {
    let file = create_break_file("10:0010:00\n10:0010:30\n");

    let relaxed = run_breaktime(&["load", "-i", file.path().to_str().unwrap()]);
    assert!(stdout(&relaxed).contains("with 2 people"));

    let strict = run_breaktime(&[
        "--strict-endpoints",
        "load",
        "-i",
        file.path().to_str().unwrap(),
    ]);
    assert!(stderr(&strict).contains("Skipped line 1"));
    assert!(stdout(&strict).contains("10:00 - 10:30 with 1 people"));
}

#[test]
fn test_load_custom_time_format() {
    let file = create_break_file("11:00AM12:30PM\n12:00PM01:00PM\n");
    let output = run_breaktime(&[
        "--time-format",
        "%I:%M%p",
        "load",
        "-i",
        file.path().to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Most common break time is 12:00PM - 12:30PM with 2 people on break.\n"
    );
}

#[test]
fn test_invalid_time_format_is_rejected() {
    let file = create_break_file("10:0011:00\n");
    let output = run_breaktime(&[
        "--time-format",
        "%Y",
        "load",
        "-i",
        file.path().to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid configuration"));
}

#[test]
fn test_load_from_stdin_with_stats() {
    let output = run_with_stdin(&["load", "-i", "-", "--stats"], "08:0009:00\n08:3009:30\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("08:30 - 09:00 with 2 people"));
    assert!(stderr(&output).contains("Load stats: 2 lines (2 accepted"));
}

// =============================================================================
// interactive
// =============================================================================

#[test]
fn test_interactive_session() {
    let output = run_with_stdin(&["interactive"], "10:0011:00\n10:00\n10:3012:00\nexit\n");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("10:00 - 11:00 with 1 people"));
    assert!(out.contains("Could not add '10:00'"));
    assert!(out.contains("10:30 - 11:00 with 2 people"));
}

#[test]
fn test_load_then_interactive() {
    let file = create_break_file("10:0011:00\n");
    let output = run_with_stdin(
        &["load", "-i", file.path().to_str().unwrap(), "--interactive"],
        "10:3011:30\nquit\n",
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("10:00 - 11:00 with 1 people"));
    assert!(out.contains("10:30 - 11:00 with 2 people"));
}

// =============================================================================
// generate
// =============================================================================

#[test]
fn test_generate_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("breaks.txt");
    let path_str = path.to_str().unwrap();

    let gen = run_breaktime(&["generate", "-o", path_str, "-n", "1K", "--mode", "lunch"]);
    assert!(gen.status.success(), "stderr: {}", stderr(&gen));

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1_000);

    let load = run_breaktime(&["--all-or-nothing", "load", "-i", path_str]);
    assert!(load.status.success(), "stderr: {}", stderr(&load));
    assert!(stdout(&load).starts_with("Most common break time is"));
}

#[test]
fn test_generate_refuses_overwrite() {
    let file = create_break_file("10:0011:00\n");
    let path = file.path().to_str().unwrap();

    let output = run_breaktime(&["generate", "-o", path, "-n", "10"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));

    let output = run_breaktime(&["generate", "-o", path, "-n", "10", "--force"]);
    assert!(output.status.success());
}

#[test]
fn test_generate_is_deterministic() {
    let first = run_breaktime(&["generate", "-n", "50", "--seed", "7"]);
    let second = run_breaktime(&["generate", "-n", "50", "--seed", "7"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_generate_day_window() {
    let output = run_breaktime(&[
        "generate",
        "-n",
        "40",
        "--day-start",
        "09:05",
        "--day-end",
        "10:00",
        "--max-len",
        "15",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    for line in stdout(&output).lines() {
        let (start, end) = line.split_at(5);
        assert!(start >= "09:05" && end <= "10:00", "{}", line);
    }

    let bad = run_breaktime(&["generate", "-n", "5", "--day-start", "9h"]);
    assert!(!bad.status.success());
    assert!(stderr(&bad).contains("expected HH:MM"));

    let bad = run_breaktime(&["generate", "-n", "5", "--day-end", "24:00"]);
    assert!(!bad.status.success());
}
