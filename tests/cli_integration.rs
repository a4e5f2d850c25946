use std::process::{Command, Output, Stdio};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mathbridge"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run mathbridge")
}

fn run_with_log(args: &[&str], rust_log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mathbridge"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()
        .expect("failed to run mathbridge")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_sum_and_difference_of_five_and_four() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "5 + 4 = 9\n5 - 4 = 1\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn honours_custom_operands() {
    let output = run(&["10", "-3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10 + -3 = 7\n10 - -3 = 13\n");
}

#[test]
fn rust_backend_prints_the_same_lines() {
    let output = run(&["--backend", "rust"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5 + 4 = 9\n5 - 4 = 1\n");
}

#[test]
fn json_emits_one_object_per_line() {
    let output = run(&["--json"]);
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], serde_json::json!({"lhs": 5, "op": "+", "rhs": 4, "result": 9}));
    assert_eq!(lines[1], serde_json::json!({"lhs": 5, "op": "-", "rhs": 4, "result": 1}));
}

#[test]
fn single_operand_is_a_usage_error() {
    let output = run(&["7"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let output = run(&["--verbose"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5 + 4 = 9\n5 - 4 = 1\n");

    let log = stderr(&output);
    assert!(log.contains("calling native add"), "stderr: {log}");
    assert!(log.contains("calling native sub"), "stderr: {log}");
    assert!(!log.contains('\x1b'), "escape codes in piped stderr: {log:?}");
}

#[test]
fn rust_log_overrides_verbose_switch() {
    let output = run_with_log(&[], "mathbridge=debug");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5 + 4 = 9\n5 - 4 = 1\n");
    assert!(stderr(&output).contains("calling native add"));

    let output = run_with_log(&["--verbose"], "mathbridge=warn");
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "stderr: {}", stderr(&output));
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_exits_with_error_instead_of_panicking() {
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("failed to open /dev/full");

    let output = Command::new(env!("CARGO_BIN_EXE_mathbridge"))
        .env_remove("RUST_LOG")
        .env_remove("RUST_BACKTRACE")
        .stdout(full)
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run mathbridge");

    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).contains("panicked"), "stderr: {}", stderr(&output));
}
