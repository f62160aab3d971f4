//! End-to-end tests of the `switch-string` and `dispatch-bench` binaries.

use std::process::{Command, Output};

fn switch_string(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_switch-string"))
        .args(args)
        .output()
        .expect("failed to spawn switch-string")
}

fn report_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("utf-8 stdout")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_four_line_report() {
    let output = switch_string(&["2"]);
    assert!(output.status.success());

    let lines = report_lines(&output);
    assert_eq!(lines.len(), 4, "{:?}", lines);
    assert_eq!(lines[0], "round: 2");

    for (line, label) in lines[1..].iter().zip(["switch-string", "switch-hash", "if-else"]) {
        let value = line
            .strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(": "))
            .unwrap_or_else(|| panic!("unexpected line {:?}", line));
        value.parse::<u64>().expect("elapsed millis");
    }
}

#[test]
fn zero_rounds() {
    let output = switch_string(&["0"]);
    assert!(output.status.success());
    let lines = report_lines(&output);
    assert_eq!(lines[0], "round: 0");
    for line in &lines[1..] {
        let (_, value) = line.split_once(": ").expect("name: value");
        assert_eq!(value.parse::<u64>().expect("elapsed millis"), 0, "{:?}", line);
    }
}

#[test]
fn negative_rounds_print_report() {
    let output = switch_string(&["-5"]);
    assert!(output.status.success());
    assert_eq!(
        report_lines(&output),
        ["round: -5", "switch-string: 0", "switch-hash: 0", "if-else: 0"]
    );
}

#[test]
fn missing_round_is_fatal() {
    let output = switch_string(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing round count"));
}

#[test]
fn non_numeric_round_is_fatal() {
    for bad in ["abc", "1e3", "--5", "2147483648"] {
        let output = switch_string(&[bad]);
        assert!(!output.status.success(), "{:?}", bad);
        assert!(output.stdout.is_empty(), "{:?}", bad);
    }
}

#[test]
fn dispatch_bench_lists_algorithms() {
    let output = Command::new(env!("CARGO_BIN_EXE_dispatch-bench"))
        .arg("--list")
        .output()
        .expect("failed to spawn dispatch-bench");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("string_dispatch"));
}

#[test]
fn dispatch_bench_rejects_unknown_algorithm() {
    let output = Command::new(env!("CARGO_BIN_EXE_dispatch-bench"))
        .arg("no_such_algorithm")
        .output()
        .expect("failed to spawn dispatch-bench");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn dispatch_bench_small_run() {
    let output = Command::new(env!("CARGO_BIN_EXE_dispatch-bench"))
        .args(["--sizes", "16", "--runs", "3", "--warmup", "1", "--seed", "1"])
        .output()
        .expect("failed to spawn dispatch-bench");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["switch-string", "switch-hash", "if-else"] {
        assert!(stdout.contains(name), "{} missing from output", name);
    }
}
