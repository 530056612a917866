// Binary-level tests: run the built `locus` executable and inspect stdout.
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

const LABELS: [&str; 5] = [
    "__dirname",
    "__filename",
    "Process ID",
    "Platform",
    "Custom global variable",
];

/// Isolated invocation: empty HOME, no inherited locus/log env
fn cmd(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_locus"));
    cmd.env("HOME", home)
        .env_remove("LOCUS_FORMAT")
        .env_remove("LOCUS_LOG_FORMAT")
        .env_remove("LOCUS_LOG_FILTER")
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

/// Run and return (child pid, output)
fn run(args: &[&str]) -> (u32, Output) {
    let home = TempDir::new().expect("tempdir");
    let child = cmd(home.path()).args(args).spawn().expect("spawn locus");
    let pid = child.id();
    let output = child.wait_with_output().expect("wait locus");
    assert!(
        output.status.success(),
        "locus failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    (pid, output)
}

fn stdout_lines(output: &Output) -> Vec<(String, String)> {
    String::from_utf8(output.stdout.clone())
        .expect("utf8 stdout")
        .lines()
        .map(|line| {
            let (label, value) = line.split_once(": ").expect("<Label>: <value>");
            (label.to_string(), value.to_string())
        })
        .collect()
}

#[test]
fn prints_five_labelled_lines_in_order() {
    let (_, output) = run(&[]);
    let lines = stdout_lines(&output);

    let labels: Vec<&str> = lines.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, LABELS);
}

#[test]
fn directory_is_parent_of_file() {
    let (_, output) = run(&[]);
    let lines = stdout_lines(&output);

    let directory = PathBuf::from(&lines[0].1);
    let file = PathBuf::from(&lines[1].1);
    assert!(directory.is_dir());
    assert_eq!(file.parent(), Some(directory.as_path()));

    let expected = std::fs::canonicalize(env!("CARGO_BIN_EXE_locus")).unwrap();
    assert_eq!(file, expected);
}

#[test]
fn process_id_is_the_child_pid() {
    let (pid, output) = run(&[]);
    let lines = stdout_lines(&output);

    let printed: u32 = lines[2].1.parse().expect("numeric pid");
    assert!(printed > 0);
    assert_eq!(printed, pid);
}

#[test]
fn platform_is_build_target_os() {
    let (_, output) = run(&[]);
    let lines = stdout_lines(&output);

    assert!(!lines[3].1.is_empty());
    assert_eq!(lines[3].1, std::env::consts::OS);
}

#[test]
fn custom_line_is_stable_across_runs() {
    let (_, first) = run(&[]);
    let (_, second) = run(&[]);

    let first_lines = stdout_lines(&first);
    let second_lines = stdout_lines(&second);

    assert_eq!(first_lines[4].1, "Hello, global!");
    assert_eq!(first_lines[4], second_lines[4]);
}

#[test]
fn logs_stay_off_stdout() {
    let home = TempDir::new().unwrap();
    let output = cmd(home.path())
        .env("RUST_LOG", "locus=debug")
        .output()
        .expect("run locus");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 5);
    assert!(!output.stderr.is_empty());
}

#[test]
fn json_format() {
    let (pid, output) = run(&["--format", "json"]);
    let value: Value = serde_json::from_slice(&output.stdout).expect("json stdout");

    assert_eq!(value["pid"].as_u64(), Some(u64::from(pid)));
    assert_eq!(value["platform"], std::env::consts::OS);
    assert_eq!(value["custom_var"], "Hello, global!");

    let file = PathBuf::from(value["file"].as_str().unwrap());
    let directory = PathBuf::from(value["directory"].as_str().unwrap());
    assert_eq!(file.parent(), Some(directory.as_path()));
}

#[test]
fn table_format() {
    let (_, output) = run(&["--format", "table", "--color", "never"]);
    let text = String::from_utf8(output.stdout).unwrap();

    for label in LABELS {
        assert!(text.contains(label), "missing {label} in:\n{text}");
    }
    assert!(text.contains("Hello, global!"));
}

#[test]
fn config_file_selects_json_logs() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("locus.toml");
    std::fs::write(&config, "log_format = \"json\"\nlog_filter = \"locus=debug\"\n").unwrap();

    let output = cmd(home.path())
        .args(["--config", config.to_str().unwrap()])
        .output()
        .expect("run locus");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 5);

    let stderr = String::from_utf8(output.stderr).unwrap();
    let first = stderr.lines().next().expect("log line");
    let _: Value = serde_json::from_str(first).expect("json log line");
}

#[test]
fn missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    let output = cmd(home.path())
        .args(["--config", "/nonexistent/locus.toml"])
        .output()
        .expect("run locus");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
