//! End-to-end tests that run the `shoal` binary.

use crate::common::{CHAIN, Fixture, stdout_lines};

#[test]
fn test_run_narrates_chain() {
    let fx = Fixture::new();
    let path = fx.file("chain.txt", CHAIN);
    let path_str = path.to_str().unwrap();

    let output = fx.shoal(&["run", path_str]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "********************************");
    assert_eq!(lines[1], format!("Processing instance file {path_str}."));
    assert_eq!(lines[2], "Instance name is Chain.");
    assert!(lines.contains(&"Added friendship between a and b.".to_string()));
    assert!(lines.contains(&"Distance between a and c: 2.".to_string()));
    assert!(lines.contains(&"Distance between a and a: 0.".to_string()));
    assert_eq!(lines.last().unwrap(), "No path between a and d.");
}

#[test]
fn test_run_json_output() {
    let fx = Fixture::new();
    let a = fx.file("a.txt", "u a\n");
    let b = fx.file("b.txt", "u b\ndq b b\n");

    let output = fx.shoal(&[
        "run",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let reports: Vec<serde_json::Value> = stdout_lines(&output)
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1]["events"][1]["outcome"]["distance"]["hops"], 0);
}

#[test]
fn test_run_fail_fast_exits_nonzero() {
    let fx = Fixture::new();
    let bad = fx.file("bad.txt", "u a\nu a\nu b\n");
    let never = fx.file("never.txt", "u z\n");

    let output = fx.shoal(&["run", bad.to_str().unwrap(), never.to_str().unwrap()]);
    assert!(!output.status.success());

    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|l| l.contains("Username already taken: a")));
    assert!(!lines.contains(&"Added user b.".to_string()));
    assert!(!lines.contains(&"Added user z.".to_string()));
}

#[test]
fn test_run_missing_file_fails() {
    let fx = Fixture::new();
    let missing = fx.dir.path().join("missing.txt");
    let output = fx.shoal(&["run", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_check_reports_unrecognised_lines() {
    let fx = Fixture::new();
    let path = fx.file("check.txt", "u a\nU b\n");

    let output = fx.shoal(&["check", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(":2: not a command: \"U b\""));
}

#[test]
fn test_config_show_prints_defaults() {
    let fx = Fixture::new();
    let output = fx.shoal(&["config", "show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[driver]"));
    assert!(stdout.contains("[output]"));
}
