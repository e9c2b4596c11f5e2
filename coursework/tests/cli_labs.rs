//! CLI tests for the coursework binary.
//!
//! Spawns the binary in a temp directory and verifies exit codes and the
//! printed results for each exercise.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use coursework::exit_codes;
use coursework::io::config::{CourseworkConfig, load_config};
use coursework::test_support::config_fixture;

fn coursework(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coursework"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run coursework")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn all_runs_every_exercise_with_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = coursework(temp.path(), &["all"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let out = stdout(&output);
    assert!(out.contains("count=625"));
    assert!(out.contains("digits=555501555555555520 distinct=4"));
    assert!(out.contains("matches=43"));
    assert!(out.contains("flatten: strategy=iterative result=[1, 2, 3, 4, 5, 6]"));
    assert!(out.contains("recurrence: k=7 recursive=(a=729 b=729) iterative=(a=729 b=729)"));
    assert!(out.contains("average: batch=[40] average=25"));
    assert!(out.contains("average: count=4 final=25"));
}

#[test]
fn recurrence_rejects_non_positive_k() {
    let temp = tempfile::tempdir().expect("tempdir");
    for k in ["0", "-1"] {
        let output = coursework(temp.path(), &["recurrence", "--k", k]);
        assert_eq!(output.status.code(), Some(exit_codes::DOMAIN));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("k must be a natural number"), "stderr: {stderr}");
    }
}

#[test]
fn recurrence_single_k_prints_both_strategies() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = coursework(temp.path(), &["recurrence", "--k", "30"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output).trim(),
        "recurrence: k=30 recursive=(a=68630377364883 b=68630377364883) \
         iterative=(a=68630377364883 b=68630377364883)"
    );
}

#[test]
fn flatten_accepts_json_input() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = coursework(temp.path(), &["flatten", "--json", r#"[["a", []], 1, [[true]]]"#]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let out = stdout(&output);
    assert!(out.contains("flatten: strategy=recursive result=[\"a\", 1, true]"));
    assert!(out.contains("flatten: strategy=iterative result=[\"a\", 1, true]"));
}

#[test]
fn flatten_rejects_non_array_input() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = coursework(temp.path(), &["flatten", "--json", "42"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn mask_with_bad_pattern_is_a_domain_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = coursework(temp.path(), &["mask", "--pattern", "12x"]);
    assert_eq!(output.status.code(), Some(exit_codes::DOMAIN));
}

#[test]
fn average_reports_rejected_batch_and_keeps_state() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = coursework(
        temp.path(),
        &["average", "--batch", "10,20,30", "--batch", "-5", "--batch", "40"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let out = stdout(&output);
    assert!(out.contains("average: batch=[-5] rejected=value -5 is below the minimum allowed 0"));
    assert!(out.contains("average: count=4 final=25"));
}

#[test]
fn init_writes_default_config_once() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = coursework(temp.path(), &["init"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let path = temp.path().join("coursework.toml");
    assert_eq!(load_config(&path).expect("load"), CourseworkConfig::default());

    fs::write(&path, "[radix]\nbase = 10\n").expect("edit config");
    let output = coursework(temp.path(), &["init"]);
    assert!(stdout(&output).contains("written=false"));
    assert_eq!(load_config(&path).expect("load").radix.base, 10);
}

#[test]
fn commands_use_config_file_defaults() {
    let mut cfg = CourseworkConfig::default();
    cfg.radix.base = 10;
    cfg.recurrence.max_k = 3;
    let (temp, path) = config_fixture(&cfg).expect("fixture");
    let config = path.to_str().expect("utf8 path");

    let output = coursework(temp.path(), &["radix", "--config", config]);
    assert!(stdout(&output).contains("digits=101485946068968 distinct="));

    let output = coursework(temp.path(), &["recurrence", "--config", config]);
    assert_eq!(stdout(&output).lines().count(), 3);
}

#[test]
fn invalid_config_file_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("coursework.toml"), "[mask]\ndivisor = 0\n").expect("write");
    let output = coursework(temp.path(), &["all"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn oversized_recursion_limit_config_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("coursework.toml"),
        "[recurrence]\nrecursion_limit = 300000\n",
    )
    .expect("write");
    let output = coursework(temp.path(), &["recurrence", "--k", "300000"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("recursion_limit must be between 1 and 10000"), "stderr: {stderr}");
}

#[test]
fn deep_flatten_input_skips_recursive_strategy_by_default() {
    let temp = tempfile::tempdir().expect("tempdir");
    let json = format!("{}1{}", "[".repeat(70), "]".repeat(70));
    let output = Command::new(env!("CARGO_BIN_EXE_coursework"))
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .args(["flatten", "--json", &json])
        .output()
        .expect("run coursework");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let out = stdout(&output);
    assert!(out.contains("depth=69"));
    assert!(out.contains("flatten: strategy=recursive skipped=true recursion_limit=64"));
    assert!(out.contains("flatten: strategy=iterative result=[1]"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input too deep for recursive flatten"), "stderr: {stderr}");
}

#[test]
fn averager_table_without_bounds_accepts_any_value() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("coursework.toml"),
        "[averager]\nbatches = [[-5.0, 250.0]]\n",
    )
    .expect("write");
    let output = coursework(temp.path(), &["average"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("average: count=2 final=122.5"));
}
