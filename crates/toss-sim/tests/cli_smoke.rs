use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn toss_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_toss-sim"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run toss-sim")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8")
}

fn seeded_series(dir: &Path) -> String {
    let config = dir.join("run.yaml");
    fs::write(
        &config,
        "seed: 2024\ncoin:\n  sides: [heads, tails]\n  probabilities: [0.5, 0.5]\ntimes: 5\n",
    )
    .unwrap();
    let out = dir.join("run");
    let output = toss_sim(&[
        "toss",
        "--config",
        config.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("total tosses: 5"));
    assert!(out.join("config.yaml").exists());
    let chart = fs::read_to_string(out.join("frequencies_0.csv")).unwrap();
    assert_eq!(chart.lines().count(), 7);
    out.join("series_0.json").to_string_lossy().into_owned()
}

#[test]
fn toss_is_reproducible_with_a_seed() {
    let dir = tempfile::tempdir().unwrap();
    let first = fs::read(seeded_series(dir.path())).unwrap();
    let again = tempfile::tempdir().unwrap();
    let second = fs::read(seeded_series(again.path())).unwrap();
    assert_eq!(first, second);

    let value: Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(value["total"], 5);
    let heads = value["heads_count"].as_u64().unwrap();
    let tails = value["tails_count"].as_u64().unwrap();
    assert_eq!(heads + tails, 5);
}

#[test]
fn batches_write_one_series_each() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("batches.yaml");
    fs::write(&config, "seed: 9\ntimes: 4\nbatches: 3\n").unwrap();
    let out = dir.path().join("out");
    let output = toss_sim(&[
        "toss",
        "--config",
        config.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");
    for batch in 0..3 {
        assert!(out.join(format!("series_{batch}.json")).exists());
    }
    assert_eq!(stdout(&output).matches("total tosses: 4").count(), 3);
}

#[test]
fn non_positive_times_fail() {
    let output = toss_sim(&["toss", "--times", "-4"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid-count"), "{stderr}");
}

#[test]
fn derived_series_commands_chain() {
    let dir = tempfile::tempdir().unwrap();
    let series = seeded_series(dir.path());

    let extended = dir.path().join("extended.json");
    let output = toss_sim(&[
        "extend",
        "--in",
        &series,
        "--times",
        "3",
        "--seed",
        "1",
        "--out",
        extended.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("total tosses: 8"));

    let replaced = dir.path().join("replaced.json");
    let output = toss_sim(&[
        "replace",
        "--in",
        extended.to_str().unwrap(),
        "--index",
        "8",
        "--value",
        "tails",
        "--out",
        replaced.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");

    let output = toss_sim(&["element", "--in", replaced.to_str().unwrap(), "--index", "8"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output).trim(), "tails");

    let output = toss_sim(&["replace", "--in", &series, "--index", "10", "--value", "torch"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("index-out-of-bounds"));
}

#[test]
fn summary_and_frequencies_render() {
    let dir = tempfile::tempdir().unwrap();
    let series = seeded_series(dir.path());

    let output = toss_sim(&["summary", "--in", &series, "--json"]);
    assert!(output.status.success(), "{output:?}");
    let summary: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["total"], 5);
    let proportions = summary["proportions"].as_array().unwrap();
    let sum: f64 = proportions.iter().map(|p| p.as_f64().unwrap()).sum();
    assert!((sum - 1.0).abs() < 1e-12);

    let output = toss_sim(&["summary", "--in", &series]);
    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "summary \"toss\"");
    assert_eq!(lines[2], "side    count    prop");
    assert!(lines[3].starts_with("heads "));
    assert!(lines[4].starts_with("tails "));
    assert_eq!(lines[5], "total       5  1.0000");

    let output = toss_sim(&["frequencies", "--in", &series, "--side", "tails"]);
    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    let rows: Vec<&str> = text.lines().skip(2).collect();
    assert_eq!(rows.len(), 5);
    assert!(rows[0].starts_with("1,"));

    let output = toss_sim(&["frequencies", "--in", &series, "--side", "edge"]);
    assert!(!output.status.success());
}

#[test]
fn binary_coercion_prints_sides_in_first_seen_order() {
    let output = toss_sim(&["binary", "--bits", "0,1,1,0,1"]);
    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    assert!(text.contains("coin: \"0\", \"1\""));
    assert!(text.contains("total tosses: 5"));

    let output = toss_sim(&["binary", "--bits", "1,1,1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid-sides"));
}
