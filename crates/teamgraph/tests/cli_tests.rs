//! Integration tests for the teamgraph CLI.

use rstest::{fixture, rstest};
use tempfile::TempDir;

mod common;
use common::{run_teamgraph_in_dir, run_teamgraph_with_log, sample_records, to_lines, write_roster};

/// A temporary directory holding `roster.jsonl` and a config file that
/// names it, with `A` as the default player.
#[fixture]
fn roster_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    write_roster(temp.path(), &to_lines(&sample_records()));
    std::fs::write(
        temp.path().join("teamgraph.yaml"),
        "roster: roster.jsonl\ndefault-player: A\n",
    )
    .expect("write config");
    temp
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[rstest]
fn path_uses_default_player(roster_dir: TempDir) {
    let output = run_teamgraph_in_dir(roster_dir.path(), &["--json", "path", "D"]);
    let json = stdout_json(&output);

    assert_eq!(json["path"], serde_json::json!(["A", "C", "D"]));
    assert_eq!(json["length"], 2);
    assert_eq!(json["found"], true);
}

#[rstest]
fn path_text_output(roster_dir: TempDir) {
    let output = run_teamgraph_in_dir(roster_dir.path(), &["path", "A", "--from", "D"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Path found (2 hops)"));
    assert!(stdout.contains("D  Delta"));
    assert!(stdout.contains("A  Alpha #23"));
}

#[rstest]
fn between_off_shortest_path_reports_no_path(roster_dir: TempDir) {
    let output = run_teamgraph_in_dir(roster_dir.path(), &["--json", "between", "D", "B"]);
    let json = stdout_json(&output);

    assert_eq!(json["found"], false);
    assert_eq!(json["via"], "B");
    assert_eq!(json["path"], serde_json::json!([]));

    let output = run_teamgraph_in_dir(roster_dir.path(), &["between", "D", "B"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "No shortest path from A to D through B");
}

#[rstest]
fn unknown_player_fails(roster_dir: TempDir) {
    let output = run_teamgraph_in_dir(roster_dir.path(), &["path", "ZZZ"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Player not found: ZZZ"));
}

#[rstest]
fn number_lists_matching_players(roster_dir: TempDir) {
    let output = run_teamgraph_in_dir(roster_dir.path(), &["--json", "number", "23"]);
    let json = stdout_json(&output);

    let found: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(found, ["A", "C"]);
}

#[rstest]
fn connected_and_stats(roster_dir: TempDir) {
    let connected = stdout_json(&run_teamgraph_in_dir(
        roster_dir.path(),
        &["--json", "connected"],
    ));
    assert_eq!(connected["fully_connected"], true);
    assert_eq!(connected["components"], 1);

    let stats = stdout_json(&run_teamgraph_in_dir(roster_dir.path(), &["--json", "stats"]));
    assert_eq!(stats["players"], 4);
    assert_eq!(stats["edges"], 4);
    assert_eq!(stats["groups"], 2);
    assert_eq!(stats["skipped_lines"], 0);
}

/// Sample roster plus one unparsable line and one row without a team.
fn roster_with_bad_entries(dir: &std::path::Path) {
    let mut lines = to_lines(&sample_records());
    lines.push("{broken".to_string());
    lines.push(r#"{"player_id":"E","year":2001}"#.to_string());
    write_roster(dir, &lines);
}

#[test]
fn stats_count_skipped_lines_and_records() {
    let temp = TempDir::new().unwrap();
    roster_with_bad_entries(temp.path());

    let stats = stdout_json(&run_teamgraph_in_dir(
        temp.path(),
        &["--json", "-r", "roster.jsonl", "stats"],
    ));
    assert_eq!(stats["players"], 4);
    assert_eq!(stats["skipped_lines"], 1);
    assert_eq!(stats["skipped_records"], 1);
}

#[test]
fn skipped_rows_are_logged_at_warn() {
    let temp = TempDir::new().unwrap();
    roster_with_bad_entries(temp.path());
    let args = ["-r", "roster.jsonl", "stats"];

    let output = run_teamgraph_with_log(temp.path(), &args, "teamgraph=warn");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skipping malformed roster record"), "{stderr}");
    assert!(stderr.contains("Skipped roster line"), "{stderr}");
    assert!(!stderr.contains("Built roster index"), "{stderr}");

    let output = run_teamgraph_with_log(temp.path(), &args, "teamgraph=info");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Built roster index"), "{stderr}");
}

#[rstest]
fn export_writes_nodes_and_edges(roster_dir: TempDir) {
    let output = run_teamgraph_in_dir(roster_dir.path(), &["export", "-o", "graph.jsonl"]);
    assert!(output.status.success());

    let content = std::fs::read_to_string(roster_dir.path().join("graph.jsonl")).unwrap();
    let kinds: Vec<String> = content
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["kind"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(kinds.iter().filter(|k| *k == "node").count(), 4);
    assert_eq!(kinds.iter().filter(|k| *k == "edge").count(), 4);
}

#[test]
fn missing_roster_is_reported() {
    let temp = TempDir::new().unwrap();
    let output = run_teamgraph_in_dir(temp.path(), &["stats"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no roster file given"));
}

#[test]
fn roster_flag_without_config() {
    let temp = TempDir::new().unwrap();
    write_roster(temp.path(), &to_lines(&sample_records()));

    let output = run_teamgraph_in_dir(
        temp.path(),
        &["--json", "-r", "roster.jsonl", "teammates", "C"],
    );
    let json = stdout_json(&output);
    assert_eq!(json.as_array().unwrap().len(), 3);
}
