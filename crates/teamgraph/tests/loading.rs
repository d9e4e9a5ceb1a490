//! Integration tests for loading roster files.

use teamgraph::{load_roster, LoadWarning, MalformedReason, MalformedRecord};
use tempfile::TempDir;

mod common;
use common::{ids, sample_records, to_lines, write_roster};

#[tokio::test]
async fn loads_sample_roster() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(dir.path(), &to_lines(&sample_records()));

    let loaded = load_roster(&path).await.unwrap();

    assert!(loaded.warnings.is_empty());
    assert_eq!(loaded.graph.node_count(), 4);
    assert_eq!(loaded.graph.edge_count(), 4);
    assert_eq!(loaded.stats, loaded.graph.stats());
    assert_eq!(loaded.graph.players_with_number(23), ids(&["A", "C"]));
}

#[tokio::test]
async fn bad_lines_and_incomplete_rows_become_warnings() {
    let dir = TempDir::new().unwrap();
    let mut lines = to_lines(&sample_records());
    lines.insert(2, "{broken".to_string());
    lines.push(r#"{"player_id":"E","year":2001}"#.to_string());
    lines.push(String::new());
    let path = write_roster(dir.path(), &lines);

    let loaded = load_roster(&path).await.unwrap();

    assert_eq!(loaded.graph.node_count(), 4);
    assert_eq!(loaded.stats.players, 4);
    assert_eq!(loaded.stats.edges, 4);
    assert_eq!(loaded.stats.skipped_records, 1);
    assert_eq!(loaded.warnings.len(), 2);
    assert!(matches!(
        &loaded.warnings[0],
        LoadWarning::Line(w) if w.line_number() == 3
    ));
    assert_eq!(
        loaded.warnings[1],
        LoadWarning::Record(MalformedRecord {
            position: 5,
            reason: MalformedReason::MissingTeam,
        })
    );
}

#[tokio::test]
async fn source_table_columns_are_understood() {
    let dir = TempDir::new().unwrap();
    let lines = vec![
        r#"{"ID":"jordami01","Player":"Michael Jordan","Tm":"CHI","Year":"1996","No.":23}"#
            .to_string(),
        r#"{"ID":"pippesc01","Player":"Scottie Pippen","Tm":"CHI","Year":1996,"No.":"33"}"#
            .to_string(),
    ];
    let path = write_roster(dir.path(), &lines);

    let loaded = load_roster(&path).await.unwrap();

    assert!(loaded.warnings.is_empty());
    assert_eq!(loaded.graph.edge_count(), 1);
    assert_eq!(loaded.graph.players_with_number(33), ids(&["pippesc01"]));
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(load_roster(&dir.path().join("nope.jsonl")).await.is_err());
}
