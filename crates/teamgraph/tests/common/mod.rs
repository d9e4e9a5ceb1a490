//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use teamgraph::{PlayerId, RosterRecord};

/// The example roster used throughout:
/// A, B, C on TeamX 2000; C, D on TeamY 2001.
pub fn sample_records() -> Vec<RosterRecord> {
    vec![
        RosterRecord::new("A", "TeamX", 2000).with_name("Alpha").with_number(23),
        RosterRecord::new("B", "TeamX", 2000).with_name("Bravo").with_number(33),
        RosterRecord::new("C", "TeamX", 2000).with_name("Charlie").with_number(23),
        RosterRecord::new("C", "TeamY", 2001),
        RosterRecord::new("D", "TeamY", 2001).with_name("Delta"),
    ]
}

/// Build a vector of IDs from string slices.
pub fn ids(list: &[&str]) -> Vec<PlayerId> {
    list.iter().copied().map(PlayerId::from).collect()
}

/// Write records as a JSONL roster file inside `dir`.
pub fn write_roster(dir: &Path, lines: &[String]) -> PathBuf {
    let path = dir.join("roster.jsonl");
    let mut file = std::fs::File::create(&path).expect("create roster");
    for line in lines {
        writeln!(file, "{line}").expect("write roster line");
    }
    path
}

/// Serialize records to JSONL lines.
pub fn to_lines(records: &[RosterRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| serde_json::to_string(r).expect("serialize record"))
        .collect()
}

/// Run the teamgraph binary in the specified directory
pub fn run_teamgraph_in_dir(dir: &Path, args: &[&str]) -> Output {
    run_teamgraph_with_log(dir, args, "off")
}

/// Run the teamgraph binary with the given `RUST_LOG` filter
pub fn run_teamgraph_with_log(dir: &Path, args: &[&str], filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_teamgraph"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", filter)
        .output()
        .expect("Failed to execute teamgraph binary")
}
