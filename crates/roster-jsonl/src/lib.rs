//! Resilient JSON Lines reading and writing.
//!
//! Roster rows arrive as one JSON object per line. Reading is resilient: a
//! line that fails to parse is reported as a [`Warning`] and skipped, so a
//! single corrupt row never prevents the rest of a file from loading.
//!
//! ```no_run
//! use roster_jsonl::read_jsonl_resilient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     id: String,
//! }
//!
//! # async fn example() -> roster_jsonl::Result<()> {
//! let (rows, warnings) = read_jsonl_resilient::<Row, _>("roster.jsonl").await?;
//! for warning in &warnings {
//!     eprintln!("{warning}");
//! }
//! println!("loaded {} rows", rows.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod reader;
pub mod warning;
pub mod writer;

pub use atomic::write_jsonl_atomic;
pub use error::{Error, Result};
pub use reader::JsonlReader;
pub use warning::{Warning, WarningCollector};
pub use writer::JsonlWriter;

use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs::File;

/// Reads every record from a JSONL file, skipping lines that fail to parse.
///
/// Returns the successfully parsed records in file order together with one
/// [`Warning`] per skipped line.
///
/// # Errors
///
/// Returns an error only for I/O failures (file missing, unreadable, or not
/// valid UTF-8). Malformed lines are never errors.
pub async fn read_jsonl_resilient<T, P>(path: P) -> Result<(Vec<T>, Vec<Warning>)>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).await?;
    tracing::debug!(path = %path.display(), "Reading JSONL file");

    let mut reader = JsonlReader::new(file);
    let collector = WarningCollector::new();
    let records = reader.read_all_resilient(&collector).await?;

    let warnings = collector.into_warnings();
    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        warnings = warnings.len(),
        "Finished reading JSONL file"
    );
    Ok((records, warnings))
}
