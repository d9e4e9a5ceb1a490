//! JSONL reading operations.
//!
//! This module provides async functionality for reading JSONL files line-by-line
//! with buffering and line number tracking for warnings.

use crate::warning::{Warning, WarningCollector};
use crate::Result;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Async reader for JSONL (JSON Lines) data.
///
/// `JsonlReader` wraps an async reader and provides buffered reading of JSONL
/// formatted data. It tracks line numbers so skipped lines can be reported
/// precisely.
///
/// # Examples
///
/// ```no_run
/// use roster_jsonl::JsonlReader;
/// use tokio::fs::File;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("roster.jsonl").await?;
/// let mut reader = JsonlReader::new(file);
/// while let Some(value) = reader.read_value::<serde_json::Value>().await? {
///     println!("{value}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct JsonlReader<R> {
    reader: BufReader<R>,
    /// 1-based number of the last line read; 0 before any line.
    line_number: usize,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> JsonlReader<R> {
    /// Creates a new `JsonlReader` wrapping the given async reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::from_buf_reader(BufReader::new(reader))
    }

    /// Creates a new `JsonlReader` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self::from_buf_reader(BufReader::with_capacity(capacity, reader))
    }

    fn from_buf_reader(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Returns the current line number.
    ///
    /// Returns 0 before any lines have been read. After reading, returns the
    /// 1-based line number of the last line read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next raw line, without its trailing newline.
    ///
    /// Returns `Ok(None)` at end of input. Lines that are not valid UTF-8 are
    /// returned as `Ok(Some(Err(bytes)))` so callers can decide how to report
    /// them.
    async fn next_raw_line(&mut self) -> Result<Option<std::result::Result<String, Vec<u8>>>> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf).await?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
            self.buf.pop();
        }

        match String::from_utf8(std::mem::take(&mut self.buf)) {
            Ok(line) => Ok(Some(Ok(line))),
            Err(e) => Ok(Some(Err(e.into_bytes()))),
        }
    }

    /// Reads and deserializes the next non-blank line.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, invalid UTF-8, or malformed JSON. Use
    /// [`read_all_resilient`](Self::read_all_resilient) to skip bad lines
    /// instead.
    pub async fn read_value<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        loop {
            let Some(line) = self.next_raw_line().await? else {
                return Ok(None);
            };
            let line = line.map_err(|_| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("line {} is not valid UTF-8", self.line_number),
                )
            })?;
            if line.trim().is_empty() {
                continue;
            }
            return Ok(Some(serde_json::from_str(&line)?));
        }
    }

    /// Reads every remaining line, collecting a warning for each line that
    /// cannot be decoded or deserialized.
    ///
    /// Blank lines are ignored without a warning.
    ///
    /// # Errors
    ///
    /// Only I/O failures of the underlying reader are returned.
    pub async fn read_all_resilient<T: DeserializeOwned>(
        &mut self,
        warnings: &WarningCollector,
    ) -> Result<Vec<T>> {
        let mut records = Vec::new();

        while let Some(line) = self.next_raw_line().await? {
            let line_number = self.line_number;
            let line = match line {
                Ok(line) => line,
                Err(_) => {
                    warnings.add(Warning::SkippedLine {
                        line_number,
                        reason: "line is not valid UTF-8".to_string(),
                    });
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<T>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::trace!(line_number, error = %e, "Skipping malformed JSONL line");
                    warnings.add(Warning::MalformedJson {
                        line_number,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(records)
    }

    /// Consumes the reader, returning the underlying buffered reader.
    #[must_use]
    pub fn into_inner(self) -> BufReader<R> {
        self.reader
    }
}
