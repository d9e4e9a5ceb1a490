//! Non-fatal warnings raised while reading JSONL input.
//!
//! A [`Warning`] describes one line that was skipped. Warnings are gathered in
//! a [`WarningCollector`] and handed back to the caller alongside the records
//! that did load.
//!
//! ```
//! use roster_jsonl::warning::{Warning, WarningCollector};
//!
//! let collector = WarningCollector::new();
//! collector.add(Warning::MalformedJson {
//!     line_number: 5,
//!     error: "unexpected end of input".to_string(),
//! });
//!
//! let warnings = collector.into_warnings();
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(warnings[0].line_number(), 5);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex};

/// A line that was skipped during resilient reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The line was not valid JSON, or did not match the expected shape.
    MalformedJson {
        /// The 1-based line number where the error occurred.
        line_number: usize,
        /// A description of the parsing error.
        error: String,
    },

    /// The line was skipped for a reason other than its JSON content.
    SkippedLine {
        /// The 1-based line number that was skipped.
        line_number: usize,
        /// Why the line was skipped.
        reason: String,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedJson { line_number, .. } | Self::SkippedLine { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    ///
    /// ```
    /// use roster_jsonl::warning::Warning;
    ///
    /// let warning = Warning::SkippedLine {
    ///     line_number: 10,
    ///     reason: "empty".to_string(),
    /// };
    /// assert_eq!(warning.kind(), "skipped_line");
    /// ```
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedJson { .. } => "malformed_json",
            Self::SkippedLine { .. } => "skipped_line",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson { line_number, error } => {
                write!(f, "line {line_number}: malformed JSON: {error}")
            }
            Self::SkippedLine {
                line_number,
                reason,
            } => write!(f, "line {line_number}: skipped: {reason}"),
        }
    }
}

impl std::error::Error for Warning {}

/// A cloneable, thread-safe accumulator of [`Warning`]s.
///
/// Clones share the same underlying storage, so a collector can be handed to
/// a reader while the caller keeps a handle to inspect the result.
///
/// # Panics
///
/// Methods panic if the internal mutex is poisoned, which only happens if
/// another thread panicked while holding the lock.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl WarningCollector {
    /// Creates a new empty `WarningCollector`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning to the collector.
    pub fn add(&self, warning: Warning) {
        self.warnings
            .lock()
            .expect("warning collector mutex should not be poisoned")
            .push(warning);
    }

    /// Returns the number of warnings collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .expect("warning collector mutex should not be poisoned")
            .len()
    }

    /// Returns `true` if no warnings have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the collector and returns all collected warnings.
    ///
    /// If this is the last handle the warnings are moved out, otherwise they
    /// are cloned.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        Arc::try_unwrap(self.warnings)
            .map(|mutex| mutex.into_inner().expect("mutex should not be poisoned"))
            .unwrap_or_else(|arc| {
                arc.lock()
                    .expect("warning collector mutex should not be poisoned")
                    .clone()
            })
    }
}
