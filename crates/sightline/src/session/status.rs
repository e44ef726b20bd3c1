//! Status message and activity log simulation.
//!
//! On the slower status tick a random phrase becomes the current status
//! message. Occasionally the tick is classified as a warning and the logged
//! line is replaced with a fixed privacy-limitation notice. Entries live in
//! a bounded newest-first log.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The fixed, ordered list of simulated status phrases.
pub const STATUS_PHRASES: [&str; 13] = [
    "Initializing search parameters...",
    "Accessing social media APIs within legal guidelines...",
    "Scanning public missing persons databases...",
    "Processing facial recognition parameters...",
    "Analyzing last known location data...",
    "Checking recent travel records via authorized channels...",
    "Scanning news archives for relevant information...",
    "Cross-referencing data from multiple sources...",
    "Expanding search radius based on initial findings...",
    "Applying temporal analysis to historical data...",
    "Detecting potential patterns in collected information...",
    "Prioritizing matches based on confidence scores...",
    "Preparing results summary and potential leads...",
];

/// The message logged when a tick is classified as a warning.
pub const PRIVACY_NOTICE: &str =
    "Access to certain data limited by privacy regulations in some regions";

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// A routine status line.
    Info,
    /// A privacy-limitation warning.
    Warning,
}

/// One timestamped activity log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The logged message.
    pub message: String,
    /// Severity classification.
    pub kind: LogKind,
    /// Formatted local clock time of the entry.
    pub time: String,
}

/// The current status message plus a bounded, newest-first activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFeed {
    current: String,
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl StatusFeed {
    /// Create a feed retaining at most `capacity` entries.
    ///
    /// The current status starts at the first phrase in the fixed list,
    /// matching the initial display before any tick has fired.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            current: STATUS_PHRASES[0].to_string(),
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// The most recently selected status phrase.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Log entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one status tick.
    ///
    /// Selects a phrase uniformly at random as the new current status, then
    /// independently classifies the tick: with `warning_probability` the
    /// logged message is [`PRIVACY_NOTICE`] at warning severity, otherwise
    /// the phrase itself at info severity. The entry goes to the front of
    /// the log; the oldest entries beyond capacity are evicted. Returns the
    /// appended entry.
    pub fn record_tick<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        warning_probability: f64,
        now: DateTime<Local>,
    ) -> LogEntry {
        let phrase = STATUS_PHRASES[rng.gen_range(0..STATUS_PHRASES.len())];
        self.current = phrase.to_string();

        let warning = rng.gen::<f64>() < warning_probability;
        let entry = LogEntry {
            message: if warning {
                PRIVACY_NOTICE.to_string()
            } else {
                phrase.to_string()
            },
            kind: if warning {
                LogKind::Warning
            } else {
                LogKind::Info
            },
            time: now.format("%H:%M:%S").to_string(),
        };

        self.entries.push_front(entry.clone());
        self.entries.truncate(self.capacity);
        entry
    }
}
