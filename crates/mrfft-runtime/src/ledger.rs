#![forbid(unsafe_code)]

//! Bounded FIFO of recent log entries.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::log::{LogEntry, Outcome};

/// Keeps the most recent `capacity` entries; capacity is at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLedger {
    capacity: usize,
    entries: VecDeque<LogEntry>,
}

impl EventLedger {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Append an entry, evicting the oldest if at capacity.
    pub fn record(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            let _ = self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of retained entries whose outcome is [`Outcome::Fail`].
    #[must_use]
    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome == Some(Outcome::Fail))
            .count()
    }

    /// All retained entries as newline-terminated JSON lines.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_json_line());
            out.push('\n');
        }
        out
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
