//! Call Log
//!
//! Append-only record of every request a stub service received, in
//! arrival order. Entries are `"METHOD path"` (query string included
//! when present), so tests can assert exact call counts and ordering.

use std::sync::{Arc, Mutex};

/// Request log shared between a stub service and the test body
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries
            .lock()
            .expect("call log lock")
            .push(entry.into());
    }

    /// Snapshot of all entries in arrival order
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().expect("call log lock").clone()
    }

    /// Total number of recorded calls
    pub fn total(&self) -> usize {
        self.entries.lock().expect("call log lock").len()
    }

    /// Number of recorded calls whose entry starts with `prefix`
    pub fn count_matching(&self, prefix: &str) -> usize {
        self.entries
            .lock()
            .expect("call log lock")
            .iter()
            .filter(|entry| entry.starts_with(prefix))
            .count()
    }
}
