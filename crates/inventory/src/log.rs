//! Ephemeral stock log: one entry per successful add.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::ItemName;

/// Record of a single add. Not persisted with the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLogEntry {
    pub at: DateTime<Utc>,
    pub item: ItemName,
    pub qty: i64,
}

impl core::fmt::Display for StockLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Added {} of {}", self.at, self.qty, self.item)
    }
}

/// Caller-owned collection of log entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLog {
    entries: Vec<StockLogEntry>,
}

impl StockLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: StockLogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[StockLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered log lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}
