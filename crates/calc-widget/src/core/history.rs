//! Calculation history, newest entry first

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::format_number;

/// A single entry in the calculation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as the user typed it
    pub expression: String,
    /// The result of the calculation
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    /// Text shown next to the expression in the history list
    #[must_use]
    pub fn result_label(&self) -> String {
        format!("= {}", format_number(self.result))
    }

    /// Returns a formatted display string
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.expression, self.result_label())
    }
}

/// Calculator history manager
///
/// Index `0` is always the most recent calculation. Unbounded unless
/// constructed with [`History::with_limit`], in which case the oldest
/// entries fall off the end.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: Option<usize>,
}

impl History {
    /// Creates an unbounded history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history keeping at most `limit` entries
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Returns the configured bound, if any
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Prepends an entry
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if let Some(limit) = self.limit {
            self.entries.truncate(limit);
        }
    }

    /// Prepends a calculation result
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(HistoryEntry::new(expression, result));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Returns the entry at `index` (0 = newest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Serializes the history to JSON, newest first
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Deserializes a newest-first JSON array
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: VecDeque<HistoryEntry> = serde_json::from_str(json)?;
        Ok(Self {
            entries,
            limit: None,
        })
    }
}
