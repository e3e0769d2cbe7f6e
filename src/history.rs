//! Session history of past analyses.
//!
//! [`History`] is owned by the caller (typically one per user session) and only ever
//! appended to. Pipelines and the summarizer never touch it; feed it their outputs.
//!
//! ```rust
//! use mood_pipelines::history::History;
//! use mood_pipelines::summary::{classify_polarity, PolarityScores};
//!
//! let mut history = History::new();
//! history.push("Great food!", classify_polarity(PolarityScores::new(0.0, 0.3, 0.7, 0.66)));
//! history.push("Meh.", classify_polarity(PolarityScores::new(0.0, 1.0, 0.0, 0.0)));
//!
//! let latest = history.latest().unwrap();
//! assert_eq!(latest.text, "Meh.");
//! assert_eq!(history.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One analyzed text and what came out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<T> {
    /// Text that was analyzed.
    pub text: String,
    /// Summary produced for it.
    pub item: T,
}

/// Append-only log of past results, optionally capped to the most recent entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<T> {
    entries: VecDeque<HistoryEntry<T>>,
    limit: Option<usize>,
}

impl<T> History<T> {
    /// Unbounded history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            limit: None,
        }
    }

    /// History keeping at most `limit` entries; the oldest are dropped first.
    ///
    /// The limit only drives eviction, nothing is reserved up front. A limit of zero keeps
    /// nothing.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Record a result.
    pub fn push(&mut self, text: impl Into<String>, item: T) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.entries.len() >= limit {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(HistoryEntry {
            text: text.into(),
            item,
        });
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry<T>> {
        self.entries.back()
    }

    /// Entries in the order they were recorded.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry<T>> {
        self.entries.iter()
    }

    /// Entries from newest to oldest, as a sidebar lists them.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &HistoryEntry<T>> {
        self.entries.iter().rev()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything (new session).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a HistoryEntry<T>;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
