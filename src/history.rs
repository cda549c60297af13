// src/history.rs
// Bounded calculation history with JSON file persistence

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// A single calculation attempt, successful or not.
///
/// Entries are created through [`History::add`] and never mutated
/// afterwards. `result` is present iff the calculation succeeded;
/// `error` is present iff it failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub operation: String,
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary figures derived from the history in a single pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Operation with the highest occurrence count. On ties, the first
    /// operation to reach the maximum count during a left-to-right scan
    /// wins.
    pub most_used_operation: Option<String>,
    /// Arithmetic mean of successful results only.
    pub average_result: f64,
    pub first_calculation: Option<DateTime<Utc>>,
    pub last_calculation: Option<DateTime<Utc>>,
}

/// FIFO-bounded log of calculation attempts, persisted as a JSON file
/// `{ "entries": [...], "max_size": n }`. The file path itself is not
/// part of the persisted form.
#[derive(Debug, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Entry>,
    max_size: usize,
    #[serde(skip)]
    path: PathBuf,
}

impl History {
    pub fn new(path: impl Into<PathBuf>, max_size: usize) -> Self {
        History {
            entries: Vec::with_capacity(max_size),
            max_size,
            path: path.into(),
        }
    }

    /// Append an entry, stamping a missing timestamp with the current
    /// time. When the bound is exceeded the oldest entries are dropped
    /// in one batch, so bulk inserts settle to the most recent
    /// `max_size` entries.
    pub fn add(&mut self, mut entry: Entry) {
        if entry.timestamp.is_none() {
            entry.timestamp = Some(Utc::now());
        }

        self.entries.push(entry);

        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
        }
    }

    /// Record a successful calculation.
    pub fn add_success(&mut self, operation: &str, expression: &str, result: f64) {
        self.add(Entry {
            timestamp: None,
            operation: operation.to_string(),
            expression: expression.to_string(),
            result: Some(result),
            success: true,
            error: None,
        });
    }

    /// Record a failed calculation.
    pub fn add_error(&mut self, operation: &str, expression: &str, error: impl fmt::Display) {
        self.add(Entry {
            timestamp: None,
            operation: operation.to_string(),
            expression: expression.to_string(),
            result: None,
            success: false,
            error: Some(error.to_string()),
        });
    }

    /// The most recent `n` entries in original insertion order.
    pub fn recent(&self, n: usize) -> &[Entry] {
        &self.entries[self.entries.len().saturating_sub(n)..]
    }

    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove all entries, keeping the configured bound.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries matching a predicate, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&Entry>
    where
        P: Fn(&Entry) -> bool,
    {
        self.entries.iter().filter(|e| predicate(e)).collect()
    }

    pub fn successful(&self) -> Vec<&Entry> {
        self.filter(|e| e.success)
    }

    pub fn failed(&self) -> Vec<&Entry> {
        self.filter(|e| !e.success)
    }

    /// Compute summary statistics in one pass over all entries.
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics {
            total: self.entries.len(),
            ..Statistics::default()
        };

        if self.entries.is_empty() {
            return stats;
        }

        let mut operation_counts: HashMap<&str, usize> = HashMap::new();
        let mut result_sum = 0.0;
        let mut best_count = 0;

        for entry in &self.entries {
            if entry.success {
                stats.successful += 1;
                result_sum += entry.result.unwrap_or(0.0);
            } else {
                stats.failed += 1;
            }

            let count = operation_counts.entry(entry.operation.as_str()).or_insert(0);
            *count += 1;
            // First operation to reach a new maximum wins ties.
            if *count > best_count {
                best_count = *count;
                stats.most_used_operation = Some(entry.operation.clone());
            }

            if let Some(ts) = entry.timestamp {
                if stats.first_calculation.is_none_or(|first| ts < first) {
                    stats.first_calculation = Some(ts);
                }
                if stats.last_calculation.is_none_or(|last| ts > last) {
                    stats.last_calculation = Some(ts);
                }
            }
        }

        if stats.successful > 0 {
            stats.average_result = result_sum / stats.successful as f64;
        }

        stats
    }

    /// Load entries from the backing file.
    ///
    /// A missing file is not an error: the history simply starts empty.
    /// Unreadable or unparseable content fails the call. Loaded entries
    /// are re-truncated against the current `max_size`, so a shrunken
    /// bound applies to data from earlier runs.
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let data = std::fs::read_to_string(&self.path)
            .map_err(|e| CalcError::file(&self.path, "read", e))?;

        let loaded: History = serde_json::from_str(&data)
            .map_err(|e| CalcError::file(&self.path, "parse", e))?;

        self.entries = loaded.entries;

        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
        }

        Ok(())
    }

    /// Overwrite the backing file with the full entry list.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| CalcError::file(parent, "create", e))?;
            }
        }

        let data = serde_json::to_string_pretty(self)
            .map_err(|e| CalcError::file(&self.path, "serialize", e))?;

        std::fs::write(&self.path, data).map_err(|e| CalcError::file(&self.path, "write", e))?;

        Ok(())
    }
}
