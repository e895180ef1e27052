// In-memory snapshot history, owned by the monitor for the lifetime of the run

use crate::models::MetricSnapshot;
use std::collections::VecDeque;

/// How many snapshots the history keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryCapacity {
    /// Grows by one entry per collection, never pruned.
    #[default]
    Unbounded,
    /// Keeps the newest `n` snapshots, evicting the oldest first.
    Bounded(usize),
}

impl HistoryCapacity {
    /// `None` or `Some(0)` mean no bound.
    pub fn from_max_entries(max_entries: Option<usize>) -> Self {
        match max_entries {
            Some(n) if n > 0 => HistoryCapacity::Bounded(n),
            _ => HistoryCapacity::Unbounded,
        }
    }
}

/// Insertion-ordered, append-only from the caller's point of view.
#[derive(Debug, Default)]
pub struct MetricsHistory {
    entries: VecDeque<MetricSnapshot>,
    capacity: HistoryCapacity,
}

impl MetricsHistory {
    pub fn new(capacity: HistoryCapacity) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Append a fully assembled snapshot. Returns the evicted entry, if any.
    pub fn push(&mut self, snapshot: MetricSnapshot) -> Option<MetricSnapshot> {
        let evicted = match self.capacity {
            HistoryCapacity::Bounded(max) if self.entries.len() >= max => self.entries.pop_front(),
            _ => None,
        };
        self.entries.push_back(snapshot);
        evicted
    }

    pub fn latest(&self) -> Option<&MetricSnapshot> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> HistoryCapacity {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MetricSnapshot> {
        self.entries.iter()
    }
}
