/*!
 * Timeline Module
 * Ordered, non-overlapping execution intervals with same-label run merging
 */

mod types;

pub use types::{Label, TimelineEntry};

use crate::core::types::Tick;
use serde::{Deserialize, Serialize};

/// Execution timeline of one simulation run
///
/// Entries are ordered by start time, never overlap, and no two consecutive
/// entries share a label when they touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `[start, end)` for `label`, extending the last entry when it is
    /// the same label and ends exactly at `start`. Empty intervals are dropped.
    pub(crate) fn record(&mut self, label: Label, start: Tick, end: Tick) {
        if start >= end {
            return;
        }

        if let Some(last) = self.entries.last_mut() {
            debug_assert!(
                last.end <= start,
                "timeline interval [{start}, {end}) overlaps {last:?}"
            );
            if last.label == label && last.end == start {
                last.end = end;
                return;
            }
        }

        self.entries.push(TimelineEntry::new(label, start, end));
    }

    #[inline]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last interval (0 for an empty timeline)
    pub fn makespan(&self) -> Tick {
        self.entries.last().map_or(0, |entry| entry.end)
    }

    /// Total time spent executing processes
    pub fn busy_time(&self) -> Tick {
        self.entries
            .iter()
            .filter(|entry| !entry.label.is_idle())
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Total time spent idle
    pub fn idle_time(&self) -> Tick {
        self.entries
            .iter()
            .filter(|entry| entry.label.is_idle())
            .map(TimelineEntry::duration)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
