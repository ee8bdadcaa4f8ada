//! Per-reptile aggregate statistics.
//!
//! Stats are recomputed from the entry list on every call; there is no
//! cached aggregate to keep in sync.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::storage::{Entry, EntryType};

/// Count and most recent occurrence of one entry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TypeStats {
    pub count: usize,
    pub last: Option<DateTime<Utc>>,
}

/// Stats for each of the four entry types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerTypeStats([TypeStats; 4]);

impl PerTypeStats {
    pub fn get(&self, entry_type: EntryType) -> &TypeStats {
        &self.0[entry_type.index()]
    }

    /// Iterate in canonical type order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryType, &TypeStats)> + '_ {
        EntryType::ALL.into_iter().zip(self.0.iter())
    }

    fn record(&mut self, entry: &Entry) {
        let slot = &mut self.0[entry.entry_type.index()];
        slot.count += 1;
        if slot.last.map_or(true, |last| entry.timestamp > last) {
            slot.last = Some(entry.timestamp);
        }
    }
}

impl Serialize for PerTypeStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(EntryType::ALL.len()))?;
        for (entry_type, stats) in self.iter() {
            map.serialize_entry(entry_type.as_str(), stats)?;
        }
        map.end()
    }
}

/// Summary of a reptile's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_entries: usize,
    pub last_activity: DateTime<Utc>,
    pub per_type: PerTypeStats,
}

/// Aggregate `entries`, or `None` when there is nothing to summarize.
///
/// "Most recent" uses strictly-greater comparison, so among entries sharing a
/// timestamp the first one encountered wins.
pub fn compute_stats(entries: &[Entry]) -> Option<Stats> {
    let (first, rest) = entries.split_first()?;

    let mut last_activity = first.timestamp;
    let mut per_type = PerTypeStats::default();
    per_type.record(first);

    for entry in rest {
        if entry.timestamp > last_activity {
            last_activity = entry.timestamp;
        }
        per_type.record(entry);
    }

    Some(Stats {
        total_entries: entries.len(),
        last_activity,
        per_type,
    })
}
