//! Text and table output formatting.

use chrono_tz::Tz;
use comfy_table::presets::NOTHING;
use comfy_table::{ContentArrangement, Table};
use repticare_core::{Entry, Reptile, Stats};

use super::{entry_type_label, format_timestamp};

fn plain_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Reptiles in insertion order; `*` marks the default selection.
pub fn reptile_table(reptiles: &[Reptile]) -> String {
    let mut table = plain_table(vec!["", "NAME", "ID"]);
    for (i, reptile) in reptiles.iter().enumerate() {
        let marker = if i == 0 { "*" } else { "" };
        table.add_row(vec![marker, reptile.name.as_str(), reptile.id.as_str()]);
    }
    table.to_string()
}

pub fn entry_table(entries: &[Entry], tz: Tz) -> String {
    let mut table = plain_table(vec!["WHEN", "TYPE", "NOTES"]);
    for entry in entries {
        table.add_row(vec![
            format_timestamp(&entry.timestamp, tz),
            entry_type_label(entry.entry_type).to_string(),
            entry.notes.clone().unwrap_or_default(),
        ]);
    }
    table.to_string()
}

pub fn stats_text(reptile: &Reptile, stats: &Stats, tz: Tz) -> String {
    let mut out = format!(
        "Statistics for {}\n\nTotal entries:  {}\nLast activity:  {}\n\n",
        reptile.name,
        stats.total_entries,
        format_timestamp(&stats.last_activity, tz)
    );

    let mut table = plain_table(vec!["TYPE", "COUNT", "LAST"]);
    for (entry_type, type_stats) in stats.per_type.iter() {
        table.add_row(vec![
            entry_type_label(entry_type).to_string(),
            type_stats.count.to_string(),
            type_stats
                .last
                .map(|ts| format_timestamp(&ts, tz))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push_str(&table.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use repticare_core::{compute_stats, EntryId, EntryType, ReptileId};

    fn spike() -> Reptile {
        Reptile {
            id: ReptileId::from("r1"),
            name: "Spike".to_string(),
        }
    }

    #[test]
    fn test_stats_text_lists_all_types() {
        let entries = vec![Entry {
            id: EntryId::from("e1"),
            reptile_id: ReptileId::from("r1"),
            entry_type: EntryType::Feeding,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap(),
            notes: Some("crickets".to_string()),
        }];
        let stats = compute_stats(&entries).unwrap();

        let out = stats_text(&spike(), &stats, chrono_tz::UTC);

        assert!(out.contains("Statistics for Spike"));
        assert!(out.contains("Total entries:  1"));
        for label in ["Feeding", "Toilet", "Bath", "Vet visit"] {
            assert!(out.contains(label), "missing {}", label);
        }
        assert!(out.contains("2 January 2024, 03:04"));
    }

    #[test]
    fn test_reptile_table_marks_first() {
        let out = reptile_table(&[spike()]);
        assert!(out.contains('*'));
        assert!(out.contains("Spike"));
    }
}
