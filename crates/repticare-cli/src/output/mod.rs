//! Output formatting helpers for the CLI.
//!
//! Labels and date formats live here; the core only knows the four
//! entry type tags.

mod json;
mod text;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use repticare_core::EntryType;

use crate::constants::DATE_FORMAT;

// Re-export public API
pub use json::{entries_json, reptiles_json, stats_json};
pub use text::{entry_table, reptile_table, stats_text};

/// Human-readable label for an entry type.
pub fn entry_type_label(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::Feeding => "Feeding",
        EntryType::Toilet => "Toilet",
        EntryType::Bath => "Bath",
        EntryType::Vet => "Vet visit",
    }
}

/// Format a timestamp for display in `tz`.
pub fn format_timestamp(ts: &DateTime<Utc>, tz: Tz) -> String {
    ts.with_timezone(&tz).format(DATE_FORMAT).to_string()
}
