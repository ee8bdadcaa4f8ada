//! JSON output formatting.
//!
//! JSON output carries the stored field names and type tags, never labels.

use repticare_core::{Entry, Reptile, Stats};

/// Reptiles as a JSON array, with the default selection flagged.
pub fn reptiles_json(reptiles: &[Reptile]) -> serde_json::Value {
    serde_json::Value::Array(
        reptiles
            .iter()
            .enumerate()
            .map(|(i, reptile)| {
                serde_json::json!({
                    "id": reptile.id,
                    "name": reptile.name,
                    "selected": i == 0,
                })
            })
            .collect(),
    )
}

pub fn entries_json(entries: &[Entry]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entries)?)
}

/// Stats for `reptile`; `stats` is `null` when there is no history.
pub fn stats_json(reptile: &Reptile, stats: Option<&Stats>) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "reptile": reptile,
        "stats": serde_json::to_value(stats)?,
    }))
}
