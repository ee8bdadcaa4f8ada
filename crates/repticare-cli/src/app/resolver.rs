//! Path resolution and reptile selection.

use std::path::PathBuf;

use repticare_core::{Persistence, Reptile, Store};

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, RepticareConfig};
use crate::errors::CliError;

/// Resolve the config file path, checking REPTICARE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("REPTICARE_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data directory: `--data-dir`/env, then config, then XDG default.
pub fn resolve_data_dir(cli: &Cli, config: &RepticareConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.storage.data_dir.as_deref() {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}

/// Pick the reptile a command acts on.
///
/// An explicit query must match by id or name. Without one, the first
/// reptile in insertion order is selected.
pub fn select_reptile<P: Persistence>(
    store: &Store<P>,
    query: Option<&str>,
) -> Result<Reptile, CliError> {
    if let Some(query) = query {
        return Ok(store.require_reptile(query)?.clone());
    }

    store.reptiles().first().cloned().ok_or_else(|| {
        CliError::not_found(
            "No reptiles yet.",
            "Add one first:\n  repticare reptile add <NAME>",
        )
    })
}
