//! Application context for the Repticare CLI.
//!
//! Bundles CLI arguments with the loaded configuration so handlers do not
//! thread several parameters around.

use std::path::PathBuf;

use chrono_tz::Tz;
use repticare_core::{FilePersistence, Store};

use crate::cli::Cli;
use crate::config::{read_config, RepticareConfig};
use crate::constants::DEFAULT_TIMEZONE;
use crate::errors::CliError;

use super::resolver::{resolve_config_path, resolve_data_dir};

pub struct AppContext<'a> {
    cli: &'a Cli,
    data_dir: PathBuf,
    timezone: Tz,
}

impl<'a> AppContext<'a> {
    /// Create a new application context, reading the config file if present.
    pub fn new(cli: &'a Cli) -> anyhow::Result<Self> {
        let config_path = resolve_config_path()?;
        let config = read_config(&config_path)?;
        Self::with_config(cli, &config)
    }

    pub fn with_config(cli: &'a Cli, config: &RepticareConfig) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir(cli, config)?;
        let tz_name = config.ui.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE);
        let timezone: Tz = tz_name
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown timezone in config: {}", tz_name))?;

        tracing::debug!(data_dir = %data_dir.display(), timezone = %timezone, "context ready");
        Ok(Self {
            cli,
            data_dir,
            timezone,
        })
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Open the store backed by the data directory.
    pub fn open_store(&self) -> Result<Store<FilePersistence>, CliError> {
        Ok(Store::open(FilePersistence::new(&self.data_dir))?)
    }
}
