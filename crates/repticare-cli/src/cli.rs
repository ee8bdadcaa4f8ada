use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use repticare_core::VERSION;

/// Repticare - keep a log of feeding, toilet, bathing and vet visits for your reptiles
#[derive(Parser)]
#[command(name = "repticare")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding reptiles.json and entries.json
    #[arg(short, long, global = true, env = "REPTICARE_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage reptiles
    #[command(subcommand)]
    Reptile(ReptileCommands),

    /// Log a new entry (feeding, toilet, bath, vet)
    Add(AddArgs),

    /// Show entry history, most recent first
    List(ListArgs),

    /// Show statistics for a reptile
    Stats(StatsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ReptileCommands {
    /// Register a new reptile
    Add {
        /// Display name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// List reptiles in the order they were added
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry type (feeding, toilet, bath, vet)
    #[arg(value_name = "TYPE")]
    pub entry_type: String,

    /// Free-text notes
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Reptile id or name (defaults to the first reptile)
    #[arg(short, long)]
    pub reptile: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Reptile id or name (defaults to the first reptile)
    #[arg(short, long)]
    pub reptile: Option<String>,

    /// Only show entries of this type
    #[arg(long = "type", value_name = "TYPE")]
    pub entry_type: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Reptile id or name (defaults to the first reptile)
    #[arg(short, long)]
    pub reptile: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
