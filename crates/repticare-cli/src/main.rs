//! Repticare CLI - a husbandry log for reptiles
//!
//! This is the command-line presentation layer for Repticare. It resolves
//! which reptile a command targets, formats labels and dates, and calls into
//! the core store.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ReptileCommands};
use crate::commands::{entries, misc, reptiles, stats};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Completions must work even with a broken config.
    let ctx = match &cli.command {
        Commands::Completions { shell } => return misc::handle_completions(*shell),
        _ => AppContext::new(cli)?,
    };

    match &cli.command {
        Commands::Reptile(ReptileCommands::Add { name }) => reptiles::handle_add(&ctx, name),
        Commands::Reptile(ReptileCommands::List { json }) => reptiles::handle_list(&ctx, *json),
        Commands::Add(args) => entries::handle_add(&ctx, args),
        Commands::List(args) => entries::handle_list(&ctx, args),
        Commands::Stats(args) => stats::handle_stats(&ctx, args),
        Commands::Completions { .. } => Ok(()),
    }
}
