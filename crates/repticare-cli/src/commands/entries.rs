use repticare_core::EntryType;

use crate::app::{select_reptile, AppContext};
use crate::cli::{AddArgs, ListArgs};
use crate::errors::CliError;
use crate::output::{entries_json, entry_table, entry_type_label};

fn parse_entry_type(value: &str) -> Result<EntryType, CliError> {
    value.parse::<EntryType>().map_err(CliError::from)
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let entry_type = parse_entry_type(&args.entry_type)?;
    let mut store = ctx.open_store()?;
    let reptile = select_reptile(&store, args.reptile.as_deref())?;

    let entry = store
        .add_entry(&reptile.id, entry_type, args.notes.as_deref())
        .map_err(CliError::from)?;

    if !ctx.quiet() {
        println!(
            "Logged {} for {} ({})",
            entry_type_label(entry.entry_type).to_lowercase(),
            reptile.name,
            entry.id
        );
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let filter = args
        .entry_type
        .as_deref()
        .map(parse_entry_type)
        .transpose()?;
    let store = ctx.open_store()?;
    let reptile = select_reptile(&store, args.reptile.as_deref())?;

    let mut entries = store.entries_for(&reptile.id);
    if let Some(entry_type) = filter {
        entries.retain(|e| e.entry_type == entry_type);
    }
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries_json(&entries)?)?);
        return Ok(());
    }

    if entries.is_empty() {
        if !ctx.quiet() {
            println!(
                "No entries for {}. Add one with `repticare add <TYPE>`.",
                reptile.name
            );
        }
        return Ok(());
    }

    println!("{}", entry_table(&entries, ctx.timezone()));
    Ok(())
}
