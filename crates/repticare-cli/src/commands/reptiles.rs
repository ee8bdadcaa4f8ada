use crate::app::AppContext;
use crate::errors::CliError;
use crate::output::{reptile_table, reptiles_json};

pub fn handle_add(ctx: &AppContext, name: &str) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let reptile = store.add_reptile(name).map_err(CliError::from)?;

    if !ctx.quiet() {
        println!("Added reptile {} ({})", reptile.name, reptile.id);
        if store.reptile_count() == 1 {
            println!("{} is now selected by default.", reptile.name);
        }
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let reptiles = store.reptiles();

    if json {
        println!("{}", serde_json::to_string_pretty(&reptiles_json(reptiles))?);
        return Ok(());
    }

    if reptiles.is_empty() {
        if !ctx.quiet() {
            println!("No reptiles yet. Add one with `repticare reptile add <NAME>`.");
        }
        return Ok(());
    }

    println!("{}", reptile_table(reptiles));
    Ok(())
}
