use crate::app::{select_reptile, AppContext};
use crate::cli::StatsArgs;
use crate::output::{stats_json, stats_text};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let reptile = select_reptile(&store, args.reptile.as_deref())?;
    let stats = store.stats_for(&reptile.id);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats_json(&reptile, stats.as_ref())?)?
        );
        return Ok(());
    }

    match stats {
        Some(stats) => println!("{}", stats_text(&reptile, &stats, ctx.timezone())),
        None if !ctx.quiet() => println!("No entries yet for {}.", reptile.name),
        None => {}
    }
    Ok(())
}
