//! `disposition sweep`

use std::sync::Arc;

use combat_content::ContentBundle;
use combat_core::WorldContext;
use combat_runtime::SweepConfig;

use crate::args::SweepArgs;

pub async fn run_sweep(
    content: Arc<ContentBundle>,
    args: SweepArgs,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = SweepConfig::new(args.seeds.clone(), args.enemy, args.policy);
    config.world = WorldContext::new(args.world.zone, args.world.pressure);
    config.initial_disposition = args.world.disposition;
    config.max_rounds = args.max_rounds;
    config.workers = args.workers;

    let report = combat_runtime::run_sweep(content, config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let total = report.sessions.len();
    println!(
        "{} sessions ({}..{}), policy {}, zone {}",
        total, args.seeds.start, args.seeds.end, args.policy, args.world.zone
    );
    println!("  destroyed   {:>6}", report.destroyed);
    println!("  subjugated  {:>6}", report.subjugated);
    println!("  defeats     {:>6}", report.defeats);
    println!("  stalled     {:>6}", report.stalled);
    println!("  win rate    {:>6.1}%", report.win_rate() * 100.0);
    println!("  avg rounds  {:>6.2}", report.average_rounds());
    Ok(())
}
