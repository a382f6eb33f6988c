//! `disposition play`

use std::sync::Arc;

use anyhow::Context;
use combat_content::ContentBundle;
use combat_core::{Encounter, PlayerAction, WorldContext};
use combat_runtime::{
    CombatRuntime, FileRecordRepository, PolicyProvider, RuntimeConfig, RuntimeError,
    ScriptedProvider, SessionStatus, fingerprint_hex,
};

use crate::args::PlayArgs;
use crate::render::{describe, summary};
use crate::script::parse_script;

pub async fn run_play(
    content: Arc<ContentBundle>,
    args: PlayArgs,
    json: bool,
) -> anyhow::Result<()> {
    let encounter = Encounter::new(args.seed, content.cards.clone(), content.fate_deck.clone())
        .with_world(WorldContext::new(args.world.zone, args.world.pressure))
        .with_disposition(args.world.disposition);

    let builder = CombatRuntime::builder()
        .config(RuntimeConfig {
            max_rounds: args.max_rounds,
            ..RuntimeConfig::default()
        })
        .encounter(Arc::clone(&content), args.enemy.as_str(), encounter);

    let builder = match (&args.actions, args.policy) {
        (Some(script), _) => builder.provider(ScriptedProvider::new(parse_script(script)?)),
        (None, Some(policy)) => builder.provider(PolicyProvider::new(policy.build(args.seed))),
        (None, None) => builder.provider(ScriptedProvider::new(Vec::<PlayerAction>::new())),
    };

    let mut runtime = builder.build().await?;
    let handle = runtime.handle();

    let status = if args.policy.is_some() {
        Some(runtime.run().await?)
    } else if let Some(outcome) = handle.session().await?.outcome() {
        Some(SessionStatus::Finished(outcome))
    } else {
        loop {
            match runtime.step().await {
                Ok(outcome) => {
                    if let Some(outcome) = outcome.outcome {
                        break Some(SessionStatus::Finished(outcome));
                    }
                }
                Err(RuntimeError::ScriptExhausted { .. }) => break None,
                Err(error) if error.is_rejection() => {
                    return Err(error).context("scripted action was rejected");
                }
                Err(error) => return Err(error.into()),
            }
        }
    };

    let record = handle.record().await?;
    drop(handle);
    let host = runtime.shutdown().await?;

    if !args.quiet && !json {
        for event in host.events() {
            println!("{}", describe(event));
        }
    }

    let snapshot = host.snapshot();
    if json {
        let output = serde_json::json!({
            "status": status,
            "snapshot": snapshot,
            "fingerprint": fingerprint_hex(&snapshot),
            "events": host.events(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", summary(&snapshot));
        match status {
            Some(status) => println!("status: {}", status),
            None => println!("status: script finished, combat still running"),
        }
        println!("fingerprint: {}", fingerprint_hex(&snapshot));
    }

    if let Some(path) = &args.save {
        FileRecordRepository::write_path(path, &record)
            .with_context(|| format!("failed to save session to {}", path.display()))?;
        if !json {
            println!("saved {} actions to {}", record.action_count(), path.display());
        }
    }

    Ok(())
}

