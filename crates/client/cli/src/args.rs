//! Command-line arguments.

use std::ops::Range;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use combat_core::ResonanceZone;
use combat_runtime::PolicyKind;

/// Disposition Combat - deterministic card combat on a single disposition scale
#[derive(Parser, Debug)]
#[command(name = "disposition")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Content directory (defaults to DISPOSITION_DATA_DIR, then built-in content)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one encounter from a script or a policy
    Play(PlayArgs),

    /// Play many seeded encounters in parallel and aggregate outcomes
    Sweep(SweepArgs),

    /// Verify a saved session record by replaying it
    Replay {
        /// Saved session record (JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Print every replayed event
        #[arg(short, long)]
        verbose: bool,
    },
}

/// World context shared by `play` and `sweep`.
#[derive(Args, Debug, Clone, Copy)]
pub struct WorldArgs {
    /// Resonance zone: nav, prav or yav
    #[arg(short, long, default_value = "yav", value_parser = parse_zone)]
    pub zone: ResonanceZone,

    /// World pressure (clamped to 0..=100)
    #[arg(long, default_value = "0")]
    pub pressure: i32,

    /// Starting disposition (clamped to -100..=100)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub disposition: i32,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Session seed
    #[arg(short, long, default_value = "0")]
    pub seed: u64,

    /// Enemy id from the content catalog
    #[arg(short, long, default_value = "grey_wolf")]
    pub enemy: String,

    #[command(flatten)]
    pub world: WorldArgs,

    /// Action script, e.g. "s0 i1 x2 e"
    #[arg(short, long, conflicts_with = "policy")]
    pub actions: Option<String>,

    /// Scripted policy: always-strike, always-influence, momentum or random
    #[arg(short, long, value_parser = parse_policy)]
    pub policy: Option<PolicyKind>,

    /// Stop a policy run after this many rounds
    #[arg(long, default_value = "200")]
    pub max_rounds: u32,

    /// Save the session record to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Hide per-event output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Seed range, e.g. 0..500
    #[arg(long, default_value = "0..100", value_parser = parse_seed_range)]
    pub seeds: Range<u64>,

    /// Scripted policy
    #[arg(short, long, default_value = "momentum", value_parser = parse_policy)]
    pub policy: PolicyKind,

    /// Enemy id from the content catalog
    #[arg(short, long, default_value = "grey_wolf")]
    pub enemy: String,

    #[command(flatten)]
    pub world: WorldArgs,

    /// Sessions still running after this many rounds count as stalled
    #[arg(long, default_value = "200")]
    pub max_rounds: u32,

    /// Blocking worker tasks
    #[arg(short, long, default_value = "4")]
    pub workers: usize,
}

pub fn parse_zone(value: &str) -> Result<ResonanceZone, String> {
    value
        .parse()
        .map_err(|_| format!("unknown zone '{}' (expected nav, prav or yav)", value))
}

pub fn parse_policy(value: &str) -> Result<PolicyKind, String> {
    value.parse().map_err(|_| {
        format!(
            "unknown policy '{}' (expected always-strike, always-influence, momentum or random)",
            value
        )
    })
}

/// Parses `a..b` (exclusive), `a..=b` (inclusive) or a single seed `a`.
pub fn parse_seed_range(value: &str) -> Result<Range<u64>, String> {
    let number = |s: &str| {
        s.trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid seed '{}': {}", s, e))
    };

    let range = if let Some((start, end)) = value.split_once("..=") {
        let end = number(end)?;
        number(start)?..end.saturating_add(1)
    } else if let Some((start, end)) = value.split_once("..") {
        number(start)?..number(end)?
    } else {
        let seed = number(value)?;
        seed..seed.saturating_add(1)
    };

    if range.start >= range.end {
        return Err(format!("empty seed range '{}'", value));
    }
    Ok(range)
}
