//! `disposition replay`

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use combat_content::ContentBundle;
use combat_runtime::{FileRecordRepository, verify};

use crate::render::{describe, summary};

pub fn run_replay(
    content: Arc<ContentBundle>,
    file: &Path,
    verbose: bool,
    json: bool,
) -> anyhow::Result<()> {
    let record = FileRecordRepository::read_path(file)
        .with_context(|| format!("failed to read session record {}", file.display()))?;
    let report = verify(content, &record)
        .with_context(|| format!("session '{}' failed verification", record.session_id))?;

    if json {
        let output = serde_json::json!({
            "session_id": record.session_id,
            "verified": true,
            "fingerprint": report.fingerprint,
            "outcome": report.outcome,
            "snapshot": report.snapshot,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if verbose {
        for event in &report.events {
            println!("{}", describe(event));
        }
    }
    println!("{}", summary(&report.snapshot));
    println!(
        "verified {} ({} actions), fingerprint {}",
        record.session_id,
        record.action_count(),
        report.fingerprint
    );
    Ok(())
}
