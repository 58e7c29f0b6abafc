//! approval-inspect: print the projected state of an approval process
//!
//! Reads a snapshot (process nodes plus a populated instance) from a JSON
//! file, projects it and prints one block per visible node followed by a
//! summary line.

use anyhow::Context;
use approval_engine::{MemoryStore, ProcessViewService, ProjectionConfig};
use approval_types::ProcessSnapshot;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

/// Inspect an approval process snapshot
#[derive(Parser, Debug)]
#[command(name = "approval-inspect", version, about)]
struct Cli {
    /// Snapshot file (JSON with `process_nodes` and `instance`)
    snapshot: PathBuf,

    /// Configuration file
    #[arg(short, long, env = "APPROVAL_CONFIG")]
    config: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Keep nodes the process has not reached yet
    #[arg(long)]
    show_hidden: bool,

    /// Log level
    #[arg(long, default_value = "warn", env = "APPROVAL_LOG")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "APPROVAL_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());
    if cli.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let mut config =
        ProjectionConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.show_hidden {
        config.include_hidden = true;
    }

    let raw = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("failed to read {}", cli.snapshot.display()))?;
    let snapshot: ProcessSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("invalid snapshot in {}", cli.snapshot.display()))?;

    let entity = snapshot.instance.entity.clone();
    tracing::info!(
        instance_id = %snapshot.instance.id,
        entity = %entity,
        nodes = snapshot.process_nodes.len(),
        tasks = snapshot.instance.task_count(),
        "Snapshot loaded"
    );

    let service =
        ProcessViewService::with_config(MemoryStore::new().with_snapshot(snapshot), config);
    let (views, summary) = service.load_summary(&entity).await;

    let output = if cli.json {
        render::json(&views, &summary)?
    } else {
        render::text(&views, &summary)
    };
    println!("{output}");

    Ok(())
}
