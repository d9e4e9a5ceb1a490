//! Teamgraph CLI binary.

use anyhow::Result;
use teamgraph::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the teamgraph CLI.
///
/// A current-thread runtime is enough: loading is sequential file I/O and
/// every query runs on an already-built graph.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Example: RUST_LOG=teamgraph=debug,roster_jsonl=trace teamgraph stats
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("teamgraph=info,roster_jsonl=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting teamgraph CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Teamgraph CLI completed successfully");
    Ok(())
}
