use anyhow::{Context, Result};
use clap::Parser;
use tcx_flatten::cli::Cli;
use tcx_flatten::config::Config;
use tcx_flatten::run_batch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.apply(Config::from_env().context("failed to resolve the working directory")?);
    tracing::debug!(?config, "configuration");

    let outcome = run_batch(&config.source(), &config.storage(), &config.batch_options())
        .with_context(|| format!("failed to build {}", config.output.display()))?;

    let report = &outcome.report;
    tracing::info!(
        "Scanned {} files: {} processed, {} already loaded, {} failed",
        report.scanned,
        report.processed.len(),
        report.skipped.len(),
        report.failed.len()
    );
    for failed in &report.failed {
        tracing::warn!("Not processed: {} ({})", failed.tcx_file, failed.error);
    }
    tracing::info!("Done!");
    Ok(())
}
