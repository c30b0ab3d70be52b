//! faceharvest CLI
//!
//! Selects a subset of the built-in worklist, runs the harvest pipeline,
//! and prints a per-unit tally. Exits successfully even when individual
//! units come back empty; partial failure is the expected operating mode.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use faceharvest::{GroupSelection, HarvestConfig, builtin_worklist, harvest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GenderArg {
    Female,
    Male,
    All,
}

impl From<GenderArg> for GroupSelection {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Female => GroupSelection::Female,
            GenderArg::Male => GroupSelection::Male,
            GenderArg::All => GroupSelection::All,
        }
    }
}

/// Collect labeled face images for classifier training data.
#[derive(Debug, Parser)]
#[command(name = "faceharvest", version, about)]
struct Cli {
    /// Which worklist group to crawl.
    #[arg(long, value_enum, default_value_t = GenderArg::All)]
    gender: GenderArg,

    /// Images per query.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// Dataset root directory; category folders are created underneath.
    #[arg(long, default_value = "dataset")]
    dataset_dir: PathBuf,

    /// Run the browser with a visible window.
    #[arg(long)]
    headed: bool,

    /// Write the per-unit reports as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = HarvestConfig::builder()
        .dataset_dir(&cli.dataset_dir)
        .headless(!cli.headed)
        .build();

    let worklist = builtin_worklist(cli.gender.into(), cli.count as usize);
    tracing::info!(
        units = worklist.len(),
        per_query = cli.count,
        dataset_dir = %cli.dataset_dir.display(),
        "starting harvest"
    );

    let reports = harvest(&config, worklist).await?;

    let total: usize = reports.iter().map(|r| r.saved_count).sum();
    for report in &reports {
        tracing::info!(
            "{} -> {}: {} images",
            report.unit.query,
            report.unit.category,
            report.saved_count
        );
    }
    tracing::info!(total, "harvest complete");

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&reports).context("failed to serialize reports")?;
        std::fs::write(report_path, json)
            .with_context(|| format!("failed to write report to {}", report_path.display()))?;
        tracing::info!("report written to {}", report_path.display());
    }

    Ok(())
}
