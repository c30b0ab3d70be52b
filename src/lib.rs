//! faceharvest: a browser-driven image harvester that builds labeled
//! face-image datasets from web image search.
//!
//! The pipeline per crawl unit: grow the visible result set on the search
//! engine's results page, resolve each tile to a full-resolution URL through
//! ordered selector chains, and download the survivors into a
//! category-scoped directory, isolating every per-item failure.

pub mod browser_setup;
pub mod config;
pub mod crawl;
pub mod errors;
pub mod utils;
pub mod worklist;

pub use config::HarvestConfig;
pub use crawl::{
    ConsoleProgress, DownloadOutcome, ImageFetcher, ImageSearchPage, NoOpProgress,
    ProgressReporter, ResolvedImage, SearchSession, TileHandle,
};
pub use errors::{DownloadError, LoaderError};
pub use worklist::{CrawlReport, CrawlUnit, GroupSelection, builtin_worklist};

use anyhow::Result;

/// Run a worklist with console progress reporting.
pub async fn harvest(config: &HarvestConfig, worklist: Vec<CrawlUnit>) -> Result<Vec<CrawlReport>> {
    crawl::orchestrator::run_worklist(config, worklist, &ConsoleProgress).await
}
