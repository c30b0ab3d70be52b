//! Worklist orchestration
//!
//! Runs crawl units strictly in sequence. Each unit gets a fresh browser
//! session that is torn down on every exit path; a failure that escapes the
//! per-tile isolation is absorbed at the unit boundary and becomes an empty
//! report, so one broken unit can never abort the worklist.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::HarvestConfig;
use crate::crawl::downloader::{DownloadOutcome, ImageFetcher};
use crate::crawl::driver::ImageSearchPage;
use crate::crawl::progress::ProgressReporter;
use crate::crawl::session::SearchSession;
use crate::crawl::{loader, resolver, storage};
use crate::errors::LoaderError;
use crate::worklist::{CrawlReport, CrawlUnit};

/// Run every unit in `worklist`, one report per unit, in order.
///
/// The only error this returns is a failure to construct the download
/// client; everything after that point is absorbed per unit.
pub async fn run_worklist(
    config: &HarvestConfig,
    worklist: Vec<CrawlUnit>,
    progress: &impl ProgressReporter,
) -> Result<Vec<CrawlReport>> {
    let fetcher = ImageFetcher::new(config)?;
    let mut reports = Vec::with_capacity(worklist.len());

    for unit in worklist {
        progress.report_unit_started(&unit);

        let report = match run_unit(config, &fetcher, &unit, progress).await {
            Ok(report) => report,
            Err(e) => {
                warn!(query = %unit.query, "unit aborted: {e:#}");
                progress.report_error(&format!("unit '{}' aborted: {e:#}", unit.query));
                CrawlReport::empty(unit)
            }
        };

        progress.report_unit_finished(&report);
        reports.push(report);
    }

    Ok(reports)
}

/// One unit: launch a session, run the pipeline, tear the session down
/// unconditionally, and only then surface the pipeline's result.
async fn run_unit(
    config: &HarvestConfig,
    fetcher: &ImageFetcher,
    unit: &CrawlUnit,
    progress: &impl ProgressReporter,
) -> Result<CrawlReport> {
    let session = SearchSession::launch(config).await?;
    progress.report_session_ready();

    let outcome = match session.new_page().await {
        Ok(page) => harvest_unit(&page, fetcher, unit, config, progress).await,
        Err(e) => Err(e),
    };

    session.shutdown().await;
    outcome
}

/// The browser-independent unit pipeline: grow and locate the result set,
/// then resolve and download tiles until the bound is reached or the tiles
/// run out.
///
/// Generic over the page contract so tests can drive it with a mock page.
pub async fn harvest_unit<P: ImageSearchPage>(
    page: &P,
    fetcher: &ImageFetcher,
    unit: &CrawlUnit,
    config: &HarvestConfig,
    progress: &impl ProgressReporter,
) -> Result<CrawlReport> {
    let tiles = match loader::collect_tiles(page, &unit.query, unit.max_count, config).await {
        Ok(tiles) => tiles,
        Err(LoaderError::NoResultsFound) => {
            // Selector chain exhausted: the page structure may have changed.
            // Reported, not fatal.
            warn!(query = %unit.query, "no result tiles found with any selector");
            progress.report_error(&format!("no results found for '{}'", unit.query));
            return Ok(CrawlReport::empty(unit.clone()));
        }
        Err(LoaderError::Session(e)) => return Err(e.context("result-set loading failed")),
    };

    let category_dir = storage::prepare_category_dir(config.dataset_dir(), &unit.category)
        .with_context(|| format!("failed to prepare category directory '{}'", unit.category))?;

    let mut saved = 0usize;
    for tile in &tiles {
        if saved >= unit.max_count {
            break;
        }

        let Some(image) = resolver::resolve(page, tile, &unit.query, saved + 1, config).await
        else {
            continue;
        };

        match fetcher.download(&image, &category_dir).await {
            DownloadOutcome::Saved { path } => {
                saved += 1;
                debug!(path = %path.display(), "image saved");
                progress.report_image_saved(&image.suggested_filename, saved, unit.max_count);
            }
            DownloadOutcome::Failed { error } => {
                debug!(url = %image.source_url, %error, "download failed, skipping");
            }
        }
    }

    info!(query = %unit.query, saved, "finished harvesting unit");
    Ok(CrawlReport {
        unit: unit.clone(),
        saved_count: saved,
    })
}
