//! Progress reporting abstraction for harvest runs
//!
//! The orchestrator reports lifecycle events through this trait so the same
//! pipeline serves the CLI (console lines), tests (no-op), or any embedding
//! that wants to render progress differently.

use crate::worklist::{CrawlReport, CrawlUnit};

/// Lifecycle event sink for a harvest run.
pub trait ProgressReporter: Send + Sync {
    /// A unit is about to start.
    fn report_unit_started(&self, unit: &CrawlUnit);

    /// The unit's browser session is up.
    fn report_session_ready(&self);

    /// An image was written; `saved` of `max_count` so far.
    fn report_image_saved(&self, filename: &str, saved: usize, max_count: usize);

    /// A unit finished (possibly empty).
    fn report_unit_finished(&self, report: &CrawlReport);

    /// A unit-level failure was absorbed.
    fn report_error(&self, error: &str);
}

/// Progress reporter that does nothing.
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_unit_started(&self, _unit: &CrawlUnit) {}

    #[inline(always)]
    fn report_session_ready(&self) {}

    #[inline(always)]
    fn report_image_saved(&self, _filename: &str, _saved: usize, _max_count: usize) {}

    #[inline(always)]
    fn report_unit_finished(&self, _report: &CrawlReport) {}

    #[inline(always)]
    fn report_error(&self, _error: &str) {}
}

/// Console reporter mirroring the running-count log lines a batch run needs.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn report_unit_started(&self, unit: &CrawlUnit) {
        tracing::info!(
            query = %unit.query,
            category = %unit.category,
            max_count = unit.max_count,
            "starting crawl unit"
        );
    }

    fn report_session_ready(&self) {
        tracing::debug!("browser session ready");
    }

    fn report_image_saved(&self, filename: &str, saved: usize, max_count: usize) {
        tracing::info!("[{saved}/{max_count}] saved {filename}");
    }

    fn report_unit_finished(&self, report: &CrawlReport) {
        tracing::info!(
            query = %report.unit.query,
            saved = report.saved_count,
            "unit finished"
        );
    }

    fn report_error(&self, error: &str) {
        tracing::warn!("{error}");
    }
}
