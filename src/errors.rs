//! Error taxonomy for the harvest pipeline.
//!
//! Only two conditions are modeled as error types. Everything per-tile or
//! per-image is an explicit outcome value instead (`Option<ResolvedImage>`
//! from the resolver, [`DownloadOutcome`](crate::crawl::downloader::DownloadOutcome)
//! from the downloader), so a failed item can never abort a batch by
//! accident.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the result-set loader.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Every configured tile selector matched zero elements. Reported per
    /// unit; the orchestrator turns it into an empty report and moves on.
    #[error("no result tiles matched any configured selector pattern")]
    NoResultsFound,

    /// The browser session itself failed while the result set was being
    /// grown. Escalates to the unit boundary.
    #[error("browser session error while loading results: {0}")]
    Session(#[source] anyhow::Error),
}

/// Cause carried inside a failed download outcome.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Request construction, transport, or a non-2xx response status.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The bytes arrived but could not be written to disk.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// HTTP status of the failed response, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            DownloadError::Request(e) => e.status().map(|s| s.as_u16()),
            DownloadError::Write { .. } => None,
        }
    }
}
