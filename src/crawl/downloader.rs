//! Image downloading
//!
//! One reqwest client per run, configured with a browser user agent (image
//! hosts reject obvious bots) and the certificate-validation flag from the
//! config. Every download produces an explicit [`DownloadOutcome`]; nothing
//! in here returns an error to the caller.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::HarvestConfig;
use crate::crawl::resolver::ResolvedImage;
use crate::errors::DownloadError;

/// Result of one download attempt.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// Bytes fetched and written.
    Saved { path: PathBuf },
    /// Fetch or write failed; the cause is carried, the batch continues.
    Failed { error: DownloadError },
}

impl DownloadOutcome {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self, DownloadOutcome::Saved { .. })
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            DownloadOutcome::Saved { path } => Some(path),
            DownloadOutcome::Failed { .. } => None,
        }
    }
}

/// HTTP fetch collaborator for resolved images.
pub struct ImageFetcher {
    client: reqwest::Client,
}

impl ImageFetcher {
    /// Build the client. Certificate validation follows
    /// `config.accept_invalid_certs()`; the trade-off is scoped to this
    /// client instead of ambient process state.
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs())
            .build()
            .context("failed to build download client")?;
        Ok(Self { client })
    }

    /// Fetch `image.source_url` and write it to
    /// `<dest_dir>/<image.suggested_filename>`.
    ///
    /// Creates or overwrites exactly one file on success.
    pub async fn download(&self, image: &ResolvedImage, dest_dir: &Path) -> DownloadOutcome {
        let path = dest_dir.join(&image.suggested_filename);

        let bytes = match self.fetch_bytes(&image.source_url).await {
            Ok(bytes) => bytes,
            Err(error) => {
                log::warn!("Failed to download image from {}: {error}", image.source_url);
                return DownloadOutcome::Failed { error };
            }
        };

        match tokio::fs::write(&path, &bytes).await {
            Ok(()) => DownloadOutcome::Saved { path },
            Err(source) => DownloadOutcome::Failed {
                error: DownloadError::Write { path, source },
            },
        }
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
