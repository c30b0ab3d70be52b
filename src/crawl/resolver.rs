//! Per-tile URL resolution
//!
//! Turns a result tile into a downloadable full-resolution URL, or into
//! nothing. The strategy order: accept the tile's own rendered source when
//! it already passes the URL policy (some thumbnails ARE the original),
//! otherwise activate the tile and scan the preview pane through the
//! ordered selector chain. Every failure mode, including a stale handle or
//! an element removed mid-interaction, collapses to `None` so the batch
//! keeps moving.

use anyhow::Result;
use tokio::time::sleep;
use tracing::debug;

use crate::config::HarvestConfig;
use crate::crawl::driver::{ImageSearchPage, TileHandle};
use crate::utils::url_utils::{image_filename, is_downloadable_url};

/// A tile resolved to a fetchable image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// Absolute HTTP(S) URL off the engine's own hosts.
    pub source_url: String,
    /// File name the downloader will write, unique within the unit.
    pub suggested_filename: String,
}

/// Resolve one tile. `sequence` is the 1-based index the saved file will
/// carry (the count of successes so far plus one, so a failed download
/// frees its index for the next tile).
pub async fn resolve<P: ImageSearchPage>(
    page: &P,
    tile: &P::Tile,
    query: &str,
    sequence: usize,
    config: &HarvestConfig,
) -> Option<ResolvedImage> {
    match probe_tile(page, tile, config).await {
        Ok(Some(source_url)) => Some(ResolvedImage {
            source_url,
            suggested_filename: image_filename(query, sequence),
        }),
        Ok(None) => {
            debug!(sequence, "tile yielded no usable image URL");
            None
        }
        Err(e) => {
            // Stale handles and mid-interaction DOM churn land here; both
            // are equivalent to an unresolvable tile.
            debug!(sequence, error = %e, "tile probe failed, treating as unresolved");
            None
        }
    }
}

async fn probe_tile<P: ImageSearchPage>(
    page: &P,
    tile: &P::Tile,
    config: &HarvestConfig,
) -> Result<Option<String>> {
    // Strategy 1: the rendered thumbnail source may already be full quality.
    if let Some(src) = tile.attribute("src").await?
        && is_downloadable_url(&src, config.excluded_hosts())
    {
        return Ok(Some(src));
    }

    // Strategy 2: activate the tile and wait for the preview pane to swap
    // its placeholder for the full-resolution URL.
    tile.click().await?;
    sleep(config.preview_settle()).await;

    for selector in config.preview_selectors() {
        let candidates = match page.find_all(selector).await {
            Ok(candidates) => candidates,
            Err(e) => {
                debug!(selector = selector.as_str(), error = %e, "preview selector probe failed");
                continue;
            }
        };

        for candidate in candidates {
            match candidate.attribute("src").await {
                Ok(Some(src)) if is_downloadable_url(&src, config.excluded_hosts()) => {
                    return Ok(Some(src));
                }
                Ok(_) => {}
                // A single vanished element must not end the scan.
                Err(_) => continue,
            }
        }
    }

    Ok(None)
}
