//! Result-set loader
//!
//! Issues the image-search query, grows the visible result set by scrolling
//! (with the "load more" affordance as a fallback once passive scrolling
//! stops producing growth), then locates result tiles through the ordered
//! selector chain. An exhausted chain is a reportable per-unit condition,
//! not a session failure.

use anyhow::{Context, Result};
use tokio::time::sleep;
use tracing::{debug, info};
use url::Url;

use crate::config::HarvestConfig;
use crate::crawl::driver::ImageSearchPage;
use crate::errors::LoaderError;
use crate::utils::constants::IMAGE_SEARCH_ENDPOINT;

/// Build the image-search results URL for a query.
pub(crate) fn image_search_url(query: &str, locale: &str) -> Result<Url> {
    let mut url = Url::parse(IMAGE_SEARCH_ENDPOINT).context("failed to parse search endpoint")?;
    url.query_pairs_mut()
        .append_pair("tbm", "isch")
        .append_pair("q", query)
        .append_pair("hl", locale);
    Ok(url)
}

/// Load the results page for `query` and return the ordered tile sequence.
///
/// `min_results` is an upper need, not a promise: the loader reveals as
/// much of the result set as the scroll loop reaches and may return fewer
/// or more tiles than requested (0 means "whatever is there").
///
/// The scroll loop runs up to `max_scroll_iterations` times; when the
/// document height stops growing, one "load more" click is attempted, and
/// if the affordance is absent the loop ends early. Early termination is
/// normal: it means the engine has no further results to reveal.
pub async fn collect_tiles<P: ImageSearchPage>(
    page: &P,
    query: &str,
    min_results: usize,
    config: &HarvestConfig,
) -> Result<Vec<P::Tile>, LoaderError> {
    let url = image_search_url(query, config.locale()).map_err(LoaderError::Session)?;

    info!(%query, "issuing image search");
    page.navigate(url.as_str())
        .await
        .map_err(|e| LoaderError::Session(e.context("navigation to image search failed")))?;
    sleep(config.search_settle()).await;

    let mut last_height = page
        .content_height()
        .await
        .map_err(LoaderError::Session)?;

    for iteration in 0..config.max_scroll_iterations() {
        page.scroll_to_bottom()
            .await
            .map_err(LoaderError::Session)?;
        sleep(config.scroll_settle()).await;

        let height = page
            .content_height()
            .await
            .map_err(LoaderError::Session)?;

        if height == last_height {
            // Growth stalled; remaining results sit behind the "load more"
            // affordance, which is not always present.
            match page.click_if_present(config.load_more_selector()).await {
                Ok(true) => {
                    debug!(iteration, "clicked load-more affordance");
                    sleep(config.scroll_settle()).await;
                }
                _ => {
                    debug!(iteration, "result set exhausted, stopping scroll loop");
                    break;
                }
            }
        }

        last_height = height;
    }

    for selector in config.tile_selectors() {
        match page.find_all(selector).await {
            Ok(tiles) if !tiles.is_empty() => {
                info!(selector = selector.as_str(), count = tiles.len(), "located result tiles");
                if tiles.len() < min_results {
                    debug!(
                        count = tiles.len(),
                        min_results, "revealed fewer tiles than requested"
                    );
                }
                return Ok(tiles);
            }
            Ok(_) => {}
            Err(e) => {
                debug!(selector = selector.as_str(), error = %e, "tile selector probe failed");
            }
        }
    }

    Err(LoaderError::NoResultsFound)
}
