//! Browser driver capability contract
//!
//! The loader and resolver only need a handful of page operations: navigate,
//! query elements, scroll, measure growth, and click. They are written
//! against the two traits below rather than a concrete automation layer, so
//! any driver honoring the contract is substitutable; the production
//! implementation wraps a chromiumoxide [`Page`], and the test suite
//! substitutes an in-memory mock.

use anyhow::{Context, Result};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;

/// One candidate image on the results page.
///
/// Handles are owned for the duration of one crawl unit and become stale
/// once the page navigates; a stale handle surfaces as an `Err`, which the
/// resolver treats the same as an unresolvable tile.
#[allow(async_fn_in_trait)]
pub trait TileHandle {
    /// Read an attribute of the underlying element, `None` when absent.
    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    /// Activate the element (native click).
    async fn click(&self) -> Result<()>;
}

/// The live search-results page.
#[allow(async_fn_in_trait)]
pub trait ImageSearchPage {
    type Tile: TileHandle;

    /// Navigate to `url` and wait for the load to finish.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// All elements currently matching a CSS selector, in document order.
    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Tile>>;

    /// Scroll the viewport to the bottom of the document.
    async fn scroll_to_bottom(&self) -> Result<()>;

    /// Current document height, the loader's page-growth signal.
    async fn content_height(&self) -> Result<i64>;

    /// Click the first element matching `selector` if one exists.
    /// Returns false when the selector matches nothing.
    async fn click_if_present(&self, selector: &str) -> Result<bool>;
}

/// Production driver backed by a chromiumoxide CDP page.
pub struct CdpPage {
    page: Page,
}

impl CdpPage {
    pub(crate) fn new(page: Page) -> Self {
        Self { page }
    }
}

impl ImageSearchPage for CdpPage {
    type Tile = CdpTile;

    async fn navigate(&self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .with_context(|| format!("failed to navigate to {url}"))?;
        self.page
            .wait_for_navigation()
            .await
            .context("failed to wait for page load")?;
        Ok(())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Tile>> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .with_context(|| format!("element query '{selector}' failed"))?;
        Ok(elements.into_iter().map(CdpTile).collect())
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.page
            .evaluate("window.scrollTo(0, document.body.scrollHeight)")
            .await
            .context("scroll script failed")?;
        Ok(())
    }

    async fn content_height(&self) -> Result<i64> {
        let result = self
            .page
            .evaluate("document.body.scrollHeight")
            .await
            .context("height probe failed")?;
        result
            .into_value::<i64>()
            .context("height probe returned a non-numeric value")
    }

    async fn click_if_present(&self, selector: &str) -> Result<bool> {
        match self.page.find_element(selector).await {
            Ok(element) => {
                element
                    .click()
                    .await
                    .with_context(|| format!("click on '{selector}' failed"))?;
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }
}

/// Tile handle backed by a CDP element.
pub struct CdpTile(Element);

impl TileHandle for CdpTile {
    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.0
            .attribute(name)
            .await
            .with_context(|| format!("reading attribute '{name}' failed"))
    }

    async fn click(&self) -> Result<()> {
        self.0.click().await.context("tile click failed")?;
        Ok(())
    }
}
