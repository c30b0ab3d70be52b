//! Type-safe builder for `HarvestConfig` using the typestate pattern
//!
//! The dataset directory is the one field without a sensible default, so
//! `build()` only exists once `dataset_dir()` has been called.

use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{HarvestConfig, to_owned_list};
use crate::utils::constants::{
    CHROME_USER_AGENT, DEFAULT_EXCLUDED_HOSTS, DEFAULT_LOAD_MORE_SELECTOR, DEFAULT_LOCALE,
    DEFAULT_MAX_SCROLL_ITERATIONS, DEFAULT_PREVIEW_SELECTORS, DEFAULT_PREVIEW_SETTLE_MS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SCROLL_SETTLE_MS, DEFAULT_SEARCH_SETTLE_MS,
    DEFAULT_TILE_SELECTORS,
};

// Type state marking that the dataset directory has been provided.
pub struct WithDatasetDir;

pub struct HarvestConfigBuilder<State = ()> {
    pub(crate) dataset_dir: Option<PathBuf>,
    pub(crate) headless: bool,
    pub(crate) locale: String,
    pub(crate) max_scroll_iterations: usize,
    pub(crate) search_settle_ms: u64,
    pub(crate) scroll_settle_ms: u64,
    pub(crate) preview_settle_ms: u64,
    pub(crate) tile_selectors: Vec<String>,
    pub(crate) preview_selectors: Vec<String>,
    pub(crate) load_more_selector: String,
    pub(crate) excluded_hosts: Vec<String>,
    pub(crate) accept_invalid_certs: bool,
    pub(crate) request_timeout_secs: u64,
    pub(crate) user_agent: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for HarvestConfigBuilder<()> {
    fn default() -> Self {
        Self {
            dataset_dir: None,
            headless: true,
            locale: DEFAULT_LOCALE.to_string(),
            max_scroll_iterations: DEFAULT_MAX_SCROLL_ITERATIONS,
            search_settle_ms: DEFAULT_SEARCH_SETTLE_MS,
            scroll_settle_ms: DEFAULT_SCROLL_SETTLE_MS,
            preview_settle_ms: DEFAULT_PREVIEW_SETTLE_MS,
            tile_selectors: to_owned_list(DEFAULT_TILE_SELECTORS),
            preview_selectors: to_owned_list(DEFAULT_PREVIEW_SELECTORS),
            load_more_selector: DEFAULT_LOAD_MORE_SELECTOR.to_string(),
            excluded_hosts: to_owned_list(DEFAULT_EXCLUDED_HOSTS),
            accept_invalid_certs: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: CHROME_USER_AGENT.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl HarvestConfig {
    /// Create a builder for configuring a `HarvestConfig` with a fluent
    /// interface.
    #[must_use]
    pub fn builder() -> HarvestConfigBuilder<()> {
        HarvestConfigBuilder::default()
    }
}

impl HarvestConfigBuilder<()> {
    pub fn dataset_dir(self, dir: impl Into<PathBuf>) -> HarvestConfigBuilder<WithDatasetDir> {
        HarvestConfigBuilder {
            dataset_dir: Some(dir.into()),
            headless: self.headless,
            locale: self.locale,
            max_scroll_iterations: self.max_scroll_iterations,
            search_settle_ms: self.search_settle_ms,
            scroll_settle_ms: self.scroll_settle_ms,
            preview_settle_ms: self.preview_settle_ms,
            tile_selectors: self.tile_selectors,
            preview_selectors: self.preview_selectors,
            load_more_selector: self.load_more_selector,
            excluded_hosts: self.excluded_hosts,
            accept_invalid_certs: self.accept_invalid_certs,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
            _phantom: PhantomData,
        }
    }
}

// Optional knobs, available in any state.
impl<State> HarvestConfigBuilder<State> {
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn max_scroll_iterations(mut self, iterations: usize) -> Self {
        self.max_scroll_iterations = iterations;
        self
    }

    /// Settle interval after the initial search navigation, in milliseconds.
    #[must_use]
    pub fn search_settle_ms(mut self, ms: u64) -> Self {
        self.search_settle_ms = ms;
        self
    }

    /// Settle interval after each scroll, in milliseconds.
    #[must_use]
    pub fn scroll_settle_ms(mut self, ms: u64) -> Self {
        self.scroll_settle_ms = ms;
        self
    }

    /// Settle interval after activating a tile, in milliseconds.
    #[must_use]
    pub fn preview_settle_ms(mut self, ms: u64) -> Self {
        self.preview_settle_ms = ms;
        self
    }

    /// Replace the tile selector chain (ordered, most specific first).
    #[must_use]
    pub fn tile_selectors(mut self, selectors: Vec<String>) -> Self {
        self.tile_selectors = selectors;
        self
    }

    /// Replace the full-resolution preview selector chain.
    #[must_use]
    pub fn preview_selectors(mut self, selectors: Vec<String>) -> Self {
        self.preview_selectors = selectors;
        self
    }

    #[must_use]
    pub fn load_more_selector(mut self, selector: impl Into<String>) -> Self {
        self.load_more_selector = selector.into();
        self
    }

    #[must_use]
    pub fn excluded_hosts(mut self, hosts: Vec<String>) -> Self {
        self.excluded_hosts = hosts;
        self
    }

    /// Control TLS certificate validation on the download client.
    #[must_use]
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// Build method only available once the dataset directory is set.
impl HarvestConfigBuilder<WithDatasetDir> {
    #[must_use]
    pub fn build(self) -> HarvestConfig {
        let Some(dataset_dir) = self.dataset_dir else {
            // The typestate guarantees dataset_dir was provided.
            unreachable!("builder reached WithDatasetDir without a dataset_dir");
        };

        HarvestConfig {
            dataset_dir,
            headless: self.headless,
            locale: self.locale,
            max_scroll_iterations: self.max_scroll_iterations,
            search_settle_ms: self.search_settle_ms,
            scroll_settle_ms: self.scroll_settle_ms,
            preview_settle_ms: self.preview_settle_ms,
            tile_selectors: self.tile_selectors,
            preview_selectors: self.preview_selectors,
            load_more_selector: self.load_more_selector,
            excluded_hosts: self.excluded_hosts,
            accept_invalid_certs: self.accept_invalid_certs,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
        }
    }
}
