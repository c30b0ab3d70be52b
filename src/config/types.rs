//! Core configuration types for the harvest pipeline
//!
//! [`HarvestConfig`] carries everything the pipeline treats as tunable data:
//! destination directory, settle intervals, scroll bound, and the selector
//! chains that track the search engine's shifting DOM. The chains live here
//! as configuration so they can be retuned without touching control flow.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::constants::{
    CHROME_USER_AGENT, DEFAULT_EXCLUDED_HOSTS, DEFAULT_LOAD_MORE_SELECTOR, DEFAULT_LOCALE,
    DEFAULT_MAX_SCROLL_ITERATIONS, DEFAULT_PREVIEW_SELECTORS, DEFAULT_PREVIEW_SETTLE_MS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SCROLL_SETTLE_MS, DEFAULT_SEARCH_SETTLE_MS,
    DEFAULT_TILE_SELECTORS,
};

/// Configuration for a harvest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Root directory of the dataset tree; category directories are created
    /// underneath it.
    pub(crate) dataset_dir: PathBuf,
    /// Run the browser without a visible window.
    pub(crate) headless: bool,
    /// Interface locale forwarded to the search engine and the browser.
    pub(crate) locale: String,
    /// Upper bound on scroll-and-settle iterations per unit.
    pub(crate) max_scroll_iterations: usize,
    pub(crate) search_settle_ms: u64,
    pub(crate) scroll_settle_ms: u64,
    pub(crate) preview_settle_ms: u64,
    /// Ordered tile selector chain, most recent UI version first.
    pub(crate) tile_selectors: Vec<String>,
    /// Ordered full-resolution preview selector chain.
    pub(crate) preview_selectors: Vec<String>,
    pub(crate) load_more_selector: String,
    /// Host substrings whose URLs are never accepted as image sources.
    pub(crate) excluded_hosts: Vec<String>,
    /// Disable TLS certificate validation on the download client.
    ///
    /// Image hosts reached through search results routinely present
    /// certificates that do not validate outside a full browser stack, so
    /// this defaults to true. It is a per-client setting, never process
    /// state.
    pub(crate) accept_invalid_certs: bool,
    pub(crate) request_timeout_secs: u64,
    pub(crate) user_agent: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            dataset_dir: PathBuf::from("dataset"),
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
        }
    }
}

pub(crate) fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl HarvestConfig {
    #[must_use]
    pub fn dataset_dir(&self) -> &Path {
        &self.dataset_dir
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn max_scroll_iterations(&self) -> usize {
        self.max_scroll_iterations
    }

    #[must_use]
    pub fn search_settle(&self) -> Duration {
        Duration::from_millis(self.search_settle_ms)
    }

    #[must_use]
    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }

    #[must_use]
    pub fn preview_settle(&self) -> Duration {
        Duration::from_millis(self.preview_settle_ms)
    }

    #[must_use]
    pub fn tile_selectors(&self) -> &[String] {
        &self.tile_selectors
    }

    #[must_use]
    pub fn preview_selectors(&self) -> &[String] {
        &self.preview_selectors
    }

    #[must_use]
    pub fn load_more_selector(&self) -> &str {
        &self.load_more_selector
    }

    #[must_use]
    pub fn excluded_hosts(&self) -> &[String] {
        &self.excluded_hosts
    }

    #[must_use]
    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
