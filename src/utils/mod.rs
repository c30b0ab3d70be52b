//! Shared utilities: default constants and URL/filename helpers.

pub mod constants;
pub mod url_utils;

pub use constants::{
    CHROME_USER_AGENT, DEFAULT_EXCLUDED_HOSTS, DEFAULT_LOAD_MORE_SELECTOR,
    DEFAULT_PREVIEW_SELECTORS, DEFAULT_TILE_SELECTORS, IMAGE_SEARCH_ENDPOINT,
};
pub use url_utils::{image_filename, is_downloadable_url, sanitize_query};
