//! Shared configuration constants for faceharvest
//!
//! Default values used throughout the codebase. The selector chains are the
//! volatile part: the search engine reshuffles its DOM class names without
//! notice, so every chain is ordered most-recent UI version first and is
//! carried as plain data that `HarvestConfig` can override.

/// Image-search entry point. The query and locale are appended as
/// URL-encoded query pairs (`tbm=isch` selects the image vertical).
pub const IMAGE_SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Ordered selector chain for locating result tiles on the results page.
///
/// Union of every tile selector observed across UI versions. The first
/// pattern yielding a non-empty set wins; an exhausted chain means the page
/// structure changed again and the chain needs a new entry at the front.
pub const DEFAULT_TILE_SELECTORS: &[&str] = &[
    "img.YQ4gaf",
    "img.rg_i",
    ".rg_i.Q4LuWd",
    "div[data-id] img",
    "img.Q4LuWd",
    "div.eA0Zlc img",
    "img[data-src]",
];

/// Ordered selector chain for the full-resolution preview image that the
/// engine renders after a tile is activated.
pub const DEFAULT_PREVIEW_SELECTORS: &[&str] = &[
    "img.sFlh5c.pT0Scc",
    "img.sFlh5c",
    "img.n3VNCb",
    "img.iPVvYb",
    "img[jsname='HiaYvf']",
    "img[jsname='kn3ccd']",
];

/// "More results" affordance shown once passive scrolling stops growing
/// the page.
pub const DEFAULT_LOAD_MORE_SELECTOR: &str = ".mye4qd";

/// Host substrings identifying the search engine's own asset hosts.
///
/// URLs on these hosts are thumbnails or internal assets, never the
/// original image, so the resolver rejects them outright.
pub const DEFAULT_EXCLUDED_HOSTS: &[&str] = &["google.", "gstatic.", "googleusercontent."];

/// Upper bound on scroll-and-settle iterations while growing the result set.
pub const DEFAULT_MAX_SCROLL_ITERATIONS: usize = 10;

/// Settle time after the initial search navigation, in milliseconds.
pub const DEFAULT_SEARCH_SETTLE_MS: u64 = 2_000;

/// Settle time after each scroll-to-bottom, in milliseconds.
///
/// The engine lazy-loads tiles on scroll; reading the document height
/// before the new batch renders would terminate the loop early.
pub const DEFAULT_SCROLL_SETTLE_MS: u64 = 1_500;

/// Settle time after activating a tile, in milliseconds. The preview pane
/// swaps its placeholder thumbnail for the full-resolution URL asynchronously.
pub const DEFAULT_PREVIEW_SETTLE_MS: u64 = 1_500;

/// Timeout for a single image download request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Extension appended to every saved image file.
pub const IMAGE_FILE_EXT: &str = "jpg";

/// Interface locale passed to the search engine (`hl` parameter) and to the
/// browser process (`--lang`).
pub const DEFAULT_LOCALE: &str = "ko";

/// Chrome user agent string for stealth mode
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
/// Next update: 2025-04-29 (quarterly schedule)
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
