//! URL acceptance policy and filename derivation.
//!
//! The resolver feeds every candidate URL through [`is_downloadable_url`]
//! before accepting it; file names for saved images are derived from the
//! query text by [`image_filename`].

use crate::utils::constants::IMAGE_FILE_EXT;

/// Check whether a candidate URL is worth downloading.
///
/// Accepts absolute HTTP(S) URLs only, and rejects anything hosted on the
/// search engine's own domains (`excluded_hosts` entries are matched as
/// substrings of the parsed host). Data URIs and other non-HTTP schemes are
/// rejected before parsing.
#[must_use]
pub fn is_downloadable_url(candidate: &str, excluded_hosts: &[String]) -> bool {
    if candidate.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if candidate.starts_with("data:")
        || candidate.starts_with("javascript:")
        || candidate.starts_with("blob:")
    {
        return false;
    }

    let Ok(parsed) = url::Url::parse(candidate) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = parsed.host_str() else {
        return false;
    };

    !excluded_hosts.iter().any(|excluded| host.contains(excluded.as_str()))
}

/// Reduce a query string to a form safe for file names.
///
/// Keeps alphanumerics (Unicode-aware, so non-Latin queries survive),
/// spaces, underscores and hyphens, trims the result, then collapses
/// spaces to underscores.
#[must_use]
pub fn sanitize_query(query: &str) -> String {
    let kept: String = query
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    kept.trim().replace(' ', "_")
}

/// File name for the `sequence`-th saved image of a query (1-based).
#[must_use]
pub fn image_filename(query: &str, sequence: usize) -> String {
    format!("{}_{}.{}", sanitize_query(query), sequence, IMAGE_FILE_EXT)
}
