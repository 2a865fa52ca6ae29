//! Configuration options for extraction.
//!
//! The `Options` struct carries the page URL used for site dispatch plus the
//! few knobs callers may want to turn.

use crate::query::POCKETCASTS_SEARCH;
use crate::retry::RetryPolicy;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_podsearch::Options;
///
/// let options = Options {
///     url: Some("https://open.spotify.com/episode/abc".to_string()),
///     ..Options::default()
/// };
/// assert!(options.filter_navigation);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// URL of the page being extracted.
    ///
    /// Picks the site profile. Without it the generic profile is used.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Search endpoint; the query is appended as `?q=`.
    ///
    /// Default: `https://pocketcasts.com/search`
    pub search_endpoint: String,

    /// Retry policy for live pages (see [`crate::page`]).
    ///
    /// Default: two attempts, two seconds apart
    pub retry: RetryPolicy,

    /// Skip candidates that look like site navigation.
    ///
    /// Only affects profiles that filter at all (YouTube never does).
    ///
    /// Default: `true`
    pub filter_navigation: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            search_endpoint: POCKETCASTS_SEARCH.to_string(),
            retry: RetryPolicy::default(),
            filter_navigation: true,
        }
    }
}

impl Options {
    /// Default options for a page URL.
    #[must_use]
    pub fn for_url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Self::default()
        }
    }
}
