//! Search query composition.
//!
//! Joins the cleaned title and channel into one query and escapes it into
//! a Pocket Casts search URL.

/// Default search endpoint. The query is appended as the `q` parameter.
pub const POCKETCASTS_SEARCH: &str = "https://pocketcasts.com/search";

/// Join title and channel with a space and trim.
///
/// An empty channel degrades to just the title.
#[must_use]
pub fn build_search_query(title: &str, channel: &str) -> String {
    format!("{title} {channel}").trim().to_string()
}

/// Pocket Casts search URL for a free-text query.
///
/// Returns `None` for a blank query; nothing should be opened then.
///
/// Everything but ASCII alphanumerics and `-_.~` is percent-encoded, so
/// `!'()*` are escaped too (browsers' `encodeURIComponent` leaves them
/// as is). Both forms decode to the same query.
///
/// ```rust
/// use rs_podsearch::query::build_search_url;
///
/// assert_eq!(
///     build_search_url("test & query").as_deref(),
///     Some("https://pocketcasts.com/search?q=test%20%26%20query"),
/// );
/// assert_eq!(build_search_url("   "), None);
/// ```
#[must_use]
pub fn build_search_url(query: &str) -> Option<String> {
    build_search_url_with(POCKETCASTS_SEARCH, query)
}

/// Like [`build_search_url`] against a configured endpoint.
#[must_use]
pub fn build_search_url_with(endpoint: &str, query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("{endpoint}?q={}", urlencoding::encode(query)))
}

/// Search URL for the channel alone ("search channel only").
#[must_use]
pub fn build_channel_search_url(channel: &str) -> Option<String> {
    build_search_url(channel)
}
