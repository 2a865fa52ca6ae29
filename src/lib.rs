//! # rs-podsearch
//!
//! Extracts an episode title and show/channel name from podcast and video
//! pages (YouTube, Spotify, Apple Podcasts, and generic podcast hosting
//! pages), cleans the pair, and turns it into a Pocket Casts search.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_podsearch::extract;
//!
//! let html = r#"<html><body>
//!   <h1 class="title">#45 - The Big Discussion | Lex Fridman Podcast</h1>
//!   <div id="channel-name"><a>Lex Fridman</a></div>
//! </body></html>"#;
//!
//! let result = extract(html, "https://www.youtube.com/watch?v=abc").unwrap();
//! assert_eq!(result.title, "The Big Discussion");
//! assert_eq!(result.channel, "Lex Fridman");
//! assert_eq!(
//!     result.search_url().as_deref(),
//!     Some("https://pocketcasts.com/search?q=The%20Big%20Discussion%20Lex%20Fridman"),
//! );
//! ```
//!
//! ## Pipeline
//!
//! - **Dispatch**: the page URL picks a site profile ([`site`])
//! - **Resolution**: ordered locators are tried until one yields accepted text ([`selector`])
//! - **Normalization**: titles and channels are cleaned and deduplicated ([`normalize`])
//! - **Query**: the pair becomes a search URL ([`query`])
//!
//! Extraction is synchronous and stateless. Retrying a page that is still
//! rendering is layered on top in [`page`].

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Title/channel cleaning and duplicate detection.
pub mod normalize;

/// Live page boundary (retrying extraction, opening searches).
pub mod page;

/// Compiled regex patterns.
pub mod patterns;

/// Pocket Casts player boundary.
pub mod player;

/// Search query and URL composition.
pub mod query;

/// Bounded fixed-delay retry.
pub mod retry;

/// Locator types and first-accepted resolution.
pub mod selector;

/// Site detection and per-site locator profiles.
pub mod site;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{create_cleaned_result, ExtractionResult, PlayerState};
pub use site::Site;

/// Extracts the title/channel pair from an HTML snapshot of `url`.
///
/// Returns `None` when no title can be found.
///
/// # Example
///
/// ```rust
/// use rs_podsearch::extract;
///
/// assert!(extract("<html><body></body></html>", "https://example.com/").is_none());
/// ```
#[must_use]
pub fn extract(html: &str, url: &str) -> Option<ExtractionResult> {
    extract_with_options(html, &Options::for_url(url))
}

/// Extracts the title/channel pair with custom options.
///
/// The page URL is taken from `options.url`; without one the generic site
/// profile is used.
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> Option<ExtractionResult> {
    let document = dom::parse(html);
    site::extract_document(&document, options)
}

/// Extracts from HTML bytes with charset detection.
///
/// # Example
///
/// ```rust
/// use rs_podsearch::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><h1>Caf\xE9 Stories</h1></body></html>";
/// let result = extract_bytes(html, "https://example.com/ep/1").unwrap();
/// assert_eq!(result.title, "Café Stories");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], url: &str) -> Option<ExtractionResult> {
    extract_bytes_with_options(html, &Options::for_url(url))
}

/// Extracts from HTML bytes with charset detection and custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Option<ExtractionResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Like [`extract_with_options`], for callers that prefer a `Result`.
///
/// # Errors
///
/// Returns [`Error::NoTitle`] when no title can be found.
pub fn extract_or_err(html: &str, options: &Options) -> Result<ExtractionResult> {
    extract_with_options(html, options).ok_or(Error::NoTitle)
}
