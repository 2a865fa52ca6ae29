//! Error types for rs-podsearch.
//!
//! Most failures in this crate are expected and local: a locator that matches
//! nothing, a page that has not finished rendering, a closed player tab. Those
//! are folded into `None` / safe-negative values at the boundary. The variants
//! below exist for the places where a caller asks for a `Result` instead.

/// Error type for extraction and collaborator operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A locator could not be compiled (unsupported or malformed selector).
    #[error("Invalid locator `{locator}`: {reason}")]
    InvalidLocator {
        /// The locator text as written in the site profile.
        locator: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The page URL could not be parsed.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),

    /// The page (or player surface) could not be read or acted on.
    #[error("Page unavailable: {0}")]
    PageUnavailable(String),

    /// No title resolved from any locator.
    #[error("No title found")]
    NoTitle,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
