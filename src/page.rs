//! Live page boundary.
//!
//! The extraction core works on one HTML snapshot. A browser extension, a
//! headless browser or a test double supplies snapshots through
//! [`PageSource`]; this module layers the retry policy and fault handling on
//! top so a closed tab or a half-rendered page ends in `None`, never a panic
//! or an error the caller has to unwrap.

use crate::error::Result;
use crate::result::ExtractionResult;
use crate::{query, Options};

/// Read access to a page in some browsing context.
pub trait PageSource {
    /// Current URL of the page.
    fn url(&self) -> String;

    /// Serialized HTML of the page as it is right now.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PageUnavailable`] when the page cannot be read.
    fn snapshot(&self) -> Result<String>;
}

/// Something that can open a URL in a new browsing context.
pub trait SearchOpener {
    /// Open `url`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PageUnavailable`] when nothing could be opened.
    fn open(&self, url: &str) -> Result<()>;
}

/// Extract from a live page, re-reading it per the retry policy.
///
/// Every attempt takes a fresh snapshot. `options.url` is ignored in favor of
/// the page's own URL. A page that cannot be read ends the attempt loop and
/// yields `None`.
pub fn extract_from_page<P: PageSource + ?Sized>(
    page: &P,
    options: &Options,
) -> Option<ExtractionResult> {
    let outcome = options.retry.try_run(|attempt| -> Result<Option<ExtractionResult>> {
        let html = page.snapshot()?;
        let opts = Options {
            url: Some(page.url()),
            ..options.clone()
        };
        tracing::debug!(attempt, url = ?opts.url, "reading page");
        Ok(crate::extract_with_options(&html, &opts))
    });

    match outcome {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(error = %err, "page extraction failed");
            None
        }
    }
}

/// Open a search for `query` at the configured endpoint.
///
/// Returns `false` without calling the opener for a blank query, and
/// `false` if the opener fails.
pub fn open_search<O: SearchOpener + ?Sized>(opener: &O, query: &str, options: &Options) -> bool {
    let Some(url) = query::build_search_url_with(&options.search_endpoint, query) else {
        return false;
    };

    match opener.open(&url) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(url = %url, error = %err, "could not open search");
            false
        }
    }
}
