//! Locator Resolution
//!
//! A locator is a typed hint for where a piece of text might live on a page.
//! Sites publish ordered lists of them; [`first_accepted`] walks a list and
//! returns the first text that resolves, is non-empty, and is not rejected.
//!
//! Resolution failures are never fatal. A locator that matches nothing, yields
//! blank text, or cannot even be compiled is skipped and the next one is tried.

use dom_query::Document;

use crate::dom;
use crate::error::Result;

pub mod json_ld;
pub mod navigation;

pub use navigation::is_navigation_title;

/// A text rejection rule. Returns `true` for text that must be skipped.
///
/// Rules are plain functions so site profiles can stay `'static` data.
pub type Rule = fn(&str) -> bool;

/// Rule that rejects nothing.
#[must_use]
pub fn accept_all(_text: &str) -> bool {
    false
}

/// Where to look for a candidate text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// CSS selector; the first match's text content.
    Element(&'static str),

    /// `<meta>` keyed by `property` or `name`; its `content` attribute.
    Meta(&'static str),

    /// Dotted path into any JSON-LD object on the page, e.g. `partOfSeries.name`.
    JsonLd(&'static str),

    /// Dotted path into JSON-LD objects whose `@type` is one of the listed types.
    JsonLdOf(&'static [&'static str], &'static str),
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(css) => write!(f, "{css}"),
            Self::Meta(key) => write!(f, "meta[{key}]"),
            Self::JsonLd(path) => write!(f, "ld+json:{path}"),
            Self::JsonLdOf(types, path) => write!(f, "ld+json[{}]:{path}", types.join("|")),
        }
    }
}

/// Text accepted from a locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Trimmed text.
    pub text: String,

    /// The locator that produced it.
    pub locator: Locator,
}

/// Resolve one locator to trimmed, non-empty text.
///
/// `Ok(None)` means the locator matched nothing or only whitespace.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidLocator`] for an element locator whose CSS
/// does not compile.
pub fn resolve(doc: &Document, locator: &Locator) -> Result<Option<String>> {
    let raw = match locator {
        Locator::Element(css) => {
            dom::query_first(doc, css)?.map(|found| dom::text_content(&found).to_string())
        }
        Locator::Meta(key) => dom::meta_content(doc, key),
        Locator::JsonLd(path) => json_ld::lookup(doc, path),
        Locator::JsonLdOf(types, path) => json_ld::lookup_typed(doc, types, path),
    };

    Ok(raw
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty()))
}

/// Walk `locators` in order and return the first accepted text.
///
/// A candidate is accepted when it resolves to non-empty text for which
/// `reject` returns `false`. Errors are logged and treated as misses.
#[must_use]
pub fn first_accepted(doc: &Document, locators: &[Locator], reject: Rule) -> Option<Resolved> {
    for locator in locators {
        match resolve(doc, locator) {
            Ok(Some(text)) => {
                if reject(&text) {
                    tracing::debug!(%locator, text = %text, "rejected navigational text");
                    continue;
                }
                tracing::debug!(%locator, text = %text, "locator matched");
                return Some(Resolved { text, locator: *locator });
            }
            Ok(None) => {
                tracing::trace!(%locator, "locator missed");
            }
            Err(err) => {
                tracing::warn!(%locator, error = %err, "skipping malformed locator");
            }
        }
    }
    None
}

/// [`first_accepted`] reduced to the text, or `""` when nothing matched.
#[must_use]
pub fn first_text(doc: &Document, locators: &[Locator], reject: Rule) -> String {
    first_accepted(doc, locators, reject)
        .map(|resolved| resolved.text)
        .unwrap_or_default()
}
