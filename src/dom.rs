//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` with the handful of read-only operations the
//! locator strategy needs. Extraction never mutates the page.

pub use dom_query::{Document, Matcher, Selection};
pub use tendril::StrTendril;

use crate::error::{Error, Result};

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Compile a CSS selector.
///
/// `dom_query`'s `select` panics on a bad selector; locators come from
/// data tables, so they are compiled explicitly and a failure is reported
/// as [`Error::InvalidLocator`].
///
/// # Errors
///
/// Returns [`Error::InvalidLocator`] if the selector does not parse.
pub fn compile(css: &str) -> Result<Matcher> {
    Matcher::new(css).map_err(|err| Error::InvalidLocator {
        locator: css.to_string(),
        reason: format!("{err:?}"),
    })
}

/// First element matching a CSS selector, if any.
///
/// # Errors
///
/// Returns [`Error::InvalidLocator`] if the selector does not parse.
pub fn query_first<'a>(doc: &'a Document, css: &str) -> Result<Option<Selection<'a>>> {
    let matcher = compile(css)?;
    let found = doc.select_matcher(&matcher);
    if found.exists() {
        Ok(Some(found.first()))
    } else {
        Ok(None)
    }
}

/// Whether any element matches a CSS selector. Bad selectors count as no.
#[must_use]
pub fn exists(doc: &Document, css: &str) -> bool {
    matches!(query_first(doc, css), Ok(Some(_)))
}

/// All text content of a node and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// `content` of the first `<meta>` whose `property` or `name` equals `key`
/// (ASCII case-insensitive).
#[must_use]
pub fn meta_content(doc: &Document, key: &str) -> Option<String> {
    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);
        let name = get_attribute(&meta, "property").or_else(|| get_attribute(&meta, "name"));

        if name.is_some_and(|n| n.eq_ignore_ascii_case(key)) {
            if let Some(content) = get_attribute(&meta, "content") {
                return Some(content);
            }
        }
    }
    None
}

/// Raw text of every `<script type="application/ld+json">` block.
#[must_use]
pub fn json_ld_blocks(doc: &Document) -> Vec<String> {
    doc.select(r#"script[type="application/ld+json"]"#)
        .nodes()
        .iter()
        .map(|node| text_content(&Selection::from(*node)).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}
