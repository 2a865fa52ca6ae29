//! Character encoding detection for page snapshots delivered as bytes.
//!
//! Podcast hosting pages are mostly UTF-8, but older hosting templates still
//! declare legacy charsets. The declared charset is sniffed from the first
//! kilobyte and the bytes are decoded lossily.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `<meta charset="...">` or the `charset=` part of a Content-Type meta.
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// How far into the document to look for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Declared encoding of an HTML byte stream, UTF-8 when undeclared or unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    CHARSET_RE
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string, replacing invalid sequences with U+FFFD.
///
/// ```
/// use rs_podsearch::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body><h1>Caf\xE9</h1></body></html>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "lossy decode of page bytes");
    }
    decoded.into_owned()
}
