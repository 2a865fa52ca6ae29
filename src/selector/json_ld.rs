//! JSON-LD Locators
//!
//! Podcast pages frequently embed Schema.org `PodcastEpisode` /
//! `PodcastSeries` data. A JSON-LD locator is a dotted path such as
//! `partOfSeries.name` that is tried against every object on the page,
//! including members of `@graph` arrays and nested objects.
//!
//! A typed lookup only starts the path at objects whose `@type` is in a given
//! list, so a page-level `Organization` or `WebSite` name cannot pass for an
//! episode title.

use dom_query::Document;
use serde_json::Value;

use crate::dom;

/// Schema.org types that describe a single playable episode or video.
pub const EPISODE_TYPES: &[&str] = &[
    "PodcastEpisode",
    "Episode",
    "RadioEpisode",
    "VideoObject",
    "AudioObject",
];

/// First string found at `path` in any JSON-LD object on the page.
///
/// Scripts that fail to parse are skipped. A path segment that lands on an
/// array is tried against each element.
#[must_use]
pub fn lookup(doc: &Document, path: &str) -> Option<String> {
    lookup_typed(doc, &[], path)
}

/// Like [`lookup`], but the path only starts at objects whose `@type` is one
/// of `types`. An empty `types` accepts every object.
#[must_use]
pub fn lookup_typed(doc: &Document, types: &[&str], path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return None;
    }

    for block in dom::json_ld_blocks(doc) {
        let data: Value = match serde_json::from_str(&block) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unparseable JSON-LD block");
                continue;
            }
        };

        if let Some(found) = search(&data, types, &segments, 0) {
            return Some(found);
        }
    }
    None
}

/// Depth-first search for an object where the full path resolves.
fn search(value: &Value, types: &[&str], segments: &[&str], depth: usize) -> Option<String> {
    // Schema graphs are shallow; cap recursion on hostile input
    if depth > 16 {
        return None;
    }

    match value {
        Value::Object(map) => {
            if types.is_empty() || has_type(value, types) {
                if let Some(found) = follow(value, segments) {
                    return Some(found);
                }
            }
            map.values().find_map(|child| search(child, types, segments, depth + 1))
        }
        Value::Array(items) => items
            .iter()
            .find_map(|item| search(item, types, segments, depth + 1)),
        _ => None,
    }
}

/// Whether the object's `@type` (a string or an array of strings) names one
/// of `types`. `schema:` and `https://schema.org/` prefixes are ignored.
fn has_type(value: &Value, types: &[&str]) -> bool {
    let matches = |name: &str| {
        let short = name.rsplit(['/', ':']).next().unwrap_or(name);
        types.iter().any(|t| t.eq_ignore_ascii_case(short))
    };

    match value.get("@type") {
        Some(Value::String(name)) => matches(name),
        Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).any(matches),
        _ => false,
    }
}

/// Resolve `segments` starting exactly at `value`.
fn follow(value: &Value, segments: &[&str]) -> Option<String> {
    let Some((head, rest)) = segments.split_first() else {
        return match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => items.iter().find_map(|item| follow(item, segments)),
            _ => None,
        };
    };

    match value {
        Value::Object(map) => map.get(*head).and_then(|next| follow(next, rest)),
        Value::Array(items) => items.iter().find_map(|item| follow(item, segments)),
        _ => None,
    }
}
