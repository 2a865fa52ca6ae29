//! Compiled regex patterns for title and channel normalization.
//!
//! All patterns are compiled once on first use via `LazyLock`.
//! The title patterns are applied in declaration order by
//! [`crate::normalize::clean_title`]; each one only strips text.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Title Cleaning Patterns
// =============================================================================

/// Pipe-delimited suffix: `Episode 123 | Show Name`.
pub static TITLE_PIPE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\|\s*.*$").expect("TITLE_PIPE_SUFFIX regex")
});

/// Enumeration prefix: `12. Title`.
pub static TITLE_ENUM_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*").expect("TITLE_ENUM_PREFIX regex")
});

/// Hash episode prefix: `#45 - Title`, `#45: Title`.
pub static TITLE_HASH_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\d+\s*[-:]\s*").expect("TITLE_HASH_PREFIX regex")
});

/// Episode suffix: `Title - Episode 10`, from the first `- Episode` on.
pub static TITLE_EPISODE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*-\s*Episode.*$").expect("TITLE_EPISODE_SUFFIX regex")
});

/// Trailing parenthetical mentioning podcast: `Title (A Podcast)`.
pub static TITLE_PODCAST_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\(.*podcast.*\)$").expect("TITLE_PODCAST_PAREN regex")
});

/// Trailing standalone word `podcast`.
pub static TITLE_PODCAST_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\bpodcast\s*$").expect("TITLE_PODCAST_WORD regex")
});

// =============================================================================
// Channel Cleaning Patterns
// =============================================================================

/// Trailing `podcast` on a channel name. Tested before [`CHANNEL_SHOW_SUFFIX`].
pub static CHANNEL_PODCAST_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*podcast$").expect("CHANNEL_PODCAST_SUFFIX regex")
});

/// Trailing `show` on a channel name.
pub static CHANNEL_SHOW_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*show$").expect("CHANNEL_SHOW_SUFFIX regex")
});

// =============================================================================
// Comparison Patterns
// =============================================================================

/// Matches whitespace runs for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Words ignored when comparing a title against a channel.
/// Input is already lowercased.
pub static COMPARISON_STOPWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:podcast|show|the)\b").expect("COMPARISON_STOPWORDS regex")
});

// =============================================================================
// Player Patterns
// =============================================================================

/// Splits a now-playing label such as `Episode Title by Show Name`.
/// Greedy on the left so the last ` by ` wins.
pub static NOW_PLAYING_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?s)(.+)\s+by\s+(.+)$").expect("NOW_PLAYING_BY regex")
});
