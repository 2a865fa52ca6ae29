//! Title and channel normalization.
//!
//! Pure string rules, no DOM access. Page titles on podcast and video sites
//! carry a lot of decoration (episode numbers, `| Show Name` suffixes, the
//! word "Podcast" everywhere); these functions strip it so the remaining text
//! is a useful search query.

use crate::patterns::{
    CHANNEL_PODCAST_SUFFIX, CHANNEL_SHOW_SUFFIX, COMPARISON_STOPWORDS, TITLE_ENUM_PREFIX,
    TITLE_EPISODE_SUFFIX, TITLE_HASH_PREFIX, TITLE_PIPE_SUFFIX, TITLE_PODCAST_PAREN,
    TITLE_PODCAST_WORD, WHITESPACE_NORMALIZE,
};

/// Clean an episode or video title.
///
/// Rules run once, in order, each stripping its match:
///
/// 1. everything from the first `|` on
/// 2. a leading `12. ` enumeration
/// 3. a leading `#45 - ` / `#45: ` episode number
/// 4. everything from `- Episode` on (case-insensitive)
/// 5. a trailing parenthetical mentioning "podcast"
/// 6. a trailing standalone "podcast"
/// 7. surrounding whitespace
///
/// # Example
///
/// ```rust
/// use rs_podsearch::normalize::clean_title;
///
/// assert_eq!(clean_title("2. Deep Dive - Episode 15 | My Podcast Show"), "Deep Dive");
/// ```
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let title = TITLE_PIPE_SUFFIX.replace(raw, "");
    let title = TITLE_ENUM_PREFIX.replace(&title, "");
    let title = TITLE_HASH_PREFIX.replace(&title, "");
    let title = TITLE_EPISODE_SUFFIX.replace(&title, "");
    let title = TITLE_PODCAST_PAREN.replace(&title, "");
    let title = TITLE_PODCAST_WORD.replace(&title, "");
    title.trim().to_string()
}

/// Clean a show or channel name.
///
/// A trailing "podcast" is stripped first, then a trailing "show".
///
/// ```rust
/// use rs_podsearch::normalize::clean_channel;
///
/// assert_eq!(clean_channel("My Podcast Show"), "My Podcast");
/// ```
#[must_use]
pub fn clean_channel(raw: &str) -> String {
    let channel = CHANNEL_PODCAST_SUFFIX.replace(raw, "");
    let channel = CHANNEL_SHOW_SUFFIX.replace(&channel, "");
    channel.trim().to_string()
}

/// Reduce a string to the form used for duplicate comparison.
///
/// Lowercases, collapses whitespace runs, drops the words "podcast", "show"
/// and "the" wherever they appear as whole words, then trims.
#[must_use]
pub fn normalize_for_comparison(s: &str) -> String {
    let lowered = s.to_lowercase();
    let collapsed = WHITESPACE_NORMALIZE.replace_all(&lowered, " ");
    let stripped = COMPARISON_STOPWORDS.replace_all(&collapsed, "");
    stripped.trim().to_string()
}

/// Whether a title and channel name refer to the same thing.
///
/// Empty inputs are never duplicates.
#[must_use]
pub fn are_title_and_channel_duplicates(title: &str, channel: &str) -> bool {
    if title.is_empty() || channel.is_empty() {
        return false;
    }
    normalize_for_comparison(title) == normalize_for_comparison(channel)
}
