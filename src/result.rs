//! Result types for extraction output.
//!
//! [`ExtractionResult`] is the only value the extraction engine produces.
//! Every site-specific extractor hands its raw title/channel pair to
//! [`create_cleaned_result`], so duplicate suppression applies uniformly.

use serde::{Deserialize, Serialize};

use crate::normalize::{are_title_and_channel_duplicates, clean_channel, clean_title};
use crate::query;

/// Title and show/channel pair extracted from a page.
///
/// `title` and `channel` are cleaned for searching; the `original_*` fields
/// keep the page text verbatim for display. Serialized with camelCase keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Cleaned episode or video title.
    pub title: String,

    /// Cleaned show or channel name. Empty when it duplicates the title.
    pub channel: String,

    /// Title text exactly as found on the page.
    ///
    /// Empty on a show page, where the show name stands in as `title`.
    pub original_title: String,

    /// Channel text exactly as found on the page.
    pub original_channel: String,
}

impl ExtractionResult {
    /// Build a result from raw page text. See [`create_cleaned_result`].
    #[must_use]
    pub fn from_raw(raw_title: &str, raw_channel: &str) -> Self {
        let title = clean_title(raw_title);
        let channel = clean_channel(raw_channel);

        let channel = if are_title_and_channel_duplicates(&title, &channel) {
            String::new()
        } else {
            channel
        };

        Self {
            title,
            channel,
            original_title: raw_title.to_string(),
            original_channel: raw_channel.to_string(),
        }
    }

    /// Use the show name as the title, for pages where no title survived.
    ///
    /// Only the cleaned fields move: `title` becomes the cleaned show name and
    /// `channel` is emptied, while both `original_*` fields keep the text as
    /// extracted.
    #[must_use]
    pub fn promote_channel(self) -> Self {
        Self {
            title: clean_title(&self.original_channel),
            channel: String::new(),
            ..self
        }
    }

    /// Search query for this result: `title channel`, trimmed.
    #[must_use]
    pub fn search_query(&self) -> String {
        query::build_search_query(&self.title, &self.channel)
    }

    /// Pocket Casts search URL for this result, `None` if the query is blank.
    #[must_use]
    pub fn search_url(&self) -> Option<String> {
        query::build_search_url(&self.search_query())
    }
}

/// Clean a raw title/channel pair and suppress the channel if it merely
/// repeats the title.
///
/// # Example
///
/// ```rust
/// use rs_podsearch::create_cleaned_result;
///
/// let result = create_cleaned_result("Lex Fridman Podcast", "Lex Fridman Podcast");
/// assert_eq!(result.title, "Lex Fridman");
/// assert_eq!(result.channel, "");
/// assert_eq!(result.original_channel, "Lex Fridman Podcast");
/// ```
#[must_use]
pub fn create_cleaned_result(raw_title: &str, raw_channel: &str) -> ExtractionResult {
    ExtractionResult::from_raw(raw_title, raw_channel)
}

/// State of a media player found on an external page.
///
/// `Default` is the safe negative: no player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Whether a player structure was found.
    pub has_player: bool,

    /// Currently loaded episode, if shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_title: Option<String>,

    /// Show of the current episode, if shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_title: Option<String>,
}

impl PlayerState {
    /// Label for a now-playing display: episode, else show, else "Unknown".
    #[must_use]
    pub fn now_playing(&self) -> &str {
        self.episode_title
            .as_deref()
            .or(self.show_title.as_deref())
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_channel_keeps_originals() {
        let result = create_cleaned_result("", "Lex Fridman Podcast").promote_channel();
        assert_eq!(result.title, "Lex Fridman");
        assert_eq!(result.channel, "");
        assert_eq!(result.original_title, "");
        assert_eq!(result.original_channel, "Lex Fridman Podcast");
        assert_eq!(result.search_query(), "Lex Fridman");
    }

    #[test]
    fn cleaned_result_handles_normal_case() {
        let result = create_cleaned_result("Episode 123", "My Podcast Show");
        assert_eq!(result.title, "Episode 123");
        assert_eq!(result.channel, "My Podcast");
        assert_eq!(result.original_title, "Episode 123");
        assert_eq!(result.original_channel, "My Podcast Show");
    }

    #[test]
    fn cleaned_result_removes_duplicates() {
        let result = create_cleaned_result("Lex Fridman Podcast", "Lex Fridman Podcast");
        assert_eq!(result.title, "Lex Fridman");
        assert_eq!(result.channel, "");
        assert_eq!(result.original_title, "Lex Fridman Podcast");
        assert_eq!(result.original_channel, "Lex Fridman Podcast");
    }

    #[test]
    fn cleaned_result_dedupes_after_cleaning() {
        // Raw strings differ, cleaned forms collide
        let result = create_cleaned_result("The Daily | NYT", "The Daily Show");
        assert_eq!(result.title, "The Daily");
        assert_eq!(result.channel, "");
    }

    #[test]
    fn cleaned_result_keeps_empty_channel() {
        let result = create_cleaned_result("Some Title", "");
        assert_eq!(result.title, "Some Title");
        assert_eq!(result.channel, "");
        assert_eq!(result.search_query(), "Some Title");
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = create_cleaned_result("Episode 123", "My Podcast Show");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["originalTitle"], "Episode 123");
        assert_eq!(json["originalChannel"], "My Podcast Show");
        assert_eq!(json["channel"], "My Podcast");
    }

    #[test]
    fn result_search_url() {
        let result = create_cleaned_result("Episode 123", "My Podcast Show");
        assert_eq!(
            result.search_url().as_deref(),
            Some("https://pocketcasts.com/search?q=Episode%20123%20My%20Podcast")
        );
    }

    #[test]
    fn player_state_defaults_to_no_player() {
        let state = PlayerState::default();
        assert!(!state.has_player);
        assert_eq!(state.now_playing(), "Unknown");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({ "hasPlayer": false }));
    }
}
