//! Navigation Text Denylist
//!
//! Generic heading locators on music and podcast platforms often land on
//! sidebar or nav headings instead of the content heading. Text containing
//! one of these labels is treated as page chrome. It is a heuristic: a real
//! episode called "Coming Home" is rejected too.

/// Page-chrome labels, matched case-insensitively as substrings.
pub const NAVIGATION_LABELS: &[&str] = &[
    "Your Library",
    "Home",
    "Search",
    "Browse",
    "Library",
    "Spotify",
    "Apple Podcasts",
    "Podcasts",
    "iTunes",
    "Top Charts",
    "Categories",
    "New & Noteworthy",
];

/// Whether `text` looks like site navigation rather than content.
#[must_use]
pub fn is_navigation_title(text: &str) -> bool {
    let lowered = text.to_lowercase();
    NAVIGATION_LABELS
        .iter()
        .any(|label| lowered.contains(&label.to_lowercase()))
}
