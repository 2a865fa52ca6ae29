//! Spotify locators.
//!
//! The web player's sidebar ("Your Library", "Home", "Search") is full of
//! headings, so every candidate passes the navigation denylist. Episode and
//! show pages carry a usable `og:title`, which is tried first.

use url::Url;

use super::{MetaFastPath, PageKind, SiteProfile};
use crate::selector::json_ld::EPISODE_TYPES;
use crate::selector::{is_navigation_title, Locator};

pub static TITLE_LOCATORS: &[Locator] = &[
    Locator::Element(r#"[data-testid="episodeTitle"]"#),
    Locator::Element(r#"[data-testid="entityTitle"] h1"#),
    Locator::Element(r#"[data-testid="entityTitle"]"#),
    Locator::Element(r#"main h1[data-encore-id="text"]"#),
    Locator::Element("main h1"),
    Locator::Element("h1"),
    Locator::JsonLdOf(EPISODE_TYPES, "name"),
];

pub static CHANNEL_LOCATORS: &[Locator] = &[
    Locator::Element(r#"[data-testid="showTitle"]"#),
    Locator::Element(r#"main a[href*="/show/"]"#),
    Locator::Element(r#"a[href*="/show/"]"#),
    Locator::JsonLd("partOfSeries.name"),
];

/// Show name on an episode page.
pub static SHOW_LOCATORS: &[Locator] = &[
    Locator::Element(r#"main a[href*="/show/"]"#),
    Locator::Element(r#"a[href*="/show/"]"#),
    Locator::JsonLd("partOfSeries.name"),
];

pub static PROFILE: SiteProfile = SiteProfile {
    name: "spotify",
    title_locators: TITLE_LOCATORS,
    channel_locators: CHANNEL_LOCATORS,
    reject_title: is_navigation_title,
    reject_channel: is_navigation_title,
    meta_fast_path: Some(MetaFastPath {
        meta_key: "og:title",
        show_locators: SHOW_LOCATORS,
        page_kind,
    }),
    player_probe: &[],
};

/// `/episode/<id>` is an episode, `/show/<id>` a show. Locale prefixes such
/// as `/intl-de/` are skipped.
#[must_use]
pub fn page_kind(url: &Url) -> PageKind {
    let Some(mut segments) = url.path_segments() else {
        return PageKind::Unknown;
    };

    match segments.find(|s| *s == "episode" || *s == "show") {
        Some("episode") => PageKind::Episode,
        Some("show") => PageKind::Show,
        _ => PageKind::Unknown,
    }
}
