//! Apple Podcasts locators.
//!
//! Episode URLs carry the episode id in the `i` query parameter
//! (`/us/podcast/<slug>/id<show>?i=<episode>`); without it the page is the
//! show listing.

use url::Url;

use super::{MetaFastPath, PageKind, SiteProfile};
use crate::selector::json_ld::EPISODE_TYPES;
use crate::selector::{is_navigation_title, Locator};

pub static TITLE_LOCATORS: &[Locator] = &[
    Locator::Element(".headings__title"),
    Locator::Element(".product-header__title"),
    Locator::Element(r#"[data-testid="episode-title"]"#),
    Locator::Element(r#"h1[class*="title"]"#),
    Locator::Element("main h1"),
    Locator::Element("h1"),
    Locator::JsonLdOf(EPISODE_TYPES, "name"),
];

pub static CHANNEL_LOCATORS: &[Locator] = &[
    Locator::Element(".headings__subtitles a"),
    Locator::Element(".product-header__identity a"),
    Locator::Element(r#"[data-testid="show-title"]"#),
    Locator::JsonLd("partOfSeries.name"),
    Locator::Element(r#"main a[href*="/podcast/"]"#),
];

/// Show name on an episode page.
pub static SHOW_LOCATORS: &[Locator] = &[
    Locator::Element(".headings__subtitles a"),
    Locator::Element(".product-header__identity a"),
    Locator::JsonLd("partOfSeries.name"),
];

pub static PROFILE: SiteProfile = SiteProfile {
    name: "apple-podcasts",
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

#[must_use]
pub fn page_kind(url: &Url) -> PageKind {
    if url.query_pairs().any(|(key, value)| key == "i" && !value.is_empty()) {
        return PageKind::Episode;
    }

    let is_podcast_path = url
        .path_segments()
        .is_some_and(|mut segments| segments.any(|s| s == "podcast"));

    if is_podcast_path {
        PageKind::Show
    } else {
        PageKind::Unknown
    }
}
