//! YouTube locators.
//!
//! YouTube renames its watch-page classes often, hence the long fallback
//! chain. Its markup has no sidebar headings that collide with the title, so
//! no rejection rule is applied. The trailing `<meta>` locators cover server
//! rendered snapshots where the Polymer elements are still empty.

use url::Url;

use super::{host_matches, SiteProfile};
use crate::selector::{accept_all, Locator};

/// Title locators, most specific first.
pub static TITLE_LOCATORS: &[Locator] = &[
    Locator::Element("h1.ytd-watch-metadata yt-formatted-string"),
    Locator::Element("h1.style-scope.ytd-watch-metadata yt-formatted-string"),
    Locator::Element("h1 yt-formatted-string"),
    Locator::Element("h1.title.style-scope.ytd-video-primary-info-renderer"),
    Locator::Element("h1.title"),
    Locator::Element(r#"h1[class*="title"]"#),
    Locator::Element("#title h1 yt-formatted-string"),
    Locator::Element(".ytd-video-primary-info-renderer h1"),
    Locator::Element("h1"),
    Locator::Element(r#"[class*="title"] h1"#),
    Locator::Element("ytd-watch-metadata h1"),
    Locator::Meta("title"),
    Locator::Meta("og:title"),
];

/// Channel locators, most specific first.
pub static CHANNEL_LOCATORS: &[Locator] = &[
    Locator::Element("#channel-name a"),
    Locator::Element(".ytd-channel-name a"),
    Locator::Element("#owner-name a"),
    Locator::Element(".ytd-video-owner-renderer a"),
    Locator::Element("ytd-channel-name a"),
    Locator::Element("#upload-info #channel-name a"),
    Locator::Element(".owner-text a"),
    Locator::Element(r#"[class*="channel-name"] a"#),
    Locator::Element("ytd-video-owner-renderer a"),
    Locator::JsonLd("author.name"),
];

pub static PROFILE: SiteProfile = SiteProfile {
    name: "youtube",
    title_locators: TITLE_LOCATORS,
    channel_locators: CHANNEL_LOCATORS,
    reject_title: accept_all,
    reject_channel: accept_all,
    meta_fast_path: None,
    player_probe: &[],
};

/// Whether the URL is a YouTube watch page.
#[must_use]
pub fn is_youtube_video(url: &str) -> bool {
    Url::parse(url.trim()).is_ok_and(|parsed| {
        parsed
            .host_str()
            .is_some_and(|host| host_matches(&host.to_ascii_lowercase(), "youtube.com"))
            && parsed.path() == "/watch"
    })
}
