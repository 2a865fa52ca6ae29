//! Generic podcast page locators.
//!
//! Used for any host without a dedicated profile. Podcast hosting pages vary
//! wildly; the list leans on class-name fragments, Schema.org data and the
//! page metadata before falling back to the bare `<title>`.

use super::SiteProfile;
use crate::selector::json_ld::EPISODE_TYPES;
use crate::selector::{is_navigation_title, Locator};

pub static TITLE_LOCATORS: &[Locator] = &[
    Locator::Element(r#"[class*="episode-title"]"#),
    Locator::Element(r#"[class*="episode"] h1"#),
    Locator::JsonLdOf(EPISODE_TYPES, "name"),
    Locator::Element("article h1"),
    Locator::Element("main h1"),
    Locator::Element("h1"),
    Locator::Meta("og:title"),
    Locator::Meta("twitter:title"),
    Locator::Element("title"),
];

pub static CHANNEL_LOCATORS: &[Locator] = &[
    Locator::Element(r#"[class*="show-title"]"#),
    Locator::Element(r#"[class*="podcast-title"]"#),
    Locator::Element(r#"[class*="show-name"]"#),
    Locator::Element(r#"[class*="podcast-name"]"#),
    Locator::JsonLd("partOfSeries.name"),
    Locator::Meta("og:site_name"),
    Locator::Element(r#"[class*="author"]"#),
];

/// Elements that suggest the page hosts an audio player.
pub static PLAYER_PROBE: &[&str] = &[
    "audio",
    r#"[class*="player"]"#,
    r#"[id*="player"]"#,
    r#"[class*="audio"]"#,
];

pub static PROFILE: SiteProfile = SiteProfile {
    name: "generic",
    title_locators: TITLE_LOCATORS,
    channel_locators: CHANNEL_LOCATORS,
    reject_title: is_navigation_title,
    reject_channel: is_navigation_title,
    meta_fast_path: None,
    player_probe: PLAYER_PROBE,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::selector::first_text;

    #[test]
    fn hosting_page_markup_resolves() {
        let doc = dom::parse(
            r#"<html><body>
                 <nav><h1>Home</h1></nav>
                 <div class="episode-header"><h1>Ep 12: Soil</h1></div>
                 <span class="podcast-title-link">Gardeners' Hour</span>
               </body></html>"#,
        );
        assert_eq!(first_text(&doc, TITLE_LOCATORS, is_navigation_title), "Ep 12: Soil");
        assert_eq!(first_text(&doc, CHANNEL_LOCATORS, is_navigation_title), "Gardeners' Hour");
    }

    #[test]
    fn falls_back_to_document_title() {
        let doc = dom::parse("<html><head><title>Bare Page</title></head><body></body></html>");
        assert_eq!(first_text(&doc, TITLE_LOCATORS, is_navigation_title), "Bare Page");
    }

    #[test]
    fn probe_selectors_compile() {
        for css in PLAYER_PROBE {
            assert!(dom::compile(css).is_ok(), "{css}");
        }
    }
}
