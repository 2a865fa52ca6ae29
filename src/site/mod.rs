//! Site Dispatch
//!
//! Chooses locator tables and rejection rules from the page URL and runs the
//! extraction for one document snapshot.
//!
//! # Architecture
//!
//! - [`Site`]: which platform a URL belongs to
//! - [`SiteProfile`]: the per-site data (locator lists, rules, fast path)
//! - [`extract_document`]: shared extraction routine driven by a profile
//!
//! Adding a site means adding a profile; the routine does not change.

pub mod apple;
pub mod generic;
pub mod spotify;
pub mod youtube;

use dom_query::Document;
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::result::{create_cleaned_result, ExtractionResult};
use crate::selector::{self, accept_all, Locator, Rule};
use crate::Options;

/// Platforms with dedicated locator tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    YouTube,
    Spotify,
    ApplePodcasts,
    Generic,
}

/// What a Spotify or Apple Podcasts URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A single episode.
    Episode,
    /// A show or listing page.
    Show,
    /// Anything else (home, search, library).
    Unknown,
}

/// Metadata shortcut used before the general locator lists.
#[derive(Debug, Clone, Copy)]
pub struct MetaFastPath {
    /// `<meta>` key holding the page title.
    pub meta_key: &'static str,
    /// Locators for the show name on episode pages.
    pub show_locators: &'static [Locator],
    /// Classifies the page URL.
    pub page_kind: fn(&Url) -> PageKind,
}

/// Everything the extraction routine needs to know about a site.
#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    /// Short name for logs.
    pub name: &'static str,
    /// Title locators in priority order.
    pub title_locators: &'static [Locator],
    /// Channel locators in priority order.
    pub channel_locators: &'static [Locator],
    /// Rejection rule for title candidates.
    pub reject_title: Rule,
    /// Rejection rule for channel candidates.
    pub reject_channel: Rule,
    /// Optional metadata shortcut.
    pub meta_fast_path: Option<MetaFastPath>,
    /// Selectors whose presence suggests an audio player. Logged only.
    pub player_probe: &'static [&'static str],
}

impl Site {
    /// Detect the site from a URL string. Unparseable URLs are [`Site::Generic`].
    #[must_use]
    pub fn detect(url: &str) -> Self {
        match parse_page_url(url) {
            Ok(parsed) => Self::from_url(&parsed),
            Err(err) => {
                tracing::debug!(error = %err, "using generic site");
                Self::Generic
            }
        }
    }

    /// Detect the site from a parsed URL.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        let Some(host) = url.host_str() else {
            return Self::Generic;
        };
        let host = host.to_ascii_lowercase();

        if host_matches(&host, "youtube.com") || host == "youtu.be" {
            Self::YouTube
        } else if host_matches(&host, "spotify.com") {
            Self::Spotify
        } else if host == "podcasts.apple.com" {
            Self::ApplePodcasts
        } else {
            Self::Generic
        }
    }

    /// Short name for logs and display.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// The locator profile for this site.
    #[must_use]
    pub fn profile(self) -> &'static SiteProfile {
        match self {
            Self::YouTube => &youtube::PROFILE,
            Self::Spotify => &spotify::PROFILE,
            Self::ApplePodcasts => &apple::PROFILE,
            Self::Generic => &generic::PROFILE,
        }
    }
}

/// Parse a page URL.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] if `url` is not an absolute URL.
pub fn parse_page_url(url: &str) -> Result<Url> {
    Url::parse(url.trim()).map_err(|err| Error::InvalidUrl(format!("{url}: {err}")))
}

/// `host` is `domain` or a subdomain of it.
fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Extract a title/channel pair from one document snapshot.
///
/// The site is chosen from `options.url`; without a URL the generic profile
/// is used. Returns `None` when no title resolves.
#[must_use]
pub fn extract_document(doc: &Document, options: &Options) -> Option<ExtractionResult> {
    let url = options.url.as_deref().and_then(|u| match parse_page_url(u) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::debug!(error = %err, "using generic site");
            None
        }
    });
    let site = url.as_ref().map_or(Site::Generic, Site::from_url);
    let profile = site.profile();

    let (reject_title, reject_channel) = if options.filter_navigation {
        (profile.reject_title, profile.reject_channel)
    } else {
        (accept_all as Rule, accept_all as Rule)
    };

    tracing::debug!(site = profile.name, "extracting page info");

    if let (Some(fast), Some(url)) = (profile.meta_fast_path.as_ref(), url.as_ref()) {
        if let Some(result) = meta_fast_path(doc, fast, url, reject_title) {
            return Some(result);
        }
    }

    if !profile.player_probe.is_empty() {
        // Not a gate: extraction proceeds either way
        let has_player = profile.player_probe.iter().any(|css| dom::exists(doc, css));
        tracing::debug!(site = profile.name, has_player, "audio player probe");
    }

    let Some(title) = selector::first_accepted(doc, profile.title_locators, reject_title) else {
        tracing::debug!(site = profile.name, "no title found");
        return None;
    };
    let channel = selector::first_text(doc, profile.channel_locators, reject_channel);

    tracing::debug!(site = profile.name, title = %title.text, channel = %channel, "extracted");
    settle(create_cleaned_result(&title.text, &channel))
}

/// Metadata shortcut for Spotify and Apple Podcasts.
///
/// The `og:title` value is authoritative when present and not navigational:
/// on an episode page it is the title and the show is resolved separately,
/// on a show page it is the show itself. Other page kinds fall through.
fn meta_fast_path(
    doc: &Document,
    fast: &MetaFastPath,
    url: &Url,
    reject: Rule,
) -> Option<ExtractionResult> {
    let kind = (fast.page_kind)(url);
    if kind == PageKind::Unknown {
        return None;
    }

    let meta = selector::first_accepted(doc, &[Locator::Meta(fast.meta_key)], reject)?.text;

    let (mut title, show) = match kind {
        PageKind::Episode => (meta, selector::first_text(doc, fast.show_locators, reject)),
        _ => (String::new(), meta),
    };

    if title == show {
        title.clear();
    }

    tracing::debug!(?kind, title = %title, show = %show, "meta fast path");
    settle(create_cleaned_result(&title, &show))
}

/// Enforce the non-empty title rule on a built result.
///
/// A result whose cleaned title is empty but which has a show name gets the
/// show as its title, so a show page searches for the show. The original
/// fields are left as extracted.
fn settle(result: ExtractionResult) -> Option<ExtractionResult> {
    if !result.title.is_empty() {
        return Some(result);
    }
    if result.original_channel.trim().is_empty() {
        return None;
    }

    let promoted = result.promote_channel();
    if promoted.title.is_empty() {
        None
    } else {
        Some(promoted)
    }
}
