//! Pocket Casts player boundary.
//!
//! The extension's popup could show what the Pocket Casts web player is
//! playing and toggle play/pause. The page interaction itself belongs to the
//! host; [`PlayerSurface`] is the contract. Everything here degrades to a
//! safe negative: no player, or `false` for a toggle that did not happen.

use dom_query::Document;
use url::Url;

use crate::dom;
use crate::error::Result;
use crate::patterns::NOW_PLAYING_BY;
use crate::result::PlayerState;
use crate::selector::{self, accept_all, Locator};

/// A page hosting a media player that can be inspected and poked.
pub trait PlayerSurface {
    /// Serialized HTML of the player page.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PageUnavailable`] when the page cannot be read.
    fn snapshot(&self) -> Result<String>;

    /// Click the first element matching `css`. `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PageUnavailable`] when the page cannot be reached.
    fn click(&self, css: &str) -> Result<bool>;

    /// Dispatch a key press (e.g. `" "`) to the page.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PageUnavailable`] when the page cannot be reached.
    fn press_key(&self, key: &str) -> Result<()>;
}

/// Elements that mark a loaded player.
pub static PLAYER_CONTAINERS: &[&str] = &[
    ".player-controls",
    r#"[class*="player-controls"]"#,
    r#"[class*="PlayerControls"]"#,
    r#"[class*="controls"] button[aria-label*="Play"]"#,
    r#"[class*="controls"] button[aria-label*="Pause"]"#,
    "audio",
];

pub static EPISODE_LOCATORS: &[Locator] = &[
    Locator::Element(".player_episode"),
    Locator::Element(r#"[class*="player"] [class*="episode-title"]"#),
    Locator::Element(r#"[class*="player"] [class*="episode"]"#),
];

pub static SHOW_LOCATORS: &[Locator] = &[
    Locator::Element(".player_podcast_title"),
    Locator::Element(r#"[class*="player"] [class*="podcast-title"]"#),
    Locator::Element(r#"[class*="player"] [class*="podcast"]"#),
];

/// Elements whose text follows the `Episode by Show` convention.
pub static NOW_PLAYING_LOCATORS: &[Locator] = &[
    Locator::Element(r#"[class*="now-playing"]"#),
    Locator::Element(r#"[class*="player"] [class*="title"]"#),
];

/// Play/pause controls, tried in order before falling back to the space key.
pub static TOGGLE_CONTROLS: &[&str] = &[
    r#"button[aria-label="Play"]"#,
    r#"button[aria-label="Pause"]"#,
    ".play_pause_button",
    r#"[class*="play-pause"]"#,
    r#"[class*="controls"] button[class*="play"]"#,
];

/// Split a now-playing label on its last ` by `.
///
/// ```rust
/// use rs_podsearch::player::parse_now_playing;
///
/// assert_eq!(
///     parse_now_playing("Deep Dive by My Show"),
///     (Some("Deep Dive".to_string()), Some("My Show".to_string())),
/// );
/// assert_eq!(parse_now_playing("Just A Title"), (Some("Just A Title".to_string()), None));
/// ```
#[must_use]
pub fn parse_now_playing(text: &str) -> (Option<String>, Option<String>) {
    let text = text.trim();
    if text.is_empty() {
        return (None, None);
    }

    match NOW_PLAYING_BY.captures(text) {
        Some(caps) => {
            let episode = caps[1].trim().to_string();
            let show = caps[2].trim().to_string();
            (Some(episode), Some(show))
        }
        None => (Some(text.to_string()), None),
    }
}

/// Inspect a player page snapshot.
#[must_use]
pub fn inspect_player(doc: &Document) -> PlayerState {
    let has_player = PLAYER_CONTAINERS.iter().any(|css| dom::exists(doc, css));
    if !has_player {
        return PlayerState::default();
    }

    let mut episode_title = selector::first_accepted(doc, EPISODE_LOCATORS, accept_all).map(|r| r.text);
    let mut show_title = selector::first_accepted(doc, SHOW_LOCATORS, accept_all).map(|r| r.text);

    if episode_title.is_none() || show_title.is_none() {
        if let Some(label) = selector::first_accepted(doc, NOW_PLAYING_LOCATORS, accept_all) {
            let (episode, show) = parse_now_playing(&label.text);
            episode_title = episode_title.or(episode);
            show_title = show_title.or(show);
        }
    }

    PlayerState {
        has_player,
        episode_title,
        show_title,
    }
}

/// Current player state of `surface`, or no player on any failure.
pub fn player_state<S: PlayerSurface + ?Sized>(surface: &S) -> PlayerState {
    match surface.snapshot() {
        Ok(html) => inspect_player(&dom::parse(&html)),
        Err(err) => {
            tracing::warn!(error = %err, "could not read player page");
            PlayerState::default()
        }
    }
}

/// Toggle play/pause on `surface`.
///
/// Clicks the first labeled control that exists; if none does, presses the
/// space key. Returns `false` if the page could not be reached.
pub fn toggle_playback<S: PlayerSurface + ?Sized>(surface: &S) -> bool {
    for css in TOGGLE_CONTROLS {
        match surface.click(css) {
            Ok(true) => {
                tracing::debug!(control = css, "clicked play/pause control");
                return true;
            }
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(control = css, error = %err, "player control failed");
                return false;
            }
        }
    }

    match surface.press_key(" ") {
        Ok(()) => {
            tracing::debug!("toggled playback with space key");
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "player key press failed");
            false
        }
    }
}

/// First URL that points at the Pocket Casts web app.
#[must_use]
pub fn find_player_page<'a, I>(urls: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    urls.into_iter().find(|candidate| {
        Url::parse(candidate).is_ok_and(|url| {
            url.host_str().is_some_and(|host| {
                let host = host.to_ascii_lowercase();
                host == "pocketcasts.com" || host.ends_with(".pocketcasts.com")
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::Error;

    const PLAYER_PAGE: &str = r#"<html><body>
        <div class="player-controls">
          <button aria-label="Pause"></button>
          <div class="player_episode">Deep Dive</div>
          <div class="player_podcast_title">My Show</div>
        </div>
    </body></html>"#;

    const LABEL_ONLY: &str = r#"<html><body>
        <div class="player-controls"><span class="now-playing">Stand by Me by Oldies Hour</span></div>
    </body></html>"#;

    struct FakeSurface {
        html: Result<String>,
        present: Vec<&'static str>,
        clicked: RefCell<Vec<String>>,
        keys: RefCell<Vec<String>>,
        unreachable: bool,
    }

    impl FakeSurface {
        fn new(html: &str, present: Vec<&'static str>) -> Self {
            Self {
                html: Ok(html.to_string()),
                present,
                clicked: RefCell::new(Vec::new()),
                keys: RefCell::new(Vec::new()),
                unreachable: false,
            }
        }

        fn closed() -> Self {
            Self {
                html: Err(Error::PageUnavailable("Tab not found".into())),
                unreachable: true,
                ..Self::new("", Vec::new())
            }
        }
    }

    impl PlayerSurface for FakeSurface {
        fn snapshot(&self) -> Result<String> {
            match &self.html {
                Ok(html) => Ok(html.clone()),
                Err(err) => Err(Error::PageUnavailable(err.to_string())),
            }
        }

        fn click(&self, css: &str) -> Result<bool> {
            if self.unreachable {
                return Err(Error::PageUnavailable("Tab not found".into()));
            }
            if self.present.iter().any(|present| *present == css) {
                self.clicked.borrow_mut().push(css.to_string());
                return Ok(true);
            }
            Ok(false)
        }

        fn press_key(&self, key: &str) -> Result<()> {
            if self.unreachable {
                return Err(Error::PageUnavailable("Tab not found".into()));
            }
            self.keys.borrow_mut().push(key.to_string());
            Ok(())
        }
    }

    #[test]
    fn parse_now_playing_handles_blank() {
        assert_eq!(parse_now_playing("   "), (None, None));
    }

    #[test]
    fn inspect_reads_dedicated_fields() {
        let state = inspect_player(&dom::parse(PLAYER_PAGE));
        assert!(state.has_player);
        assert_eq!(state.episode_title.as_deref(), Some("Deep Dive"));
        assert_eq!(state.show_title.as_deref(), Some("My Show"));
    }

    #[test]
    fn inspect_falls_back_to_by_label() {
        let state = inspect_player(&dom::parse(LABEL_ONLY));
        assert!(state.has_player);
        assert_eq!(state.episode_title.as_deref(), Some("Stand by Me"));
        assert_eq!(state.show_title.as_deref(), Some("Oldies Hour"));
    }

    #[test]
    fn inspect_without_player_is_negative() {
        let state = inspect_player(&dom::parse("<html><body><p>Discover</p></body></html>"));
        assert_eq!(state, PlayerState::default());
    }

    #[test]
    fn player_state_handles_missing_tab_gracefully() {
        let state = player_state(&FakeSurface::closed());
        assert!(!state.has_player);
    }

    #[test]
    fn toggle_clicks_first_present_control() {
        let surface = FakeSurface::new(PLAYER_PAGE, vec![r#"button[aria-label="Pause"]"#]);
        assert!(toggle_playback(&surface));
        assert_eq!(surface.clicked.borrow().len(), 1);
        assert!(surface.keys.borrow().is_empty());
    }

    #[test]
    fn toggle_falls_back_to_space_key() {
        let surface = FakeSurface::new(PLAYER_PAGE, Vec::new());
        assert!(toggle_playback(&surface));
        assert_eq!(surface.keys.borrow().as_slice(), [" ".to_string()]);
    }

    #[test]
    fn toggle_handles_missing_tab_gracefully() {
        assert!(!toggle_playback(&FakeSurface::closed()));
    }

    #[test]
    fn finds_pocketcasts_tab() {
        let urls = ["https://www.youtube.com/watch?v=1", "https://play.pocketcasts.com/podcasts"];
        assert_eq!(find_player_page(urls), Some("https://play.pocketcasts.com/podcasts"));
        assert_eq!(find_player_page(["https://example.com"]), None);
        assert_eq!(find_player_page(Vec::<&str>::new()), None);
    }
}
