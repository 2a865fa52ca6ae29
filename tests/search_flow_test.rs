#![allow(clippy::expect_used)] // clear panic messages in tests

use std::cell::RefCell;
use std::time::Duration;

use rs_podsearch::page::{extract_from_page, open_search, PageSource, SearchOpener};
use rs_podsearch::player::{find_player_page, player_state, toggle_playback, PlayerSurface};
use rs_podsearch::query::build_channel_search_url;
use rs_podsearch::retry::RetryPolicy;
use rs_podsearch::{Error, Options, Result};

struct StaticPage {
    url: &'static str,
    html: &'static str,
}

impl PageSource for StaticPage {
    fn url(&self) -> String {
        self.url.to_string()
    }

    fn snapshot(&self) -> Result<String> {
        Ok(self.html.to_string())
    }
}

#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl SearchOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

struct PocketCastsTab {
    html: &'static str,
    clicks: RefCell<Vec<String>>,
}

impl PlayerSurface for PocketCastsTab {
    fn snapshot(&self) -> Result<String> {
        Ok(self.html.to_string())
    }

    fn click(&self, css: &str) -> Result<bool> {
        let found = css.contains("Pause");
        if found {
            self.clicks.borrow_mut().push(css.to_string());
        }
        Ok(found)
    }

    fn press_key(&self, _key: &str) -> Result<()> {
        Err(Error::PageUnavailable("no key events".into()))
    }
}

fn no_wait() -> Options {
    Options {
        retry: RetryPolicy {
            max_attempts: 2,
            delay: Duration::ZERO,
        },
        ..Options::default()
    }
}

#[test]
fn apple_episode_to_pocketcasts_search() {
    let page = StaticPage {
        url: "https://podcasts.apple.com/us/podcast/the-daily/id1200361736?i=1000650000000",
        html: r#"<html>
            <head><meta property="og:title" content="12. Interest Rates, Explained (A Podcast)"></head>
            <body>
              <div class="headings__subtitles"><a href="/us/podcast/the-daily/id1200361736">The Daily</a></div>
            </body>
        </html>"#,
    };

    let result = extract_from_page(&page, &no_wait()).expect("result");
    assert_eq!(result.title, "Interest Rates, Explained");
    assert_eq!(result.channel, "The Daily");

    let opener = RecordingOpener::default();
    assert!(open_search(&opener, &result.search_query(), &no_wait()));
    assert_eq!(
        opener.opened.borrow().as_slice(),
        ["https://pocketcasts.com/search?q=Interest%20Rates%2C%20Explained%20The%20Daily".to_string()]
    );

    assert_eq!(
        build_channel_search_url(&result.channel).as_deref(),
        Some("https://pocketcasts.com/search?q=The%20Daily")
    );
}

#[test]
fn custom_search_endpoint_is_used() {
    let options = Options {
        search_endpoint: "https://search.example/find".to_string(),
        ..no_wait()
    };
    let opener = RecordingOpener::default();
    assert!(open_search(&opener, "Deep Dive", &options));
    assert_eq!(
        opener.opened.borrow().as_slice(),
        ["https://search.example/find?q=Deep%20Dive".to_string()]
    );
}

#[test]
fn pocketcasts_tab_reports_and_toggles_playback() {
    let tabs = [
        "https://open.spotify.com/episode/1",
        "https://pocketcasts.com/podcasts",
    ];
    assert_eq!(find_player_page(tabs), Some("https://pocketcasts.com/podcasts"));

    let tab = PocketCastsTab {
        html: r#"<html><body>
            <div class="player-controls">
              <button aria-label="Pause"></button>
              <div class="player_episode">Interest Rates, Explained</div>
              <div class="player_podcast_title">The Daily</div>
            </div>
        </body></html>"#,
        clicks: RefCell::new(Vec::new()),
    };

    let state = player_state(&tab);
    assert!(state.has_player);
    assert_eq!(state.now_playing(), "Interest Rates, Explained");
    assert_eq!(state.show_title.as_deref(), Some("The Daily"));

    assert!(toggle_playback(&tab));
    assert_eq!(tab.clicks.borrow().len(), 1);
}
