//! CLI that reads a page's HTML from stdin and prints the extracted
//! title/channel pair and its Pocket Casts search URL as JSON.
//!
//! Usage: `podsearch <page-url> < page.html`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use rs_podsearch::{extract_bytes_with_options, ExtractionResult, Options};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    result: Option<ExtractionResult>,
    query: Option<String>,
    search_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let options = match std::env::args().nth(1) {
        Some(url) => Options::for_url(&url),
        None => Options::default(),
    };

    // Read HTML from stdin
    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        std::process::exit(1);
    }

    let result = extract_bytes_with_options(&html, &options);
    let query = result.as_ref().map(ExtractionResult::search_query);
    let search_url = query.as_deref().and_then(|q| {
        rs_podsearch::query::build_search_url_with(&options.search_endpoint, q)
    });

    let output = Output {
        result,
        query,
        search_url,
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
