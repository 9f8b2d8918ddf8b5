// src/specs/page.rs
//! Scraping *spec* for a raw channel web page (resolver's last resort).
//!
//! The page markup embeds the canonical id in several places; any of them will do:
//! - `"channelId":"UC…"` / `"externalId":"UC…"` / `"browseId":"UC…"` in inline JSON
//! - `<meta itemprop="channelId" content="UC…">` (older layout: `identifier`)
//! - `<link rel="canonical" href="https://www.youtube.com/channel/UC…">`
//!
//! Best effort: network or parse failures are reported as a value, never as an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::client::YouTube;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageProbe {
    Found(String),
    NoMatch,
    Unreachable(String),
}

fn patterns() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            r#""(?:channelId|externalId|browseId)"\s*:\s*"(UC[A-Za-z0-9_-]{22})""#,
            r#"<meta[^>]+itemprop=["'](?:channelId|identifier)["'][^>]+content=["'](UC[A-Za-z0-9_-]{22})["']"#,
            r#"youtube\.com/channel/(UC[A-Za-z0-9_-]{22})"#,
        ]
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
    })
}

/// Pure extraction over already-fetched markup; first pattern that matches wins.
pub fn extract_channel_id(html: &str) -> Option<String> {
    patterns()
        .iter()
        .find_map(|re| re.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| s!(m.as_str()))
}

/// Fetch `url` (through the cache) and look for a channel id in the markup.
pub fn probe_channel_id(yt: &YouTube, url: &str) -> PageProbe {
    match yt.page(url) {
        Ok(html) => match extract_channel_id(&html) {
            Some(id) => PageProbe::Found(id),
            None => PageProbe::NoMatch,
        },
        Err(e) => PageProbe::Unreachable(e.to_string()),
    }
}
