// src/resolve.rs
//
// URL → channel id. Strategies run in order, first hit wins:
//   1. /channel/<ID>            no network
//   2. /user/<name>, /c/<name>  channels?forUsername
//   3. @handle                  search?type=channel&maxResults=1
//   4. raw page markup          specs::page probe (best effort)
// Failures inside 2–4 are logged and count as a miss. The resolver itself never
// errors; callers turn `Unresolved` into a user-input message.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::client::YouTube;
use crate::error::{Error, Result};
use crate::specs::{channels, page, search};
use crate::specs::page::PageProbe;

/// Canonical channel id. Read-only once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    DirectId,
    LegacyName,
    Handle,
    PageScrape,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved { id: ChannelId, via: Strategy },
    Unresolved,
}

impl Resolution {
    pub fn id(&self) -> Option<&ChannelId> {
        match self {
            Resolution::Resolved { id, .. } => Some(id),
            Resolution::Unresolved => None,
        }
    }

    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Resolution::Resolved { via, .. } => Some(*via),
            Resolution::Unresolved => None,
        }
    }

    pub fn into_result(self, input: &str) -> Result<ChannelId> {
        match self {
            Resolution::Resolved { id, .. } => Ok(id),
            Resolution::Unresolved => Err(Error::Unresolved { input: s!(input) }),
        }
    }
}

/* ---------------- Pure pattern matching ---------------- */

fn re(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

pub fn direct_id(raw: &str) -> Option<ChannelId> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    re(&RE, r"(?:^|/)channel/([A-Za-z0-9_-]{24,})")?
        .captures(raw)
        .map(|c| ChannelId::new(&c[1]))
}

pub fn legacy_name(raw: &str) -> Option<String> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    re(&RE, r"(?:^|/)(?:user|c)/([A-Za-z0-9_.-]+)")?
        .captures(raw)
        .map(|c| s!(&c[1]))
}

pub fn handle(raw: &str) -> Option<String> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    re(&RE, r"(?:^|/)@([A-Za-z0-9_.-]+)")?
        .captures(raw)
        .map(|c| s!(&c[1]))
}

/// Absolute http(s) URL for the page fallback; `https://` is assumed when missing.
pub fn page_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return None;
    }
    let candidate = if raw.contains("://") { s!(raw) } else { join!("https://", raw) };
    let url = Url::parse(&candidate).ok()?;
    let host_ok = url.host_str().map(|h| h.contains('.')).unwrap_or(false);
    if matches!(url.scheme(), "http" | "https") && host_ok {
        Some(url.into())
    } else {
        None
    }
}

/* ---------------- Resolver ---------------- */

pub fn resolve(yt: &YouTube, raw: &str) -> Resolution {
    let raw = raw.trim();

    if let Some(id) = direct_id(raw) {
        logd!("Resolve: direct id {}", id);
        return Resolution::Resolved { id, via: Strategy::DirectId };
    }

    if let Some(name) = legacy_name(raw) {
        match channels::id_for_username(yt, &name) {
            Ok(Some(id)) => {
                logf!("Resolve: username '{}' → {}", name, id);
                return Resolution::Resolved { id: ChannelId::new(id), via: Strategy::LegacyName };
            }
            Ok(None) => logd!("Resolve: no channel for username '{}'", name),
            Err(e) => loge!("Resolve: username lookup '{}' failed: {}", name, e),
        }
    }

    if let Some(h) = handle(raw) {
        match search::channel_for_handle(yt, &h) {
            Ok(Some(id)) => {
                logf!("Resolve: handle '@{}' → {}", h, id);
                return Resolution::Resolved { id: ChannelId::new(id), via: Strategy::Handle };
            }
            Ok(None) => logd!("Resolve: no channel for handle '@{}'", h),
            Err(e) => loge!("Resolve: handle search '@{}' failed: {}", h, e),
        }
    }

    if let Some(url) = page_url(raw) {
        match page::probe_channel_id(yt, &url) {
            PageProbe::Found(id) => {
                logf!("Resolve: page scrape {} → {}", url, id);
                return Resolution::Resolved { id: ChannelId::new(id), via: Strategy::PageScrape };
            }
            PageProbe::NoMatch => logd!("Resolve: no channel id in page markup"),
            PageProbe::Unreachable(why) => logd!("Resolve: page fetch skipped ({})", why),
        }
    }

    logf!("Resolve: unresolved '{}'", raw);
    Resolution::Unresolved
}
