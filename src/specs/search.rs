// src/specs/search.rs
//! `search` endpoint: a channel's most viewed videos, recent videos for a
//! keyword, and `@handle` → channel lookup.
//!
//! A search hit may describe a channel or playlist instead of a video; those
//! carry no `id.videoId`, and callers drop them.

use serde::Deserialize;

use super::ListResponse;
use crate::client::{Endpoint, YouTube};
use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchId {
    #[serde(default)]
    pub kind: String,
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub id: SearchId,
    #[serde(default)]
    pub snippet: SearchSnippet,
}

impl SearchItem {
    pub fn video_id(&self) -> Option<&str> {
        self.id.video_id.as_deref().filter(|v| !v.is_empty())
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.id
            .channel_id
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| Some(self.snippet.channel_id.as_str()).filter(|c| !c.is_empty()))
    }
}

/// Up to `max` videos of one channel, most viewed first.
pub fn channel_top_videos(yt: &YouTube, channel_id: &str, max: u32) -> Result<Vec<SearchItem>> {
    let resp: ListResponse<SearchItem> = yt.call(
        Endpoint::Search,
        params![
            ("part", "snippet"),
            ("channelId", channel_id),
            ("order", "viewCount"),
            ("maxResults", max),
            ("type", "video"),
        ],
    )?;
    Ok(resp.items)
}

/// Up to `max` videos matching `keyword`, published after `published_after`
/// (RFC 3339, `Z` suffix), most viewed first.
pub fn keyword_videos(
    yt: &YouTube,
    keyword: &str,
    published_after: &str,
    max: u32,
) -> Result<Vec<SearchItem>> {
    let resp: ListResponse<SearchItem> = yt.call(
        Endpoint::Search,
        params![
            ("part", "snippet"),
            ("q", keyword),
            ("type", "video"),
            ("order", "viewCount"),
            ("publishedAfter", published_after),
            ("maxResults", max),
        ],
    )?;
    Ok(resp.items)
}

/// Channel id of the best channel-type hit for `@handle`.
pub fn channel_for_handle(yt: &YouTube, handle: &str) -> Result<Option<String>> {
    let q = if handle.starts_with('@') { s!(handle) } else { join!("@", handle) };
    let resp: ListResponse<SearchItem> = yt.call(
        Endpoint::Search,
        params![
            ("part", "snippet"),
            ("q", q),
            ("type", "channel"),
            ("maxResults", 1),
        ],
    )?;
    Ok(resp.items.iter().find_map(|it| it.channel_id().map(String::from)))
}
