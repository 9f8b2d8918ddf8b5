// src/specs/videos.rs
//! `videos` endpoint: per-video snippet and/or statistics.

use serde::Deserialize;

use super::{count, ListResponse};
use crate::client::{Endpoint, YouTube};
use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "count")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub comment_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

/// `videos?part=<part>&id=<id>` → first item, if any (private/removed videos have none).
pub fn by_id(yt: &YouTube, id: &str, part: &str) -> Result<Option<VideoItem>> {
    let resp: ListResponse<VideoItem> =
        yt.call(Endpoint::Videos, params![("part", part), ("id", id)])?;
    Ok(resp.items.into_iter().next())
}
