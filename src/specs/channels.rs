// src/specs/channels.rs
//! `channels` endpoint: lookup by id (overview + statistics) and by legacy username.

use serde::Deserialize;

use super::{count, ListResponse};
use crate::client::{Endpoint, YouTube};
use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, deserialize_with = "count")]
    pub subscriber_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub video_count: u64,
    #[serde(default)]
    pub hidden_subscriber_count: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

/// `channels?part=<part>&id=<id>` → first item, if any.
pub fn by_id(yt: &YouTube, id: &str, part: &str) -> Result<Option<ChannelItem>> {
    let resp: ListResponse<ChannelItem> =
        yt.call(Endpoint::Channels, params![("part", part), ("id", id)])?;
    Ok(resp.items.into_iter().next())
}

/// `channels?part=id&forUsername=<name>` → id of the first item.
pub fn id_for_username(yt: &YouTube, username: &str) -> Result<Option<String>> {
    let resp: ListResponse<ChannelItem> =
        yt.call(Endpoint::Channels, params![("part", "id"), ("forUsername", username)])?;
    Ok(resp.items.into_iter().map(|c| c.id).find(|id| !id.is_empty()))
}
