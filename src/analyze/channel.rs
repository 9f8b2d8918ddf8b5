// src/analyze/channel.rs
//! Channel analyzer: overview → most viewed videos → per-video detail → tag ranking.
//!
//! Call sequence for one channel (all through the fetch cache):
//! ```text
//! channels?part=snippet,statistics&id=C
//! search?part=snippet&channelId=C&order=viewCount&maxResults=5&type=video
//! videos?part=snippet,statistics&id=V      (once per hit)
//! ```

use crate::client::YouTube;
use crate::config::consts::{
    DESCRIPTION_CHARS, MONETIZATION_MIN_SUBSCRIBERS, TAGS_PER_ROW, TOP_TAGS, TOP_VIDEOS,
    WATCH_URL_PREFIX,
};
use crate::core::sanitize::{date_part, normalize_ws, truncate_ellipsis};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::resolve::ChannelId;
use crate::specs::channels::{self, ChannelItem};
use crate::specs::{search, videos};

use super::tags::{TagCount, TagCounter};

/// Heuristic, not an eligibility check: the Partner Program also requires
/// watch-hours, which the public API does not expose. Only the subscriber half
/// of the rule is evaluated here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonetizationProxy {
    pub subscribers: u64,
}

impl MonetizationProxy {
    pub fn likely_eligible(&self) -> bool {
        self.subscribers >= MONETIZATION_MIN_SUBSCRIBERS
    }

    pub fn label(&self) -> &'static str {
        if self.likely_eligible() { "Yes (subscriber proxy)" } else { "No (subscriber proxy)" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelOverview {
    pub id: ChannelId,
    pub title: String,
    /// `YYYY-MM-DD`
    pub created_on: String,
    /// First 200 chars + `…`
    pub description: String,
    pub subscribers: u64,
    pub total_views: u64,
    pub video_count: u64,
    pub monetization: MonetizationProxy,
}

impl ChannelOverview {
    pub fn from_item(id: &ChannelId, item: &ChannelItem) -> Self {
        let stats = &item.statistics;
        Self {
            id: id.clone(),
            title: normalize_ws(&item.snippet.title),
            created_on: s!(date_part(&item.snippet.published_at)),
            description: truncate_ellipsis(&item.snippet.description, DESCRIPTION_CHARS),
            subscribers: stats.subscriber_count,
            total_views: stats.view_count,
            video_count: stats.video_count,
            monetization: MonetizationProxy { subscribers: stats.subscriber_count },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopVideo {
    pub id: String,
    pub title: String,
    pub views: u64,
    pub url: String,
    pub tags: Vec<String>,
}

impl TopVideo {
    /// First five tags, comma separated.
    pub fn tags_display(&self) -> String {
        self.tags.iter().take(TAGS_PER_ROW).cloned().collect::<Vec<_>>().join(", ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelReport {
    pub overview: ChannelOverview,
    pub top_videos: Vec<TopVideo>,
    pub top_tags: Vec<TagCount>,
}

impl ChannelReport {
    pub fn keywords(&self) -> Vec<&str> {
        self.top_tags.iter().map(|t| t.tag.as_str()).collect()
    }
}

pub fn watch_url(video_id: &str) -> String {
    join!(WATCH_URL_PREFIX, video_id)
}

pub fn analyze_channel(
    yt: &YouTube,
    id: &ChannelId,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ChannelReport> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching channel overview…");
    }

    // 1) Overview
    let item = channels::by_id(yt, id.as_str(), "snippet,statistics")?
        .ok_or_else(|| Error::NotFound { kind: "Channel", id: s!(id.as_str()) })?;
    let overview = ChannelOverview::from_item(id, &item);
    logf!(
        "Channel: '{}' subs={} views={} videos={}",
        overview.title, overview.subscribers, overview.total_views, overview.video_count
    );

    // 2) Most viewed videos
    let hits = search::channel_top_videos(yt, id.as_str(), TOP_VIDEOS)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(hits.len());
    }

    // 3) Per-video detail + tag accumulation
    let mut top_videos = Vec::with_capacity(hits.len());
    let mut counter = TagCounter::new();

    for hit in &hits {
        let Some(vid) = hit.video_id() else {
            logd!("Channel: skipping non-video hit kind={}", hit.id.kind);
            continue;
        };
        let Some(detail) = videos::by_id(yt, vid, "snippet,statistics")? else {
            logd!("Channel: no detail for video {}, skipping", vid);
            continue;
        };

        counter.extend(&detail.snippet.tags);
        let video = TopVideo {
            id: s!(vid),
            title: normalize_ws(&detail.snippet.title),
            views: detail.statistics.view_count,
            url: watch_url(vid),
            tags: detail.snippet.tags,
        };
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&video.title);
        }
        top_videos.push(video);
    }

    // 4) Tag ranking
    let top_tags = counter.top(TOP_TAGS);
    logd!("Channel: {} distinct tags, keeping {}", counter.distinct(), top_tags.len());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(ChannelReport { overview, top_videos, top_tags })
}
