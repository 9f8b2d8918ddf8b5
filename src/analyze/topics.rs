// src/analyze/topics.rs
//! Viral topics scanner.
//!
//! Per keyword, independently:
//! ```text
//! search?part=snippet&q=K&type=video&order=viewCount&publishedAfter=T&maxResults=10
//! videos?part=statistics&id=V
//! videos?part=snippet&id=V                      (publish date, owning channel)
//! channels?part=snippet,statistics&id=C
//! ```
//! Rows from all keywords are concatenated as-is. A video that matches two
//! keywords yields two rows, one per keyword.

use chrono::{DateTime, Duration, Utc};

use crate::client::YouTube;
use crate::config::consts::{MAX_DAYS, SEARCH_MAX_RESULTS};
use crate::core::sanitize::normalize_ws;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::specs::{channels, search, videos};

use super::channel::watch_url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRow {
    pub keyword: String,
    pub video_id: String,
    pub title: String,
    pub channel: String,
    /// As returned by the API (`2024-05-01T12:00:00Z`).
    pub published_at: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub subscribers: u64,
    pub url: String,
}

/// Search window in days, `1..=MAX_DAYS`.
pub fn check_days(days: u32) -> Result<()> {
    if days == 0 || days > MAX_DAYS {
        return Err(Error::InvalidInput(format!(
            "days must be between 1 and {MAX_DAYS} (got {days})"
        )));
    }
    Ok(())
}

/// `now - days`, UTC, `YYYY-MM-DDTHH:MM:SSZ`.
pub fn cutoff(now: DateTime<Utc>, days: u32) -> Result<String> {
    now.checked_sub_signed(Duration::days(i64::from(days)))
        .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .ok_or_else(|| Error::InvalidInput(format!("{days} days back is out of range")))
}

/// Rows for a single keyword. Hits that are not videos, or whose detail calls
/// come back empty, are dropped.
pub fn scan_keyword(yt: &YouTube, keyword: &str, published_after: &str) -> Result<Vec<TopicRow>> {
    let hits = search::keyword_videos(yt, keyword, published_after, SEARCH_MAX_RESULTS)?;
    let mut rows = Vec::with_capacity(hits.len());

    for hit in &hits {
        let Some(vid) = hit.video_id() else { continue };

        let Some(stats) = videos::by_id(yt, vid, "statistics")? else {
            logd!("Topics: no statistics for {}, skipping", vid);
            continue;
        };
        let Some(snip) = videos::by_id(yt, vid, "snippet")? else {
            logd!("Topics: no snippet for {}, skipping", vid);
            continue;
        };
        let channel_id = snip.snippet.channel_id.as_str();
        let channel = if channel_id.is_empty() {
            None
        } else {
            channels::by_id(yt, channel_id, "snippet,statistics")?
        };
        let Some(channel) = channel else {
            logd!("Topics: no channel for {} ({}), skipping", vid, channel_id);
            continue;
        };

        rows.push(TopicRow {
            keyword: s!(keyword),
            video_id: s!(vid),
            title: normalize_ws(&snip.snippet.title),
            channel: normalize_ws(&channel.snippet.title),
            published_at: snip.snippet.published_at,
            views: stats.statistics.view_count,
            likes: stats.statistics.like_count,
            comments: stats.statistics.comment_count,
            subscribers: channel.statistics.subscriber_count,
            url: watch_url(vid),
        });
    }

    Ok(rows)
}

/// Flat table across all keywords, in keyword order.
pub fn scan_topics(
    yt: &YouTube,
    keywords: &[String],
    days: u32,
    now: DateTime<Utc>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<TopicRow>> {
    check_days(days)?;
    let after = cutoff(now, days)?;
    logf!("Topics: scan keywords={} publishedAfter={}", keywords.len(), after);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(keywords.len());
    }

    let mut rows = Vec::new();
    for kw in keywords {
        let kw = kw.trim();
        if kw.is_empty() {
            continue;
        }
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Searching “{kw}”…"));
        }
        let mut found = scan_keyword(yt, kw, &after)?;
        logd!("Topics: '{}' → {} row(s)", kw, found.len());
        rows.append(&mut found);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(kw);
        }
    }

    let stats = yt.cache_stats();
    logd!("Cache: entries={} hits={} misses={}", stats.entries, stats.hits, stats.misses);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(rows)
}
