// src/runner.rs
//
// Top-level entry points shared by the CLI and the GUI: take options, drive
// resolver/aggregator, hand back something ready to show.

use chrono::{DateTime, Utc};

use crate::analyze::{analyze_channel, refine, scan_topics, ChannelReport, TopicRow};
use crate::client::YouTube;
use crate::config::options::TopicsOptions;
use crate::data::{topics_table, videos_table, DataSet};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::resolve::{resolve, Resolution, Strategy};

/// Channel analyzer output.
pub struct ChannelRun {
    pub report: ChannelReport,
    pub via: Strategy,
    pub table: DataSet,
}

/// Topic scanner output. `rows` is the full scan; `shown` is filtered + sorted.
pub struct TopicsRun {
    pub rows: Vec<TopicRow>,
    pub shown: Vec<TopicRow>,
    pub table: DataSet,
}

impl TopicsRun {
    /// Zero rows after filtering is its own state, not an error.
    pub fn no_matches(&self) -> bool { self.shown.is_empty() }

    /// Re-apply filter and sort to the cached scan (no network).
    pub fn refilter(&mut self, opts: &TopicsOptions) {
        self.shown = refine(&self.rows, &opts.filter(), opts.sort_by, opts.direction);
        self.table = topics_table(&self.shown);
    }
}

/// Resolve `url` to a channel, then analyze it. An unresolvable URL stops
/// here with `Error::Unresolved` and no further calls.
pub fn run_channel(
    yt: &YouTube,
    url: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ChannelRun> {
    let url = url.trim();
    if let Some(p) = progress.as_deref_mut() {
        p.log("Resolving channel…");
    }
    let (id, via) = match resolve(yt, url) {
        Resolution::Resolved { id, via } => (id, via),
        Resolution::Unresolved => return Err(Error::Unresolved { input: s!(url) }),
    };
    logf!("Channel: '{}' → {} via {:?}", url, id, via);

    let report = analyze_channel(yt, &id, progress)?;
    let table = videos_table(&report.top_videos);
    Ok(ChannelRun { report, via, table })
}

pub fn run_topics(
    yt: &YouTube,
    opts: &TopicsOptions,
    now: DateTime<Utc>,
    progress: Option<&mut dyn Progress>,
) -> Result<TopicsRun> {
    opts.validate()?;
    let rows = scan_topics(yt, &opts.keywords(), opts.days, now, progress)?;
    let mut run = TopicsRun { rows, shown: Vec::new(), table: DataSet::default() };
    run.refilter(opts);
    logf!("Topics: {} row(s) scanned, {} kept", run.rows.len(), run.shown.len());
    Ok(run)
}
