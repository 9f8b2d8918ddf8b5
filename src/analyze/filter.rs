// src/analyze/filter.rs
//! Caller-side post-processing of a topic scan: the "small channel, viral video"
//! filter and the user-chosen sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::topics::TopicRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViralFilter {
    pub min_views: u64,
    pub max_subscribers: u64,
}

impl ViralFilter {
    pub fn keeps(&self, row: &TopicRow) -> bool {
        row.views >= self.min_views && row.subscribers <= self.max_subscribers
    }

    pub fn apply(&self, rows: &[TopicRow]) -> Vec<TopicRow> {
        rows.iter().filter(|r| self.keeps(r)).cloned().collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Views,
    Likes,
    Comments,
    PublishDate,
    Subscribers,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Views,
        SortColumn::Likes,
        SortColumn::Comments,
        SortColumn::PublishDate,
        SortColumn::Subscribers,
    ];

    /// Column header in the topics table.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Views => "Views",
            SortColumn::Likes => "Likes",
            SortColumn::Comments => "Comments",
            SortColumn::PublishDate => "PublishDate",
            SortColumn::Subscribers => "Subscribers",
        }
    }

    /// Numeric value for charts. PublishDate has none.
    pub fn metric(&self, row: &TopicRow) -> Option<u64> {
        match self {
            SortColumn::Views => Some(row.views),
            SortColumn::Likes => Some(row.likes),
            SortColumn::Comments => Some(row.comments),
            SortColumn::Subscribers => Some(row.subscribers),
            SortColumn::PublishDate => None,
        }
    }

    fn compare(&self, a: &TopicRow, b: &TopicRow) -> Ordering {
        match self {
            // RFC 3339 UTC timestamps of one shape order lexicographically.
            SortColumn::PublishDate => a.published_at.cmp(&b.published_at),
            _ => self.metric(a).cmp(&self.metric(b)),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match norm.as_str() {
            "views" => Ok(SortColumn::Views),
            "likes" => Ok(SortColumn::Likes),
            "comments" => Ok(SortColumn::Comments),
            "publishdate" | "date" | "published" => Ok(SortColumn::PublishDate),
            "subscribers" | "subs" => Ok(SortColumn::Subscribers),
            _ => Err(format!("unknown sort column: {s}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending { SortDirection::Ascending } else { SortDirection::Descending }
    }
}

/// Stable: rows with equal keys keep their scan order in either direction.
pub fn sort_rows(rows: &mut [TopicRow], by: SortColumn, dir: SortDirection) {
    match dir {
        SortDirection::Ascending => rows.sort_by(|a, b| by.compare(a, b)),
        SortDirection::Descending => rows.sort_by(|a, b| by.compare(b, a)),
    }
}

/// Filter, then sort. The scan result itself is left untouched.
pub fn refine(rows: &[TopicRow], filter: &ViralFilter, by: SortColumn, dir: SortDirection) -> Vec<TopicRow> {
    let mut kept = filter.apply(rows);
    sort_rows(&mut kept, by, dir);
    kept
}
