// src/data.rs
//
// Tabular views of the aggregator output.
//
// - DataSet: headers + string rows; what the table, the CLI printer and the
//            exporter all consume.
// - topics_table / videos_table: typed rows → DataSet, one column per field.
// - export_view: the displayed table minus the URL column.
// - chart_bars: one bar per topic row, coloured by keyword.

use crate::analyze::{SortColumn, TopVideo, TopicRow};

pub const URL_COLUMN: &str = "URL";

pub const TOPIC_HEADERS: [&str; 9] = [
    "Keyword", "Title", "Channel", "PublishDate", "Views", "Likes", "Comments", "Subscribers", URL_COLUMN,
];

pub const VIDEO_HEADERS: [&str; 4] = ["Title", "Views", URL_COLUMN, "Tags"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self { Self { headers, rows } }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn header_count(&self) -> usize {
        match &self.headers {
            Some(h) => h.len(),
            None => self.rows.first().map(|r| r.len()).unwrap_or(0),
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }

    /// Copy of the dataset with one named column removed. Unknown name → plain copy.
    pub fn without_column(&self, name: &str) -> DataSet {
        let Some(ix) = self.column_index(name) else { return self.clone() };
        let drop = |r: &Vec<String>| -> Vec<String> {
            r.iter().enumerate().filter(|(i, _)| *i != ix).map(|(_, c)| c.clone()).collect()
        };
        DataSet {
            headers: self.headers.as_ref().map(drop),
            rows: self.rows.iter().map(drop).collect(),
        }
    }
}

fn headers(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(|h| s!(*h)).collect())
}

pub fn topics_table(rows: &[TopicRow]) -> DataSet {
    let body = rows
        .iter()
        .map(|r| {
            vec![
                r.keyword.clone(),
                r.title.clone(),
                r.channel.clone(),
                r.published_at.clone(),
                r.views.to_string(),
                r.likes.to_string(),
                r.comments.to_string(),
                r.subscribers.to_string(),
                r.url.clone(),
            ]
        })
        .collect();
    DataSet::new(headers(&TOPIC_HEADERS), body)
}

pub fn videos_table(videos: &[TopVideo]) -> DataSet {
    let body = videos
        .iter()
        .map(|v| vec![v.title.clone(), v.views.to_string(), v.url.clone(), v.tags_display()])
        .collect();
    DataSet::new(headers(&VIDEO_HEADERS), body)
}

/// What Copy/Export write: the displayed columns, URL excluded.
pub fn export_view(ds: &DataSet) -> DataSet {
    ds.without_column(URL_COLUMN)
}

/* ---------------- Chart ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Index into `keyword_series()`; picks the colour.
    pub series: usize,
}

/// Distinct keywords in first-seen order.
pub fn keyword_series(rows: &[TopicRow]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in rows {
        if !out.iter().any(|k| k == &r.keyword) {
            out.push(r.keyword.clone());
        }
    }
    out
}

/// One bar per row, in row order. PublishDate has no magnitude, so it is
/// charted by views.
pub fn chart_bars(rows: &[TopicRow], metric: SortColumn) -> Vec<Bar> {
    let series = keyword_series(rows);
    rows.iter()
        .map(|r| Bar {
            label: r.title.clone(),
            value: metric.metric(r).unwrap_or(r.views) as f64,
            series: series.iter().position(|k| k == &r.keyword).unwrap_or(0),
        })
        .collect()
}
