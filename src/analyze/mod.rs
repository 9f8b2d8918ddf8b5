// src/analyze/mod.rs
pub mod channel;
pub mod filter;
pub mod guide;
pub mod tags;
pub mod topics;

pub use channel::{analyze_channel, ChannelOverview, ChannelReport, MonetizationProxy, TopVideo};
pub use filter::{refine, sort_rows, SortColumn, SortDirection, ViralFilter};
pub use tags::{top_tags, TagCount, TagCounter};
pub use topics::{check_days, cutoff, scan_keyword, scan_topics, TopicRow};
