// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const USER_AGENT: &str = concat!("yt_scout/", env!("CARGO_PKG_VERSION"));
pub const WATCH_URL_PREFIX: &str = "https://youtu.be/";

// Env
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";
pub const API_BASE_ENV: &str = "YOUTUBE_API_BASE";
pub const LOG_ENV: &str = "YT_SCOUT_LOG";

// Local state (logs only; fetched data is never persisted)
pub const STATE_DIR: &str = ".yt_scout";
pub const LOG_FILE: &str = "debug.log";

// Fetch cache
pub const CACHE_CAPACITY: usize = 128;

// Channel analyzer
pub const TOP_VIDEOS: u32 = 5;
pub const TOP_TAGS: usize = 10;
pub const TAGS_PER_ROW: usize = 5;
pub const DESCRIPTION_CHARS: usize = 200;
/// Public proxy only: the real threshold also needs 4,000 watch-hours,
/// which the public API does not expose.
pub const MONETIZATION_MIN_SUBSCRIBERS: u64 = 1_000;

// Topics scanner
pub const SEARCH_MAX_RESULTS: u32 = 10;
pub const DEFAULT_DAYS: u32 = 7;
pub const MAX_DAYS: u32 = 30;
pub const DEFAULT_MIN_VIEWS: u64 = 1_000;
pub const DEFAULT_MAX_SUBSCRIBERS: u64 = 3_000;
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "Affair Relationship Stories",
    "Reddit Relationship Advice",
    "Cheating Story Real",
];

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_TOPICS_FILE: &str = "viral_topics";
pub const DEFAULT_CHANNEL_FILE: &str = "channel_top_videos";
