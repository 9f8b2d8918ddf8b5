// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::analyze::filter::{SortColumn, SortDirection, ViralFilter};
use crate::analyze::topics::check_days;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub channel: ChannelOptions,
    pub topics: TopicsOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Channel,
    Topics,
}

/* ---------------- API ---------------- */

#[derive(Clone, PartialEq, Eq)]
pub struct ApiOptions {
    pub api_key: String,
    pub base_url: String,
    pub cache_capacity: usize,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            api_key: s!(),
            base_url: s!(API_BASE),
            cache_capacity: CACHE_CAPACITY,
        }
    }
}

// Keep the key out of Debug output (and therefore out of logs).
impl std::fmt::Debug for ApiOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiOptions")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("cache_capacity", &self.cache_capacity)
            .finish()
    }
}

impl ApiOptions {
    /// Defaults, then `.env`, then the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let mut api = Self::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            api.api_key = key.trim().to_string();
        }
        if let Ok(base) = std::env::var(API_BASE_ENV) {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                api.base_url = base.to_string();
            }
        }
        api
    }

    pub fn with_key(mut self, key: Option<String>) -> Self {
        if let Some(k) = key {
            self.api_key = k.trim().to_string();
        }
        self
    }

    pub fn require_key(&self) -> Result<&str> {
        if self.api_key.is_empty() {
            Err(Error::MissingApiKey)
        } else {
            Ok(&self.api_key)
        }
    }
}

/* ---------------- Channel analyzer ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelOptions {
    pub url: String,
}

/* ---------------- Topics scanner ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicsOptions {
    /// One keyword per line (GUI text area / CLI list joined with '\n').
    pub keywords_text: String,
    pub days: u32,
    pub min_views: u64,
    pub max_subscribers: u64,
    pub sort_by: SortColumn,
    pub direction: SortDirection,
}

impl Default for TopicsOptions {
    fn default() -> Self {
        Self {
            keywords_text: DEFAULT_KEYWORDS.join("\n"),
            days: DEFAULT_DAYS,
            min_views: DEFAULT_MIN_VIEWS,
            max_subscribers: DEFAULT_MAX_SUBSCRIBERS,
            sort_by: SortColumn::Views,
            direction: SortDirection::Descending,
        }
    }
}

impl TopicsOptions {
    /// Trimmed, non-blank keywords in input order.
    pub fn keywords(&self) -> Vec<String> {
        self.keywords_text
            .lines()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn set_keywords<S: AsRef<str>>(&mut self, keywords: &[S]) {
        self.keywords_text = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .collect::<Vec<_>>()
            .join("\n");
    }

    pub fn filter(&self) -> ViralFilter {
        ViralFilter {
            min_views: self.min_views,
            max_subscribers: self.max_subscribers,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_days(self.days)?;
        if self.keywords().is_empty() {
            return Err(Error::InvalidInput(s!("enter at least one keyword")));
        }
        Ok(())
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// Set once the user types a path; otherwise the per-page default is used.
    custom_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            custom_path: None,
        }
    }
}

impl ExportOptions {
    pub fn default_path_for(&self, kind: PageKind) -> PathBuf {
        let stem = match kind {
            PageKind::Channel => DEFAULT_CHANNEL_FILE,
            PageKind::Topics => DEFAULT_TOPICS_FILE,
        };
        PathBuf::from(DEFAULT_OUT_DIR).join(join!(stem, ".", self.format.ext()))
    }

    pub fn out_path(&self, kind: PageKind) -> PathBuf {
        self.custom_path
            .clone()
            .unwrap_or_else(|| self.default_path_for(kind))
    }

    pub fn is_default_path(&self) -> bool {
        self.custom_path.is_none()
    }

    /// Parse GUI/CLI text into an explicit path. A user-typed extension is kept;
    /// a bare stem gets the current format's extension.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.custom_path = None;
            return;
        }
        let p = Path::new(s);
        self.custom_path = Some(if p.extension().is_some() {
            p.to_path_buf()
        } else {
            p.with_extension(self.format.ext())
        });
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_key_overrides_and_is_trimmed() {
        let api = ApiOptions::default().with_key(Some(s!("  abc  ")));
        assert_eq!(api.require_key().ok(), Some("abc"));
        assert!(matches!(ApiOptions::default().require_key(), Err(Error::MissingApiKey)));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let api = ApiOptions::default().with_key(Some(s!("secret-key")));
        let shown = format!("{api:?}");
        assert!(!shown.contains("secret-key"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn delimiter_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.delim(), ',');
        export.format = ExportFormat::Tsv;
        assert_eq!(export.delim(), '\t');
    }
}
