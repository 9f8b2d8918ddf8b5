// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Non-2xx from the API (or the page fetched by the resolver).
    #[error("HTTP {status} from {endpoint}{}", fmt_detail(.detail))]
    Http {
        status: u16,
        endpoint: String,
        detail: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Could not parse or resolve a channel ID from '{input}'. Ensure the URL is valid.")]
    Unresolved { input: String },

    #[error("No API key configured (set YOUTUBE_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// User-input problems are shown as a warning, not as a system fault.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::Unresolved { .. } | Self::InvalidInput(_) | Self::MissingApiKey)
    }
}
