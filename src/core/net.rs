// src/core/net.rs
//
// Outbound HTTP GET. The pipelines only see `Transport`; production uses a
// blocking reqwest client, tests plug in an in-memory fake.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub type Params = Vec<(String, String)>;

pub trait Transport: Send + Sync {
    /// GET `url` with query `params`; return the body on 2xx, `Error::Http` otherwise.
    fn get(&self, url: &str, params: &[(String, String)]) -> Result<String>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        // No explicit timeout: the client's default applies.
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        logd!("GET {} {}", url, redact_params(params));
        let resp = self.client.get(url).query(params).send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                endpoint: s!(url),
                detail: api_error_message(&body),
            });
        }
        Ok(resp.text()?)
    }
}

/// The API reports failures as `{"error": {"code": 403, "message": "..."}}`.
pub fn api_error_message(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    v.get("error")?
        .get("message")?
        .as_str()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// `k=v&k=v` for logs, with the API key masked.
pub fn redact_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| {
            if k == "key" { format!("{k}=***") } else { format!("{k}={v}") }
        })
        .collect::<Vec<_>>()
        .join("&")
}
