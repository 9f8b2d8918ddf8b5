// src/client.rs
//
// The YouTube Data API client: explicit configuration (key + base URL) plus the
// shared fetch cache. Every outbound call in the crate goes through here.

use serde::de::DeserializeOwned;

use crate::config::options::ApiOptions;
use crate::core::{CacheStats, FetchCache, HttpTransport, Transport};
use crate::core::net::Params;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Channels,
    Search,
    Videos,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Channels => "channels",
            Endpoint::Search => "search",
            Endpoint::Videos => "videos",
        }
    }
}

pub struct YouTube {
    cache: FetchCache,
    api_key: String,
    base_url: String,
}

impl YouTube {
    /// Production client over HTTPS.
    pub fn new(api: &ApiOptions) -> Result<Self> {
        Self::with_transport(api, Box::new(HttpTransport::new()?))
    }

    pub fn with_transport(api: &ApiOptions, transport: Box<dyn Transport>) -> Result<Self> {
        let key = api.require_key()?;
        Ok(Self {
            cache: FetchCache::new(transport, api.cache_capacity),
            api_key: s!(key),
            base_url: s!(api.base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint_url(&self, ep: Endpoint) -> String {
        join!(&self.base_url, "/", ep.path())
    }

    /// One API call: credential appended, response decoded into `D`.
    pub fn call<D: DeserializeOwned>(&self, ep: Endpoint, mut params: Params) -> Result<D> {
        params.push((s!("key"), self.api_key.clone()));
        let value = self.cache.fetch(&self.endpoint_url(ep), &params)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Raw web page through the same cache (resolver HTML fallback).
    pub fn page(&self, url: &str) -> Result<String> {
        self.cache.fetch_text(url)
    }

    pub fn cache(&self) -> &FetchCache { &self.cache }

    pub fn cache_stats(&self) -> CacheStats { self.cache.stats() }
}
