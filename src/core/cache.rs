// src/core/cache.rs
//
// Memoizing wrapper around `Transport::get`.
//
// - Key = endpoint + parameters sorted by (name, value), so two calls that only
//   differ in parameter order share one entry.
// - Bounded LRU: once `capacity` distinct keys are held, inserting a new one
//   drops the least recently used entry.
// - Process lifetime, no TTL. Errors are never stored.
// - The lock is held across check → fetch → insert: a shared cache never
//   issues two in-flight fetches for the same key.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use super::net::Transport;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    endpoint: String,
    params: Vec<(String, String)>,
}

impl CacheKey {
    pub fn new(endpoint: &str, params: &[(String, String)]) -> Self {
        let mut params = params.to_vec();
        params.sort();
        Self { endpoint: s!(endpoint), params }
    }

    pub fn params(&self) -> &[(String, String)] { &self.params }
}

#[derive(Default)]
struct Lru {
    map: HashMap<CacheKey, String>,
    /// Front = least recently used.
    order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
}

impl Lru {
    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }

    fn insert(&mut self, key: CacheKey, body: String, capacity: usize) {
        while self.map.len() >= capacity {
            match self.order.pop_front() {
                Some(old) => {
                    logd!("Cache: evict {}", old.endpoint);
                    self.map.remove(&old);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.map.insert(key, body);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

pub struct FetchCache {
    transport: Box<dyn Transport>,
    capacity: usize,
    inner: Mutex<Lru>,
}

impl FetchCache {
    pub fn new(transport: Box<dyn Transport>, capacity: usize) -> Self {
        Self { transport, capacity, inner: Mutex::new(Lru::default()) }
    }

    pub fn capacity(&self) -> usize { self.capacity }

    fn lock(&self) -> MutexGuard<'_, Lru> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// GET `endpoint` with `params` and decode the body as JSON.
    pub fn fetch(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        let body = self.fetch_text_with(endpoint, params)?;
        serde_json::from_str(&body).map_err(|e| {
            // an undecodable body counts as a failure, so it is not kept
            self.forget(&CacheKey::new(endpoint, params));
            Error::from(e)
        })
    }

    /// Raw body of a plain page GET (no query parameters).
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        self.fetch_text_with(url, &[])
    }

    fn fetch_text_with(&self, endpoint: &str, params: &[(String, String)]) -> Result<String> {
        let key = CacheKey::new(endpoint, params);
        let mut lru = self.lock();

        if let Some(body) = lru.map.get(&key).cloned() {
            lru.hits += 1;
            lru.touch(&key);
            logd!("Cache: hit {}", endpoint);
            return Ok(body);
        }

        lru.misses += 1;
        let body = self.transport.get(endpoint, key.params())?;
        if self.capacity > 0 {
            lru.insert(key, body.clone(), self.capacity);
        }
        Ok(body)
    }

    fn forget(&self, key: &CacheKey) {
        let mut lru = self.lock();
        if lru.map.remove(key).is_some() {
            lru.order.retain(|k| k != key);
        }
    }

    pub fn contains(&self, endpoint: &str, params: &[(String, String)]) -> bool {
        self.lock().map.contains_key(&CacheKey::new(endpoint, params))
    }

    pub fn len(&self) -> usize { self.lock().map.len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn stats(&self) -> CacheStats {
        let lru = self.lock();
        CacheStats { entries: lru.map.len(), hits: lru.hits, misses: lru.misses }
    }

    pub fn clear(&self) {
        let mut lru = self.lock();
        lru.map.clear();
        lru.order.clear();
    }
}
