// tests/cache_keys.rs
mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{http_error, FakeTransport};
use yt_scout::core::{CacheKey, FetchCache};

fn p(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn parameter_order_does_not_change_the_key() {
    let a = CacheKey::new("search", &p(&[("q", "cats"), ("type", "video"), ("maxResults", "10")]));
    let b = CacheKey::new("search", &p(&[("maxResults", "10"), ("q", "cats"), ("type", "video")]));
    assert_eq!(a, b);

    let other_endpoint = CacheKey::new("videos", &p(&[("q", "cats"), ("type", "video"), ("maxResults", "10")]));
    assert_ne!(a, other_endpoint);
}

#[test]
fn reordered_call_is_served_from_cache() {
    let (t, log) = FakeTransport::new(|_| Ok(r#"{"items":[]}"#.into()));
    let cache = FetchCache::new(Box::new(t), 8);

    cache.fetch("search", &p(&[("q", "cats"), ("type", "video")])).unwrap();
    cache.fetch("search", &p(&[("type", "video"), ("q", "cats")])).unwrap();

    assert_eq!(log.count(), 1);
    let stats = cache.stats();
    assert_eq!((stats.entries, stats.hits, stats.misses), (1, 1, 1));
}

#[test]
fn least_recently_used_entry_is_evicted() {
    let (t, log) = FakeTransport::new(|_| Ok("{}".into()));
    let cache = FetchCache::new(Box::new(t), 2);

    let a = p(&[("id", "a")]);
    let b = p(&[("id", "b")]);
    let c = p(&[("id", "c")]);

    cache.fetch("videos", &a).unwrap();
    cache.fetch("videos", &b).unwrap();
    // a becomes most recent, so b is next out
    cache.fetch("videos", &a).unwrap();
    cache.fetch("videos", &c).unwrap();

    assert_eq!(cache.len(), 2);
    assert!(cache.contains("videos", &a));
    assert!(!cache.contains("videos", &b));
    assert!(cache.contains("videos", &c));
    assert_eq!(log.count(), 3);

    // b has to be fetched again
    cache.fetch("videos", &b).unwrap();
    assert_eq!(log.count(), 4);
}

#[test]
fn errors_are_not_cached() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let seen = attempts.clone();
    let (t, log) = FakeTransport::new(move |call| {
        if seen.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(http_error(500, &call.url))
        } else {
            Ok(r#"{"items":[{"id":"x"}]}"#.into())
        }
    });
    let cache = FetchCache::new(Box::new(t), 4);
    let params = p(&[("id", "x")]);

    assert!(cache.fetch("videos", &params).is_err());
    assert!(!cache.contains("videos", &params));
    assert!(cache.is_empty());

    let v = cache.fetch("videos", &params).unwrap();
    assert_eq!(v["items"][0]["id"], "x");
    assert_eq!(log.count(), 2);

    // now cached
    cache.fetch("videos", &params).unwrap();
    assert_eq!(log.count(), 2);
}

#[test]
fn zero_capacity_never_stores() {
    let (t, log) = FakeTransport::new(|_| Ok("{}".into()));
    let cache = FetchCache::new(Box::new(t), 0);
    let params = p(&[("id", "x")]);

    cache.fetch("videos", &params).unwrap();
    cache.fetch("videos", &params).unwrap();
    assert_eq!(log.count(), 2);
    assert!(cache.is_empty());
}

#[test]
fn clear_drops_entries() {
    let (t, log) = FakeTransport::new(|_| Ok("{}".into()));
    let cache = FetchCache::new(Box::new(t), 4);
    let params = p(&[("id", "x")]);

    cache.fetch("videos", &params).unwrap();
    cache.clear();
    assert!(cache.is_empty());
    cache.fetch("videos", &params).unwrap();
    assert_eq!(log.count(), 2);
}

#[test]
fn undecodable_body_is_a_decode_error() {
    let (t, _log) = FakeTransport::new(|_| Ok("<html>not json</html>".into()));
    let cache = FetchCache::new(Box::new(t), 4);
    let params = p(&[("id", "x")]);
    let err = cache.fetch("videos", &params).unwrap_err();
    assert!(matches!(err, yt_scout::Error::Decode(_)));
    assert!(!cache.contains("videos", &params));
}
