// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use yt_scout::client::YouTube;
use yt_scout::config::options::ApiOptions;
use yt_scout::core::Transport;
use yt_scout::{Error, Result};

pub const BASE: &str = "https://api.test/youtube/v3";

#[derive(Clone, Debug)]
pub struct Call {
    pub url: String,
    pub params: BTreeMap<String, String>,
}

impl Call {
    /// Last path segment: `channels`, `search`, `videos`, or the page path.
    pub fn endpoint(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or("")
    }
    pub fn param(&self, k: &str) -> Option<&str> {
        self.params.get(k).map(String::as_str)
    }
}

#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<Call> { self.0.lock().unwrap().clone() }
    pub fn count(&self) -> usize { self.0.lock().unwrap().len() }
    pub fn count_to(&self, endpoint: &str) -> usize {
        self.calls().iter().filter(|c| c.endpoint() == endpoint).count()
    }
}

type Handler = dyn Fn(&Call) -> Result<String> + Send + Sync;

/// In-memory transport: records every call, answers through `handler`.
pub struct FakeTransport {
    log: CallLog,
    handler: Box<Handler>,
}

impl FakeTransport {
    pub fn new<F>(handler: F) -> (Self, CallLog)
    where
        F: Fn(&Call) -> Result<String> + Send + Sync + 'static,
    {
        let log = CallLog::default();
        (Self { log: log.clone(), handler: Box::new(handler) }, log)
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        let call = Call { url: url.to_string(), params: params.iter().cloned().collect() };
        self.log.0.lock().unwrap().push(call.clone());
        (self.handler)(&call)
    }
}

pub fn api_options() -> ApiOptions {
    ApiOptions {
        api_key: "test-key".into(),
        base_url: BASE.into(),
        ..ApiOptions::default()
    }
}

/// Client over a fake transport, plus the call log.
pub fn client<F>(handler: F) -> (YouTube, CallLog)
where
    F: Fn(&Call) -> Result<String> + Send + Sync + 'static,
{
    let (t, log) = FakeTransport::new(handler);
    let yt = YouTube::with_transport(&api_options(), Box::new(t)).unwrap();
    (yt, log)
}

pub fn http_error(status: u16, endpoint: &str) -> Error {
    Error::Http { status, endpoint: endpoint.into(), detail: Some("quotaExceeded".into()) }
}

/* ---------------- Response fixtures ---------------- */

pub fn list(items: Vec<Value>) -> String {
    json!({ "kind": "youtube#listResponse", "items": items }).to_string()
}

pub fn empty_list() -> String { list(vec![]) }

pub fn channel_item(id: &str, title: &str, subs: Option<&str>) -> Value {
    let mut stats = json!({ "viewCount": "120000", "videoCount": "42" });
    if let Some(s) = subs {
        stats["subscriberCount"] = json!(s);
    }
    json!({
        "id": id,
        "snippet": {
            "title": title,
            "description": "A channel about things.",
            "publishedAt": "2019-03-04T10:00:00Z"
        },
        "statistics": stats
    })
}

pub fn video_hit(video_id: &str) -> Value {
    json!({
        "id": { "kind": "youtube#video", "videoId": video_id },
        "snippet": { "title": format!("hit {video_id}"), "channelId": "UCchan" }
    })
}

pub fn playlist_hit(playlist_id: &str) -> Value {
    json!({
        "id": { "kind": "youtube#playlist", "playlistId": playlist_id },
        "snippet": { "title": "a playlist" }
    })
}

pub fn channel_hit(channel_id: &str) -> Value {
    json!({
        "id": { "kind": "youtube#channel", "channelId": channel_id },
        "snippet": { "channelId": channel_id, "title": "chan" }
    })
}

pub fn video_item(id: &str, title: &str, views: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "snippet": {
            "title": title,
            "publishedAt": "2024-05-03T08:00:00Z",
            "channelId": "UCsmallchannel0000000000",
            "channelTitle": "Small Channel",
            "tags": tags
        },
        "statistics": { "viewCount": views, "likeCount": "10", "commentCount": "3" }
    })
}

/// 24-char id starting with UC.
pub fn uc(tail: char) -> String {
    let mut id = String::from("UC");
    id.extend(std::iter::repeat(tail).take(22));
    id
}
