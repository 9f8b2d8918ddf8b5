// tests/channel_analysis.rs
mod common;

use serde_json::json;

use common::{channel_item, client, empty_list, list, playlist_hit, uc, video_hit, video_item};
use yt_scout::analyze::analyze_channel;
use yt_scout::data::videos_table;
use yt_scout::progress::NullProgress;
use yt_scout::resolve::ChannelId;
use yt_scout::runner::run_channel;
use yt_scout::Error;

#[test]
fn three_public_videos_give_three_rows() {
    let id = uc('a');
    let (yt, log) = client(|call| match call.endpoint() {
        "channels" => Ok(list(vec![channel_item(&call.params["id"], "Three Videos", Some("2500"))])),
        "search" => {
            assert_eq!(call.param("order"), Some("viewCount"));
            assert_eq!(call.param("maxResults"), Some("5"));
            assert_eq!(call.param("type"), Some("video"));
            Ok(list(vec![video_hit("v1"), video_hit("v2"), video_hit("v3")]))
        }
        "videos" => {
            assert_eq!(call.param("part"), Some("snippet,statistics"));
            let vid = call.params["id"].clone();
            Ok(list(vec![video_item(&vid, &format!("Video {vid}"), "1000", &["rust"])]))
        }
        other => panic!("unexpected endpoint {other}"),
    });

    let report = analyze_channel(&yt, &ChannelId::new(id.clone()), Some(&mut NullProgress)).unwrap();

    assert_eq!(report.top_videos.len(), 3);
    assert_eq!(report.overview.title, "Three Videos");
    assert_eq!(report.overview.created_on, "2019-03-04");
    assert_eq!(report.overview.subscribers, 2500);
    assert!(report.overview.monetization.likely_eligible());
    assert_eq!(report.top_videos[0].url, "https://youtu.be/v1");
    assert_eq!(log.count_to("videos"), 3);

    let table = videos_table(&report.top_videos);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.headers.as_ref().unwrap(), &["Title", "Views", "URL", "Tags"]);
}

#[test]
fn missing_statistics_become_zero() {
    let (yt, _log) = client(|call| match call.endpoint() {
        "channels" => Ok(list(vec![json!({
            "id": "UCnostats",
            "snippet": { "title": "Hidden", "publishedAt": "2020-01-01T00:00:00Z" }
        })])),
        "search" => Ok(list(vec![video_hit("v1")])),
        "videos" => Ok(list(vec![json!({
            "id": "v1",
            "snippet": { "title": "No stats, no tags" },
            "statistics": { "viewCount": null, "likeCount": "n/a" }
        })])),
        _ => Ok(empty_list()),
    });

    let report = analyze_channel(&yt, &ChannelId::new("UCnostats"), None).unwrap();
    let o = &report.overview;
    assert_eq!((o.subscribers, o.total_views, o.video_count), (0, 0, 0));
    assert!(!o.monetization.likely_eligible());
    assert_eq!(report.top_videos[0].views, 0);
    assert!(report.top_videos[0].tags.is_empty());
    assert_eq!(report.top_videos[0].tags_display(), "");
    assert!(report.top_tags.is_empty());
}

#[test]
fn unknown_channel_is_not_found() {
    let (yt, log) = client(|_| Ok(empty_list()));
    let err = analyze_channel(&yt, &ChannelId::new(uc('z')), None).unwrap_err();
    assert!(matches!(err, Error::NotFound { kind: "Channel", .. }));
    // stops after the overview call
    assert_eq!(log.count(), 1);
}

#[test]
fn non_video_hits_and_missing_details_are_skipped() {
    let (yt, log) = client(|call| match call.endpoint() {
        "channels" => Ok(list(vec![channel_item("UCskip", "Skip", Some("10"))])),
        "search" => Ok(list(vec![video_hit("v1"), playlist_hit("PL1"), video_hit("gone")])),
        "videos" if call.params["id"] == "gone" => Ok(empty_list()),
        "videos" => Ok(list(vec![video_item("v1", "Only one", "77", &[])])),
        _ => Ok(empty_list()),
    });

    let report = analyze_channel(&yt, &ChannelId::new("UCskip"), None).unwrap();
    assert_eq!(report.top_videos.len(), 1);
    assert_eq!(report.top_videos[0].title, "Only one");
    // no detail call for the playlist
    assert_eq!(log.count_to("videos"), 2);
}

#[test]
fn tags_are_ranked_and_rows_show_first_five() {
    let (yt, _log) = client(|call| match call.endpoint() {
        "channels" => Ok(list(vec![channel_item("UCtags", "Tags", Some("5"))])),
        "search" => Ok(list(vec![video_hit("v1"), video_hit("v2")])),
        "videos" if call.params["id"] == "v1" => Ok(list(vec![video_item(
            "v1", "One", "10",
            &["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"],
        )])),
        "videos" => Ok(list(vec![video_item("v2", "Two", "5", &["l", "k", "a"])])),
        _ => Ok(empty_list()),
    });

    let report = analyze_channel(&yt, &ChannelId::new("UCtags"), None).unwrap();

    assert_eq!(report.top_videos[0].tags_display(), "a, b, c, d, e");
    assert_eq!(report.top_tags.len(), 10);
    // a, k, l seen twice; a was seen first
    let names: Vec<&str> = report.keywords();
    assert_eq!(&names[..3], &["a", "k", "l"]);
    assert_eq!(report.top_tags[0].count, 2);
    assert!(report.top_tags[3..].iter().all(|t| t.count == 1));
    assert_eq!(&names[3..], &["b", "c", "d", "e", "f", "g", "h"]);
}

#[test]
fn long_description_is_truncated() {
    let long = "x".repeat(500);
    let (yt, _log) = client(move |call| match call.endpoint() {
        "channels" => Ok(list(vec![json!({
            "id": "UClong",
            "snippet": { "title": "Long", "description": long, "publishedAt": "2021-06-01T00:00:00Z" },
            "statistics": { "subscriberCount": "1" }
        })])),
        _ => Ok(empty_list()),
    });

    let report = analyze_channel(&yt, &ChannelId::new("UClong"), None).unwrap();
    assert_eq!(report.overview.description.chars().count(), 201);
    assert!(report.overview.description.ends_with('…'));
    assert!(report.top_videos.is_empty());
}

#[test]
fn run_channel_stops_on_unresolved_url() {
    let (yt, log) = client(|_| Ok(empty_list()));
    let err = run_channel(&yt, "   not a url   ", None).err().unwrap();
    assert!(matches!(err, Error::Unresolved { .. }));
    assert_eq!(log.count(), 0);
}
