// tests/resolver.rs
mod common;

use common::{channel_hit, channel_item, client, empty_list, http_error, list, uc};
use yt_scout::resolve::{self, resolve, Resolution, Strategy};
use yt_scout::Error;

#[test]
fn direct_channel_url_needs_no_network() {
    let (yt, log) = client(|_| panic!("no call expected"));
    let id = uc('x');

    for url in [
        format!("https://www.youtube.com/channel/{id}"),
        format!("youtube.com/channel/{id}/videos"),
        format!("/channel/{id}"),
    ] {
        match resolve(&yt, &url) {
            Resolution::Resolved { id: got, via } => {
                assert_eq!(got.as_str(), id);
                assert_eq!(via, Strategy::DirectId);
            }
            Resolution::Unresolved => panic!("unresolved: {url}"),
        }
    }
    assert_eq!(log.count(), 0);
}

#[test]
fn legacy_username_uses_for_username_lookup() {
    let id = uc('u');
    let answer = id.clone();
    let (yt, log) = client(move |call| {
        assert_eq!(call.endpoint(), "channels");
        assert_eq!(call.param("forUsername"), Some("oldname"));
        assert_eq!(call.param("part"), Some("id"));
        assert_eq!(call.param("key"), Some("test-key"));
        Ok(list(vec![channel_item(&answer, "Old", None)]))
    });

    let r = resolve(&yt, "https://www.youtube.com/user/oldname");
    assert_eq!(r.strategy(), Some(Strategy::LegacyName));
    assert_eq!(r.id().map(|c| c.as_str()), Some(id.as_str()));
    assert_eq!(log.count(), 1);
}

#[test]
fn custom_c_path_is_treated_as_username() {
    assert_eq!(resolve::legacy_name("https://youtube.com/c/SomeName"), Some("SomeName".into()));
    assert_eq!(resolve::legacy_name("https://youtube.com/channel/UCabc"), None);
}

#[test]
fn handle_uses_channel_search() {
    let id = uc('h');
    let answer = id.clone();
    let (yt, log) = client(move |call| {
        assert_eq!(call.endpoint(), "search");
        assert_eq!(call.param("q"), Some("@creator"));
        assert_eq!(call.param("type"), Some("channel"));
        assert_eq!(call.param("maxResults"), Some("1"));
        Ok(list(vec![channel_hit(&answer)]))
    });

    let r = resolve(&yt, "https://www.youtube.com/@creator");
    assert_eq!(r.strategy(), Some(Strategy::Handle));
    assert_eq!(r.into_result("x").unwrap().as_str(), id);
    assert_eq!(log.count(), 1);
}

#[test]
fn empty_username_lookup_falls_through_to_page() {
    let id = uc('p');
    let html = format!(r#"<html><script>var ytInitialData = {{"externalId":"{id}"}};</script></html>"#);
    let (yt, log) = client(move |call| match call.endpoint() {
        "channels" => Ok(empty_list()),
        _ => Ok(html.clone()),
    });

    let r = resolve(&yt, "https://www.youtube.com/user/ghost");
    assert_eq!(r.strategy(), Some(Strategy::PageScrape));
    assert_eq!(r.id().unwrap().as_str(), id);
    assert_eq!(log.count(), 2);
    // the page is fetched as-is, without API parameters
    assert!(log.calls()[1].params.is_empty());
}

#[test]
fn page_fallback_assumes_https() {
    let id = uc('m');
    let html = format!(r#"<meta itemprop="channelId" content="{id}">"#);
    let (yt, log) = client(move |_| Ok(html.clone()));

    let r = resolve(&yt, "www.example.com/some-video-page");
    assert_eq!(r.strategy(), Some(Strategy::PageScrape));
    assert_eq!(log.calls()[0].url, "https://www.example.com/some-video-page");
}

#[test]
fn failed_lookups_end_unresolved() {
    let (yt, _log) = client(|call| match call.endpoint() {
        "search" => Err(http_error(403, &call.url)),
        _ => Ok("<html>nothing here</html>".into()),
    });

    let r = resolve(&yt, "https://www.youtube.com/@nobody");
    assert_eq!(r, Resolution::Unresolved);

    let err = r.into_result("https://www.youtube.com/@nobody").unwrap_err();
    assert!(matches!(err, Error::Unresolved { .. }));
    assert!(err.is_user_input());
}

#[test]
fn garbage_input_makes_no_calls() {
    let (yt, log) = client(|_| panic!("no call expected"));
    assert_eq!(resolve(&yt, "not a channel at all"), Resolution::Unresolved);
    assert_eq!(resolve(&yt, ""), Resolution::Unresolved);
    assert_eq!(log.count(), 0);
}

#[test]
fn page_url_rejects_non_web_input() {
    assert_eq!(resolve::page_url("ftp://example.com/x"), None);
    assert_eq!(resolve::page_url("localhost"), None);
    assert_eq!(
        resolve::page_url("https://example.com/x").as_deref(),
        Some("https://example.com/x")
    );
}
