// tests/filter_sort.rs
use yt_scout::analyze::{refine, sort_rows, SortColumn, SortDirection, TopicRow, ViralFilter};
use yt_scout::config::options::TopicsOptions;

fn row(id: &str, views: u64, subs: u64) -> TopicRow {
    TopicRow {
        keyword: "k".into(),
        video_id: id.into(),
        title: format!("title {id}"),
        channel: "c".into(),
        published_at: "2024-05-01T00:00:00Z".into(),
        views,
        likes: 0,
        comments: 0,
        subscribers: subs,
        url: format!("https://youtu.be/{id}"),
    }
}

fn ids(rows: &[TopicRow]) -> Vec<&str> {
    rows.iter().map(|r| r.video_id.as_str()).collect()
}

#[test]
fn small_channel_viral_video_survives() {
    let filter = ViralFilter { min_views: 1000, max_subscribers: 3000 };
    let rows = vec![row("low", 500, 100), row("viral", 5000, 50)];
    assert_eq!(ids(&filter.apply(&rows)), vec!["viral"]);
}

#[test]
fn bounds_are_inclusive() {
    let filter = ViralFilter { min_views: 1000, max_subscribers: 3000 };
    assert!(filter.keeps(&row("edge", 1000, 3000)));
    assert!(!filter.keeps(&row("big", 1000, 3001)));
    assert!(!filter.keeps(&row("small", 999, 0)));
}

#[test]
fn descending_sort_is_stable() {
    let mut rows = vec![row("a", 10, 0), row("b", 30, 0), row("c", 10, 0), row("d", 30, 0)];
    sort_rows(&mut rows, SortColumn::Views, SortDirection::Descending);
    assert_eq!(ids(&rows), vec!["b", "d", "a", "c"]);
}

#[test]
fn ascending_sort_by_date_and_subscribers() {
    let mut rows = vec![row("new", 1, 300), row("old", 1, 100), row("mid", 1, 200)];
    rows[0].published_at = "2024-05-07T00:00:00Z".into();
    rows[1].published_at = "2024-05-01T00:00:00Z".into();
    rows[2].published_at = "2024-05-03T09:00:00Z".into();

    sort_rows(&mut rows, SortColumn::PublishDate, SortDirection::Ascending);
    assert_eq!(ids(&rows), vec!["old", "mid", "new"]);

    sort_rows(&mut rows, SortColumn::Subscribers, SortDirection::Descending);
    assert_eq!(ids(&rows), vec!["new", "mid", "old"]);
}

#[test]
fn refine_leaves_input_untouched() {
    let rows = vec![row("a", 2000, 10), row("b", 9000, 10), row("c", 100, 10)];
    let filter = ViralFilter { min_views: 1000, max_subscribers: 3000 };
    let out = refine(&rows, &filter, SortColumn::Views, SortDirection::Descending);
    assert_eq!(ids(&out), vec!["b", "a"]);
    assert_eq!(ids(&rows), vec!["a", "b", "c"]);
}

#[test]
fn sort_column_parses_cli_spellings() {
    assert_eq!("views".parse::<SortColumn>(), Ok(SortColumn::Views));
    assert_eq!("Likes".parse::<SortColumn>(), Ok(SortColumn::Likes));
    assert_eq!("publish-date".parse::<SortColumn>(), Ok(SortColumn::PublishDate));
    assert_eq!("PublishDate".parse::<SortColumn>(), Ok(SortColumn::PublishDate));
    assert_eq!("subs".parse::<SortColumn>(), Ok(SortColumn::Subscribers));
    assert!("rating".parse::<SortColumn>().is_err());
}

#[test]
fn topics_defaults_and_validation() {
    let mut opts = TopicsOptions::default();
    assert_eq!(opts.days, 7);
    assert_eq!(opts.filter(), ViralFilter { min_views: 1000, max_subscribers: 3000 });
    assert_eq!(opts.sort_by, SortColumn::Views);
    assert_eq!(opts.direction, SortDirection::Descending);
    assert!(opts.validate().is_ok());

    opts.keywords_text = " cats \n\n  \ndogs".into();
    assert_eq!(opts.keywords(), vec!["cats", "dogs"]);

    opts.days = 0;
    assert!(opts.validate().is_err());
    opts.days = 30;
    assert!(opts.validate().is_ok());

    opts.keywords_text = "  \n ".into();
    assert!(opts.validate().is_err());
}
