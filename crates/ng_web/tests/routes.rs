mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{app, article, get, heading, unit_titles, FakeSource};
use ng_core::{Category, HeadlinesQuery};

const WINDOW: Duration = Duration::from_secs(300);

#[tokio::test]
async fn test_category_page_end_to_end() {
    let source = FakeSource::new(vec![article("A", "u1"), article("B", "u2")]);
    let app = app(source.clone(), WINDOW);

    let (status, html) = get(&app, "/categories/technology").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(heading(&html), "Category: technology");
    assert_eq!(unit_titles(&html), vec!["A", "B"]);
    assert!(html.contains("<title>Category: technology - News Grid</title>"));
    assert!(html.contains("not older than 5 minutes"));

    assert_eq!(source.queries(), vec![HeadlinesQuery::category(Category::Technology)]);
}

#[tokio::test]
async fn test_every_declared_category_is_served() {
    let source = FakeSource::new(vec![article("A", "u1")]);
    let app = app(source.clone(), WINDOW);

    for path in Category::paths() {
        let (status, _) = get(&app, &path).await;
        assert_eq!(status, StatusCode::OK, "{} should render", path);
    }
    assert_eq!(source.calls(), 7);
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let source = FakeSource::new(vec![article("A", "u1")]);
    let app = app(source.clone(), WINDOW);

    for path in ["/categories/politics", "/categories/Technology", "/categories/"] {
        let (status, html) = get(&app, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} should be missing", path);
        assert!(html.contains("Page not found"));
    }
    let (status, _) = get(&app, "/somewhere/else").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_category_reuses_render_within_window() {
    let source = FakeSource::new(vec![article("A", "u1")]);
    let app = app(source.clone(), WINDOW);

    let (_, first) = get(&app, "/categories/science").await;
    source.set_articles(vec![article("Z", "u9")]);
    let (_, second) = get(&app, "/categories/science").await;

    assert_eq!(first, second);
    assert_eq!(source.calls(), 1);

    // Other categories have their own entries.
    let (_, other) = get(&app, "/categories/health").await;
    assert_eq!(unit_titles(&other), vec!["Z"]);
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_category_refetches_after_window() {
    let source = FakeSource::new(vec![article("A", "u1")]);
    let app = app(source.clone(), Duration::ZERO);

    let (_, first) = get(&app, "/categories/science").await;
    source.set_articles(vec![article("Z", "u9")]);
    let (_, second) = get(&app, "/categories/science").await;

    assert_eq!(unit_titles(&first), vec!["A"]);
    assert_eq!(unit_titles(&second), vec!["Z"]);
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_breaking_news_fetches_every_request() {
    let source = FakeSource::new(vec![article("A", "u1")]);
    let app = app(source.clone(), WINDOW);

    let (status, html) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(heading(&html), "Breaking News");
    assert!(html.contains("every request"));

    source.set_articles(vec![article("B", "u2"), article("C", "u3")]);
    let (_, html) = get(&app, "/").await;
    assert_eq!(unit_titles(&html), vec!["B", "C"]);

    assert_eq!(source.calls(), 2);
    assert_eq!(
        source.queries(),
        vec![HeadlinesQuery::country("us"), HeadlinesQuery::country("us")]
    );
}

#[tokio::test]
async fn test_empty_upstream_renders_empty_grid() {
    let source = FakeSource::new(vec![]);
    let app = app(source, WINDOW);

    let (status, html) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(unit_titles(&html).is_empty());
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway_and_not_cached() {
    let source = FakeSource::new(vec![article("A", "u1")]);
    source.set_failing(true);
    let app = app(source.clone(), WINDOW);

    let (status, html) = get(&app, "/categories/sports").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Headlines unavailable"));
    assert!(!html.contains("upstream is down"));

    source.set_failing(false);
    let (status, html) = get(&app, "/categories/sports").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unit_titles(&html), vec!["A"]);
    assert_eq!(source.calls(), 2);

    source.set_failing(true);
    let (status, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_api_key_never_rendered() {
    let source = FakeSource::new(vec![article("A", "u1")]);
    let app = app(source, WINDOW);

    let (_, html) = get(&app, "/").await;
    assert!(!html.contains("KEY"));
}

#[tokio::test]
async fn test_category_listing_api() {
    let source = FakeSource::new(vec![]);
    let app = app(source, WINDOW);

    let (status, body) = get(&app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(
        ids,
        vec!["business", "entertainment", "general", "health", "science", "sports", "technology"]
    );
}

#[tokio::test]
async fn test_trailing_slash_serves_same_category_page() {
    let source = FakeSource::new(vec![article("A", "u1")]);
    let app = app(source.clone(), WINDOW);

    let (status, plain) = get(&app, "/categories/technology").await;
    assert_eq!(status, StatusCode::OK);
    let (status, slashed) = get(&app, "/categories/technology/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plain, slashed);
    assert_eq!(source.calls(), 1);

    let (status, _) = get(&app, "/categories/politics/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
