//! Integration tests for the Axum web server.
//!
//! These tests drive the router against real temporary roots.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::roots::TestRoots;
use mdnotes_axum::create_router;
use mdnotes_core::FileFilter;

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::GET, uri).await
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let roots = TestRoots::new(1);
    let (status, body) = get(create_router(roots.context()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn root_lists_markdown_from_every_root() {
    let roots = TestRoots::new(2);
    roots.write(0, "first.md", "# First");
    roots.write(1, "second.md", "# Second");
    roots.write(1, "skip.png", "png");
    roots.mkdir(1, "journal");

    let (status, body) = get(create_router(roots.context()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/first.md\""));
    assert!(body.contains("href=\"/second.md\""));
    assert!(body.contains("href=\"/journal/\""));
    assert!(!body.contains("skip.png"));
}

#[tokio::test]
async fn show_all_lists_every_file() {
    let roots = TestRoots::new(1);
    roots.write(0, "skip.png", "png");

    let (status, body) = get(create_router(roots.context_with(FileFilter::All)), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/skip.png\""));
}

#[tokio::test]
async fn note_is_rendered_with_siblings() {
    let roots = TestRoots::new(2);
    roots.write(0, "journal/today.md", "# Today\n\nwent *outside*");
    roots.write(1, "journal/yesterday.md", "# Yesterday");

    let (status, body) = get(create_router(roots.context()), "/journal/today.md").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Today</h1>"));
    assert!(body.contains("<em>outside</em>"));
    assert!(body.contains("href=\"/journal/yesterday.md\""));
    assert!(body.contains("<a href=\"/journal/\">journal</a>"));
}

#[tokio::test]
async fn missing_path_is_404() {
    let roots = TestRoots::new(1);

    let (status, body) = get(create_router(roots.context()), "/nope.md").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Could not find file \"/nope.md\"\n");
}

#[tokio::test]
async fn trailing_slash_selects_directory_over_file() {
    let roots = TestRoots::new(2);
    roots.write(0, "topic", "# topic as a file");
    roots.write(1, "topic/inner.md", "# inner");

    let (status, body) = get(create_router(roots.context()), "/topic").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>topic as a file</h1>"));

    let (status, body) = get(create_router(roots.context()), "/topic/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/topic/inner.md\""));
    assert!(!body.contains("<article>"));
}

#[tokio::test]
async fn percent_encoded_names_resolve() {
    let roots = TestRoots::new(1);
    roots.write(0, "my notes/a b.md", "# spaced");

    let (status, body) = get(create_router(roots.context()), "/my%20notes/a%20b.md").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>spaced</h1>"));
    assert!(body.contains("href=\"/my%20notes/\""));
}

#[tokio::test]
async fn writes_are_rejected() {
    let roots = TestRoots::new(1);
    roots.write(0, "a.md", "# a");

    let (status, _) = send(create_router(roots.context()), Method::POST, "/a.md").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn directory_without_trailing_slash_links_to_its_parent() {
    let roots = TestRoots::new(1);
    roots.write(0, "a/b/c.md", "# c");

    let (status, body) = get(create_router(roots.context()), "/a/b").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<li><a href=\"/a/\">..</a></li>"));
    assert!(!body.contains("href=\"../\""));
    assert!(body.contains("href=\"/a/b/c.md\""));
}

#[tokio::test]
async fn nul_byte_in_path_is_a_bad_request() {
    let roots = TestRoots::new(1);
    roots.write(0, "a.md", "# a");

    let (status, body) = get(create_router(roots.context()), "/a%00.md").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.contains(&roots.root(0).display().to_string()));
}
