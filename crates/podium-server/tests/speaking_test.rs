//! Integration tests for the Speaking page.

mod common;

use std::sync::Arc;

use axum::http::{StatusCode, header};
use podium_site::sources::{BuiltinCatalogSource, FileCatalogSource};
use podium_test_support::{FixedCatalogSource, TempCatalogFile, sample_catalog};

#[tokio::test]
async fn test_speaking_page_renders_builtin_talks() {
    // Arrange
    let app = common::build_test_app(Arc::new(BuiltinCatalogSource));

    // Act
    let (status, headers, html) = common::get_html(app, "/speaking").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
    assert_eq!(html.matches("<div class=\"video\">").count(), 4);
    assert!(html.contains("<h2>2022</h2>"));
    assert!(html.contains("<h2>2021</h2>"));
    assert!(html.contains(
        "<h3>Crash Course Kotlin Multiplatform - Company event</h3>"
    ));
    assert!(html.contains(
        "src=\"//player.vimeo.com/video/734760050?autopause=0&amp;autoplay=0&amp;color=00adef&amp;portrait=0&amp;byline=0&amp;title=0\""
    ));
    assert!(html.contains("\u{a9} 2026"));
}

#[tokio::test]
async fn test_speaking_page_escapes_captions() {
    let app = common::build_test_app(Arc::new(FixedCatalogSource::new(sample_catalog())));

    let (_, _, html) = common::get_html(app, "/speaking").await;

    assert!(html.contains(
        "<p class=\"video-caption\">Kotlin &lt;Multiplatform&gt; &amp; friends</p>"
    ));
}

#[tokio::test]
async fn test_speaking_page_is_rendered_per_request() {
    // Arrange
    let source = Arc::new(FixedCatalogSource::new(sample_catalog()));

    // Act
    let (_, first, _) = common::get_html(common::build_test_app(source.clone()), "/speaking").await;
    let (_, second, _) =
        common::get_html(common::build_test_app(source.clone()), "/speaking").await;

    // Assert
    assert_eq!(source.load_count(), 2);
    assert_eq!(first[header::ETAG], second[header::ETAG]);
}

#[tokio::test]
async fn test_conditional_request_returns_304() {
    // Arrange
    let source = Arc::new(BuiltinCatalogSource);
    let (_, headers, _) =
        common::get_html(common::build_test_app(source.clone()), "/speaking").await;
    let etag = headers[header::ETAG].to_str().unwrap().to_owned();

    // Act
    let (status, headers, body) = common::get(
        common::build_test_app(source),
        "/speaking",
        &[("if-none-match", etag.as_str())],
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::NOT_MODIFIED);
    assert_eq!(headers[header::ETAG], etag.as_str());
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_stale_etag_returns_full_page() {
    let app = common::build_test_app(Arc::new(BuiltinCatalogSource));

    let (status, _, body) = common::get(app, "/speaking", &[("if-none-match", "\"stale\"")]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn test_missing_catalog_file_returns_404_json() {
    let app = common::build_test_app(Arc::new(FileCatalogSource::new(
        "/nonexistent/podium/speaking.yaml",
    )));

    let (status, json) = common::get_json(app, "/speaking").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_invalid_catalog_file_returns_500_json() {
    // Arrange
    let file = TempCatalogFile::new("site: [");
    let app = common::build_test_app(Arc::new(FileCatalogSource::new(file.path())));

    // Act
    let (status, json) = common::get_json(app, "/speaking").await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "invalid_catalog");
}

#[tokio::test]
async fn test_root_redirects_to_speaking() {
    let app = common::build_test_app(Arc::new(BuiltinCatalogSource));

    let (status, headers, _) = common::get(app, "/", &[]).await;

    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(headers[header::LOCATION], "/speaking");
}
