//! Render handlers for the site's pages.
//!
//! Handlers load the catalog from a `CatalogSource`, compose the views and
//! return the finished HTML along with a content hash for caching.

use dioxus::prelude::*;
use podium_core::catalog::Catalog;
use podium_core::clock::Clock;
use podium_core::error::DomainError;
use podium_core::source::CatalogSource;
use podium_core::video::VIDEO_EMBED_STYLES;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::views::footer::Footer;
use crate::views::layout::{Document, render_document};
use crate::views::nav::SiteHeader;
use crate::views::speaking::{PAGE_TEMPLATE_STYLES, SpeakingPage};

/// Path the Speaking page is served from.
pub const SPEAKING_PATH: &str = "/speaking";

/// A rendered page ready to be served.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// The complete HTML document.
    pub html: String,
    /// Quoted SHA-256 of `html`, usable as an HTTP entity tag.
    pub etag: String,
}

impl RenderedPage {
    fn new(html: String) -> Self {
        let etag = format!("\"{:x}\"", Sha256::digest(html.as_bytes()));
        Self { html, etag }
    }
}

/// Renders the full Speaking page document for a catalog.
///
/// Pure: the same catalog and year always produce the same HTML.
#[must_use]
pub fn speaking_document(catalog: &Catalog, year: i32) -> String {
    render_document(rsx! {
        Document {
            page_title: catalog.page.title.as_str(),
            stylesheets: vec![PAGE_TEMPLATE_STYLES, VIDEO_EMBED_STYLES],
            SiteHeader { site: catalog.site.clone(), current_path: SPEAKING_PATH }
            SpeakingPage { copy: catalog.page.clone(), years: catalog.years.clone() }
            Footer { site: catalog.site.clone(), links: catalog.footer.clone(), year }
        }
    })
}

/// Loads the catalog and renders the Speaking page.
///
/// # Errors
///
/// Returns whatever `DomainError` the catalog source reports.
pub async fn render_speaking_page(
    source: &dyn CatalogSource,
    clock: &dyn Clock,
) -> Result<RenderedPage, DomainError> {
    let catalog = source.load().await?;
    let page = RenderedPage::new(speaking_document(&catalog, clock.copyright_year()));

    info!(
        talks = catalog.talk_count(),
        etag = %page.etag,
        "rendered speaking page"
    );

    Ok(page)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use podium_test_support::{
        FailingCatalogSource, FixedCatalogSource, FixedClock, sample_catalog,
    };

    use super::*;
    use crate::sources::BuiltinCatalogSource;

    fn clock(year: i32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(year, 1, 15, 10, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn test_render_speaking_page_includes_every_talk() {
        // Arrange
        let source = BuiltinCatalogSource;

        // Act
        let page = render_speaking_page(&source, &clock(2026)).await.unwrap();

        // Assert
        assert_eq!(page.html.matches("<iframe").count(), 4);
        assert_eq!(page.html.matches("<p class=\"video-caption\">").count(), 4);
        assert!(page.html.contains("src=\"https://www.youtube.com/embed/zHoJEDjLtAY\""));
        assert!(page.html.contains("<p class=\"video-caption\">Kotlin Multiplatform</p>"));
        assert!(page.html.contains("<title>Speaking</title>"));
    }

    #[tokio::test]
    async fn test_footer_year_follows_clock() {
        let source = FixedCatalogSource::new(sample_catalog());

        let page = render_speaking_page(&source, &clock(2031)).await.unwrap();

        assert!(page.html.contains("\u{a9} 2031"));
    }

    #[tokio::test]
    async fn test_etag_is_stable_across_renders() {
        // Arrange
        let source = FixedCatalogSource::new(sample_catalog());

        // Act
        let first = render_speaking_page(&source, &clock(2026)).await.unwrap();
        let second = render_speaking_page(&source, &clock(2026)).await.unwrap();

        // Assert
        assert_eq!(first.html, second.html);
        assert_eq!(first.etag, second.etag);
        assert!(first.etag.starts_with('"') && first.etag.ends_with('"'));
        assert_eq!(first.etag.len(), 66);
    }

    #[tokio::test]
    async fn test_etag_changes_when_catalog_changes() {
        // Arrange
        let mut changed = sample_catalog();
        changed.years[0].talks[0].title = "A different caption".to_owned();

        // Act
        let original = FixedCatalogSource::new(sample_catalog());
        let edited = FixedCatalogSource::new(changed);
        let original = render_speaking_page(&original, &clock(2026)).await.unwrap();
        let edited = render_speaking_page(&edited, &clock(2026)).await.unwrap();

        // Assert
        assert_ne!(original.etag, edited.etag);
    }

    #[tokio::test]
    async fn test_source_failure_is_propagated() {
        let result = render_speaking_page(&FailingCatalogSource, &clock(2026)).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[test]
    fn test_document_includes_both_stylesheets_once() {
        let html = speaking_document(&sample_catalog(), 2026);

        assert_eq!(html.matches("<style").count(), 2);
        assert_eq!(html.matches("data-stylesheet=\"page-template\"").count(), 1);
        assert_eq!(html.matches("data-stylesheet=\"video-embed\"").count(), 1);
        assert!(html.contains(".video iframe { width: 100%; }"));
        assert!(html.contains(".site-main { margin-top: 64px;"));
    }
}
