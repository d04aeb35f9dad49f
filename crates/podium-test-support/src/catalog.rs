//! Catalog fixtures.

use podium_core::catalog::{Catalog, NavLink, PageCopy, SiteInfo, TalkEntry, TalkYear};

fn link(label: &str, href: &str) -> NavLink {
    NavLink {
        label: label.to_owned(),
        href: href.to_owned(),
    }
}

fn talk(heading: &str, source_url: &str, title: &str) -> TalkEntry {
    TalkEntry {
        heading: heading.to_owned(),
        source_url: source_url.to_owned(),
        title: title.to_owned(),
    }
}

/// A small catalog with two years and three talks, one of them captioned
/// with markup-significant characters.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog {
        site: SiteInfo {
            title: "Test Site".to_owned(),
            url: "/".to_owned(),
            navigation: vec![link("Home", "/"), link("Speaking", "/speaking")],
        },
        footer: vec![link("Latest Posts", "/")],
        page: PageCopy {
            title: "Speaking".to_owned(),
            intro: "Some of my *talks*.".to_owned(),
        },
        years: vec![
            TalkYear {
                year: 2022,
                talks: vec![
                    talk(
                        "Benchmarking and other stories - Droidcon Berlin",
                        "//player.vimeo.com/video/734760050?autopause=0&autoplay=0",
                        "Benchmarking and other stories",
                    ),
                    talk(
                        "Benchmarking and other stories - AndroidMakers Paris",
                        "https://www.youtube.com/embed/zHoJEDjLtAY",
                        "Kotlin Multiplatform",
                    ),
                ],
            },
            TalkYear {
                year: 2021,
                talks: vec![talk(
                    "Crash Course Kotlin Multiplatform - Company event",
                    "https://drive.google.com/file/d/12iheQ3eTBrg3vYbEGWs7zRKJEkHv7Rs9/preview",
                    "Kotlin <Multiplatform> & friends",
                )],
            },
        ],
    }
}
