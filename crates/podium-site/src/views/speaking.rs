//! The Speaking page body: intro copy followed by talks grouped by year.

use dioxus::prelude::*;
use podium_core::catalog::{PageCopy, TalkEntry, TalkYear};
use podium_core::style::Stylesheet;
use podium_core::video::VideoEmbed;
use pulldown_cmark::{Parser, html};

/// Rules for the page template's main column, light and dark.
pub const PAGE_TEMPLATE_STYLES: Stylesheet = Stylesheet::new(
    "page-template",
    ".site-main { margin-top: 64px; padding-bottom: 4vw; background: #fff; }\n\
     @media (prefers-color-scheme: dark) { .site-main { background: #191b1f; } }",
);

/// Renders the intro Markdown, or `None` when there is nothing to show.
fn intro_html(markdown: &str) -> Option<String> {
    if markdown.trim().is_empty() {
        return None;
    }
    let mut rendered = String::new();
    html::push_html(&mut rendered, Parser::new(markdown));
    Some(rendered)
}

/// The main column of the Speaking page.
#[component]
pub fn SpeakingPage(copy: PageCopy, years: Vec<TalkYear>) -> Element {
    let intro = intro_html(&copy.intro);

    rsx! {
        main { id: "site-main", class: "site-main outer",
            article { class: "post-full post page no-image",
                header { class: "post-full-header",
                    h1 { class: "post-full-title", "{copy.title}" }
                }
                section { class: "post-full-content",
                    div { class: "post-content",
                        if let Some(intro) = &intro {
                            div { class: "post-intro", dangerous_inner_html: "{intro}" }
                        }
                        for year in years.iter() {
                            TalkYearSection { year: year.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// A year heading followed by each of that year's talks.
#[component]
fn TalkYearSection(year: TalkYear) -> Element {
    rsx! {
        h2 { "{year.year}" }
        for (talk, embed) in year.talks.iter().map(|talk| (talk, TalkEntry::embed(talk))) {
            h3 { "{talk.heading}" }
            VideoEmbed { source_url: embed.source_url(), title: embed.title() }
        }
    }
}
