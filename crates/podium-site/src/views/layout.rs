//! Document layout: the HTML shell every page renders inside.

use dioxus::prelude::*;
use podium_core::style::{Stylesheet, dedup_by_name};

/// Head and body of a page. The sections passed as children are placed in
/// the site wrapper; each stylesheet is emitted once, in order.
#[component]
pub fn Document(
    #[props(into)] page_title: String,
    stylesheets: Vec<Stylesheet>,
    children: Element,
) -> Element {
    let stylesheets = dedup_by_name(&stylesheets);

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{page_title}" }
            for sheet in stylesheets {
                style { "data-stylesheet": sheet.name, dangerous_inner_html: sheet.css }
            }
        }
        body {
            div { class: "site-wrapper", {children} }
        }
    }
}

/// Renders a [`Document`] element into a complete HTML page.
#[must_use]
pub fn render_document(document: Element) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(document)
    )
}
