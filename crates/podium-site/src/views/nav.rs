//! Site header and navigation.

use dioxus::prelude::*;
use podium_core::catalog::SiteInfo;

/// The navigation bar: the site title followed by the header links. The
/// link whose target equals `current_path` is marked as current.
#[component]
pub fn SiteNav(site: SiteInfo, #[props(into)] current_path: String) -> Element {
    let links = site.navigation.iter().map(|link| {
        let class = if link.href == current_path {
            "nav-item nav-current"
        } else {
            "nav-item"
        };
        rsx! {
            li { class: "{class}",
                a { href: "{link.href}", "{link.label}" }
            }
        }
    });

    rsx! {
        nav { class: "site-nav",
            div { class: "site-nav-left",
                a { class: "site-nav-logo", href: "{site.url}", "{site.title}" }
                ul { class: "nav", {links} }
            }
        }
    }
}

/// The archive-style page header that hosts the navigation bar.
#[component]
pub fn SiteHeader(site: SiteInfo, #[props(into)] current_path: String) -> Element {
    rsx! {
        header { class: "site-archive-header no-image",
            div { class: "outer site-nav-main",
                div { class: "inner",
                    SiteNav { site, current_path }
                }
            }
        }
    }
}
