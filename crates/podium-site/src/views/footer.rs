//! Site footer.

use dioxus::prelude::*;
use podium_core::catalog::{NavLink, SiteInfo};

/// The footer: copyright line for `year` and the footer links.
#[component]
pub fn Footer(site: SiteInfo, links: Vec<NavLink>, year: i32) -> Element {
    rsx! {
        footer { class: "site-footer outer",
            div { class: "site-footer-content inner",
                section { class: "copyright",
                    a { href: "{site.url}", "{site.title}" }
                    " \u{a9} {year}"
                }
                nav { class: "site-footer-nav",
                    for link in links.iter() {
                        a { href: "{link.href}", "{link.label}" }
                    }
                }
            }
        }
    }
}
