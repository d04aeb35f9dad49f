//! The video embed component: a third-party player frame with a caption.

use dioxus::prelude::*;

use crate::style::Stylesheet;

/// Intrinsic frame width attribute.
pub const FRAME_WIDTH: u32 = 640;

/// Intrinsic frame height attribute. Stays fixed while CSS stretches the
/// width to the container.
pub const FRAME_HEIGHT: u32 = 360;

/// Capabilities granted to every embedded player, whatever its origin.
pub const FRAME_PERMISSIONS: &str =
    "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture; fullscreen";

/// Rules for the `video` container and its caption. Only the width is
/// responsive; the frame's height attribute is left alone.
pub const VIDEO_EMBED_STYLES: Stylesheet = Stylesheet::new(
    "video-embed",
    ".video iframe { width: 100%; }\n\
     .video-caption { text-align: center; \
     font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif; \
     font-size: 1.4rem; font-weight: 600; padding-bottom: 2.4rem; }",
);

/// One embedded player for a talk, captioned with its title.
///
/// `source_url` goes into the frame verbatim and `title` is both the frame's
/// label and the caption text. Neither is validated.
#[component]
pub fn VideoEmbed(#[props(into)] source_url: String, #[props(into)] title: String) -> Element {
    rsx! {
        div { class: "video",
            iframe {
                width: "{FRAME_WIDTH}",
                height: "{FRAME_HEIGHT}",
                src: "{source_url}",
                title: "{title}",
                "allow": FRAME_PERMISSIONS,
            }
            p { class: "video-caption", "{title}" }
        }
    }
}
