//! The `TalkEmbed` input consumed by the video embed component.

/// An embeddable talk recording: where the player lives and what to call it.
///
/// Neither field is validated. `source_url` is handed to the embedded frame
/// verbatim and `title` is shown verbatim, so an empty title renders an
/// empty caption.
#[derive(Debug, Clone)]
pub struct TalkEmbed {
    source_url: String,
    title: String,
}

impl TalkEmbed {
    /// Creates a new embed from a player URL and a display title.
    #[must_use]
    pub fn new(source_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            title: title.into(),
        }
    }

    /// The third-party player URL.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// The frame label and caption text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}
