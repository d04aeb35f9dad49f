//! The talk catalog: site metadata, page copy and talks in display order.

use serde::Deserialize;

use crate::error::DomainError;
use crate::talk::TalkEmbed;

fn default_site_url() -> String {
    "/".to_owned()
}

/// Everything the Speaking page displays.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    /// Site-wide metadata shown in the header and footer.
    pub site: SiteInfo,
    /// Footer links, in order.
    #[serde(default)]
    pub footer: Vec<NavLink>,
    /// Copy for the Speaking page itself.
    pub page: PageCopy,
    /// Talks grouped by year, in display order.
    pub years: Vec<TalkYear>,
}

impl Catalog {
    /// Parses a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the YAML is malformed or a
    /// required field is missing.
    pub fn from_yaml(source: &str) -> Result<Self, DomainError> {
        serde_yaml::from_str(source)
            .map_err(|e| DomainError::Validation(format!("catalog parse failed: {e}")))
    }

    /// Total number of talks across all years.
    #[must_use]
    pub fn talk_count(&self) -> usize {
        self.years.iter().map(|year| year.talks.len()).sum()
    }
}

/// Site-wide metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteInfo {
    /// Site title, used as the logo text.
    pub title: String,
    /// Link target for the site title.
    #[serde(default = "default_site_url")]
    pub url: String,
    /// Header navigation links, in order.
    #[serde(default)]
    pub navigation: Vec<NavLink>,
}

/// A labelled link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    /// Visible link text.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Page title and introduction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageCopy {
    /// Page heading and document title.
    pub title: String,
    /// Introductory Markdown shown above the talks.
    #[serde(default)]
    pub intro: String,
}

/// The talks given in one year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TalkYear {
    /// Calendar year, used as the section heading.
    pub year: u16,
    /// Talks in display order.
    pub talks: Vec<TalkEntry>,
}

/// One talk listing: a heading plus the recording to embed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TalkEntry {
    /// Heading shown above the player, usually "talk - event".
    pub heading: String,
    /// Embeddable player URL.
    pub source_url: String,
    /// Caption and frame label. Missing titles render an empty caption.
    #[serde(default)]
    pub title: String,
}

impl TalkEntry {
    /// The embed input for this talk's video component.
    #[must_use]
    pub fn embed(&self) -> TalkEmbed {
        TalkEmbed::new(self.source_url.as_str(), self.title.as_str())
    }
}
