//! Named stylesheets.
//!
//! A component ships the CSS its `class` names select as a [`Stylesheet`].
//! The document layout collects the sheets of every component on the page
//! and emits each one once.

/// A named block of CSS belonging to one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stylesheet {
    /// Identifies the sheet; two sheets with the same name are the same sheet.
    pub name: &'static str,
    /// The CSS rules.
    pub css: &'static str,
}

impl Stylesheet {
    /// Creates a stylesheet.
    #[must_use]
    pub const fn new(name: &'static str, css: &'static str) -> Self {
        Self { name, css }
    }
}

/// Keeps the first sheet of each name, in order.
#[must_use]
pub fn dedup_by_name(sheets: &[Stylesheet]) -> Vec<Stylesheet> {
    let mut unique: Vec<Stylesheet> = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        if !unique.iter().any(|seen| seen.name == sheet.name) {
            unique.push(*sheet);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_sheet_of_each_name() {
        // Arrange
        let first = Stylesheet::new("video-embed", ".video iframe { width: 100%; }");
        let shadowed = Stylesheet::new("video-embed", ".video { display: none; }");
        let page = Stylesheet::new("page-template", ".site-main { margin-top: 64px; }");

        // Act
        let unique = dedup_by_name(&[first, page, shadowed]);

        // Assert
        assert_eq!(unique, vec![first, page]);
    }
}
