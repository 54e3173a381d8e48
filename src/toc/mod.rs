//! Table-of-contents extraction for article HTML.
//!
//! [`extract`] walks the top heading levels of an HTML fragment in document
//! order, gives each a stable anchor id (reusing an id the heading already
//! has), writes the ids back into the markup, and returns the rewritten
//! content together with the TOC entries that link to those anchors.
//!
//! ```
//! use blog_toc::toc::extract;
//!
//! let result = extract(r#"<h1 id="intro">Introduction</h1><p>..</p><h2>Next <em>steps</em></h2>"#);
//!
//! assert_eq!(result.table_of_contents[0].anchor, "#intro");
//! assert_eq!(result.table_of_contents[1].id, "next-steps");
//! assert_eq!(result.table_of_contents[1].title, "Next steps");
//! assert!(result.rewritten_content.contains(r#"<h2 id="next-steps">"#));
//! ```

mod extract;
mod slugify;

pub use extract::{extract, extract_optional, extract_with, try_extract};
pub use slugify::{UsedIds, heading_slug, slugify};

use serde::{Deserialize, Serialize};

/// Deepest heading rank tracked unless configured otherwise.
pub const DEFAULT_MAX_LEVEL: u8 = 2;

/// One table-of-contents link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Anchor id, unique among the ids generated in one extraction.
    pub id: String,
    /// Heading text with markup stripped.
    pub title: String,
    /// `#` followed by the id.
    pub anchor: String,
    /// Heading rank (1 for `h1`).
    pub level: u8,
}

impl TocEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, level: u8) -> Self {
        let id = id.into();
        Self {
            anchor: format!("#{id}"),
            id,
            title: title.into(),
            level,
        }
    }
}

/// Result of one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    /// The input with anchor ids injected into its headings.
    pub rewritten_content: String,
    /// Entries in document order.
    pub table_of_contents: Vec<TocEntry>,
}

impl Extraction {
    /// The input untouched, with no TOC.
    pub fn passthrough(html: &str) -> Self {
        Self {
            rewritten_content: html.to_string(),
            table_of_contents: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table_of_contents.is_empty()
    }
}

/// Extraction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocOptions {
    max_level: u8,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl TocOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track headings `h1` through `h<level>`. Clamped to 1..=6.
    pub fn with_max_level(mut self, level: u8) -> Self {
        self.max_level = level.clamp(1, 6);
        self
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_anchor() {
        let entry = TocEntry::new("setup", "Setup", 2);
        assert_eq!(entry.anchor, "#setup");
    }

    #[test]
    fn test_options_clamp() {
        assert_eq!(TocOptions::new().max_level(), 2);
        assert_eq!(TocOptions::new().with_max_level(0).max_level(), 1);
        assert_eq!(TocOptions::new().with_max_level(9).max_level(), 6);
    }

    #[test]
    fn test_extraction_serializes_camel_case() {
        let extraction = Extraction {
            rewritten_content: "<h1 id=\"a\">A</h1>".into(),
            table_of_contents: vec![TocEntry::new("a", "A", 1)],
        };
        let json = serde_json::to_value(&extraction).unwrap();
        assert_eq!(json["rewrittenContent"], "<h1 id=\"a\">A</h1>");
        assert_eq!(json["tableOfContents"][0]["anchor"], "#a");
        assert_eq!(json["tableOfContents"][0]["level"], 1);
    }
}
