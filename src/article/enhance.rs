use serde::Serialize;

use super::{Blog, InsightItem};
use crate::faq::Faq;
use crate::toc::{TocEntry, TocOptions, extract_with};

/// Everything a page needs to render an article beyond its raw payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedContent {
    /// Article HTML with heading anchors injected.
    pub modified_content: String,
    pub table_of_contents: Vec<TocEntry>,
    pub faqs: Vec<Faq>,
    pub key_insights: Vec<InsightItem>,
}

/// Derive render-ready content from a blog with the default TOC options.
pub fn enhance(blog: &Blog) -> EnhancedContent {
    enhance_with(blog, &TocOptions::default())
}

/// Derive render-ready content from a blog.
///
/// The content is always run through the extractor so anchors exist in the
/// markup. A TOC supplied by the payload wins over the extracted one, and
/// explicit FAQs win over the FAQ schema.
pub fn enhance_with(blog: &Blog, options: &TocOptions) -> EnhancedContent {
    let extraction = blog
        .content
        .as_deref()
        .map(|content| extract_with(content, options))
        .unwrap_or_default();

    EnhancedContent {
        modified_content: extraction.rewritten_content,
        table_of_contents: blog
            .table_of_contents
            .clone()
            .unwrap_or(extraction.table_of_contents),
        faqs: blog
            .faqs
            .clone()
            .or_else(|| blog.schema_faqs())
            .unwrap_or_default(),
        key_insights: blog.key_insights.clone().unwrap_or_default(),
    }
}
