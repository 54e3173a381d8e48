//! # blog-toc
//!
//! Prepares blog article HTML from a content API for rendering: heading
//! anchors, a table of contents, and the FAQ/insight data that sits beside
//! the article.
//!
//! ## Features
//!
//! - Permissive HTML parsing (html5ever) that never fails on tag soup
//! - Stable, unique anchor ids injected into `h1`/`h2` headings
//! - Table of contents in document order, ready to render as `#id` links
//! - Typed article/FAQ payloads with FAQ schema fallback
//! - FAQ search, filtering, sorting and truncation
//!
//! ## Quick Start
//!
//! ```
//! use blog_toc::extract;
//!
//! let result = extract("<h2>Setup</h2><p>Install it.</p><h2>Setup</h2>");
//!
//! let anchors: Vec<_> = result.table_of_contents.iter().map(|e| e.anchor.as_str()).collect();
//! assert_eq!(anchors, ["#setup", "#setup-1"]);
//! assert_eq!(
//!     result.rewritten_content,
//!     r#"<h2 id="setup">Setup</h2><p>Install it.</p><h2 id="setup-1">Setup</h2>"#
//! );
//! ```
//!
//! ## Articles
//!
//! ```
//! use blog_toc::{Blog, enhance};
//!
//! let blog = Blog::from_json(r#"{"title": "Hi", "content": "<h1>Hello</h1>"}"#).unwrap();
//! let page = enhance(&blog);
//! assert_eq!(page.modified_content, r#"<h1 id="hello">Hello</h1>"#);
//! assert_eq!(page.table_of_contents[0].title, "Hello");
//! ```

pub mod article;
pub mod dom;
pub mod error;
pub mod faq;
pub mod toc;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use article::{Blog, BlogResponse, BlogStatus, EnhancedContent, InsightItem, enhance};
pub use error::{Error, Result};
pub use faq::{Faq, FaqOptions};
pub use toc::{Extraction, TocEntry, TocOptions, extract, extract_with};
