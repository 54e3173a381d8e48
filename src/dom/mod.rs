//! Permissive HTML DOM.
//!
//! Article bodies arrive as arbitrary HTML fragments: unclosed tags, stray
//! attributes, no `<html>`/`<body>` wrapper. html5ever repairs all of that the
//! way a browser would, and [`DomSink`] collects the result into an
//! arena-backed [`Dom`] that can be edited in place and serialized back out.

mod arena;
mod serialize;
mod tree_sink;

pub use arena::{Attribute, Children, Descendants, Dom, Node, NodeData, NodeId};
pub use serialize::{document_html, escape_attr, escape_text, inner_html, outer_html};
pub use tree_sink::{DomSink, NodeHandle};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse an HTML document or fragment.
///
/// Never fails: malformed input is repaired by the HTML5 tree builder. A
/// fragment ends up under implied `<html>`, `<head>` and `<body>` elements.
pub fn parse_html(html: &str) -> Dom {
    parse_sink(html).into_dom()
}

/// Parse into a [`DomSink`], keeping the parser's diagnostics alongside the DOM.
pub fn parse_sink(html: &str) -> DomSink {
    parse_document(DomSink::new(), ParseOpts::default()).one(html)
}
