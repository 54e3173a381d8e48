//! HTML serializer for [`Dom`].
//!
//! Follows the HTML fragment serialization algorithm: void elements get no end
//! tag, raw-text element contents are emitted verbatim, and text and attribute
//! values are escaped.

use html5ever::{QualName, ns};

use super::arena::{Dom, NodeData, NodeId};

/// Serialize the children of `id` (its inner HTML).
pub fn inner_html(dom: &Dom, id: NodeId) -> String {
    let mut out = String::new();
    for child in dom.children(id) {
        write_node(dom, child, &mut out);
    }
    out
}

/// Serialize `id` itself, including its own tags (its outer HTML).
pub fn outer_html(dom: &Dom, id: NodeId) -> String {
    let mut out = String::new();
    write_node(dom, id, &mut out);
    out
}

/// Serialize the whole document, doctype included.
pub fn document_html(dom: &Dom) -> String {
    inner_html(dom, dom.document())
}

/// Work item for the serializer's explicit stack.
enum Frame {
    /// Emit a node. `raw` is set for children of raw-text elements.
    Open { id: NodeId, raw: bool },
    /// Emit the end tag of an element whose children are done.
    Close(NodeId),
}

fn write_node(dom: &Dom, id: NodeId, out: &mut String) {
    // Nesting depth is bounded only by input size, so walk with a heap stack.
    let mut stack = vec![Frame::Open { id, raw: false }];

    while let Some(frame) = stack.pop() {
        let (id, raw) = match frame {
            Frame::Open { id, raw } => (id, raw),
            Frame::Close(id) => {
                if let Some(tag) = dom.element_name(id) {
                    out.push_str("</");
                    out.push_str(tag.as_ref());
                    out.push('>');
                }
                continue;
            }
        };
        let Some(node) = dom.get(id) else {
            continue;
        };

        match &node.data {
            NodeData::Document => push_children(dom, id, false, &mut stack),
            NodeData::Element { name, attrs } => {
                let tag = name.local.as_ref();
                out.push('<');
                out.push_str(tag);
                for attr in attrs {
                    out.push(' ');
                    push_attr_name(&attr.name, out);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(&attr.value));
                    out.push('"');
                }
                out.push('>');

                let is_html = name.ns == ns!(html);
                if is_html && is_void(tag) {
                    continue;
                }

                if is_html
                    && matches!(tag, "pre" | "textarea" | "listing")
                    && dom
                        .children(id)
                        .next()
                        .and_then(|first| dom.text_content(first))
                        .is_some_and(|t| t.starts_with('\n'))
                {
                    out.push('\n');
                }

                stack.push(Frame::Close(id));
                push_children(dom, id, is_html && is_raw_text(tag), &mut stack);
            }
            NodeData::Text(text) if raw => out.push_str(text),
            NodeData::Text(text) => out.push_str(&escape_text(text)),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Doctype { name, .. } => {
                out.push_str("<!DOCTYPE ");
                out.push_str(name);
                out.push('>');
            }
        }
    }
}

/// Queue the children of `parent` so they pop off in document order.
fn push_children(dom: &Dom, parent: NodeId, raw: bool, stack: &mut Vec<Frame>) {
    let start = stack.len();
    stack.extend(dom.children(parent).map(|id| Frame::Open { id, raw }));
    stack[start..].reverse();
}

fn push_attr_name(name: &QualName, out: &mut String) {
    if let Some(prefix) = &name.prefix {
        out.push_str(prefix.as_ref());
        out.push(':');
    }
    out.push_str(name.local.as_ref());
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "basefont"
            | "bgsound"
            | "br"
            | "col"
            | "embed"
            | "frame"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_raw_text(tag: &str) -> bool {
    matches!(
        tag,
        "style" | "script" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext" | "noscript"
    )
}

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
