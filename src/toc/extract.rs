//! Heading discovery, id injection and TOC assembly.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use super::slugify::{UsedIds, heading_slug};
use super::{Extraction, TocEntry, TocOptions};
use crate::dom::{Dom, NodeData, NodeId, document_html, inner_html, outer_html, parse_sink};
use crate::error::{Error, Result};

/// Extract the table of contents from `html` using the default options.
///
/// Tracks `h1` and `h2`. See [`extract_with`].
pub fn extract(html: &str) -> Extraction {
    extract_with(html, &TocOptions::default())
}

/// Like [`extract`], treating `None` as empty content.
pub fn extract_optional(html: Option<&str>) -> Extraction {
    html.map(extract).unwrap_or_default()
}

/// Extract the table of contents from `html`, injecting anchor ids into
/// headings that lack one.
///
/// Never fails. If anything goes wrong internally the original content is
/// returned unchanged with an empty table of contents.
///
/// # Example
///
/// ```
/// use blog_toc::toc::{TocOptions, extract_with};
///
/// let html = "<h2>Setup</h2><h3>Details</h3><h2>Setup</h2>";
/// let result = extract_with(html, &TocOptions::default());
///
/// let ids: Vec<_> = result.table_of_contents.iter().map(|e| e.id.as_str()).collect();
/// assert_eq!(ids, ["setup", "setup-1"]);
/// assert_eq!(
///     result.rewritten_content,
///     r#"<h2 id="setup">Setup</h2><h3>Details</h3><h2 id="setup-1">Setup</h2>"#
/// );
/// ```
pub fn extract_with(html: &str, options: &TocOptions) -> Extraction {
    if html.is_empty() {
        return Extraction::default();
    }

    match try_extract(html, options) {
        Ok(extraction) => extraction,
        Err(err) => {
            warn!(error = %err, len = html.len(), "heading extraction failed, keeping content as-is");
            Extraction::passthrough(html)
        }
    }
}

/// Fallible form of [`extract_with`].
///
/// A panic inside the parser or rewriter is caught and reported as
/// [`Error::Parse`].
pub fn try_extract(html: &str, options: &TocOptions) -> Result<Extraction> {
    if html.is_empty() {
        return Ok(Extraction::default());
    }

    match panic::catch_unwind(AssertUnwindSafe(|| rewrite(html, options))) {
        Ok(result) => result,
        Err(payload) => Err(Error::Parse(panic_message(payload.as_ref()))),
    }
}

fn rewrite(html: &str, options: &TocOptions) -> Result<Extraction> {
    let sink = parse_sink(html);
    let parse_errors = sink.parse_errors();
    let quirks_mode = sink.quirks_mode();
    let mut dom = sink.into_dom();
    let max_level = options.max_level();

    let headings: Vec<(NodeId, u8)> = dom
        .descendants(dom.document())
        .filter_map(|id| {
            let level = heading_level(&dom, id)?;
            (level <= max_level).then_some((id, level))
        })
        .collect();

    let mut used = UsedIds::new();
    let mut toc = Vec::with_capacity(headings.len());
    let mut injected = 0usize;

    for (node, level) in headings {
        let title = dom.flattened_text(node).trim().to_string();
        if title.is_empty() {
            continue;
        }

        let existing = dom
            .get_attr(node, "id")
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string);

        let id = match existing {
            Some(id) => {
                used.register(&id);
                id
            }
            None => {
                let id = used.claim(&heading_slug(&title, level));
                dom.set_attr(node, "id", &id);
                injected += 1;
                id
            }
        };

        toc.push(TocEntry::new(id, title, level));
    }

    debug!(
        entries = toc.len(),
        injected,
        parse_errors,
        quirks_mode = ?quirks_mode,
        "extracted table of contents"
    );

    if injected == 0 {
        return Ok(Extraction {
            rewritten_content: html.to_string(),
            table_of_contents: toc,
        });
    }

    Ok(Extraction {
        rewritten_content: reassemble(&dom, html)?,
        table_of_contents: toc,
    })
}

/// Rank of an HTML heading element (`h1` = 1), if `id` is one.
fn heading_level(dom: &Dom, id: NodeId) -> Option<u8> {
    let node = dom.get(id)?;
    let NodeData::Element { name, .. } = &node.data else {
        return None;
    };
    if name.ns != html5ever::ns!(html) {
        return None;
    }
    match name.local.as_ref() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Serialize the edited tree back to a string shaped like the input: a whole
/// document if the input was one, otherwise just the fragment content.
fn reassemble(dom: &Dom, original: &str) -> Result<String> {
    if is_full_document(original) {
        return Ok(document_html(dom));
    }

    let root = dom
        .child_by_tag(dom.document(), "html")
        .ok_or_else(|| Error::MissingElement("html".to_string()))?;
    if dom.child_by_tag(root, "body").is_none() {
        return Err(Error::MissingElement("body".to_string()));
    }

    let mut out = String::with_capacity(original.len() + 64);
    for child in dom.children(dom.document()) {
        if child == root {
            for section in dom.children(root) {
                if dom.is_html_element(section, "head") || dom.is_html_element(section, "body") {
                    out.push_str(&inner_html(dom, section));
                } else {
                    out.push_str(&outer_html(dom, section));
                }
            }
        } else if matches!(dom.get(child).map(|n| &n.data), Some(NodeData::Comment(_))) {
            out.push_str(&outer_html(dom, child));
        }
    }
    Ok(out)
}

fn is_full_document(html: &str) -> bool {
    let start = html.trim_start().as_bytes();
    let starts_with = |prefix: &[u8]| {
        start.len() >= prefix.len() && start[..prefix.len()].eq_ignore_ascii_case(prefix)
    };
    starts_with(b"<!doctype") || starts_with(b"<html")
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "parser panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(extraction: &Extraction) -> Vec<&str> {
        extraction
            .table_of_contents
            .iter()
            .map(|e| e.id.as_str())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let result = extract("");
        assert_eq!(result.rewritten_content, "");
        assert!(result.table_of_contents.is_empty());
    }

    #[test]
    fn test_none_input() {
        let result = extract_optional(None);
        assert_eq!(result, Extraction::default());
    }

    #[test]
    fn test_collision_suffixes() {
        let result = extract("<h2>Setup</h2><h2>Setup</h2><h2>Setup</h2>");
        assert_eq!(ids(&result), ["setup", "setup-1", "setup-2"]);
    }

    #[test]
    fn test_levels_below_tracked_are_ignored() {
        let html = "<h3>Deep</h3><h4>Deeper</h4>";
        let result = extract(html);
        assert!(result.table_of_contents.is_empty());
        assert_eq!(result.rewritten_content, html);
    }

    #[test]
    fn test_max_level_option() {
        let options = TocOptions::new().with_max_level(3);
        let result = extract_with("<h1>A</h1><h3>B</h3><h4>C</h4>", &options);
        assert_eq!(ids(&result), ["a", "b"]);
        assert_eq!(result.table_of_contents[1].level, 3);
    }

    #[test]
    fn test_symbol_only_heading_falls_back() {
        let result = extract("<h1>!!!</h1><h2>???</h2><h2>***</h2>");
        assert_eq!(ids(&result), ["heading-1", "heading-2", "heading-2-1"]);
        assert_eq!(result.table_of_contents[0].title, "!!!");
    }

    #[test]
    fn test_blank_existing_id_is_replaced() {
        let result = extract(r#"<h2 id="  ">Overview</h2>"#);
        assert_eq!(ids(&result), ["overview"]);
        assert_eq!(result.rewritten_content, r#"<h2 id="overview">Overview</h2>"#);
    }

    #[test]
    fn test_existing_id_reserves_slug() {
        let result = extract(r#"<h1 id="setup">Intro</h1><h2>Setup</h2>"#);
        assert_eq!(ids(&result), ["setup", "setup-1"]);
    }

    #[test]
    fn test_head_content_is_kept_in_fragment() {
        let result = extract("<style>h2{color:red}</style><h2>Styled</h2>");
        assert_eq!(
            result.rewritten_content,
            r#"<style>h2{color:red}</style><h2 id="styled">Styled</h2>"#
        );
    }

    #[test]
    fn test_leading_comment_is_kept() {
        let result = extract("<!-- generated --><h2>One</h2>");
        assert_eq!(result.rewritten_content, r#"<!-- generated --><h2 id="one">One</h2>"#);
    }

    #[test]
    fn test_full_document_stays_a_document() {
        let html = "<!DOCTYPE html><html><head><title>T</title></head><body><h1>Top</h1></body></html>";
        let result = extract(html);
        assert_eq!(
            result.rewritten_content,
            r#"<!DOCTYPE html><html><head><title>T</title></head><body><h1 id="top">Top</h1></body></html>"#
        );
    }

    #[test]
    fn test_is_full_document() {
        assert!(is_full_document("  <!DOCTYPE html><p>"));
        assert!(is_full_document("<HTML lang=en>"));
        assert!(!is_full_document("<h1>x</h1>"));
        assert!(!is_full_document("<ht"));
    }

    #[test]
    fn test_try_extract_reports_ok() {
        let result = try_extract("<h1>A</h1>", &TocOptions::default()).unwrap();
        assert_eq!(ids(&result), ["a"]);
    }

    #[test]
    fn test_panic_message_variants() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("boom"));
        assert_eq!(panic_message(owned.as_ref()), "boom");
        let borrowed: Box<dyn Any + Send> = Box::new("bang");
        assert_eq!(panic_message(borrowed.as_ref()), "bang");
        let other: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(other.as_ref()), "parser panicked");
    }
}
