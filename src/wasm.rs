//! WASM bindings for extracting a table of contents in the browser or in a
//! JavaScript server runtime.
//!
//! Results cross the boundary as JSON strings shaped like
//! `{ "rewrittenContent": ..., "tableOfContents": [...] }`.

use wasm_bindgen::prelude::*;

use crate::article::{Blog, enhance};
use crate::toc::{TocOptions, extract, extract_with};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Extract `h1`/`h2` anchors and the table of contents from `html`.
#[wasm_bindgen]
pub fn extract_toc(html: &str) -> Result<String, JsValue> {
    serde_json::to_string(&extract(html)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Like [`extract_toc`], tracking headings down to `max_level`.
#[wasm_bindgen]
pub fn extract_toc_with_level(html: &str, max_level: u8) -> Result<String, JsValue> {
    let options = TocOptions::new().with_max_level(max_level);
    serde_json::to_string(&extract_with(html, &options))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Enhance a blog JSON payload: anchored content, TOC, FAQs and insights.
#[wasm_bindgen]
pub fn enhance_blog(blog_json: &str) -> Result<String, JsValue> {
    let blog = Blog::from_json(blog_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&enhance(&blog)).map_err(|e| JsValue::from_str(&e.to_string()))
}
