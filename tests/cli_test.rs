//! End-to-end runs of the `blog-toc` binary.

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_blog-toc");
const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> String {
    format!("{}/{}", FIXTURES_DIR, name)
}

fn write_temp_html(html: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(html.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_toc_text_output() {
    let file = write_temp_html("<h1>Guide</h1><h2>Install</h2><h2>Install</h2>");
    let output = Command::new(BIN)
        .arg("toc")
        .arg(file.path())
        .output()
        .expect("run blog-toc");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "- Guide (#guide)\n  - Install (#install)\n  - Install (#install-1)\n"
    );
}

#[test]
fn test_toc_json_from_stdin() {
    let mut child = Command::new(BIN)
        .args(["toc", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn blog-toc");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"<h2>Setup</h2>")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["rewrittenContent"], r#"<h2 id="setup">Setup</h2>"#);
    assert_eq!(json["tableOfContents"][0]["id"], "setup");
}

#[test]
fn test_toc_content_output() {
    let file = write_temp_html("<h3>Deep</h3>");
    let output = Command::new(BIN)
        .args(["toc", "--content", "--max-level", "3"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "<h3 id=\"deep\">Deep</h3>\n");
}

#[test]
fn test_article_command() {
    let output = Command::new(BIN)
        .arg("article")
        .arg(fixture_path("blog.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tableOfContents"][0]["id"], "why-cache");
    assert_eq!(json["faqs"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_faq_command_search_and_limit() {
    let output = Command::new(BIN)
        .args(["faq", "--search", "BILLING", "--limit", "1"])
        .arg(fixture_path("faqs.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "question": "How do I update my billing details?",
            "answer": "Go to Settings, then Billing."
        }])
    );
}

#[test]
fn test_missing_file_fails() {
    let output = Command::new(BIN)
        .args(["article", "/definitely/not/here.json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: I/O error"));
}

#[test]
fn test_max_level_is_validated() {
    let output = Command::new(BIN)
        .args(["toc", "--max-level", "7", "-"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
}
