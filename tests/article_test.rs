//! Article payload handling against a realistic API response.

use blog_toc::article::{BlogResponse, BlogStatus, enhance_with};
use blog_toc::faq::Faq;
use blog_toc::{Blog, TocOptions, enhance};

const BLOG_JSON: &str = include_str!("fixtures/blog.json");

fn load_blog() -> Blog {
    Blog::from_json(BLOG_JSON).expect("fixture should parse")
}

#[test]
fn test_fixture_metadata() {
    let blog = load_blog();
    assert_eq!(blog.id, 42);
    assert_eq!(blog.status, BlogStatus::Published);
    assert_eq!(blog.slug(), "caching-strategies");
    assert_eq!(blog.published_at.as_deref(), Some("2024-06-01T09:00:00Z"));
}

#[test]
fn test_enhanced_toc() {
    let enhanced = enhance(&load_blog());

    let toc: Vec<_> = enhanced
        .table_of_contents
        .iter()
        .map(|e| (e.id.as_str(), e.title.as_str(), e.level))
        .collect();
    assert_eq!(
        toc,
        [
            ("why-cache", "Why cache?", 1),
            ("cdn-caching", "CDN caching", 2),
            ("invalidation", "Invalidation & purging", 2),
            ("cdn-caching-1", "CDN caching", 2),
            ("heading-2", "🚀", 2),
        ]
    );
}

#[test]
fn test_enhanced_content_only_gains_ids() {
    let blog = load_blog();
    let original = blog.content.clone().unwrap();
    let enhanced = enhance(&blog);

    let expected = original
        .replace("<h1>Why cache?</h1>", r#"<h1 id="why-cache">Why cache?</h1>"#)
        .replacen("<h2>CDN caching</h2>", r#"<h2 id="cdn-caching">CDN caching</h2>"#, 1)
        .replacen("<h2>CDN caching</h2>", r#"<h2 id="cdn-caching-1">CDN caching</h2>"#, 1)
        .replace("<h2>🚀</h2>", r#"<h2 id="heading-2">🚀</h2>"#);
    assert_eq!(enhanced.modified_content, expected);
}

#[test]
fn test_deeper_levels_with_options() {
    let enhanced = enhance_with(&load_blog(), &TocOptions::new().with_max_level(3));
    let entry = enhanced
        .table_of_contents
        .iter()
        .find(|e| e.level == 3)
        .expect("h3 should be tracked");
    assert_eq!(entry.id, "cache-keys");
    assert!(enhanced.modified_content.contains(r#"<h3 id="cache-keys">"#));
}

#[test]
fn test_faqs_fall_back_to_schema() {
    let enhanced = enhance(&load_blog());
    assert_eq!(
        enhanced.faqs,
        vec![
            Faq::new("Should I cache HTML?", "Yes, with short TTLs."),
            Faq::new("What about assets?", "Cache them forever with hashed names."),
        ]
    );
    assert!(enhanced.key_insights.is_empty());
}

#[test]
fn test_enhanced_json_shape() {
    let json = serde_json::to_value(enhance(&load_blog())).unwrap();
    assert!(json["modifiedContent"].is_string());
    assert_eq!(json["tableOfContents"][0]["anchor"], "#why-cache");
    assert_eq!(json["faqs"][1]["question"], "What about assets?");
    assert_eq!(json["keyInsights"], serde_json::json!([]));
}

#[test]
fn test_round_trip_keeps_untyped_fields() {
    let blog = load_blog();
    let value = serde_json::to_value(&blog).unwrap();
    assert_eq!(value["technical_data"]["url_data"]["path_structure"], "/blog/{slug}");
    assert_eq!(value["technical_data"]["metadata"]["twitter"]["card_type"], "summary");

    let again: Blog = serde_json::from_value(value).unwrap();
    assert_eq!(again, blog);
}

#[test]
fn test_response_with_fixture() {
    let json = format!(r#"{{"workspace_id": 1, "count": 1, "blogs": [{BLOG_JSON}]}}"#);
    let response = BlogResponse::from_json(&json).unwrap();
    let blog = response.find_by_slug("caching-strategies").unwrap();
    assert_eq!(blog.title, "Caching Strategies for Static Sites");
}

#[test]
fn test_null_sections_are_tolerated() {
    let blog = Blog::from_json(
        r#"{
            "id": null,
            "title": null,
            "content": "<h1>A</h1>",
            "status": null,
            "created_at": null,
            "updated_at": null,
            "technical_data": {
                "schemas": {"faq": {"mainEntity": null}},
                "url_data": null
            }
        }"#,
    )
    .expect("nulls should read as defaults");

    assert_eq!(blog.title, "");
    assert_eq!(blog.status, BlogStatus::Draft);
    assert_eq!(blog.url_slug(), None);

    let enhanced = enhance(&blog);
    assert_eq!(enhanced.modified_content, r#"<h1 id="a">A</h1>"#);
    assert!(enhanced.faqs.is_empty());

    let bare = Blog::from_json(r#"{"technical_data": {"schemas": null, "url_data": null}}"#)
        .expect("null schemas should parse");
    assert_eq!(bare.schema_faqs(), None);
}
