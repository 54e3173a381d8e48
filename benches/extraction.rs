//! Benchmarks for heading extraction.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use blog_toc::{Blog, TocOptions, enhance, extract, extract_with};

const BLOG_JSON: &str = include_str!("../tests/fixtures/blog.json");

/// A long article: many sections, each with inline markup and a repeated title.
fn long_article(sections: usize) -> String {
    let mut html = String::new();
    for i in 0..sections {
        html.push_str(&format!(
            "<h2>Section {}</h2><p>Body with <a href=\"/x/{i}\">a link</a> and <em>emphasis</em>.</p>\
             <h3>Details</h3><ul><li>one</li><li>two</li></ul><h2>Summary</h2>",
            i % 10
        ));
    }
    html
}

fn bench_extract(c: &mut Criterion) {
    let small = "<h1>Title</h1><p>Intro</p><h2>Setup</h2><h2>Setup</h2>";
    let large = long_article(500);

    c.bench_function("extract_small", |b| b.iter(|| extract(small)));
    c.bench_function("extract_large", |b| b.iter(|| extract(&large)));

    let deep = TocOptions::new().with_max_level(3);
    c.bench_function("extract_large_h3", |b| b.iter(|| extract_with(&large, &deep)));
}

fn bench_no_headings(c: &mut Criterion) {
    let plain = "<p>No headings here.</p>".repeat(2000);
    c.bench_function("extract_no_headings", |b| b.iter(|| extract(&plain)));
}

fn bench_enhance(c: &mut Criterion) {
    let blog = Blog::from_json(BLOG_JSON).unwrap();
    c.bench_function("enhance_fixture", |b| b.iter(|| enhance(&blog)));
}

criterion_group!(benches, bench_extract, bench_no_headings, bench_enhance);
criterion_main!(benches);
