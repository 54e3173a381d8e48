//! Anchor slug generation and per-document id bookkeeping.

use std::collections::HashSet;

/// Generate a URL-friendly slug from heading text.
///
/// Lowercases, keeps ASCII letters, digits and underscores, turns runs of
/// whitespace, underscores and hyphens into a single hyphen, and trims
/// hyphens from both ends. Every other character is dropped.
///
/// # Examples
///
/// ```
/// use blog_toc::toc::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  snake_case and -dashes- "), "snake-case-and-dashes");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Slug for a heading, falling back to `heading-<level>` when the text has no
/// sluggable characters.
pub fn heading_slug(text: &str, level: u8) -> String {
    let slug = slugify(text);
    if slug.is_empty() {
        format!("heading-{level}")
    } else {
        slug
    }
}

/// Ids handed out during one extraction.
///
/// Created fresh for each call so concurrent extractions never share state.
#[derive(Debug, Default, Clone)]
pub struct UsedIds {
    ids: HashSet<String>,
}

impl UsedIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an id that is already present in the document.
    pub fn register(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Reserve `base`, or `base-1`, `base-2`, ... if it is taken.
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut counter = 1u32;
        while self.ids.contains(&candidate) {
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
        self.ids.insert(candidate.clone());
        candidate
    }
}
