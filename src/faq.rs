//! FAQ items: search, filtering, sorting and truncation.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A question with its answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Case-insensitive substring match against question or answer.
    ///
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle) || self.answer.to_lowercase().contains(needle)
    }
}

/// Response of the FAQ endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqResponse {
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

/// Parse FAQs from either a `{"faqs": [...]}` response or a bare array.
pub fn from_json(json: &str) -> Result<Vec<Faq>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Payload {
        Response(FaqResponse),
        List(Vec<Faq>),
    }

    Ok(match serde_json::from_str(json)? {
        Payload::Response(response) => response.faqs,
        Payload::List(list) => list,
    })
}

/// FAQs whose question or answer contains `term`, ignoring case.
///
/// An empty term matches everything.
///
/// ```
/// use blog_toc::faq::{Faq, search};
///
/// let faqs = vec![
///     Faq::new("How do I reset my password?", "Use the link on the login page."),
///     Faq::new("Do you ship abroad?", "Yes, worldwide."),
/// ];
/// let hits = search(&faqs, "LOGIN");
/// assert_eq!(hits.len(), 1);
/// assert!(hits[0].question.contains("password"));
/// ```
pub fn search<'a>(faqs: &'a [Faq], term: &str) -> Vec<&'a Faq> {
    if term.is_empty() {
        return faqs.iter().collect();
    }
    let needle = term.to_lowercase();
    faqs.iter().filter(|f| f.matches_lowercase(&needle)).collect()
}

type FilterFn<'a> = Box<dyn Fn(&Faq) -> bool + 'a>;
type SortFn<'a> = Box<dyn Fn(&Faq, &Faq) -> Ordering + 'a>;

/// How [`customize`] transforms a list of FAQs.
#[derive(Default)]
pub struct FaqOptions<'a> {
    search_term: Option<String>,
    limit: Option<usize>,
    filter: Option<FilterFn<'a>>,
    sort: Option<SortFn<'a>>,
}

impl fmt::Debug for FaqOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaqOptions")
            .field("search_term", &self.search_term)
            .field("limit", &self.limit)
            .field("filter", &self.filter.is_some())
            .field("sort", &self.sort.is_some())
            .finish()
    }
}

impl<'a> FaqOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Keep at most `limit` items. Zero means no limit.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filter(mut self, f: impl Fn(&Faq) -> bool + 'a) -> Self {
        self.filter = Some(Box::new(f));
        self
    }

    pub fn sort_by(mut self, f: impl Fn(&Faq, &Faq) -> Ordering + 'a) -> Self {
        self.sort = Some(Box::new(f));
        self
    }
}

/// Apply filter, search term, sort and limit, in that order.
pub fn customize(faqs: &[Faq], options: &FaqOptions<'_>) -> Vec<Faq> {
    let mut result: Vec<Faq> = match &options.filter {
        Some(filter) => faqs.iter().filter(|f| filter(f)).cloned().collect(),
        None => faqs.to_vec(),
    };

    if let Some(term) = options.search_term.as_deref().filter(|t| !t.is_empty()) {
        let needle = term.to_lowercase();
        result.retain(|f| f.matches_lowercase(&needle));
    }

    if let Some(sort) = &options.sort {
        result.sort_by(|a, b| sort(a, b));
    }

    if let Some(limit) = options.limit.filter(|&l| l > 0) {
        result.truncate(limit);
    }

    result
}
