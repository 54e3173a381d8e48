//! Blog article payloads from the content API.
//!
//! Only the fields this crate reads are typed. Everything else in a payload is
//! carried through as raw JSON, so a blog deserialized here serializes back
//! without losing data.

mod enhance;

pub use enhance::{EnhancedContent, enhance, enhance_with};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::faq::Faq;
use crate::toc::{TocEntry, slugify};

/// Response of the blog listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub workspace_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blogs: Vec<Blog>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: usize,
}

impl BlogResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Blogs whose status is [`BlogStatus::Published`].
    pub fn published(&self) -> impl Iterator<Item = &Blog> {
        self.blogs.iter().filter(|b| b.is_published())
    }

    /// The first blog whose URL slug matches.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Blog> {
        self.blogs.iter().find(|b| b.url_slug() == Some(slug))
    }
}

/// Publication state of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Archived,
    #[serde(other)]
    Unknown,
}

/// A single blog article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub idea_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Article body as HTML. The API may send `null`.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: BlogStatus,
    #[serde(default)]
    pub published_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(default)]
    pub technical_data: Option<TechnicalData>,

    /// Explicit FAQs; take precedence over the FAQ schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    /// Explicit TOC; takes precedence over headings found in `content`.
    #[serde(
        default,
        rename = "tableOfContents",
        skip_serializing_if = "Option::is_none"
    )]
    pub table_of_contents: Option<Vec<TocEntry>>,
    #[serde(
        default,
        rename = "keyInsights",
        skip_serializing_if = "Option::is_none"
    )]
    pub key_insights: Option<Vec<InsightItem>>,
}

impl Blog {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }

    /// Slug from the payload's URL data, if present and non-empty.
    pub fn url_slug(&self) -> Option<&str> {
        self.technical_data
            .as_ref()
            .map(|t| t.url_data.slug.as_str())
            .filter(|s| !s.is_empty())
    }

    /// URL slug, or the slugified title when the payload has none.
    pub fn slug(&self) -> String {
        match self.url_slug() {
            Some(slug) => slug.to_string(),
            None => slugify(&self.title),
        }
    }

    /// FAQs listed in the article's FAQ JSON-LD schema.
    pub fn schema_faqs(&self) -> Option<Vec<Faq>> {
        let faq = self.technical_data.as_ref()?.schemas.faq.as_ref()?;
        Some(
            faq.main_entity
                .iter()
                .map(|item| Faq::new(&item.name, &item.accepted_answer.text))
                .collect(),
        )
    }
}

/// A highlighted takeaway shown alongside the article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// SEO and structural data attached to an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub schemas: Schemas,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_data: UrlData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schemas {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<FaqSchema>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// schema.org `FAQPage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqSchema {
    #[serde(default, deserialize_with = "null_as_default", rename = "mainEntity")]
    pub main_entity: Vec<FaqSchemaItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// schema.org `Question`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqSchemaItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default", rename = "acceptedAnswer")]
    pub accepted_answer: FaqAnswer,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// schema.org `Answer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqAnswer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub canonical_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
