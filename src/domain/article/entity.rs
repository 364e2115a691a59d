// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

/// One content item. Field validation runs on every construction path, so an
/// instance can never hold an invalid title, slug, or body. `id` and the
/// timestamps are absent until the persistence layer assigns them.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: Option<ArticleId>,
    pub user_id: i64,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: ArticleBody,
    pub published: bool,
    pub tag_ids: Vec<i64>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

/// Input for [`Article::create`]. Defaults mirror what the web layer sends
/// when a field is omitted: zero author, empty strings, draft, no tags.
#[derive(Debug, Clone, Default)]
pub struct NewArticleData {
    pub user_id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub tag_ids: Vec<i64>,
}

/// A row as handed back by the store, used by [`Article::reconstruct`].
#[derive(Debug, Clone)]
pub struct StoredArticle {
    pub id: Option<i64>,
    pub user_id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub tag_ids: Vec<i64>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

/// Partial overrides for [`Article::update`]. `None` keeps the receiver's
/// value; identity and timestamps cannot be overridden at all.
#[derive(Debug, Clone, Default)]
pub struct ArticleChanges {
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
    pub tag_ids: Option<Vec<i64>>,
}

impl Article {
    /// Build a not-yet-persisted article. Validation order is fixed: title,
    /// then slug, then body; the first violation aborts construction.
    pub fn create(data: NewArticleData) -> DomainResult<Self> {
        Ok(Self {
            id: None,
            user_id: data.user_id,
            title: ArticleTitle::new(data.title)?,
            slug: ArticleSlug::new(data.slug)?,
            body: ArticleBody::new(data.body)?,
            published: data.published,
            tag_ids: data.tag_ids,
            created: None,
            modified: None,
        })
    }

    /// Rebuild an article from stored data. A non-positive stored id fails
    /// with an invalid-identity error rather than a validation error.
    pub fn reconstruct(data: StoredArticle) -> DomainResult<Self> {
        Ok(Self {
            id: data.id.map(ArticleId::new).transpose()?,
            user_id: data.user_id,
            title: ArticleTitle::new(data.title)?,
            slug: ArticleSlug::new(data.slug)?,
            body: ArticleBody::new(data.body)?,
            published: data.published,
            tag_ids: data.tag_ids,
            created: data.created,
            modified: data.modified,
        })
    }

    /// Return a new instance with the supplied fields overridden and the
    /// rest retained. The result is revalidated in full; the receiver is
    /// left untouched and `id`/`created`/`modified` always carry over.
    pub fn update(&self, changes: ArticleChanges) -> DomainResult<Self> {
        Ok(Self {
            id: self.id,
            user_id: changes.user_id.unwrap_or(self.user_id),
            title: ArticleTitle::new(
                changes.title.unwrap_or_else(|| self.title.as_str().into()),
            )?,
            slug: ArticleSlug::new(changes.slug.unwrap_or_else(|| self.slug.as_str().into()))?,
            body: ArticleBody::new(changes.body.unwrap_or_else(|| self.body.as_str().into()))?,
            published: changes.published.unwrap_or(self.published),
            tag_ids: changes.tag_ids.unwrap_or_else(|| self.tag_ids.clone()),
            created: self.created,
            modified: self.modified,
        })
    }
}
