use crate::domain::article::{Article, ArticleId, ArticleRepository, StoredArticle};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

/// SQLite adapter for the `ArticleRepository` port. Timestamps are assigned
/// here, never by the domain: `created` on first write, `modified` on every
/// write. The tag list is replaced wholesale on each save.
#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    user_id: i64,
    title: String,
    slug: String,
    body: String,
    published: i64,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

fn hydrate(row: ArticleRow, tag_ids: Vec<i64>) -> DomainResult<Article> {
    Article::reconstruct(StoredArticle {
        id: Some(row.id),
        user_id: row.user_id,
        title: row.title,
        slug: row.slug,
        body: row.body,
        published: row.published != 0,
        tag_ids,
        created: Some(row.created),
        modified: Some(row.modified),
    })
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn save(&self, article: Article) -> DomainResult<Article> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.map_err(map_error)?;

        let row = match article.id {
            None => sqlx::query_as::<_, ArticleRow>(
                "INSERT INTO articles (user_id, title, slug, body, published, created, modified) \
                 VALUES (?, ?, ?, ?, ?, ?, ?) \
                 RETURNING id, user_id, title, slug, body, published, created, modified",
            )
            .bind(article.user_id)
            .bind(article.title.as_str())
            .bind(article.slug.as_str())
            .bind(article.body.as_str())
            .bind(i64::from(article.published))
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_error)?,
            Some(id) => sqlx::query_as::<_, ArticleRow>(
                "UPDATE articles SET user_id = ?, title = ?, slug = ?, body = ?, published = ?, modified = ? \
                 WHERE id = ? \
                 RETURNING id, user_id, title, slug, body, published, created, modified",
            )
            .bind(article.user_id)
            .bind(article.title.as_str())
            .bind(article.slug.as_str())
            .bind(article.body.as_str())
            .bind(i64::from(article.published))
            .bind(now)
            .bind(i64::from(id))
            .fetch_one(&mut *tx)
            .await
            .map_err(map_error)?,
        };

        sqlx::query("DELETE FROM article_tags WHERE article_id = ?")
            .bind(row.id)
            .execute(&mut *tx)
            .await
            .map_err(map_error)?;

        for (position, tag_id) in article.tag_ids.iter().enumerate() {
            sqlx::query("INSERT INTO article_tags (article_id, tag_id, position) VALUES (?, ?, ?)")
                .bind(row.id)
                .bind(*tag_id)
                .bind(position as i64)
                .execute(&mut *tx)
                .await
                .map_err(map_error)?;
        }

        tx.commit().await.map_err(map_error)?;

        hydrate(row, article.tag_ids)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, user_id, title, slug, body, published, created, modified \
             FROM articles WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let tag_ids: Vec<i64> = sqlx::query_scalar(
            "SELECT tag_id FROM article_tags WHERE article_id = ? ORDER BY position",
        )
        .bind(row.id)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        hydrate(row, tag_ids).map(Some)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(result.rows_affected() > 0)
    }
}
