use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence port for articles. `save` covers both first writes (entity
/// without an id) and rewrites (entity with one) and hands back the stored
/// representation, identity and timestamps included.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn save(&self, article: Article) -> DomainResult<Article>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}
