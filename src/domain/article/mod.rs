pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleChanges, NewArticleData, StoredArticle};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleTitle};
