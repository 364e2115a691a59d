pub mod create_article;

pub use create_article::{CreateArticleInput, CreateArticleResult, CreateArticleUseCase};
