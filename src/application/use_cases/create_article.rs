// src/application/use_cases/create_article.rs
use crate::application::ports::Logger;
use crate::domain::article::{Article, ArticleRepository, NewArticleData};
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

/// Raw submission as received from the caller. Missing fields deserialize to
/// the same defaults `Article::create` would apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateArticleInput {
    pub user_id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub tag_ids: Vec<i64>,
}

/// Outcome of one `execute` call. `errors` is empty exactly when `success`
/// is true and otherwise holds a single message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateArticleResult {
    pub success: bool,
    pub article_id: Option<i64>,
    pub errors: Vec<String>,
}

/// Orchestrates article creation: validate via the domain entity, persist
/// through the repository port, classify failures, emit one diagnostic.
/// Never returns an error itself.
pub struct CreateArticleUseCase {
    repository: Arc<dyn ArticleRepository>,
    logger: Arc<dyn Logger>,
}

impl CreateArticleUseCase {
    pub fn new(repository: Arc<dyn ArticleRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { repository, logger }
    }

    pub async fn execute(&self, input: CreateArticleInput) -> CreateArticleResult {
        match self.create_and_save(&input).await {
            Ok(saved) => {
                let article_id = saved.id.map(i64::from);
                self.logger.info(
                    "Article created successfully",
                    json!({ "article_id": article_id, "user_id": input.user_id }),
                );
                CreateArticleResult {
                    success: true,
                    article_id,
                    errors: Vec::new(),
                }
            }
            Err(DomainError::Validation(message)) => {
                self.logger.warning(
                    "Article creation failed: domain validation error",
                    json!({ "error": message, "input": input_context(&input) }),
                );
                CreateArticleResult {
                    success: false,
                    article_id: None,
                    errors: vec![message],
                }
            }
            Err(err) => {
                // The underlying cause goes to the log only; callers get a
                // generic message.
                self.logger.error(
                    "Article creation failed: unexpected error",
                    json!({ "error": err.to_string(), "input": input_context(&input) }),
                );
                CreateArticleResult {
                    success: false,
                    article_id: None,
                    errors: vec!["An unexpected error occurred".into()],
                }
            }
        }
    }

    async fn create_and_save(&self, input: &CreateArticleInput) -> DomainResult<Article> {
        let article = Article::create(NewArticleData {
            user_id: input.user_id,
            title: input.title.clone(),
            slug: input.slug.clone(),
            body: input.body.clone(),
            published: input.published,
            tag_ids: input.tag_ids.clone(),
        })?;
        self.repository.save(article).await
    }
}

fn input_context(input: &CreateArticleInput) -> Value {
    serde_json::to_value(input).unwrap_or(Value::Null)
}
