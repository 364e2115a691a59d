use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde_json::Value;

use cms_core::application::ports::Logger;
use cms_core::application::use_cases::{CreateArticleInput, CreateArticleUseCase};
use cms_core::domain::article::{Article, ArticleId, ArticleRepository, StoredArticle};
use cms_core::domain::errors::{DomainError, DomainResult};

static SAVED_AT: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2026, 1, 20, 10, 0, 0).unwrap());

/// Echoes saved articles back with an assigned id and timestamps, or fails
/// every save with a persistence error when constructed with `failing`.
struct InMemoryArticleRepo {
    next_id: i64,
    fail_with: Option<String>,
    saved: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepo {
    fn returning_id(next_id: i64) -> Self {
        Self {
            next_id,
            fail_with: None,
            saved: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            next_id: 0,
            fail_with: Some(message.into()),
            saved: Mutex::new(Vec::new()),
        }
    }

    fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    fn last_saved(&self) -> Article {
        self.saved.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn save(&self, article: Article) -> DomainResult<Article> {
        if let Some(message) = &self.fail_with {
            return Err(DomainError::Persistence(message.clone()));
        }
        self.saved.lock().unwrap().push(article.clone());
        Article::reconstruct(StoredArticle {
            id: Some(self.next_id),
            user_id: article.user_id,
            title: article.title.as_str().into(),
            slug: article.slug.as_str().into(),
            body: article.body.as_str().into(),
            published: article.published,
            tag_ids: article.tag_ids,
            created: Some(*SAVED_AT),
            modified: Some(*SAVED_AT),
        })
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<bool> {
        Ok(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct LogEntry {
    level: &'static str,
    message: String,
    context: Value,
}

#[derive(Default)]
struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    fn record(&self, level: &'static str, message: &str, context: Value) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            message: message.into(),
            context,
        });
    }

    fn single_entry(&self) -> LogEntry {
        let entries = self.entries.lock().unwrap();
        assert_eq!(entries.len(), 1, "expected exactly one log emission");
        entries[0].clone()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str, context: Value) {
        self.record("info", message, context);
    }

    fn warning(&self, message: &str, context: Value) {
        self.record("warning", message, context);
    }

    fn error(&self, message: &str, context: Value) {
        self.record("error", message, context);
    }
}

fn use_case(
    repo: Arc<InMemoryArticleRepo>,
    logger: Arc<RecordingLogger>,
) -> CreateArticleUseCase {
    CreateArticleUseCase::new(repo, logger)
}

fn valid_input() -> CreateArticleInput {
    CreateArticleInput {
        user_id: 1,
        title: "Test Article".into(),
        slug: "test-article".into(),
        body: "This is a test article body.".into(),
        published: true,
        tag_ids: vec![1, 2, 3],
    }
}

#[tokio::test]
async fn execute_with_valid_data_succeeds() {
    let repo = Arc::new(InMemoryArticleRepo::returning_id(1));
    let logger = Arc::new(RecordingLogger::default());
    let result = use_case(Arc::clone(&repo), Arc::clone(&logger))
        .execute(valid_input())
        .await;

    assert!(result.success);
    assert_eq!(result.article_id, Some(1));
    assert!(result.errors.is_empty());

    assert_eq!(repo.save_count(), 1);
    let saved = repo.last_saved();
    assert!(saved.id.is_none(), "use case passes an unpersisted entity");
    assert_eq!(saved.user_id, 1);
    assert_eq!(saved.title.as_str(), "Test Article");
    assert_eq!(saved.slug.as_str(), "test-article");
    assert_eq!(saved.body.as_str(), "This is a test article body.");
    assert!(saved.published);
    assert_eq!(saved.tag_ids, vec![1, 2, 3]);

    let entry = logger.single_entry();
    assert_eq!(entry.level, "info");
    assert_eq!(entry.message, "Article created successfully");
    assert_eq!(entry.context["article_id"], 1);
    assert_eq!(entry.context["user_id"], 1);
}

#[tokio::test]
async fn execute_with_minimal_data_succeeds() {
    let repo = Arc::new(InMemoryArticleRepo::returning_id(2));
    let logger = Arc::new(RecordingLogger::default());
    let input = CreateArticleInput {
        user_id: 1,
        title: "Minimal".into(),
        slug: "minimal".into(),
        body: "Body".into(),
        published: false,
        tag_ids: vec![],
    };
    let result = use_case(repo, Arc::clone(&logger)).execute(input).await;

    assert!(result.success);
    assert_eq!(result.article_id, Some(2));
    assert!(result.errors.is_empty());
    assert_eq!(logger.single_entry().level, "info");
}

#[tokio::test]
async fn empty_title_is_a_domain_validation_error() {
    let repo = Arc::new(InMemoryArticleRepo::returning_id(1));
    let logger = Arc::new(RecordingLogger::default());
    let input = CreateArticleInput {
        title: "".into(),
        ..valid_input()
    };
    let result = use_case(Arc::clone(&repo), Arc::clone(&logger))
        .execute(input)
        .await;

    assert!(!result.success);
    assert_eq!(result.article_id, None);
    assert_eq!(result.errors, vec!["Title cannot be empty".to_string()]);
    assert_eq!(repo.save_count(), 0, "save must not run on invalid input");

    let entry = logger.single_entry();
    assert_eq!(entry.level, "warning");
    assert_eq!(
        entry.message,
        "Article creation failed: domain validation error"
    );
    assert_eq!(entry.context["error"], "Title cannot be empty");
    assert_eq!(entry.context["input"]["slug"], "test-article");
    assert_eq!(entry.context["input"]["user_id"], 1);
}

#[tokio::test]
async fn whitespace_only_title_is_rejected() {
    let repo = Arc::new(InMemoryArticleRepo::returning_id(1));
    let logger = Arc::new(RecordingLogger::default());
    let input = CreateArticleInput {
        title: "   ".into(),
        ..valid_input()
    };
    let result = use_case(Arc::clone(&repo), logger).execute(input).await;

    assert_eq!(result.errors, vec!["Title cannot be empty".to_string()]);
    assert_eq!(repo.save_count(), 0);
}

#[tokio::test]
async fn invalid_slug_is_a_domain_validation_error() {
    let repo = Arc::new(InMemoryArticleRepo::returning_id(1));
    let logger = Arc::new(RecordingLogger::default());
    let input = CreateArticleInput {
        slug: "Invalid Slug".into(),
        ..valid_input()
    };
    let result = use_case(Arc::clone(&repo), Arc::clone(&logger))
        .execute(input)
        .await;

    assert!(!result.success);
    assert_eq!(result.article_id, None);
    assert_eq!(
        result.errors,
        vec!["Slug can only contain lowercase letters, numbers, and hyphens".to_string()]
    );
    assert_eq!(repo.save_count(), 0);
    assert_eq!(logger.single_entry().level, "warning");
}

#[tokio::test]
async fn empty_body_is_a_domain_validation_error() {
    let repo = Arc::new(InMemoryArticleRepo::returning_id(1));
    let logger = Arc::new(RecordingLogger::default());
    let input = CreateArticleInput {
        body: "".into(),
        ..valid_input()
    };
    let result = use_case(Arc::clone(&repo), Arc::clone(&logger))
        .execute(input)
        .await;

    assert_eq!(result.errors, vec!["Body cannot be empty".to_string()]);
    assert_eq!(repo.save_count(), 0);
    assert_eq!(logger.single_entry().level, "warning");
}

#[tokio::test]
async fn repository_failure_becomes_a_generic_error() {
    let repo = Arc::new(InMemoryArticleRepo::failing("Database connection failed"));
    let logger = Arc::new(RecordingLogger::default());
    let result = use_case(repo, Arc::clone(&logger))
        .execute(valid_input())
        .await;

    assert!(!result.success);
    assert_eq!(result.article_id, None);
    assert_eq!(
        result.errors,
        vec!["An unexpected error occurred".to_string()]
    );

    let entry = logger.single_entry();
    assert_eq!(entry.level, "error");
    assert_eq!(entry.message, "Article creation failed: unexpected error");
    // The underlying cause is logged but never surfaced to the caller.
    let logged = entry.context["error"].as_str().unwrap();
    assert!(logged.contains("Database connection failed"));
    assert_eq!(entry.context["input"]["title"], "Test Article");
}

#[tokio::test]
async fn success_log_carries_persisted_identity() {
    let repo = Arc::new(InMemoryArticleRepo::returning_id(999));
    let logger = Arc::new(RecordingLogger::default());
    let input = CreateArticleInput {
        user_id: 5,
        title: "Log Test".into(),
        slug: "log-test".into(),
        body: "Body".into(),
        published: true,
        tag_ids: vec![],
    };
    let result = use_case(repo, Arc::clone(&logger)).execute(input).await;

    assert!(result.success);
    assert_eq!(result.article_id, Some(999));

    let entry = logger.single_entry();
    assert_eq!(entry.level, "info");
    assert_eq!(entry.context["article_id"], 999);
    assert_eq!(entry.context["user_id"], 5);
}
