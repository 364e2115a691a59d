// src/application/ports/logger.rs
use serde_json::Value;

/// Diagnostic sink consumed by the use-case layer. Emissions are
/// fire-and-forget; callers never depend on the sink succeeding.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str, context: Value);
    fn warning(&self, message: &str, context: Value);
    fn error(&self, message: &str, context: Value);
}
