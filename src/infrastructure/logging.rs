// src/infrastructure/logging.rs
use crate::application::ports::Logger;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Routes the application's `Logger` port to `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str, context: Value) {
        tracing::info!(context = %context, "{message}");
    }

    fn warning(&self, message: &str, context: Value) {
        tracing::warn!(context = %context, "{message}");
    }

    fn error(&self, message: &str, context: Value) {
        tracing::error!(context = %context, "{message}");
    }
}

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
