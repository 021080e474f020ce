use std::sync::Arc;

use crate::candidate::repository::{InMemoryProfileRepository, ProfileRepository};
use crate::config::Config;
use crate::jobs::catalog::{InMemoryJobRepository, JobRepository};
use crate::outreach::writer::EmailWriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub profiles: Arc<dyn ProfileRepository>,
    pub jobs: Arc<dyn JobRepository>,
    /// Pluggable email writer. Default: TemplateEmailWriter; LLM-backed when an API key is set.
    pub email_writer: Arc<dyn EmailWriter>,
}

impl AppState {
    /// Seeded in-memory stores with the given writer.
    pub fn in_memory(config: Config, email_writer: Arc<dyn EmailWriter>) -> Self {
        Self {
            config,
            profiles: Arc::new(InMemoryProfileRepository::seeded()),
            jobs: Arc::new(InMemoryJobRepository::seeded()),
            email_writer,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        let config = Config {
            openai_api_key: None,
            port: 0,
            rust_log: "debug".to_string(),
        };
        Self::in_memory(
            config,
            Arc::new(crate::outreach::writer::TemplateEmailWriter),
        )
    }
}
