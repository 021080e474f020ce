use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is required: without `OPENAI_API_KEY` outreach emails fall back to templates.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when a real LLM backend should draft outreach emails.
    pub fn llm_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("MOBILITY_TEST_BLANK_KEY", "   ");
        assert_eq!(optional_env("MOBILITY_TEST_BLANK_KEY"), None);
        std::env::remove_var("MOBILITY_TEST_BLANK_KEY");
    }

    #[test]
    fn test_optional_env_returns_trimmed_value() {
        std::env::set_var("MOBILITY_TEST_SET_KEY", " sk-test ");
        assert_eq!(
            optional_env("MOBILITY_TEST_SET_KEY"),
            Some("sk-test".to_string())
        );
        std::env::remove_var("MOBILITY_TEST_SET_KEY");
    }

    #[test]
    fn test_llm_enabled_follows_api_key() {
        let mut config = Config {
            openai_api_key: None,
            port: 5000,
            rust_log: "info".to_string(),
        };
        assert!(!config.llm_enabled());
        config.openai_api_key = Some("sk-test".to_string());
        assert!(config.llm_enabled());
    }
}
