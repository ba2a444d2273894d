use anyhow::{Context, Result};

/// Parser configuration loaded from environment variables.
/// Every value is optional; the LLM backend is only enabled when a key is present.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank the same way.
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
    fn test_optional_env_blank_is_none() {
        std::env::set_var("RESUME_PARSER_TEST_BLANK", "   ");
        assert_eq!(optional_env("RESUME_PARSER_TEST_BLANK"), None);
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("RESUME_PARSER_TEST_KEY", " abc123 ");
        assert_eq!(
            optional_env("RESUME_PARSER_TEST_KEY"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_optional_env_unset_is_none() {
        assert_eq!(optional_env("RESUME_PARSER_TEST_DEFINITELY_UNSET"), None);
    }
}
