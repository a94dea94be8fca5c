use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::utils::retry::RetryConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the trivia API, without a trailing path.
    pub trivia_base_url: String,
    /// Per-request timeout applied to every outbound call.
    pub request_timeout_secs: u64,
    /// Total attempts the question retry loop may spend.
    pub retry_max_attempts: u32,
    /// Fixed delay between question fetch attempts.
    pub retry_backoff_ms: u64,
    /// How long a fetched category list stays fresh. `None` means
    /// fetch once per process and keep it.
    pub category_cache_max_age_secs: Option<i64>,
    /// How long the presentation layer should reveal the answer before
    /// advancing to the next question.
    pub answer_advance_delay_ms: u64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let settings = config_builder.build()?;

        let trivia_base_url = settings
            .get_string("trivia.base_url")
            .or_else(|_| env::var("TRIVIA_BASE_URL"))
            .unwrap_or_else(|_| "https://opentdb.com".to_string());

        let request_timeout_secs = settings
            .get_int("trivia.request_timeout_secs")
            .ok()
            .and_then(|value| u64::try_from(value).ok())
            .filter(|value| *value > 0)
            .unwrap_or(10);

        let retry_max_attempts = settings
            .get_int("retry.max_attempts")
            .ok()
            .and_then(|value| u32::try_from(value).ok())
            .filter(|value| *value > 0)
            .unwrap_or(5);

        let retry_backoff_ms = settings
            .get_int("retry.backoff_ms")
            .ok()
            .and_then(|value| u64::try_from(value).ok())
            .unwrap_or(1000);

        let category_cache_max_age_secs = settings
            .get_int("cache.category_max_age_secs")
            .ok()
            .filter(|value| *value > 0);

        let answer_advance_delay_ms = settings
            .get_int("session.answer_advance_delay_ms")
            .ok()
            .and_then(|value| u64::try_from(value).ok())
            .unwrap_or(1500);

        Ok(Config {
            trivia_base_url,
            request_timeout_secs,
            retry_max_attempts,
            retry_backoff_ms,
            category_cache_max_age_secs,
            answer_advance_delay_ms,
        })
    }

    pub fn retry(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.retry_max_attempts,
            backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn answer_advance_delay(&self) -> Duration {
        Duration::from_millis(self.answer_advance_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trivia_base_url: "https://opentdb.com".to_string(),
            request_timeout_secs: 10,
            retry_max_attempts: 5,
            retry_backoff_ms: 1000,
            category_cache_max_age_secs: None,
            answer_advance_delay_ms: 1500,
        }
    }
}
