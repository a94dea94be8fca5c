use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::QuizError;

/// Shared state handed to every service: the loaded configuration and
/// one HTTP client carrying the per-request timeout.
pub struct AppState {
    pub config: Config,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, QuizError> {
        let base = Url::parse(&config.trivia_base_url)?;
        if base.host_str().is_none() {
            return Err(QuizError::EndpointHost);
        }

        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(QuizError::HttpClient)?;

        tracing::debug!(base_url = %config.trivia_base_url, "trivia API client ready");

        Ok(Self { config, http })
    }

    /// Joins an API path onto the configured base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.trivia_base_url.trim_end_matches('/'), path)
    }
}

pub mod category_directory;
pub mod session_assembler;

pub use category_directory::CategoryDirectory;
pub use session_assembler::SessionAssembler;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_base_urls_without_a_host() {
        let config = Config {
            trivia_base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(AppState::new(config).is_err());
    }

    #[test]
    fn endpoint_joins_without_doubled_slashes() {
        let config = Config {
            trivia_base_url: "https://opentdb.com/".to_string(),
            ..Config::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.endpoint("api.php"), "https://opentdb.com/api.php");
    }
}
