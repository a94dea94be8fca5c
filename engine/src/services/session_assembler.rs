use reqwest::Client;
use tokio::sync::watch;
use validator::Validate;

use crate::error::QuizError;
use crate::metrics::QUESTION_FETCH_ATTEMPTS_TOTAL;
use crate::models::{QuestionsResponse, QuizQuestion, QuizSettings};
use crate::services::{AppState, CategoryDirectory};
use crate::slug;
use crate::utils::retry::{retry_fixed, RetryConfig, RetryOutcome};

/// Turns `QuizSettings` into a display-ready question list. The trivia
/// API intermittently reports rate-limited or empty results for valid
/// requests, so each request runs through a bounded fixed-delay retry
/// loop; network and decode failures are hard errors and end the loop
/// at once.
pub struct SessionAssembler {
    http: Client,
    endpoint: String,
    retry: RetryConfig,
}

impl SessionAssembler {
    pub fn new(state: &AppState) -> Self {
        Self {
            http: state.http.clone(),
            endpoint: state.endpoint("api.php"),
            retry: state.config.retry(),
        }
    }

    /// Fetches and formats the question set for `settings`.
    pub async fn assemble(
        &self,
        settings: &QuizSettings,
    ) -> Result<Vec<QuizQuestion>, QuizError> {
        // Never cancelled; the sender lives for the whole call.
        let (_keep_alive, cancel) = watch::channel(false);
        self.assemble_with_cancel(settings, cancel).await
    }

    /// Like [`assemble`](Self::assemble), but stops promptly (between
    /// attempts or mid-backoff) once `cancel` flips to true or its
    /// sender is dropped.
    pub async fn assemble_with_cancel(
        &self,
        settings: &QuizSettings,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<Vec<QuizQuestion>, QuizError> {
        settings.validate()?;

        let query = [
            ("amount", settings.amount.to_string()),
            ("category", settings.category.to_string()),
            ("difficulty", settings.difficulty.to_string()),
            ("type", "multiple".to_string()),
        ];

        let outcome = retry_fixed(&self.retry, &mut cancel, |attempt| {
            self.attempt_fetch(attempt, &query)
        })
        .await?;

        match outcome {
            RetryOutcome::Completed(questions) => {
                tracing::info!(
                    questions = questions.len(),
                    category = settings.category,
                    difficulty = %settings.difficulty,
                    "question set assembled"
                );
                Ok(questions)
            }
            RetryOutcome::Exhausted => Err(QuizError::QuestionsExhausted {
                attempts: self.retry.max_attempts,
            }),
            RetryOutcome::Cancelled => Err(QuizError::Cancelled),
        }
    }

    /// Resolves a quiz slug against the directory and assembles its
    /// question set. An unresolvable slug is `InvalidSlug`.
    pub async fn assemble_from_slug(
        &self,
        slug_value: &str,
        directory: &CategoryDirectory,
    ) -> Result<(QuizSettings, Vec<QuizQuestion>), QuizError> {
        let categories = directory.categories().await?;
        let settings = slug::decode(slug_value, &categories)
            .ok_or_else(|| QuizError::InvalidSlug(slug_value.to_string()))?;
        let questions = self.assemble(&settings).await?;
        Ok((settings, questions))
    }

    /// One fetch attempt: `Ok(Some)` on a usable payload, `Ok(None)`
    /// when the API answered but had nothing for us, `Err` on
    /// network/decode failures.
    async fn attempt_fetch(
        &self,
        attempt: u32,
        query: &[(&str, String)],
    ) -> Result<Option<Vec<QuizQuestion>>, QuizError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(query)
            .send()
            .await
            .map_err(|err| {
                QUESTION_FETCH_ATTEMPTS_TOTAL
                    .with_label_values(&["error"])
                    .inc();
                QuizError::QuestionFetch(err)
            })?;

        let body: QuestionsResponse = response.json().await.map_err(|err| {
            QUESTION_FETCH_ATTEMPTS_TOTAL
                .with_label_values(&["error"])
                .inc();
            QuizError::QuestionFetch(err)
        })?;

        if body.response_code == 0 && !body.results.is_empty() {
            QUESTION_FETCH_ATTEMPTS_TOTAL
                .with_label_values(&["success"])
                .inc();
            let questions = body
                .results
                .into_iter()
                .map(QuizQuestion::from_raw)
                .collect();
            Ok(Some(questions))
        } else {
            QUESTION_FETCH_ATTEMPTS_TOTAL
                .with_label_values(&["retryable"])
                .inc();
            tracing::warn!(
                attempt,
                response_code = body.response_code,
                results = body.results.len(),
                "trivia API returned no usable questions"
            );
            Ok(None)
        }
    }
}
