use thiserror::Error;

/// Everything that can go wrong while assembling or running a quiz.
/// Callers are expected to branch on the variant: a bad slug routes to
/// a not-found view, `CategoryFetch`/`QuestionsExhausted` to a
/// try-again-later message, `Cancelled` to silence.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("quiz slug {0:?} does not match any known quiz")]
    InvalidSlug(String),

    #[error("failed to fetch trivia categories")]
    CategoryFetch(#[source] reqwest::Error),

    #[error("question request to the trivia API failed")]
    QuestionFetch(#[source] reqwest::Error),

    #[error("no questions found after {attempts} attempts")]
    QuestionsExhausted { attempts: u32 },

    #[error("question retrieval was cancelled")]
    Cancelled,

    #[error("invalid quiz settings")]
    InvalidSettings(#[from] validator::ValidationErrors),

    #[error("a quiz session requires at least one question")]
    EmptySession,

    #[error("failed to construct the HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("trivia endpoint URL is not valid")]
    Endpoint(#[from] url::ParseError),

    #[error("trivia endpoint URL must include a host")]
    EndpointHost,

    #[error("configuration could not be loaded")]
    Config(#[from] config::ConfigError),
}
