use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    // Upstream trivia API
    pub static ref QUESTION_FETCH_ATTEMPTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "quiz_question_fetch_attempts_total",
        "Question fetch attempts against the trivia API",
        &["outcome"]
    )
    .unwrap();

    pub static ref CATEGORY_DIRECTORY_OPS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "quiz_category_directory_operations_total",
        "Category directory cache operations",
        &["operation"]
    )
    .unwrap();

    // Session lifecycle
    pub static ref QUIZ_SESSIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "quiz_sessions_total",
        "Quiz sessions by lifecycle event",
        &["event"]
    )
    .unwrap();
}

/// Renders the current metric values in the Prometheus text format, for
/// whatever scrape endpoint the embedding application exposes.
pub fn render() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
