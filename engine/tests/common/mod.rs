use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use quizstarter_engine::{AppState, Config};

/// A scripted stand-in for the trivia API, served over real HTTP on an
/// ephemeral port so the engine's client stack is exercised end to end.
#[derive(Clone)]
pub struct MockTrivia {
    pub base_url: String,
    state: MockState,
}

#[derive(Clone)]
struct MockState {
    category_hits: Arc<AtomicU32>,
    question_hits: Arc<AtomicU32>,
    categories_failing: Arc<AtomicBool>,
    /// How many question requests still get a rate-limited response
    /// before the endpoint starts answering properly.
    question_failures_left: Arc<AtomicU32>,
    last_query: Arc<Mutex<Option<HashMap<String, String>>>>,
}

impl MockTrivia {
    pub fn category_hits(&self) -> u32 {
        self.state.category_hits.load(Ordering::SeqCst)
    }

    pub fn question_hits(&self) -> u32 {
        self.state.question_hits.load(Ordering::SeqCst)
    }

    pub fn fail_categories(&self, failing: bool) {
        self.state
            .categories_failing
            .store(failing, Ordering::SeqCst);
    }

    pub fn last_query(&self) -> Option<HashMap<String, String>> {
        self.state.last_query.lock().unwrap().clone()
    }
}

/// Spawns the mock API. The first `question_failures` question requests
/// are answered with a rate-limited payload (`response_code: 5`), every
/// later one with a proper question set sized by the `amount` parameter.
pub async fn spawn_trivia_api(question_failures: u32) -> MockTrivia {
    let state = MockState {
        category_hits: Arc::new(AtomicU32::new(0)),
        question_hits: Arc::new(AtomicU32::new(0)),
        categories_failing: Arc::new(AtomicBool::new(false)),
        question_failures_left: Arc::new(AtomicU32::new(question_failures)),
        last_query: Arc::new(Mutex::new(None)),
    };

    let app = Router::new()
        .route("/api_category.php", get(categories))
        .route("/api.php", get(questions))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock trivia listener");
    let addr = listener.local_addr().expect("mock trivia listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock trivia server");
    });

    MockTrivia {
        base_url: format!("http://{addr}"),
        state,
    }
}

async fn categories(State(state): State<MockState>) -> Response {
    state.category_hits.fetch_add(1, Ordering::SeqCst);

    if state.categories_failing.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }

    Json(json!({
        "trivia_categories": [
            { "id": 9, "name": "General Knowledge" },
            { "id": 17, "name": "Science & Nature" },
        ]
    }))
    .into_response()
}

async fn questions(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.question_hits.fetch_add(1, Ordering::SeqCst);
    let amount: usize = params
        .get("amount")
        .and_then(|value| value.parse().ok())
        .unwrap_or(5);
    *state.last_query.lock().unwrap() = Some(params);

    let failures_left = state.question_failures_left.load(Ordering::SeqCst);
    if failures_left > 0 {
        state
            .question_failures_left
            .store(failures_left.saturating_sub(1), Ordering::SeqCst);
        return Json(json!({ "response_code": 5, "results": [] })).into_response();
    }

    let results: Vec<_> = (0..amount)
        .map(|n| {
            json!({
                "question": format!("What is question {n} about?"),
                "correct_answer": format!("Correct {n}"),
                "incorrect_answers": ["Wrong A", "Wrong B", "Wrong C"],
            })
        })
        .collect();

    Json(json!({ "response_code": 0, "results": results })).into_response()
}

/// App state pointed at the mock, with a short retry backoff so retry
/// paths stay fast under test.
pub fn test_state(base_url: &str) -> AppState {
    test_state_with(Config {
        trivia_base_url: base_url.to_string(),
        retry_backoff_ms: 5,
        ..Config::default()
    })
}

pub fn test_state_with(config: Config) -> AppState {
    init_tracing();
    AppState::new(config).expect("test app state")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
