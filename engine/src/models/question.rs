use serde::{Deserialize, Serialize};

use crate::utils::shuffle::shuffled;

/// A question exactly as the trivia API delivers it. All text fields are
/// HTML-escaped by the upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// Body of the question endpoint. `response_code == 0` is the only
/// success value; anything else (rate-limited, invalid parameters)
/// means the payload is unusable.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// A display-ready question: the raw payload plus `all_answers`, the
/// correct and incorrect answers merged in a randomized order fixed at
/// construction time.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub all_answers: Vec<String>,
}

impl QuizQuestion {
    pub fn from_raw(raw: RawQuestion) -> Self {
        let mut answers = raw.incorrect_answers.clone();
        answers.push(raw.correct_answer.clone());
        let all_answers = shuffled(&answers);

        Self {
            question: raw.question,
            correct_answer: raw.correct_answer,
            incorrect_answers: raw.incorrect_answers,
            all_answers,
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }

    /// Question text with HTML entities decoded for display.
    pub fn question_text(&self) -> String {
        html_escape::decode_html_entities(&self.question).into_owned()
    }

    /// The shuffled answers with HTML entities decoded for display.
    pub fn display_answers(&self) -> Vec<String> {
        self.all_answers
            .iter()
            .map(|answer| html_escape::decode_html_entities(answer).into_owned())
            .collect()
    }
}
