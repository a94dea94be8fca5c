use uuid::Uuid;

use crate::error::QuizError;
use crate::metrics::QUIZ_SESSIONS_TOTAL;
use crate::models::question::QuizQuestion;

/// Where a running session currently is for its active question.
///
/// Input is only acted on in `Displaying`; in `AnsweredWaiting` and
/// `Advancing` repeated answer clicks are ignored until the caller moves
/// the machine forward. `Completed` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizPhase {
    Displaying,
    AnsweredWaiting { selected: String, correct: bool },
    Advancing,
    Completed { score: u32, total: u32 },
}

/// What happened to a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Accepted { correct: bool },
    /// The session was not displaying a question, so the input was
    /// dropped (the guard against double-clicks during the post-answer
    /// window).
    Ignored,
}

/// One play-through of an assembled question list: current position,
/// running score, and the per-question phase machine.
#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    questions: Vec<QuizQuestion>,
    current: usize,
    score: u32,
    phase: QuizPhase,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptySession);
        }

        let session = Self {
            id: Uuid::new_v4(),
            questions,
            current: 0,
            score: 0,
            phase: QuizPhase::Displaying,
        };

        QUIZ_SESSIONS_TOTAL.with_label_values(&["started"]).inc();
        tracing::info!(
            session_id = %session.id,
            questions = session.questions.len(),
            "quiz session started"
        );
        Ok(session)
    }

    /// Submits an answer for the current question. Scores and moves to
    /// `AnsweredWaiting` when a question is on display; otherwise the
    /// input is reported as ignored.
    pub fn select_answer(&mut self, answer: &str) -> SelectOutcome {
        if self.phase != QuizPhase::Displaying {
            return SelectOutcome::Ignored;
        }

        let correct = self.questions[self.current].is_correct(answer);
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::AnsweredWaiting {
            selected: answer.to_string(),
            correct,
        };
        SelectOutcome::Accepted { correct }
    }

    /// Ends the post-answer window. The caller invokes this when its
    /// reveal delay elapses; see `Config::answer_advance_delay`.
    pub fn begin_advance(&mut self) -> bool {
        match self.phase {
            QuizPhase::AnsweredWaiting { .. } => {
                self.phase = QuizPhase::Advancing;
                true
            }
            _ => false,
        }
    }

    /// Moves to the next question, or to `Completed` after the last one.
    pub fn advance(&mut self) -> &QuizPhase {
        if self.phase == QuizPhase::Advancing {
            let next = self.current + 1;
            if next < self.questions.len() {
                self.current = next;
                self.phase = QuizPhase::Displaying;
            } else {
                self.phase = QuizPhase::Completed {
                    score: self.score,
                    total: self.questions.len() as u32,
                };
                QUIZ_SESSIONS_TOTAL.with_label_values(&["completed"]).inc();
                tracing::info!(
                    session_id = %self.id,
                    score = self.score,
                    total = self.questions.len(),
                    "quiz session completed"
                );
            }
        }
        &self.phase
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// One-based position of the current question.
    pub fn position(&self) -> usize {
        self.current + 1
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::Completed { .. } => None,
            _ => self.questions.get(self.current),
        }
    }

    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / self.questions.len() as f64 * 100.0
    }
}
