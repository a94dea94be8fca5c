use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub mod category;
pub mod question;
pub mod session;

pub use category::{CategoriesResponse, Category};
pub use question::{QuestionsResponse, QuizQuestion, RawQuestion};
pub use session::{QuizPhase, QuizSession, SelectOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parses the lowercase wire/slug token. Anything outside the three
    /// known levels is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to request one quiz: a category id, a difficulty,
/// and how many questions to ask for. The amount bounds match the
/// setup form's input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuizSettings {
    pub category: u32,
    pub difficulty: Difficulty,
    #[validate(range(min = 1, max = 50))]
    pub amount: u32,
}
