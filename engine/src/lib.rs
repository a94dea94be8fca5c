pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod slug;
pub mod utils;

pub use config::Config;
pub use error::QuizError;
pub use models::{
    Category, Difficulty, QuizPhase, QuizQuestion, QuizSession, QuizSettings, SelectOutcome,
};
pub use services::{AppState, CategoryDirectory, SessionAssembler};
