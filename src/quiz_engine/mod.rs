//! Core quiz engine — question generation, grading, and session state.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: operations, tiers, questions, verdicts, score |
//! | `generator`   | `generate()` — one random question per (operation, tier) |
//! | `grader`      | Parses typed answers and compares them to the question |
//! | `session`     | `SessionState` and the controller transitions |
//! | `celebration` | Expiring star bursts shown after a correct answer |
//! | `clock`       | System or fixed time source for expiry |
//! | `config`      | `QuizConfig`, JSON-loadable engine settings |
//! | `engine`      | `QuizEngine`, owner of state + RNG + clock + celebrations |
//! | `view`        | Presentation snapshot and its JSON form |
//! | `text`        | Every player-facing string |
//! | `error`       | Error enums |

pub mod celebration;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod grader;
pub mod models;
pub mod session;
pub mod text;
pub mod view;

// Re-export the public API surface so callers can use
// `quiz_engine::generate` without reaching into sub-modules.
pub use celebration::{Celebrations, Star};
pub use clock::Clock;
pub use config::QuizConfig;
pub use engine::QuizEngine;
pub use error::{AnswerError, ConfigError, QuestionError};
pub use generator::{generate, generate_question};
pub use grader::{grade, parse_answer};
pub use models::{
    DifficultyTier, OperandRange, Operation, Phase, Question, QuestionRequest, Score, Verdict,
};
pub use session::SessionState;
pub use view::{session_view, to_view_json, ActionButton, Feedback, SessionView};
