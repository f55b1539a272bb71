//! # math_drill_gen
//!
//! A deterministic arithmetic drill engine for children's practice games.
//!
//! The player picks an operation (add, subtract, multiply, divide) and a
//! difficulty tier, answers generated problems one at a time, and gets
//! immediate feedback plus a running score. This crate is the whole game
//! minus the pixels: question generation, grading, the session state machine,
//! and a serializable view a UI can render as-is.
//!
//! ## How it works
//!
//! 1. [`generate`] turns an (operation, tier) pair into a [`Question`] using
//!    any `rand::Rng`, so seeded RNGs give reproducible question streams.
//! 2. [`grade`] parses the typed answer and returns a [`Verdict`].
//! 3. The transitions in [`quiz_engine::session`] take a [`SessionState`] and
//!    return the next one; [`QuizEngine`] wraps them with an RNG, a clock and
//!    the celebration stars that follow a correct answer.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{Operation, QuizConfig, QuizEngine, Verdict};
//!
//! let mut engine = QuizEngine::new(&QuizConfig::seeded(42));
//! engine.select_operation(Operation::Add);
//!
//! let answer = engine.state().question().unwrap().correct_answer();
//! assert_eq!(engine.submit(&answer.to_string()), Some(Verdict::Correct));
//! assert_eq!(engine.view().progress_label, "100%");
//!
//! engine.advance();
//! println!("next: {}", engine.state().question().unwrap());
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `math_drill_gen::generate`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate, generate_question, grade, session_view, to_view_json, AnswerError,
    Clock, ConfigError, DifficultyTier, Operation, Phase, Question, QuestionError,
    QuestionRequest, QuizConfig, QuizEngine, Score, SessionState, SessionView, Verdict,
};

#[cfg(test)]
mod tests;
