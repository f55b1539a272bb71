//! Session state and the controller transitions that drive it.
//!
//! Every transition takes the current [`SessionState`] by value and returns
//! the next one. Invalid actions (submitting while idle, advancing an
//! ungraded question) are logged and return the state unchanged.

use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::quiz_engine::{
    generator::generate,
    grader::{grade, is_submittable},
    models::{DifficultyTier, Operation, Phase, Question, Score, Verdict},
};

/// Everything one play sequence needs to remember.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    operation: Option<Operation>,
    difficulty: DifficultyTier,
    question: Option<Question>,
    input: String,
    score: Score,
    verdict: Option<Verdict>,
}

impl SessionState {
    /// An idle session with the given tier preselected.
    pub fn new(difficulty: DifficultyTier) -> Self {
        SessionState { difficulty, ..SessionState::default() }
    }

    pub fn phase(&self) -> Phase {
        match (self.operation, self.verdict) {
            (None, _)          => Phase::Idle,
            (Some(_), None)    => Phase::InProgress,
            (Some(_), Some(_)) => Phase::Graded,
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn difficulty(&self) -> DifficultyTier {
        self.difficulty
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn total_answered(&self) -> u32 {
        self.score.total()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn progress_percentage(&self) -> f64 {
        self.score.progress_percentage()
    }

    /// The answer to reveal after a wrong guess.
    pub fn revealed_answer(&self) -> Option<i64> {
        match (self.verdict, &self.question) {
            (Some(Verdict::Incorrect), Some(q)) => Some(q.correct_answer()),
            _ => None,
        }
    }

    /// Input is locked once the current question has a verdict.
    pub fn input_locked(&self) -> bool {
        self.phase() != Phase::InProgress
    }

    /// Whether the check button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase() == Phase::InProgress && is_submittable(&self.input)
    }

    /// Install a fresh question and clear the previous verdict and input.
    fn with_question(mut self, question: Question) -> Self {
        self.question = Some(question);
        self.input.clear();
        self.verdict = None;
        self
    }
}

/// Start (or restart) play under `operation` with zeroed counters.
pub fn select_operation<R: Rng>(state: SessionState, operation: Operation, rng: &mut R) -> SessionState {
    info!("operation selected: {operation:?} at {}", state.difficulty);
    let question = generate(rng, operation, state.difficulty);
    SessionState {
        operation: Some(operation),
        score: Score::default(),
        ..state
    }
    .with_question(question)
}

/// Put a specific question on screen, e.g. to replay a missed one.
///
/// Switches the session to the question's operation but keeps the score.
pub fn pose_question(mut state: SessionState, question: Question) -> SessionState {
    state.operation = Some(question.operation());
    state.with_question(question)
}

/// Change the tier; an active session gets a fresh question under it.
pub fn change_difficulty<R: Rng>(mut state: SessionState, difficulty: DifficultyTier, rng: &mut R) -> SessionState {
    state.difficulty = difficulty;
    match state.operation {
        Some(operation) => {
            debug!("difficulty changed to {difficulty}, regenerating");
            let question = generate(rng, operation, difficulty);
            state.with_question(question)
        }
        None => state,
    }
}

/// Replace the typed answer. Ignored while the input is locked.
pub fn set_input(mut state: SessionState, text: impl Into<String>) -> SessionState {
    if state.input_locked() {
        debug!("input ignored: {:?}", state.phase());
        return state;
    }
    state.input = text.into();
    state
}

/// Grade `text` against the current question.
///
/// Empty or non-numeric text leaves the state untouched, as does submitting
/// outside `InProgress`.
pub fn submit(mut state: SessionState, text: &str) -> SessionState {
    if state.phase() != Phase::InProgress {
        warn!("submit ignored in {:?}", state.phase());
        return state;
    }
    let Some(question) = state.question else {
        warn!("submit ignored: no question on screen");
        return state;
    };
    match grade(&question, text) {
        Ok(verdict) => {
            state.input = text.to_string();
            state.score.record(verdict);
            state.verdict = Some(verdict);
            state
        }
        Err(err) => {
            debug!("submit blocked: {err}");
            state
        }
    }
}

/// Move from a graded question to the next one.
pub fn advance<R: Rng>(state: SessionState, rng: &mut R) -> SessionState {
    match (state.phase(), state.operation) {
        (Phase::Graded, Some(operation)) => {
            let question = generate(rng, operation, state.difficulty);
            state.with_question(question)
        }
        (phase, _) => {
            warn!("advance ignored in {phase:?}");
            state
        }
    }
}

/// Single-key shortcut: advance when graded, otherwise submit typed input.
pub fn press_enter<R: Rng>(state: SessionState, rng: &mut R) -> SessionState {
    match state.phase() {
        Phase::Graded => advance(state, rng),
        Phase::InProgress if !state.input.is_empty() => {
            let text = state.input.clone();
            submit(state, &text)
        }
        _ => state,
    }
}

/// Back to idle. The tier preference survives.
pub fn restart(state: SessionState) -> SessionState {
    info!("session restarted after {} answers", state.total_answered());
    SessionState::new(state.difficulty)
}
