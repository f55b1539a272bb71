//! Presentation snapshot of a session, ready for any UI to render.
//!
//! [`SessionView`] carries only display data: labels, counters, the rounded
//! percentage, and which controls are enabled. [`to_view_json`] flattens it
//! into the JSON shape a web client consumes.

use serde::Serialize;
use serde_json::{json, Value};

use crate::quiz_engine::{
    celebration::Star,
    models::{DifficultyTier, Operation, Phase, Verdict},
    session::SessionState,
    text,
};

/// Which action button sits under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionButton {
    Check,
    Next,
}

impl ActionButton {
    pub fn label(self) -> &'static str {
        match self {
            ActionButton::Check => text::CHECK,
            ActionButton::Next  => text::NEXT_QUESTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub verdict: Verdict,
    pub message: String,
    /// Only present after a wrong answer.
    pub correct_answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub difficulty: DifficultyTier,
    pub operation: Option<Operation>,
    pub operation_label: Option<&'static str>,
    pub prompt: Option<String>,
    pub input: String,
    pub input_locked: bool,
    pub submit_enabled: bool,
    pub action: Option<ActionButton>,
    pub feedback: Option<Feedback>,
    pub correct: u32,
    pub wrong: u32,
    pub total: u32,
    pub progress: f64,
    /// `progress` rounded to a whole percent for the trophy badge.
    pub progress_label: String,
    pub stars: Vec<Star>,
}

fn feedback(state: &SessionState) -> Option<Feedback> {
    let verdict = state.verdict()?;
    Some(match verdict {
        Verdict::Correct => Feedback {
            verdict,
            message: text::CORRECT.to_string(),
            correct_answer: None,
        },
        Verdict::Incorrect => Feedback {
            verdict,
            message: text::INCORRECT.to_string(),
            correct_answer: state.revealed_answer().map(text::reveal_answer),
        },
    })
}

/// Build the snapshot for `state`, with whatever stars are still live.
pub fn session_view(state: &SessionState, stars: Vec<Star>) -> SessionView {
    let score = state.score();
    let progress = state.progress_percentage();
    let action = match state.phase() {
        Phase::Idle       => None,
        Phase::InProgress => Some(ActionButton::Check),
        Phase::Graded     => Some(ActionButton::Next),
    };

    SessionView {
        phase: state.phase(),
        difficulty: state.difficulty(),
        operation: state.operation(),
        operation_label: state.operation().map(text::operation_label),
        prompt: state.question().map(|q| q.prompt()),
        input: state.input().to_string(),
        input_locked: state.input_locked(),
        submit_enabled: state.can_submit(),
        action,
        feedback: feedback(state),
        correct: score.correct,
        wrong: score.wrong,
        total: score.total(),
        progress,
        progress_label: format!("{}%", progress.round() as u32),
        stars,
    }
}

/// Operation and difficulty buttons for the idle screen.
fn menu() -> Value {
    let operations: Vec<Value> = Operation::ALL
        .iter()
        .map(|&op| json!({ "operation": op, "symbol": op.symbol(), "label": text::operation_label(op) }))
        .collect();
    let difficulties: Vec<Value> = DifficultyTier::ALL
        .iter()
        .map(|&tier| json!({ "difficulty": tier, "label": text::difficulty_label_with_range(tier) }))
        .collect();
    json!({
        "title": text::TITLE,
        "subtitle": text::SUBTITLE,
        "difficulty_heading": text::CHOOSE_DIFFICULTY,
        "operation_heading": text::CHOOSE_OPERATION,
        "operations": operations,
        "difficulties": difficulties,
    })
}

/// Flatten a view into the JSON object the client renders.
///
/// The idle screen gets the menu block; an active session gets the question
/// card block. Score fields are present in both.
pub fn to_view_json(view: &SessionView) -> Value {
    let mut out = json!({
        "phase": view.phase,
        "difficulty": view.difficulty,
        "score": {
            "correct": view.correct,
            "wrong": view.wrong,
            "total": view.total,
            "progress": view.progress,
            "progress_label": view.progress_label,
        },
        "stars": view.stars,
        "restart_label": text::RESTART,
        "footer": text::FOOTER,
    });

    if view.phase == Phase::Idle {
        out["menu"] = menu();
    } else {
        out["card"] = json!({
            "operation": view.operation,
            "operation_label": view.operation_label,
            "prompt": view.prompt,
            "input": view.input,
            "placeholder": text::ANSWER_PLACEHOLDER,
            "input_locked": view.input_locked,
            "submit_enabled": view.submit_enabled,
            "action": view.action.map(|a| json!({ "kind": a, "label": a.label() })),
            "feedback": view.feedback,
        });
    }
    out
}
