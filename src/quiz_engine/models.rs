use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuestionError;

// ---------------------------------------------------------------------------
// Operations and difficulty tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Canonical button order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add      => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide   => "÷",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Returns `None` on overflow, division by zero, or a division with a
    /// remainder, since every question answer must be an exact integer.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operation::Add      => lhs.checked_add(rhs),
            Operation::Subtract => lhs.checked_sub(rhs),
            Operation::Multiply => lhs.checked_mul(rhs),
            Operation::Divide   => match lhs.checked_rem(rhs) {
                Some(0) => lhs.checked_div(rhs),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Inclusive operand bounds for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandRange {
    pub min: i64,
    pub max: i64,
}

impl OperandRange {
    /// Number of integers in `[min, max]`.
    pub fn width(self) -> i64 {
        self.max - self.min + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 3] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
    ];

    pub fn range(self) -> OperandRange {
        match self {
            DifficultyTier::Easy   => OperandRange { min: 1, max: 10 },
            DifficultyTier::Medium => OperandRange { min: 1, max: 50 },
            DifficultyTier::Hard   => OperandRange { min: 1, max: 100 },
        }
    }
}

/// English tier name for log lines. Player-facing labels live in `text`.
impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyTier::Easy   => write!(f, "Easy"),
            DifficultyTier::Medium => write!(f, "Medium"),
            DifficultyTier::Hard   => write!(f, "Hard"),
        }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// One arithmetic problem with its precomputed answer.
///
/// Fields are private so a `Question` can only be produced by the generator
/// or by the validating constructors below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    operand1: i64,
    operand2: i64,
    operation: Operation,
    correct_answer: i64,
}

impl Question {
    /// Build a question from explicit operands.
    ///
    /// Subtraction must not go negative and division must be exact.
    pub fn new(operation: Operation, operand1: i64, operand2: i64) -> Result<Self, QuestionError> {
        match operation {
            Operation::Subtract if operand1 < operand2 => {
                return Err(QuestionError::NegativeDifference { operand1, operand2 });
            }
            Operation::Divide if operand2 == 0 => return Err(QuestionError::DivisionByZero),
            Operation::Divide => match operand1.checked_rem(operand2) {
                Some(0) => {}
                Some(_) => return Err(QuestionError::InexactDivision { operand1, operand2 }),
                None => return Err(QuestionError::Overflow),
            },
            _ => {}
        }
        let correct_answer = operation
            .apply(operand1, operand2)
            .ok_or(QuestionError::Overflow)?;
        Ok(Question { operand1, operand2, operation, correct_answer })
    }

    /// Build a division question as `divisor × quotient ÷ divisor`.
    pub fn division(divisor: i64, quotient: i64) -> Result<Self, QuestionError> {
        if divisor == 0 {
            return Err(QuestionError::DivisionByZero);
        }
        let dividend = divisor.checked_mul(quotient).ok_or(QuestionError::Overflow)?;
        Ok(Question {
            operand1: dividend,
            operand2: divisor,
            operation: Operation::Divide,
            correct_answer: quotient,
        })
    }

    /// Assemble a question whose invariants the caller already guarantees.
    pub(crate) fn from_parts(
        operation: Operation, operand1: i64, operand2: i64, correct_answer: i64,
    ) -> Self {
        Question { operand1, operand2, operation, correct_answer }
    }

    pub fn operand1(&self) -> i64 {
        self.operand1
    }

    pub fn operand2(&self) -> i64 {
        self.operand2
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    /// Prompt as shown to the player, e.g. `"3 + 4 = ?"`.
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.operand1, self.operation, self.operand2)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prompt())
    }
}

/// A one-off generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub operation: Operation,
    pub difficulty: DifficultyTier,
    /// `Some(seed)` reproduces the same question every time.
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Easy tier, entropy-seeded.
    pub fn new(operation: Operation) -> Self {
        QuestionRequest { operation, difficulty: DifficultyTier::Easy, rng_seed: None }
    }
}

// ---------------------------------------------------------------------------
// Grading and scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Running tally for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
}

impl Score {
    pub fn total(self) -> u32 {
        self.correct.saturating_add(self.wrong)
    }

    /// Record one graded answer.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct   => self.correct = self.correct.saturating_add(1),
            Verdict::Incorrect => self.wrong = self.wrong.saturating_add(1),
        }
    }

    /// Share of correct answers in percent, clamped to `[0, 100]`.
    ///
    /// Defined as 0 before anything has been answered.
    pub fn progress_percentage(self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let pct = f64::from(self.correct) / f64::from(total.max(1)) * 100.0;
        pct.clamp(0.0, 100.0)
    }
}

/// Where the session controller currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No operation chosen yet.
    Idle,
    /// A question is on screen and has not been graded.
    InProgress,
    /// The current question has a verdict; input is locked.
    Graded,
}
