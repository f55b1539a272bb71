//! Question generation.
//!
//! ## RNG ordering
//!
//! Every call draws `operand1` then `operand2` from the tier range first,
//! even for multiply and divide where those draws are then replaced. Keeping
//! the call sequence fixed means a seeded RNG yields the same question stream
//! no matter which operation the player switches to.

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::models::{DifficultyTier, Operation, Question, QuestionRequest};

/// Multiplication operands never exceed this many steps above the tier minimum.
pub const MULTIPLY_CAP: i64 = 12;

/// Divisors and quotients are drawn from `1..=DIVIDE_CAP`.
pub const DIVIDE_CAP: i64 = 10;

fn draw<R: Rng>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    rng.gen_range(lo..=hi)
}

/// Produce one question for `operation` within the bounds of `difficulty`.
///
/// Never fails: every answer is an exact, non-negative integer.
pub fn generate<R: Rng>(rng: &mut R, operation: Operation, difficulty: DifficultyTier) -> Question {
    let range = difficulty.range();
    let width = range.width();

    let mut operand1 = draw(rng, range.min, range.max);
    let mut operand2 = draw(rng, range.min, range.max);

    let question = match operation {
        Operation::Add => {
            Question::from_parts(operation, operand1, operand2, operand1 + operand2)
        }

        Operation::Subtract => {
            if operand1 < operand2 {
                std::mem::swap(&mut operand1, &mut operand2);
            }
            Question::from_parts(operation, operand1, operand2, operand1 - operand2)
        }

        Operation::Multiply => {
            let hi = range.min + MULTIPLY_CAP.min(width) - 1;
            operand1 = draw(rng, range.min, hi);
            operand2 = draw(rng, range.min, hi);
            Question::from_parts(operation, operand1, operand2, operand1 * operand2)
        }

        Operation::Divide => {
            let hi = DIVIDE_CAP.min(width);
            let divisor = draw(rng, 1, hi);
            let quotient = draw(rng, 1, hi);
            Question::from_parts(operation, divisor * quotient, divisor, quotient)
        }
    };

    debug!("generated {question} ({difficulty}, answer {})", question.correct_answer());
    question
}

/// One-shot entry point: seeds an RNG from the request and generates.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate(&mut rng, request.operation, request.difficulty)
}
