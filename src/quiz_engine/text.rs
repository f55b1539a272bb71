//! All player-facing strings. The game ships in Uzbek only.

use crate::quiz_engine::models::{DifficultyTier, Operation};

pub const TITLE: &str = "Matematika Mashq";
pub const SUBTITLE: &str = "Arifmetikani tez va oson o'rganing";
pub const CHOOSE_DIFFICULTY: &str = "Qiyinlik darajasi";
pub const CHOOSE_OPERATION: &str = "Amalni tanlang";
pub const ANSWER_PLACEHOLDER: &str = "Javobingiz";
pub const CHECK: &str = "Tekshirish";
pub const NEXT_QUESTION: &str = "Keyingi savol";
pub const RESTART: &str = "Qaytadan boshlash";
pub const CORRECT: &str = "To'g'ri javob!";
pub const INCORRECT: &str = "Noto'g'ri";
pub const FOOTER: &str = "Bolalar uchun matematika o'yin sayti";

pub fn operation_label(operation: Operation) -> &'static str {
    match operation {
        Operation::Add      => "Qo'shish",
        Operation::Subtract => "Ayirish",
        Operation::Multiply => "Ko'paytirish",
        Operation::Divide   => "Bo'lish",
    }
}

pub fn difficulty_label(tier: DifficultyTier) -> &'static str {
    match tier {
        DifficultyTier::Easy   => "Oson",
        DifficultyTier::Medium => "O'rta",
        DifficultyTier::Hard   => "Qiyin",
    }
}

/// Tier label with its operand range, e.g. `"Oson (1-10)"`.
pub fn difficulty_label_with_range(tier: DifficultyTier) -> String {
    let range = tier.range();
    format!("{} ({}-{})", difficulty_label(tier), range.min, range.max)
}

/// Line shown under a wrong answer.
pub fn reveal_answer(answer: i64) -> String {
    format!("To'g'ri javob: {answer}")
}
