//! Scripted walk through one practice session.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **Menu** — the idle screen's JSON view (operations and tiers).
//! 2. **Play** — five seeded addition questions, alternating right and wrong
//!    answers, printing the verdict and running score after each.
//! 3. **Switch** — harder tier mid-session, then division.
//! 4. **Restart** — back to the menu with counters cleared.
//!
//! The engine is seeded, so the output is identical on every run.

use math_drill_gen::{
    to_view_json, DifficultyTier, Operation, QuizConfig, QuizEngine, Verdict,
};
use rand::rngs::StdRng;

fn print_status(engine: &QuizEngine<StdRng>) {
    let view = engine.view();
    println!(
        "  score: {} right, {} wrong, {} total ({})",
        view.correct, view.wrong, view.total, view.progress_label
    );
}

fn play_round(engine: &mut QuizEngine<StdRng>, answer_right: bool) {
    let Some(question) = engine.state().question().copied() else {
        return;
    };
    let typed = if answer_right {
        question.correct_answer()
    } else {
        question.correct_answer() + 1
    };
    print!("  {question}  you typed {typed:<4}");
    engine.set_input(typed.to_string());

    match engine.press_enter() {
        Some(Verdict::Correct) => println!(" ✓  (+{} stars)", engine.view().stars.len()),
        Some(Verdict::Incorrect) => {
            let feedback = engine.view().feedback.and_then(|f| f.correct_answer);
            println!(" ✗  {}", feedback.unwrap_or_default());
        }
        None => println!(" (not graded)"),
    }
    print_status(engine);
    engine.press_enter();
}

fn main() {
    pretty_env_logger::init();

    let config = QuizConfig::seeded(42);
    let mut engine = QuizEngine::new(&config);

    // ── Menu ───────────────────────────────────────────────────────────────
    println!();
    println!("══ Menu ══");
    match serde_json::to_string_pretty(&to_view_json(&engine.view())) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("could not render menu: {err}"),
    }

    // ── Play ───────────────────────────────────────────────────────────────
    println!();
    println!("══ Addition, easy ══");
    engine.select_operation(Operation::Add);
    for i in 0..5 {
        play_round(&mut engine, i % 2 == 0);
    }

    // ── Switch ─────────────────────────────────────────────────────────────
    println!();
    println!("══ Addition, hard (score kept) ══");
    engine.change_difficulty(DifficultyTier::Hard);
    play_round(&mut engine, true);

    println!();
    println!("══ Division (score reset) ══");
    engine.select_operation(Operation::Divide);
    for _ in 0..3 {
        play_round(&mut engine, true);
    }

    // ── Restart ────────────────────────────────────────────────────────────
    println!();
    println!("══ Restart ══");
    engine.restart();
    println!("  phase: {:?}", engine.state().phase());
    print_status(&engine);
}
