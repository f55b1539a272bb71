//! `QuizEngine`: one session plus the RNG, clock and celebrations around it.
//!
//! The engine is a thin owner over the pure transitions in
//! [`session`](crate::quiz_engine::session). It adds the side effects that
//! need outside state: spawning a star burst on a correct answer and
//! sweeping expired bursts.

use chrono::Duration;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    celebration::{Celebrations, MAX_TTL_MS},
    clock::Clock,
    config::QuizConfig,
    models::{DifficultyTier, Operation, Question, Verdict},
    session::{self, SessionState},
    view::{session_view, SessionView},
};

#[derive(Debug)]
pub struct QuizEngine<R: Rng> {
    state: SessionState,
    rng: R,
    clock: Clock,
    celebrations: Celebrations,
    last_celebration: Option<u64>,
}

impl QuizEngine<StdRng> {
    /// Engine seeded from `config.rng_seed`, or from entropy when unset.
    pub fn new(config: &QuizConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        QuizEngine::with_parts(config, rng, Clock::System)
    }
}

impl<R: Rng> QuizEngine<R> {
    /// Engine over an explicit RNG and clock.
    ///
    /// Celebration settings outside the bounds `QuizConfig::validate`
    /// enforces are clamped rather than rejected.
    pub fn with_parts(config: &QuizConfig, rng: R, clock: Clock) -> Self {
        let ttl_ms = config.celebration_ttl_ms.clamp(1, MAX_TTL_MS);
        QuizEngine {
            state: SessionState::new(config.difficulty),
            rng,
            clock,
            celebrations: Celebrations::new(
                Duration::milliseconds(ttl_ms),
                config.stars_per_celebration,
            ),
            last_celebration: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn celebrations(&self) -> &Celebrations {
        &self.celebrations
    }

    /// Id of the most recent burst, for scheduling its removal with
    /// [`expire_celebration`](Self::expire_celebration).
    pub fn last_celebration(&self) -> Option<u64> {
        self.last_celebration
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    fn apply(&mut self, f: impl FnOnce(SessionState, &mut R) -> SessionState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state, &mut self.rng);
    }

    pub fn select_operation(&mut self, operation: Operation) {
        self.apply(|s, rng| session::select_operation(s, operation, rng));
    }

    pub fn pose_question(&mut self, question: Question) {
        self.apply(|s, _| session::pose_question(s, question));
    }

    pub fn change_difficulty(&mut self, difficulty: DifficultyTier) {
        self.apply(|s, rng| session::change_difficulty(s, difficulty, rng));
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.apply(|s, _| session::set_input(s, text));
    }

    /// Grade `text`. Returns the verdict if this call produced one.
    pub fn submit(&mut self, text: &str) -> Option<Verdict> {
        let before = self.state.total_answered();
        self.apply(|s, _| session::submit(s, text));
        self.after_grading(before)
    }

    /// Grade whatever is currently typed.
    pub fn submit_input(&mut self) -> Option<Verdict> {
        let text = self.state.input().to_string();
        self.submit(&text)
    }

    pub fn advance(&mut self) {
        self.apply(|s, rng| session::advance(s, rng));
    }

    /// Enter key: submit when a question is open, advance when graded.
    pub fn press_enter(&mut self) -> Option<Verdict> {
        let before = self.state.total_answered();
        self.apply(|s, rng| session::press_enter(s, rng));
        self.after_grading(before)
    }

    pub fn restart(&mut self) {
        self.apply(|s, _| session::restart(s));
    }

    /// Purge expired celebrations. Returns how many bursts were removed.
    pub fn tick(&mut self) -> usize {
        self.celebrations.sweep(self.clock.now())
    }

    /// Timer callback for one burst. Safe to call late or twice.
    pub fn expire_celebration(&mut self, burst_id: u64) -> bool {
        self.celebrations.remove(burst_id)
    }

    pub fn view(&self) -> SessionView {
        session_view(&self.state, self.celebrations.active(self.clock.now()))
    }

    fn after_grading(&mut self, answered_before: u32) -> Option<Verdict> {
        if self.state.total_answered() == answered_before {
            return None;
        }
        let verdict = self.state.verdict()?;
        if verdict.is_correct() {
            let now = self.clock.now();
            self.celebrations.sweep(now);
            let id = self.celebrations.spawn(now, &mut self.rng);
            debug!("correct answer, celebration {id}");
            self.last_celebration = Some(id);
        }
        Some(verdict)
    }
}
