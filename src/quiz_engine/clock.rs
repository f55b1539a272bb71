//! Time source for celebration expiry.

use chrono::{DateTime, Duration, Utc};

/// Real time, or a fixed instant for tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Clock::Fixed(at)
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System   => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Move a fixed clock forward. No effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// 2023-11-14T22:13:20Z, used wherever a deterministic "now" is needed.
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// A clock frozen at [`FIXED_TEST_TIMESTAMP`].
pub fn fixed_clock() -> Clock {
    let at = DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0).unwrap_or_default();
    Clock::fixed(at)
}
