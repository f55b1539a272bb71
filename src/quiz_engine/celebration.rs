//! Short-lived star bursts shown after a correct answer.
//!
//! Purely decorative: nothing here touches the score. Each burst gets an id
//! from a counter that only goes up, so removing an old burst can never hit
//! one spawned later.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use log::debug;
use rand::Rng;
use serde::Serialize;

/// Default lifetime of a burst.
pub const DEFAULT_TTL_MS: i64 = 1500;

/// Default number of stars per burst.
pub const DEFAULT_STARS: usize = 5;

/// Longest lifetime a burst may have.
pub const MAX_TTL_MS: i64 = 60_000;

/// Most stars a single burst may hold.
pub const MAX_STARS: usize = 50;

/// One star, positioned in percent of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Star {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
struct Burst {
    expires_at: DateTime<Utc>,
    stars: Vec<Star>,
}

#[derive(Debug, Clone)]
pub struct Celebrations {
    ttl: Duration,
    stars_per_burst: usize,
    next_id: u64,
    bursts: BTreeMap<u64, Burst>,
}

impl Default for Celebrations {
    fn default() -> Self {
        Celebrations::new(Duration::milliseconds(DEFAULT_TTL_MS), DEFAULT_STARS)
    }
}

impl Celebrations {
    /// Out-of-range settings are clamped: `ttl` to `1ms..=MAX_TTL_MS`,
    /// `stars_per_burst` to `1..=MAX_STARS`.
    pub fn new(ttl: Duration, stars_per_burst: usize) -> Self {
        let ttl = ttl.clamp(Duration::milliseconds(1), Duration::milliseconds(MAX_TTL_MS));
        let stars_per_burst = stars_per_burst.clamp(1, MAX_STARS);
        Celebrations { ttl, stars_per_burst, next_id: 0, bursts: BTreeMap::new() }
    }

    /// Spawn a burst at random positions. Returns its id for later removal.
    pub fn spawn<R: Rng>(&mut self, now: DateTime<Utc>, rng: &mut R) -> u64 {
        let burst_id = self.next_id;
        self.next_id += 1;

        let per_burst = self.stars_per_burst as u64;
        let stars = (0..per_burst)
            .map(|i| Star {
                id: burst_id.saturating_mul(per_burst).saturating_add(i),
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
            })
            .collect();
        let expires_at = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.bursts.insert(burst_id, Burst { expires_at, stars });
        debug!("celebration {burst_id} spawned, {} live", self.bursts.len());
        burst_id
    }

    /// The per-burst timer callback. Idempotent; returns whether anything was removed.
    pub fn remove(&mut self, burst_id: u64) -> bool {
        self.bursts.remove(&burst_id).is_some()
    }

    /// Drop every burst whose lifetime has passed.
    pub fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.bursts.len();
        self.bursts.retain(|_, burst| burst.expires_at > now);
        before - self.bursts.len()
    }

    /// When `burst_id` is due to disappear, if it is still live.
    pub fn expires_at(&self, burst_id: u64) -> Option<DateTime<Utc>> {
        self.bursts.get(&burst_id).map(|b| b.expires_at)
    }

    /// Stars still visible at `now`, oldest burst first.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Star> {
        self.bursts
            .values()
            .filter(|b| b.expires_at > now)
            .flat_map(|b| b.stars.iter().copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }
}
