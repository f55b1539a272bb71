//! Engine settings, loadable from JSON with per-field defaults.

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    celebration::{DEFAULT_STARS, DEFAULT_TTL_MS, MAX_STARS, MAX_TTL_MS},
    error::ConfigError,
    models::DifficultyTier,
};

/// Engine settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Tier preselected on the idle screen.
    pub difficulty: DifficultyTier,
    /// `Some(seed)` makes the whole question stream reproducible.
    pub rng_seed: Option<u64>,
    pub celebration_ttl_ms: i64,
    pub stars_per_celebration: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            difficulty: DifficultyTier::Easy,
            rng_seed: None,
            celebration_ttl_ms: DEFAULT_TTL_MS,
            stars_per_celebration: DEFAULT_STARS,
        }
    }
}

impl QuizConfig {
    pub fn seeded(seed: u64) -> Self {
        QuizConfig { rng_seed: Some(seed), ..QuizConfig::default() }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Bounds: `celebration_ttl_ms` in `1..=60_000`, `stars_per_celebration`
    /// in `1..=50`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_STARS).contains(&self.stars_per_celebration) {
            return Err(ConfigError::InvalidStarCount {
                got: self.stars_per_celebration,
                max: MAX_STARS,
            });
        }
        if !(1..=MAX_TTL_MS).contains(&self.celebration_ttl_ms) {
            return Err(ConfigError::InvalidTtl { got: self.celebration_ttl_ms, max: MAX_TTL_MS });
        }
        Ok(())
    }
}
