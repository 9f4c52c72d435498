//! Game configuration
//!
//! Defaults come from the constants in `fallblocks-types`. Environment
//! variables override individual fields; values that fail to parse fall back
//! to the default.

use crate::types::{
    BASE_FALL_DELAY, BOARD_HEIGHT, BOARD_WIDTH, INPUT_DELAY, LINES_PER_LEVEL, LOCK_DELAY,
    SPAWN_COLUMN,
};

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board_width: u8,
    /// Spawn ceiling in rows
    pub board_height: u8,
    pub spawn_column: i32,
    /// Gravity interval at level 1, in seconds
    pub base_fall_delay: f32,
    pub lock_delay: f32,
    pub input_delay: f32,
    pub lines_per_level: u32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            spawn_column: SPAWN_COLUMN,
            base_fall_delay: BASE_FALL_DELAY,
            lock_delay: LOCK_DELAY,
            input_delay: INPUT_DELAY,
            lines_per_level: LINES_PER_LEVEL,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment-style names)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parsed<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
            value
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        }

        let defaults = Self::default();
        let config = Self {
            base_fall_delay: parsed(lookup("FALLBLOCKS_FALL_DELAY"), defaults.base_fall_delay),
            lock_delay: parsed(lookup("FALLBLOCKS_LOCK_DELAY"), defaults.lock_delay),
            input_delay: parsed(lookup("FALLBLOCKS_INPUT_DELAY"), defaults.input_delay),
            lines_per_level: parsed(lookup("FALLBLOCKS_LINES_PER_LEVEL"), defaults.lines_per_level),
            seed: parsed(lookup("FALLBLOCKS_SEED"), defaults.seed),
            ..defaults
        };
        config.sanitized()
    }

    /// Replace non-positive or non-finite delays and a zero quota with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(self.base_fall_delay) {
            self.base_fall_delay = defaults.base_fall_delay;
        }
        if !valid(self.lock_delay) {
            self.lock_delay = defaults.lock_delay;
        }
        if !valid(self.input_delay) {
            self.input_delay = defaults.input_delay;
        }
        if self.lines_per_level == 0 {
            self.lines_per_level = defaults.lines_per_level;
        }
        if self.board_width == 0 {
            self.board_width = defaults.board_width;
        }
        self
    }

    /// Gravity interval for `level`: `base_fall_delay / level`
    pub fn fall_delay_for(&self, level: u32) -> f32 {
        self.base_fall_delay / level.max(1) as f32
    }
}
