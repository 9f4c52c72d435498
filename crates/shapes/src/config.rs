//! Config files - JSON overrides for [`GameConfig`]
//!
//! Every field is optional. Missing fields keep the default value and the
//! result is sanitized the same way environment overrides are.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use fallblocks_core::GameConfig;

/// On-disk shape of a game config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub board_width: Option<u8>,
    pub board_height: Option<u8>,
    pub spawn_column: Option<i32>,
    pub base_fall_delay: Option<f32>,
    pub lock_delay: Option<f32>,
    pub input_delay: Option<f32>,
    pub lines_per_level: Option<u32>,
    pub seed: Option<u32>,
}

impl ConfigFile {
    /// Overlay the fields present in this file onto `base`
    pub fn apply(&self, base: GameConfig) -> GameConfig {
        GameConfig {
            board_width: self.board_width.unwrap_or(base.board_width),
            board_height: self.board_height.unwrap_or(base.board_height),
            spawn_column: self.spawn_column.unwrap_or(base.spawn_column),
            base_fall_delay: self.base_fall_delay.unwrap_or(base.base_fall_delay),
            lock_delay: self.lock_delay.unwrap_or(base.lock_delay),
            input_delay: self.input_delay.unwrap_or(base.input_delay),
            lines_per_level: self.lines_per_level.unwrap_or(base.lines_per_level),
            seed: self.seed.unwrap_or(base.seed),
        }
        .sanitized()
    }
}

/// Parse config JSON on top of the defaults
pub fn parse_config(json: &str) -> Result<GameConfig> {
    let file: ConfigFile = serde_json::from_str(json).context("malformed game config")?;
    Ok(file.apply(GameConfig::default()))
}

/// Read a JSON config file
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("invalid config {}", path.display()))
}
