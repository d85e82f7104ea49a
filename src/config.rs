//! Game configuration.
//!
//! Movement speed, world size, the seed roster and HUD styling all live here
//! so they can be supplied as JSON instead of being compiled in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ScoreEntry, WorldBounds};
use crate::view::hud::HudStyle;

pub const GAME_SCENE: &str = "game";
pub const GAME_OVER_SCENE: &str = "gameover";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Per-axis speed of the controlled entity, world units per second.
    pub speed: f32,
    pub world: WorldBounds,
    pub viewport: Viewport,
    pub tick_rate_hz: u32,
    /// Entries added to the roster when the game scene starts.
    pub roster: Vec<ScoreEntry>,
    pub hud: HudStyle,
    pub game_over_scene: String,
    /// Edge length of the controlled entity's square body.
    pub entity_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: 300.0,
            world: WorldBounds::default(),
            viewport: Viewport::default(),
            tick_rate_hz: 60,
            roster: vec![ScoreEntry::new("test", "#123"), ScoreEntry::new("test2", "#321")],
            hud: HudStyle::default(),
            game_over_scene: GAME_OVER_SCENE.to_string(),
            entity_size: 32.0,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loading config");
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::Invalid(format!("speed must be positive, got {}", self.speed)));
        }
        if !(self.world.width > 0.0 && self.world.height > 0.0) {
            return Err(ConfigError::Invalid("world dimensions must be positive".into()));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid("viewport dimensions must be non-zero".into()));
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::Invalid("tick_rate_hz must be non-zero".into()));
        }
        if !(self.entity_size.is_finite() && self.entity_size > 0.0) {
            return Err(ConfigError::Invalid(format!("entity_size must be positive, got {}", self.entity_size)));
        }
        if !(self.hud.line_height.is_finite() && self.hud.line_height > 0.0) {
            return Err(ConfigError::Invalid("hud.line_height must be positive".into()));
        }
        if self.game_over_scene.is_empty() {
            return Err(ConfigError::Invalid("game_over_scene must be named".into()));
        }
        Ok(())
    }

    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }
}
