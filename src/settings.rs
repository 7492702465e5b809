//! Game configuration
//!
//! Loaded from an optional JSON file; missing fields take the defaults in
//! [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Screen and tuning values for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen width in pixels
    pub width: u32,
    /// Screen height in pixels
    pub height: u32,
    /// Paddle width/height
    pub player_size: Vec2,
    /// Paddle speed in pixels/s
    pub player_velocity: f32,
    /// Ball velocity on launch
    pub initial_ball_velocity: Vec2,
    pub ball_radius: f32,
    /// Multiplier for the horizontal bend of paddle bounces
    pub paddle_strength: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            player_size: PLAYER_SIZE,
            player_velocity: PLAYER_VELOCITY,
            initial_ball_velocity: INITIAL_BALL_VELOCITY,
            ball_radius: BALL_RADIUS,
            paddle_strength: PADDLE_STRENGTH,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Invalid config {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read config {}: {}", path.display(), e),
        }

        log::info!("Using default config");
        Self::default()
    }
}
