//! Brick Breaker - a paddle-and-ball arcade game over tile-map levels
//!
//! Core modules:
//! - `sim`: Simulation (entities, levels, collisions, per-frame game logic)
//! - `renderer`: Sprite draw interface and GPU-ready sprite batching
//! - `input`: Held-key table consumed by the simulation
//! - `resources`: Named texture/shader handles owned by the application
//! - `settings`: Game configuration

pub mod input;
pub mod renderer;
pub mod resources;
pub mod settings;
pub mod sim;

pub use input::{Key, Keys};
pub use resources::ResourceStore;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Paddle defaults
    pub const PLAYER_SIZE: Vec2 = Vec2::new(100.0, 20.0);
    /// Paddle speed in pixels/s
    pub const PLAYER_VELOCITY: f32 = 500.0;

    /// Ball defaults
    pub const INITIAL_BALL_VELOCITY: Vec2 = Vec2::new(100.0, -350.0);
    pub const BALL_RADIUS: f32 = 12.5;

    /// How far the paddle hit offset bends the ball's horizontal velocity
    pub const PADDLE_STRENGTH: f32 = 2.0;
}
