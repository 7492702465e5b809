//! Game simulation
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - `entity`: paddle/brick boxes and the ball
//! - `level`: bricks built from tile grids
//! - `collision`: ball vs box tests and responses
//! - `game`: per-frame input, update and draw orchestration

pub mod collision;
pub mod entity;
pub mod game;
pub mod level;

pub use collision::{Collision, Direction, check_collision, paddle_bounce, resolve_brick_hit, vector_direction};
pub use entity::{Ball, Entity};
pub use game::{Game, GameState, SpriteTextures};
pub use level::{BrickTextures, Level, LevelError, bundled_levels, parse_tiles};
