//! Sprite rendering interface
//!
//! The game issues one `draw_sprite` per visible entity. GPU devices,
//! pipelines and shaders live behind implementations of [`Renderer`].

pub mod sprite;

pub use sprite::{SpriteBatch, SpriteInstance};

use glam::{Vec2, Vec3};

use crate::resources::TextureHandle;

/// Something that can draw textured quads
pub trait Renderer {
    /// Draw `texture` stretched over the box at `position` (top-left) with
    /// `size`, rotated by `rotation` degrees around its center and tinted by `color`
    fn draw_sprite(&mut self, texture: TextureHandle, position: Vec2, size: Vec2, rotation: f32, color: Vec3);
}
