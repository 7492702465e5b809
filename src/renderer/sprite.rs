//! Sprite instances and batching
//!
//! `SpriteBatch` records one GPU-ready instance per draw call, in call
//! order, so a wgpu backend can upload the whole frame with one write.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use super::Renderer;
use crate::resources::TextureHandle;

/// Per-instance sprite data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    /// Degrees
    pub rotation: f32,
    pub color: [f32; 3],
    /// Texture handle id
    pub texture: u32,
}

impl SpriteInstance {
    pub fn new(texture: TextureHandle, position: Vec2, size: Vec2, rotation: f32, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            size: size.to_array(),
            rotation,
            color: color.to_array(),
            texture: texture.0,
        }
    }

    /// Instance buffer layout for a sprite pipeline that draws one unit quad
    /// per instance (quad vertices in slot 0, this layout in slot 1)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Uint32,
                },
            ],
        }
    }
}

/// Records draw calls for one frame
#[derive(Debug, Default)]
pub struct SpriteBatch {
    instances: Vec<SpriteInstance>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    /// Raw bytes for a GPU instance buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Start a new frame
    pub fn clear(&mut self) {
        self.instances.clear();
    }
}

impl Renderer for SpriteBatch {
    fn draw_sprite(&mut self, texture: TextureHandle, position: Vec2, size: Vec2, rotation: f32, color: Vec3) {
        self.instances
            .push(SpriteInstance::new(texture, position, size, rotation, color));
    }
}
