//! Named texture and shader handles
//!
//! The application owns one `ResourceStore` and passes it to whatever needs
//! lookups. Loading the actual GPU objects is the renderer's job; the store
//! only hands out stable handles keyed by name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque texture id understood by the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// Opaque shader program id understood by the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShaderHandle(pub u32);

/// Texture metadata recorded when a texture is registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    pub handle: TextureHandle,
    pub file: String,
    /// Whether the image carries an alpha channel
    pub alpha: bool,
}

/// Registry of named resources with an explicit init/clear lifecycle
#[derive(Debug, Default)]
pub struct ResourceStore {
    textures: BTreeMap<String, TextureInfo>,
    shaders: BTreeMap<String, ShaderHandle>,
    next_id: u32,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Register a texture under `name`. Registering the same name again returns
    /// the existing handle.
    pub fn load_texture(&mut self, file: &str, alpha: bool, name: &str) -> TextureHandle {
        if let Some(info) = self.textures.get(name) {
            return info.handle;
        }
        let handle = TextureHandle(self.next_handle_id());
        log::debug!("Texture '{}' -> {:?} ({})", name, handle, file);
        self.textures.insert(
            name.to_string(),
            TextureInfo {
                handle,
                file: file.to_string(),
                alpha,
            },
        );
        handle
    }

    /// Register a shader program under `name`
    pub fn load_shader(&mut self, vertex_file: &str, fragment_file: &str, name: &str) -> ShaderHandle {
        if let Some(handle) = self.shaders.get(name) {
            return *handle;
        }
        let handle = ShaderHandle(self.next_handle_id());
        log::debug!(
            "Shader '{}' -> {:?} ({}, {})",
            name,
            handle,
            vertex_file,
            fragment_file
        );
        self.shaders.insert(name.to_string(), handle);
        handle
    }

    pub fn texture(&self, name: &str) -> Option<TextureHandle> {
        self.textures.get(name).map(|info| info.handle)
    }

    pub fn texture_info(&self, name: &str) -> Option<&TextureInfo> {
        self.textures.get(name)
    }

    pub fn shader(&self, name: &str) -> Option<ShaderHandle> {
        self.shaders.get(name).copied()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Drop every registered resource. Handles issued earlier must not be reused.
    pub fn clear(&mut self) {
        log::info!(
            "Clearing {} textures and {} shaders",
            self.textures.len(),
            self.shaders.len()
        );
        self.textures.clear();
        self.shaders.clear();
    }
}
