//! Brick levels built from tile grids
//!
//! Level files are whitespace separated integers, one grid row per line:
//! `0` is empty, `1` a solid brick, anything larger a destructible brick
//! whose color is picked by the code.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::resources::TextureHandle;

/// Levels shipped with the game, in play order
pub const BUNDLED_LEVELS: [(&str, &str); 4] = [
    ("one", include_str!("../../levels/one.lvl")),
    ("two", include_str!("../../levels/two.lvl")),
    ("three", include_str!("../../levels/three.lvl")),
    ("four", include_str!("../../levels/four.lvl")),
];

/// Errors from reading level text
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tile '{token}' at row {row}, column {col}")]
    InvalidTile {
        row: usize,
        col: usize,
        token: String,
    },
    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Textures used for the two brick kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickTextures {
    pub block: TextureHandle,
    pub solid: TextureHandle,
}

/// Color for a tile code
pub fn tile_color(code: u32) -> Vec3 {
    match code {
        1 => Vec3::new(0.8, 0.8, 0.7),
        2 => Vec3::new(0.2, 0.6, 1.0),
        3 => Vec3::new(0.0, 0.7, 0.0),
        4 => Vec3::new(0.8, 0.8, 0.4),
        5 => Vec3::new(1.0, 0.5, 0.0),
        _ => Vec3::ONE,
    }
}

/// Parse level text into a rectangular grid of tile codes
pub fn parse_tiles(text: &str) -> Result<Vec<Vec<u32>>, LevelError> {
    let mut grid: Vec<Vec<u32>> = Vec::new();
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let row_index = grid.len();
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(col, token)| {
                token.parse::<u32>().map_err(|_| LevelError::InvalidTile {
                    row: row_index,
                    col,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(first) = grid.first() {
            if row.len() != first.len() {
                return Err(LevelError::Ragged {
                    row: row_index,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        grid.push(row);
    }
    Ok(grid)
}

/// An ordered set of bricks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub bricks: Vec<Entity>,
}

impl Level {
    /// Build bricks from a tile grid spread evenly over `width` x `height`.
    ///
    /// Panics if the grid is not rectangular.
    pub fn from_tiles(tiles: &[Vec<u32>], width: f32, height: f32, textures: BrickTextures) -> Self {
        let Some(first) = tiles.first() else {
            return Self::default();
        };
        let columns = first.len();
        assert!(
            tiles.iter().all(|row| row.len() == columns),
            "level grid rows must all have {columns} columns"
        );
        if columns == 0 {
            return Self::default();
        }

        let unit = Vec2::new(width / columns as f32, height / tiles.len() as f32);
        let mut bricks = Vec::new();
        for (y, row) in tiles.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let position = unit * Vec2::new(x as f32, y as f32);
                let brick = match code {
                    0 => continue,
                    1 => Entity::new(position, unit, textures.solid).with_solid(true),
                    _ => Entity::new(position, unit, textures.block),
                };
                bricks.push(brick.with_color(tile_color(code)));
            }
        }

        Self { bricks }
    }

    /// Parse level text and build its bricks
    pub fn parse(text: &str, width: f32, height: f32, textures: BrickTextures) -> Result<Self, LevelError> {
        let tiles = parse_tiles(text)?;
        Ok(Self::from_tiles(&tiles, width, height, textures))
    }

    /// Read and build a level file
    pub fn load(
        path: impl AsRef<Path>,
        width: f32,
        height: f32,
        textures: BrickTextures,
    ) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let level = Self::parse(&text, width, height, textures)?;
        log::info!("Loaded level {} ({} bricks)", path.display(), level.bricks.len());
        Ok(level)
    }

    /// True once every destructible brick is destroyed
    pub fn is_completed(&self) -> bool {
        self.bricks.iter().all(|b| b.solid || b.destroyed)
    }

    /// Bring every brick back
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.destroyed = false;
        }
    }

    /// Bricks still in play
    pub fn active_bricks(&self) -> impl Iterator<Item = &Entity> {
        self.bricks.iter().filter(|b| !b.destroyed)
    }
}

/// Build the bundled levels for a play field of `width` x `height`
pub fn bundled_levels(width: f32, height: f32, textures: BrickTextures) -> Result<Vec<Level>, LevelError> {
    BUNDLED_LEVELS
        .iter()
        .map(|(name, text)| {
            let level = Level::parse(text, width, height, textures)?;
            log::info!("Level '{}': {} bricks", name, level.bricks.len());
            Ok(level)
        })
        .collect()
}
