use serde::{Deserialize, Serialize};

use crate::core::coords::world_to_tile;
use crate::systems::Actor;

/// Inclusive tile rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRange {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl TileRange {
    pub fn columns(&self) -> u32 {
        if self.max_x < self.min_x { 0 } else { (self.max_x - self.min_x + 1) as u32 }
    }

    /// Zero when the view is entirely above or below the world
    pub fn rows(&self) -> u32 {
        if self.max_y < self.min_y { 0 } else { (self.max_y - self.min_y + 1) as u32 }
    }
}

/// View rectangle in world units. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Put the actor's top-left corner at the middle of the view
    pub fn follow(&mut self, actor: &Actor) {
        self.x = actor.pos.x - self.width / 2.0;
        self.y = actor.pos.y - self.height / 2.0;
    }

    /// Screen pixel to world position
    #[inline]
    pub fn screen_to_world(&self, sx: f32, sy: f32) -> (f32, f32) {
        (sx + self.x, sy + self.y)
    }

    /// Tiles the renderer must draw: one column of slack on each side,
    /// rows clamped to the world.
    pub fn visible_tiles(&self, tile_size: f32, world_height: u32) -> TileRange {
        TileRange {
            min_x: world_to_tile(self.x, tile_size) - 1,
            max_x: world_to_tile(self.x + self.width, tile_size) + 1,
            min_y: world_to_tile(self.y, tile_size).max(0),
            max_y: world_to_tile(self.y + self.height, tile_size).min(world_height as i32 - 1),
        }
    }
}
