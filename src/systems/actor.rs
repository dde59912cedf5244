//! Actor - the player's axis-aligned body
//!
//! Position is the top-left corner in world units. Kinematics writes the
//! velocity, the collision resolver writes position, velocity and `grounded`.

use serde::{Deserialize, Serialize};

use crate::core::config::SpawnConfig;

/// 2D vector for physics calculations
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height, both positive
    pub size: Vec2,
    /// Units per second
    pub velocity: Vec2,
    /// Set when the last vertical resolution landed on a solid tile
    pub grounded: bool,
}

impl Actor {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            velocity: Vec2::zero(),
            grounded: false,
        }
    }

    pub fn from_spawn(spawn: &SpawnConfig) -> Self {
        Self::new(spawn.x, spawn.y, spawn.width, spawn.height)
    }

    #[inline]
    pub fn left(&self) -> f32 { self.pos.x }

    #[inline]
    pub fn right(&self) -> f32 { self.pos.x + self.size.x }

    #[inline]
    pub fn top(&self) -> f32 { self.pos.y }

    #[inline]
    pub fn bottom(&self) -> f32 { self.pos.y + self.size.y }
}
