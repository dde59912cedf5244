//! Tileworld Engine - infinite-horizontal tile world with a platformer body
//!
//! Architecture:
//! - core/       - Configuration, errors, coordinate math
//! - domain/     - Tile palette
//! - spatial/    - Height field, chunk cache, tile grid
//! - systems/    - Actor, kinematics, collision
//! - simulation/ - Frame driver, camera, edits, viewport, WASM facade
//!
//! The host (canvas, input, animation loop) lives in JS and drives
//! `World` once per frame.

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Tileworld WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::config::WorldConfig;
pub use domain::tiles::Tile;
pub use simulation::{World, WorldCore};

// Export palette constants for JS
#[wasm_bindgen]
pub fn tile_air() -> u8 { domain::tiles::TILE_AIR }
#[wasm_bindgen]
pub fn tile_dirt() -> u8 { domain::tiles::TILE_DIRT }
#[wasm_bindgen]
pub fn tile_grass() -> u8 { domain::tiles::TILE_GRASS }

/// 0xRRGGBB fill for a tile id; sky color for air and unknown ids
#[wasm_bindgen]
pub fn tile_color(id: u8) -> u32 {
    Tile::try_from(id)
        .ok()
        .and_then(Tile::color)
        .unwrap_or(domain::tiles::SKY_COLOR)
}
