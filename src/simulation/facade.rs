use wasm_bindgen::prelude::*;

use crate::domain::Tile;
use crate::systems::InputState;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

impl World {
    /// Native access to the wrapped core
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl World {
    /// Create a world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::default(),
        }
    }

    /// Create a world from a (possibly partial) JSON config
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    /// Effective config as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn load_physics(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_physics_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn tile_size(&self) -> f32 { self.core.config().tile_size }

    #[wasm_bindgen(getter)]
    pub fn world_height(&self) -> u32 { self.core.config().world_height }

    #[wasm_bindgen(getter)]
    pub fn chunk_size(&self) -> u32 { self.core.config().chunk_size }

    /// Advance one frame with this frame's input snapshot.
    /// `dt` is seconds since the previous frame; it is clamped internally.
    pub fn step(&mut self, dt: f32, move_left: bool, move_right: bool, jump: bool) {
        let input = InputState {
            move_left,
            move_right,
            jump,
            move_down: false,
        };
        self.core.step(&input, dt);
    }

    pub fn respawn(&mut self) {
        self.core.respawn();
    }

    // === PLAYER ===

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> f32 { self.core.player().pos.x }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> f32 { self.core.player().pos.y }

    #[wasm_bindgen(getter)]
    pub fn player_width(&self) -> f32 { self.core.player().size.x }

    #[wasm_bindgen(getter)]
    pub fn player_height(&self) -> f32 { self.core.player().size.y }

    #[wasm_bindgen(getter)]
    pub fn player_vx(&self) -> f32 { self.core.player().velocity.x }

    #[wasm_bindgen(getter)]
    pub fn player_vy(&self) -> f32 { self.core.player().velocity.y }

    #[wasm_bindgen(getter)]
    pub fn player_grounded(&self) -> bool { self.core.player().grounded }

    // === CAMERA ===

    #[wasm_bindgen(getter)]
    pub fn camera_x(&self) -> f32 { self.core.camera().x }

    #[wasm_bindgen(getter)]
    pub fn camera_y(&self) -> f32 { self.core.camera().y }

    /// Call on canvas resize
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.core.set_viewport_size(width, height);
    }

    // === TILES ===

    pub fn get_tile(&mut self, x: i32, y: i32) -> u8 {
        self.core.get_tile(x, y).id()
    }

    /// Ignores ids outside the palette and rows outside the world
    pub fn set_tile(&mut self, x: i32, y: i32, tile: u8) -> bool {
        match Tile::try_from(tile) {
            Ok(tile) => self.core.set_tile(x, y, tile),
            Err(_) => false,
        }
    }

    /// Left click: clear the tile under the cursor (canvas pixels)
    pub fn break_tile_at(&mut self, sx: f32, sy: f32) -> bool {
        self.core.break_tile_at(sx, sy)
    }

    /// Right click: place a tile under the cursor (canvas pixels)
    pub fn place_tile_at(&mut self, sx: f32, sy: f32, tile: u8) -> bool {
        match Tile::try_from(tile) {
            Ok(tile) => self.core.place_tile_at(sx, sy, tile),
            Err(_) => false,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn loaded_chunks(&self) -> usize { self.core.loaded_chunks() }

    // === RENDERING ===

    /// Fill the viewport buffer for the current camera.
    /// Returns the number of tiles (columns * rows).
    pub fn extract_viewport(&mut self) -> usize {
        self.core.extract_viewport()
    }

    /// Pointer to the viewport buffer (row-major tile ids)
    pub fn viewport_ptr(&self) -> *const u8 {
        self.core.viewport_ptr()
    }

    #[wasm_bindgen(getter)]
    pub fn viewport_min_x(&self) -> i32 { self.core.viewport_range().min_x }

    #[wasm_bindgen(getter)]
    pub fn viewport_min_y(&self) -> i32 { self.core.viewport_range().min_y }

    #[wasm_bindgen(getter)]
    pub fn viewport_columns(&self) -> u32 { self.core.viewport_range().columns() }

    #[wasm_bindgen(getter)]
    pub fn viewport_rows(&self) -> u32 { self.core.viewport_range().rows() }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
