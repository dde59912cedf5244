//! World - frame driver for the tile world
//!
//! The JS host calls, once per animation frame and in this order:
//! `step(input, dt)` (camera follow, kinematics, collision), then
//! `extract_viewport()` and draws the tiles and the player.
//!
//! Single-threaded: the chunk cache and the player are only touched from
//! inside these calls, one frame at a time.

use crate::core::config::WorldConfig;
use crate::core::error::ConfigError;
use crate::domain::Tile;
use crate::spatial::TileGrid;
use crate::systems::{Actor, CollisionResolver, InputState};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "camera/camera.rs"]
pub mod camera;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use camera::{Camera, TileRange};
pub use facade::World;
pub use perf_stats::PerfStats;

use render_extract::ViewportBuffer;

/// The simulation world
pub struct WorldCore {
    config: WorldConfig,
    grid: TileGrid,
    resolver: CollisionResolver,
    player: Actor,
    camera: Camera,
    viewport: ViewportBuffer,

    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl WorldCore {
    /// Create a world. `config` is trusted; use [`WorldCore::from_json`] for
    /// host-supplied settings.
    pub fn new(config: WorldConfig) -> Self {
        init::create_world_core(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(WorldConfig::from_json(json)?))
    }

    pub fn config(&self) -> &WorldConfig { &self.config }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn player(&self) -> &Actor { &self.player }

    /// Direct access for hosts (and tests) that script the player
    pub fn player_mut(&mut self) -> &mut Actor { &mut self.player }

    pub fn camera(&self) -> &Camera { &self.camera }

    pub fn grid(&self) -> &TileGrid { &self.grid }

    pub fn grid_mut(&mut self) -> &mut TileGrid { &mut self.grid }

    /// Advance one frame. `dt` is the raw host delta in seconds; it is
    /// clamped to `physics.max_dt` here.
    pub fn step(&mut self, input: &InputState, dt: f32) {
        step::step(self, input, dt);
    }

    pub fn get_tile(&mut self, x: i32, y: i32) -> Tile {
        self.grid.get_tile(x, y)
    }

    /// Returns `false` when the row is outside the world
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        commands::set_tile(self, x, y, tile)
    }

    /// Canvas pixel to global tile coordinate through the camera
    pub fn screen_to_tile(&self, sx: f32, sy: f32) -> (i32, i32) {
        commands::screen_to_tile(self, sx, sy)
    }

    pub fn break_tile_at(&mut self, sx: f32, sy: f32) -> bool {
        commands::break_tile_at(self, sx, sy)
    }

    pub fn place_tile_at(&mut self, sx: f32, sy: f32, tile: Tile) -> bool {
        commands::place_tile_at(self, sx, sy, tile)
    }

    pub fn respawn(&mut self) {
        commands::respawn(self);
    }

    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        settings::set_viewport_size(self, width, height);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn load_physics_json(&mut self, json: &str) -> Result<(), ConfigError> {
        settings::load_physics_json(self, json)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Refill the viewport buffer for the current camera
    pub fn extract_viewport(&mut self) -> usize {
        render_extract::extract_viewport(self)
    }

    /// Tile range covered by the last `extract_viewport`
    pub fn viewport_range(&self) -> TileRange {
        self.viewport.range
    }

    pub fn viewport_tiles(&self) -> &[u8] {
        &self.viewport.tiles
    }

    /// Pointer to the viewport buffer (for JS rendering)
    pub fn viewport_ptr(&self) -> *const u8 {
        render_extract::viewport_ptr(self)
    }

    /// Chunks currently cached
    pub fn loaded_chunks(&self) -> usize {
        self.grid.store().chunk_count()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
