use crate::core::config::{PhysicsConfig, WorldConfig};
use crate::core::error::ConfigError;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f32) {
    if gravity.is_finite() {
        world.config.physics.gravity = gravity;
    }
}

pub(super) fn set_viewport_size(world: &mut WorldCore, width: f32, height: f32) {
    world.camera.resize(width, height);
    world.camera.follow(&world.player);
}

/// Replace the physics tuning from a JSON fragment. Tile and chunk geometry
/// are fixed once the world exists, so only `physics` is accepted here.
pub(super) fn load_physics_json(world: &mut WorldCore, json: &str) -> Result<(), ConfigError> {
    let physics: PhysicsConfig = serde_json::from_str(json)?;
    let candidate = WorldConfig {
        physics,
        ..world.config.clone()
    };
    candidate.validate()?;
    world.config = candidate;
    log::info!("physics updated: {:?}", world.config.physics);
    Ok(())
}
