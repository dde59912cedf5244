use crate::core::config::WorldConfig;
use crate::spatial::TileGrid;
use crate::systems::{Actor, CollisionResolver};

use super::camera::Camera;
use super::perf_stats::PerfStats;
use super::render_extract::ViewportBuffer;
use super::WorldCore;

/// Default canvas size until the host reports the real one
const DEFAULT_VIEW_WIDTH: f32 = 800.0;
const DEFAULT_VIEW_HEIGHT: f32 = 600.0;

pub(super) fn create_world_core(config: WorldConfig) -> WorldCore {
    let player = Actor::from_spawn(&config.spawn);
    let mut camera = Camera::new(DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT);
    camera.follow(&player);

    log::info!(
        "world created: chunk width {}, {} rows of {}px tiles, seed {:#x}",
        config.chunk_size,
        config.world_height,
        config.tile_size,
        config.terrain.seed
    );

    WorldCore {
        grid: TileGrid::from_config(&config),
        resolver: CollisionResolver::from_config(&config),
        player,
        camera,
        viewport: ViewportBuffer::new(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}
