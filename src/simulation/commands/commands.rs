use crate::core::coords::world_to_tile;
use crate::domain::Tile;

use super::WorldCore;

/// Screen pixel (relative to the canvas) to global tile coordinate
pub(super) fn screen_to_tile(world: &WorldCore, sx: f32, sy: f32) -> (i32, i32) {
    let (wx, wy) = world.camera.screen_to_world(sx, sy);
    let tile_size = world.config.tile_size;
    (world_to_tile(wx, tile_size), world_to_tile(wy, tile_size))
}

pub(super) fn set_tile(world: &mut WorldCore, x: i32, y: i32, tile: Tile) -> bool {
    let applied = world.grid.set_tile(x, y, tile);
    if applied {
        log::debug!("tile ({}, {}) set to {:?}", x, y, tile);
    }
    applied
}

/// Pointer "break" action: clear the tile under the cursor
pub(super) fn break_tile_at(world: &mut WorldCore, sx: f32, sy: f32) -> bool {
    let (x, y) = screen_to_tile(world, sx, sy);
    set_tile(world, x, y, Tile::Air)
}

/// Pointer "place" action
pub(super) fn place_tile_at(world: &mut WorldCore, sx: f32, sy: f32, tile: Tile) -> bool {
    let (x, y) = screen_to_tile(world, sx, sy);
    set_tile(world, x, y, tile)
}

/// Put the player back at the spawn point with zero velocity
pub(super) fn respawn(world: &mut WorldCore) {
    world.player = crate::systems::Actor::from_spawn(&world.config.spawn);
    world.camera.follow(&world.player);
}
