use super::camera::TileRange;
use super::WorldCore;

/// Tile ids for the current view, row-major, for the JS renderer
pub(crate) struct ViewportBuffer {
    pub(crate) range: TileRange,
    pub(crate) tiles: Vec<u8>,
}

impl ViewportBuffer {
    pub(crate) fn new() -> Self {
        Self {
            range: TileRange::default(),
            tiles: Vec::new(),
        }
    }
}

/// Refill the viewport buffer from the camera. Generates any chunk that
/// scrolled into view. Returns the number of tiles written.
pub(super) fn extract_viewport(world: &mut WorldCore) -> usize {
    let range = world
        .camera
        .visible_tiles(world.config.tile_size, world.config.world_height);

    world.viewport.range = range;
    world.grid.read_region(
        range.min_x,
        range.min_y,
        range.columns(),
        range.rows(),
        &mut world.viewport.tiles,
    );

    world.viewport.tiles.len()
}

pub(super) fn viewport_ptr(world: &WorldCore) -> *const u8 {
    world.viewport.tiles.as_ptr()
}
