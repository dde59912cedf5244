//! TileGrid - unbounded-X, bounded-Y tile access over the chunk store
//!
//! Every read and write goes through here. Rows outside `[0, world_height)`
//! are open sky: reads return air and writes are dropped.

use crate::core::config::WorldConfig;
use crate::core::coords::split_global_x;
use crate::domain::Tile;
use crate::systems::collision::TileQuery;

use super::chunks::ChunkStore;
use super::terrain::TerrainField;

pub struct TileGrid {
    store: ChunkStore,
    world_height: u32,
}

impl TileGrid {
    pub fn new(store: ChunkStore) -> Self {
        let world_height = store.world_height();
        Self { store, world_height }
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        let terrain = TerrainField::new(config.terrain.clone(), config.world_height);
        Self::new(ChunkStore::new(terrain, config.chunk_size, config.world_height))
    }

    #[inline]
    pub fn world_height(&self) -> u32 { self.world_height }

    #[inline]
    pub fn chunk_size(&self) -> u32 { self.store.chunk_size() }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    #[inline]
    pub fn row_in_bounds(&self, y: i32) -> bool {
        y >= 0 && (y as u32) < self.world_height
    }

    /// Tile at a world coordinate; generates the owning chunk on a miss
    pub fn get_tile(&mut self, global_x: i32, y: i32) -> Tile {
        if !self.row_in_bounds(y) {
            return Tile::Air;
        }
        let (chunk, local_x) = split_global_x(global_x, self.store.chunk_size());
        self.store.get_chunk(chunk).get(local_x, y as usize)
    }

    /// Tile at a world coordinate if its chunk is already loaded
    pub fn peek_tile(&self, global_x: i32, y: i32) -> Option<Tile> {
        if !self.row_in_bounds(y) {
            return Some(Tile::Air);
        }
        let (chunk, local_x) = split_global_x(global_x, self.store.chunk_size());
        self.store.peek(chunk).map(|c| c.get(local_x, y as usize))
    }

    /// Overwrite one tile. Returns `false` (and changes nothing) when the
    /// row is outside the world.
    pub fn set_tile(&mut self, global_x: i32, y: i32, tile: Tile) -> bool {
        if !self.row_in_bounds(y) {
            return false;
        }
        let (chunk, local_x) = split_global_x(global_x, self.store.chunk_size());
        self.store.get_chunk_mut(chunk).set(local_x, y as usize, tile);
        true
    }

    /// Copy a rectangle of tile ids into `out` (row-major, `width * height`
    /// bytes). Rows outside the world come back as air.
    pub fn read_region(&mut self, min_x: i32, min_y: i32, width: u32, height: u32, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(width as usize * height as usize);
        for dy in 0..height as i32 {
            let y = min_y + dy;
            for dx in 0..width as i32 {
                out.push(self.get_tile(min_x + dx, y).id());
            }
        }
    }
}

impl TileQuery for TileGrid {
    #[inline]
    fn world_height(&self) -> u32 {
        self.world_height
    }

    #[inline]
    fn is_solid(&mut self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).is_solid()
    }
}
