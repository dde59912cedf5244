//! Chunk store - lazily generated vertical slices of the world
//!
//! A chunk is `world_height` rows by `chunk_size` columns, stored row-major.
//! Chunks are created on first access and then live as long as the store,
//! so edits persist in place. Nothing is evicted.

use std::collections::HashMap;

use crate::core::coords::{chunk_origin, ChunkIndex};
use crate::domain::Tile;

use super::terrain::TerrainField;

/// Fixed-size block of tiles. Shape never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Chunk {
    /// All-air chunk
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Air; width * height],
        }
    }

    /// Fill every column from the height field
    pub fn generate(index: ChunkIndex, terrain: &TerrainField, width: u32, height: u32) -> Self {
        let mut chunk = Self::empty(width as usize, height as usize);
        let start_x = chunk_origin(index, width);

        for local_x in 0..chunk.width {
            let ground = terrain.height_at(start_x + local_x as i32);
            for y in 0..chunk.height {
                let row = y as i32;
                let tile = if row > ground {
                    Tile::Dirt
                } else if row == ground {
                    Tile::Grass
                } else {
                    Tile::Air
                };
                chunk.tiles[y * chunk.width + local_x] = tile;
            }
        }

        chunk
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    #[inline]
    fn index(&self, local_x: usize, y: usize) -> usize {
        debug_assert!(
            local_x < self.width && y < self.height,
            "chunk cell out of bounds ({}, {}) for {}x{} chunk",
            local_x,
            y,
            self.width,
            self.height
        );
        y * self.width + local_x
    }

    /// Caller guarantees `local_x < width` and `y < height`
    #[inline]
    pub fn get(&self, local_x: usize, y: usize) -> Tile {
        self.tiles[self.index(local_x, y)]
    }

    #[inline]
    pub fn set(&mut self, local_x: usize, y: usize, tile: Tile) {
        let idx = self.index(local_x, y);
        self.tiles[idx] = tile;
    }

    /// Row-major tile slice
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

/// Cache of materialized chunks keyed by chunk index
pub struct ChunkStore {
    terrain: TerrainField,
    chunk_size: u32,
    world_height: u32,
    chunks: HashMap<ChunkIndex, Chunk>,
    generated_total: u64,
}

impl ChunkStore {
    pub fn new(terrain: TerrainField, chunk_size: u32, world_height: u32) -> Self {
        Self {
            terrain,
            chunk_size,
            world_height,
            chunks: HashMap::new(),
            generated_total: 0,
        }
    }

    #[inline]
    pub fn chunk_size(&self) -> u32 { self.chunk_size }

    #[inline]
    pub fn world_height(&self) -> u32 { self.world_height }

    pub fn terrain(&self) -> &TerrainField {
        &self.terrain
    }

    /// Cached chunk for `index`, generated first if absent
    pub fn get_chunk(&mut self, index: ChunkIndex) -> &Chunk {
        self.materialize(index)
    }

    /// Mutable access for edits; generates the chunk first if absent
    pub fn get_chunk_mut(&mut self, index: ChunkIndex) -> &mut Chunk {
        self.materialize(index)
    }

    /// Cached chunk without generating it
    pub fn peek(&self, index: ChunkIndex) -> Option<&Chunk> {
        self.chunks.get(&index)
    }

    pub fn is_loaded(&self, index: ChunkIndex) -> bool {
        self.chunks.contains_key(&index)
    }

    /// Drop a cached chunk. The next access regenerates it from the height
    /// field, so any edits made to it are lost. Returns whether it was loaded.
    pub fn invalidate(&mut self, index: ChunkIndex) -> bool {
        let removed = self.chunks.remove(&index).is_some();
        if removed {
            log::debug!("chunk {} invalidated", index);
        }
        removed
    }

    /// Number of chunks currently cached
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of generations performed over the store's lifetime
    pub fn generated_total(&self) -> u64 {
        self.generated_total
    }

    fn materialize(&mut self, index: ChunkIndex) -> &mut Chunk {
        let Self {
            terrain,
            chunk_size,
            world_height,
            chunks,
            generated_total,
        } = self;

        chunks.entry(index).or_insert_with(|| {
            *generated_total += 1;
            log::debug!("chunk {} generated (#{})", index, *generated_total);
            Chunk::generate(index, terrain, *chunk_size, *world_height)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TerrainParams;

    fn store(chunk_size: u32, world_height: u32) -> ChunkStore {
        ChunkStore::new(
            TerrainField::new(TerrainParams::default(), world_height),
            chunk_size,
            world_height,
        )
    }

    #[test]
    fn generated_columns_follow_height_field() {
        let mut store = store(32, 64);
        for index in [-3, -1, 0, 1, 7] {
            let chunk = store.get_chunk(index).clone();
            assert_eq!(chunk.width(), 32);
            assert_eq!(chunk.height(), 64);

            for local_x in 0..32 {
                let ground = store.terrain().height_at(index * 32 + local_x as i32) as usize;
                for y in 0..64 {
                    let expected = if y > ground {
                        Tile::Dirt
                    } else if y == ground {
                        Tile::Grass
                    } else {
                        Tile::Air
                    };
                    assert_eq!(chunk.get(local_x, y), expected, "chunk {index} col {local_x} row {y}");
                }
            }
        }
    }

    #[test]
    fn first_access_generates_once() {
        let mut store = store(8, 16);
        assert!(!store.is_loaded(-2));

        store.get_chunk(-2);
        store.get_chunk(-2);
        store.get_chunk_mut(-2);

        assert!(store.is_loaded(-2));
        assert_eq!(store.chunk_count(), 1);
        assert_eq!(store.generated_total(), 1);
    }

    #[test]
    fn fresh_store_regenerates_identical_chunks() {
        let mut a = store(16, 32);
        let mut b = store(16, 32);
        for index in -5..5 {
            assert_eq!(a.get_chunk(index), b.get_chunk(index));
        }
    }

    #[test]
    fn invalidate_discards_edits_and_regenerates_same_content() {
        let mut store = store(8, 16);
        let original = store.get_chunk(3).clone();

        store.get_chunk_mut(3).set(0, 0, Tile::Dirt);
        assert_ne!(store.get_chunk(3), &original);

        assert!(store.invalidate(3));
        assert!(!store.invalidate(3));
        assert!(store.peek(3).is_none());

        assert_eq!(store.get_chunk(3), &original);
        assert_eq!(store.generated_total(), 2);
    }
}
