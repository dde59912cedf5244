//! Coordinate conversions
//!
//! Global tile X is an unbounded signed integer. Splitting it into
//! (chunk index, local column) must use floor division and a non-negative
//! modulo, otherwise x = -1 lands in chunk 0 instead of chunk -1.

/// Position of a chunk along the horizontal axis.
/// Chunk `i` covers global columns `[i * chunk_size, (i + 1) * chunk_size)`.
pub type ChunkIndex = i32;

/// Split a global column into its chunk index and column inside the chunk
#[inline]
pub fn split_global_x(global_x: i32, chunk_size: u32) -> (ChunkIndex, usize) {
    let size = chunk_size as i32;
    (global_x.div_euclid(size), global_x.rem_euclid(size) as usize)
}

/// First global column of a chunk
#[inline]
pub fn chunk_origin(index: ChunkIndex, chunk_size: u32) -> i32 {
    index * chunk_size as i32
}

/// Tile containing a world-space coordinate
#[inline]
pub fn world_to_tile(v: f32, tile_size: f32) -> i32 {
    (v / tile_size).floor() as i32
}

/// Inclusive tile span covered by `[start, start + extent)`.
///
/// The far edge is pulled in by one unit so a body whose edge sits exactly
/// on a tile boundary does not count the next tile as occupied.
#[inline]
pub fn covered_tiles(start: f32, extent: f32, tile_size: f32) -> (i32, i32) {
    (
        world_to_tile(start, tile_size),
        world_to_tile(start + extent - 1.0, tile_size),
    )
}
