//! Spatial layer: height field, chunk cache, tile grid facade

pub mod chunks;
pub mod grid;
pub mod terrain;

pub use chunks::{Chunk, ChunkStore};
pub use grid::TileGrid;
pub use terrain::TerrainField;
