pub mod tiles;

pub use tiles::{Tile, TileId};
