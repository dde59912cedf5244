//! Tile palette
//!
//! A closed set of materials stored as one byte per cell. The numeric
//! values are part of the JS contract (viewport buffers carry raw bytes).

use serde::{Deserialize, Serialize};

pub type TileId = u8;

pub const TILE_AIR: TileId = 0;
pub const TILE_DIRT: TileId = 1;
pub const TILE_GRASS: TileId = 2;

/// Background color the renderer clears to (sky blue)
pub const SKY_COLOR: u32 = 0x87CEEB;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Air = TILE_AIR,
    Dirt = TILE_DIRT,
    Grass = TILE_GRASS,
}

impl Tile {
    pub const ALL: [Tile; 3] = [Tile::Air, Tile::Dirt, Tile::Grass];

    #[inline]
    pub fn id(self) -> TileId {
        self as TileId
    }

    /// Anything that is not air blocks movement
    #[inline]
    pub fn is_solid(self) -> bool {
        self != Tile::Air
    }

    /// 0xRRGGBB fill color; `None` for air (drawn as sky)
    pub fn color(self) -> Option<u32> {
        match self {
            Tile::Air => None,
            Tile::Dirt => Some(0xA0522D),
            Tile::Grass => Some(0x228B22),
        }
    }
}

impl TryFrom<TileId> for Tile {
    type Error = TileId;

    fn try_from(id: TileId) -> Result<Self, Self::Error> {
        match id {
            TILE_AIR => Ok(Tile::Air),
            TILE_DIRT => Ok(Tile::Dirt),
            TILE_GRASS => Ok(Tile::Grass),
            other => Err(other),
        }
    }
}

impl From<Tile> for TileId {
    fn from(tile: Tile) -> Self {
        tile.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_palette() {
        for tile in Tile::ALL {
            assert_eq!(Tile::try_from(tile.id()), Ok(tile));
        }
        assert_eq!(Tile::try_from(3), Err(3));
        assert_eq!(Tile::try_from(255), Err(255));
    }

    #[test]
    fn only_air_is_passable() {
        assert!(!Tile::Air.is_solid());
        assert!(Tile::Dirt.is_solid());
        assert!(Tile::Grass.is_solid());
        assert_eq!(Tile::Air.color(), None);
    }
}
