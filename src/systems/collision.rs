//! Axis-separated collision against the tile grid
//!
//! X is moved and resolved completely, then Y using the corrected X.
//! Each axis scans the tiles the body overlaps after moving; on the first
//! solid tile the body is snapped to just outside that tile's face, the
//! velocity on that axis is zeroed and the covered span is recomputed before
//! the scan continues.
//!
//! The scan does not sweep the path between the old and new positions.
//! Tunneling is prevented by the driver clamping dt so one step moves less
//! than a tile.

use crate::core::config::WorldConfig;
use crate::core::coords::covered_tiles;

use super::actor::Actor;

/// Solidity lookup used by the resolver.
///
/// `TileGrid` implements this; tests use small hand-built grids.
pub trait TileQuery {
    fn world_height(&self) -> u32;

    /// May materialize storage, hence `&mut`
    fn is_solid(&mut self, x: i32, y: i32) -> bool;
}

/// What one resolution step hit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contacts {
    pub wall: bool,
    pub floor: bool,
    pub ceiling: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct CollisionResolver {
    tile_size: f32,
    epsilon: f32,
}

impl CollisionResolver {
    pub fn new(tile_size: f32, epsilon: f32) -> Self {
        Self { tile_size, epsilon }
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(config.tile_size, config.epsilon)
    }

    /// Move `actor` by its velocity over `dt` and push it out of solid tiles.
    pub fn resolve<Q: TileQuery + ?Sized>(&self, actor: &mut Actor, tiles: &mut Q, dt: f32) -> Contacts {
        let mut contacts = Contacts::default();
        actor.grounded = false;

        self.resolve_x(actor, tiles, dt, &mut contacts);
        self.resolve_y(actor, tiles, dt, &mut contacts);

        contacts
    }

    fn resolve_x<Q: TileQuery + ?Sized>(&self, actor: &mut Actor, tiles: &mut Q, dt: f32, contacts: &mut Contacts) {
        let t = self.tile_size;
        let height = tiles.world_height() as i32;

        actor.pos.x += actor.velocity.x * dt;

        let (mut left, mut right) = covered_tiles(actor.pos.x, actor.size.x, t);
        let (top, bottom) = covered_tiles(actor.pos.y, actor.size.y, t);

        let mut ty = top;
        while ty <= bottom {
            let mut tx = left;
            while tx <= right {
                if ty >= 0 && ty < height && tiles.is_solid(tx, ty) {
                    if actor.velocity.x > 0.0 {
                        actor.pos.x = tx as f32 * t - actor.size.x - self.epsilon;
                    } else if actor.velocity.x < 0.0 {
                        actor.pos.x = (tx + 1) as f32 * t + self.epsilon;
                    }
                    actor.velocity.x = 0.0;
                    contacts.wall = true;

                    (left, right) = covered_tiles(actor.pos.x, actor.size.x, t);
                }
                tx += 1;
            }
            ty += 1;
        }
    }

    fn resolve_y<Q: TileQuery + ?Sized>(&self, actor: &mut Actor, tiles: &mut Q, dt: f32, contacts: &mut Contacts) {
        let t = self.tile_size;
        let height = tiles.world_height() as i32;

        actor.pos.y += actor.velocity.y * dt;

        let (left, right) = covered_tiles(actor.pos.x, actor.size.x, t);
        let (top, mut bottom) = covered_tiles(actor.pos.y, actor.size.y, t);

        let mut ty = top;
        while ty <= bottom {
            let mut tx = left;
            while tx <= right {
                if ty >= 0 && ty < height && tiles.is_solid(tx, ty) {
                    if actor.velocity.y > 0.0 {
                        actor.pos.y = ty as f32 * t - actor.size.y - self.epsilon;
                        actor.grounded = true;
                        contacts.floor = true;
                    } else if actor.velocity.y < 0.0 {
                        actor.pos.y = (ty + 1) as f32 * t + self.epsilon;
                        contacts.ceiling = true;
                    }
                    actor.velocity.y = 0.0;

                    // Only the scan limit moves; rows already visited stay visited
                    bottom = covered_tiles(actor.pos.y, actor.size.y, t).1;
                }
                tx += 1;
            }
            ty += 1;
        }
    }
}
