//! Actor systems: velocity integration and tile collision

pub mod actor;
pub mod collision;
pub mod kinematics;

pub use actor::{Actor, Vec2};
pub use collision::{CollisionResolver, Contacts, TileQuery};
pub use kinematics::InputState;
