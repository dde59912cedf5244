//! Core functionality: configuration, errors, coordinate math

pub mod config;
pub mod coords;
pub mod error;

pub use config::{PhysicsConfig, SpawnConfig, TerrainParams, WorldConfig};
pub use coords::ChunkIndex;
pub use error::ConfigError;
