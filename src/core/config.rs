//! World configuration
//!
//! Every component receives its dimensions and tuning values from here at
//! construction time. Nothing reads ambient constants, so tests can build
//! tiny synthetic worlds (e.g. 4-tile chunks, 8-row worlds).
//!
//! All structs use `#[serde(default)]`: a JSON document only needs to name
//! the fields it wants to override.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default tile edge length in world units (pixels)
pub const DEFAULT_TILE_SIZE: f32 = 32.0;
/// Default chunk width in tiles
pub const DEFAULT_CHUNK_SIZE: u32 = 32;
/// Default world height in tiles
pub const DEFAULT_WORLD_HEIGHT: u32 = 64;
/// Default collision skin
pub const DEFAULT_EPSILON: f32 = 0.001;

/// Upper bound on `chunk_size * world_height` tiles per chunk
pub const MAX_CHUNK_TILES: u64 = 1 << 24;

/// Parameters of the height function
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Mixed into the column hash; same seed => same world
    pub seed: u32,
    /// Resting ground level as a fraction of world height
    pub base_fraction: f64,
    pub hill_amplitude: f64,
    pub hill_frequency: f64,
    pub ridge_amplitude: f64,
    pub ridge_frequency: f64,
    /// Peak-to-peak range of the per-column hash jitter
    pub jitter_amplitude: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 0x9e37_79b9,
            base_fraction: 0.75,
            hill_amplitude: 6.0,
            hill_frequency: 0.05,
            ridge_amplitude: 3.0,
            ridge_frequency: 0.013,
            jitter_amplitude: 4.0,
        }
    }
}

/// Actor motion tuning (world units per second)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration, units/s²
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_speed: f32,
    /// Largest frame delta the driver will integrate, seconds
    pub max_dt: f32,
    /// Optional cap on downward speed. `None` keeps free fall unbounded.
    pub max_fall_speed: Option<f32>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            move_speed: 220.0,
            jump_speed: 520.0,
            max_dt: 0.033,
            max_fall_speed: None,
        }
    }
}

/// Where and how big the player starts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            width: 32.0,
            height: 48.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub tile_size: f32,
    pub chunk_size: u32,
    pub world_height: u32,
    pub epsilon: f32,
    pub terrain: TerrainParams,
    pub physics: PhysicsConfig,
    pub spawn: SpawnConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            world_height: DEFAULT_WORLD_HEIGHT,
            epsilon: DEFAULT_EPSILON,
            terrain: TerrainParams::default(),
            physics: PhysicsConfig::default(),
            spawn: SpawnConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "world config loaded: tile={} chunk={} height={} seed={:#x}",
            config.tile_size,
            config.chunk_size,
            config.world_height,
            config.terrain.seed
        );
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with no maps keyed by non-strings; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(ConfigError::invalid("tile_size", "must be a positive finite number"));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::invalid("chunk_size", "must be at least 1"));
        }
        if self.chunk_size > i32::MAX as u32 {
            return Err(ConfigError::invalid("chunk_size", "must fit in i32"));
        }
        if self.world_height == 0 {
            return Err(ConfigError::invalid("world_height", "must be at least 1"));
        }
        if self.world_height > i32::MAX as u32 {
            return Err(ConfigError::invalid("world_height", "must fit in i32"));
        }
        if self.chunk_size as u64 * self.world_height as u64 > MAX_CHUNK_TILES {
            return Err(ConfigError::invalid("chunk_size", "chunk_size * world_height exceeds 2^24 tiles"));
        }
        if !(self.epsilon > 0.0 && self.epsilon < self.tile_size) {
            return Err(ConfigError::invalid("epsilon", "must be in (0, tile_size)"));
        }

        let p = &self.physics;
        if !(p.max_dt.is_finite() && p.max_dt > 0.0) {
            return Err(ConfigError::invalid("physics.max_dt", "must be a positive finite number"));
        }
        for (field, value) in [
            ("physics.gravity", p.gravity),
            ("physics.move_speed", p.move_speed),
            ("physics.jump_speed", p.jump_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }
        if let Some(cap) = p.max_fall_speed {
            if !(cap.is_finite() && cap > 0.0) {
                return Err(ConfigError::invalid("physics.max_fall_speed", "must be positive"));
            }
        }

        let s = &self.spawn;
        if !(s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0) {
            return Err(ConfigError::invalid("spawn", "actor size must be positive"));
        }
        if !(s.x.is_finite() && s.y.is_finite()) {
            return Err(ConfigError::invalid("spawn", "position must be finite"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WorldConfig::from_json(r#"{ "chunk_size": 8, "physics": { "gravity": 900 } }"#)
            .expect("partial config should parse");

        assert_eq!(config.chunk_size, 8);
        assert_eq!(config.physics.gravity, 900.0);
        assert_eq!(config.physics.jump_speed, 520.0);
        assert_eq!(config.world_height, DEFAULT_WORLD_HEIGHT);
        assert_eq!(config.terrain, TerrainParams::default());
    }

    #[test]
    fn empty_object_is_default() {
        let config = WorldConfig::from_json("{}").unwrap();
        assert_eq!(config, WorldConfig::default());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = WorldConfig::from_json("{ chunk_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = WorldConfig::from_json(r#"{ "chunk_size": 0 }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "chunk_size"),
            other => panic!("unexpected error: {other}"),
        }
    }

    fn invalid_field(json: &str) -> &'static str {
        match WorldConfig::from_json(json).unwrap_err() {
            ConfigError::Invalid { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn oversized_world_height_is_rejected() {
        assert_eq!(invalid_field(r#"{ "world_height": 3000000000 }"#), "world_height");
    }

    #[test]
    fn oversized_chunk_size_is_rejected() {
        assert_eq!(invalid_field(r#"{ "chunk_size": 3000000000 }"#), "chunk_size");
        assert_eq!(
            invalid_field(r#"{ "world_height": 3000000000, "chunk_size": 3000000000 }"#),
            "chunk_size"
        );
    }

    #[test]
    fn chunk_area_is_capped() {
        // Each fits in i32, but the chunk would hold 2^31 tiles
        assert_eq!(invalid_field(r#"{ "chunk_size": 65536, "world_height": 32768 }"#), "chunk_size");

        let at_cap = WorldConfig {
            chunk_size: 1 << 12,
            world_height: 1 << 12,
            ..WorldConfig::default()
        };
        assert!(at_cap.validate().is_ok());
    }

    #[test]
    fn infinite_spawn_size_is_rejected() {
        let mut config = WorldConfig::default();
        config.spawn.width = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = WorldConfig::default();
        config.spawn.height = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn epsilon_must_be_smaller_than_tile() {
        let config = WorldConfig {
            tile_size: 1.0,
            epsilon: 2.0,
            ..WorldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_round_trip_preserves_fall_cap() {
        let mut config = WorldConfig::default();
        config.physics.max_fall_speed = Some(1200.0);

        let parsed = WorldConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed.physics.max_fall_speed, Some(1200.0));
    }
}
