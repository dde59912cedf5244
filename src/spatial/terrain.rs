//! Terrain height field
//!
//! `height_at` is a pure function of the column: two sine layers give rolling
//! hills, a per-column integer hash adds jitter. No RNG state is consumed, so a
//! column regenerates identically in any chunk, in any order, in any process.

use crate::core::config::TerrainParams;

pub struct TerrainField {
    params: TerrainParams,
    world_height: u32,
}

impl TerrainField {
    pub fn new(params: TerrainParams, world_height: u32) -> Self {
        Self { params, world_height }
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Ground row for a global column, clamped to `[0, world_height - 1]`.
    ///
    /// Rows grow downward: the returned row holds grass, rows with a larger
    /// index are dirt, rows with a smaller index are air.
    pub fn height_at(&self, global_x: i32) -> i32 {
        let p = &self.params;
        let x = global_x as f64;

        let base = (self.world_height as f64 * p.base_fraction).floor();
        let hills = (x * p.hill_frequency).sin() * p.hill_amplitude;
        let ridges = (x * p.ridge_frequency).sin() * p.ridge_amplitude;
        let jitter = (column_noise(global_x, p.seed) - 0.5) * p.jitter_amplitude;

        let h = (base + hills + ridges + jitter).floor();
        let max_row = self.world_height as f64 - 1.0;
        h.clamp(0.0, max_row) as i32
    }
}

/// Deterministic hash of a column into [0, 1].
///
/// 32-bit avalanche mix (murmur3 finalizer constants) over `x ^ seed`.
#[inline]
pub fn column_noise(global_x: i32, seed: u32) -> f64 {
    let mut n = (global_x as u32) ^ seed;
    n = n.wrapping_mul(0x85eb_ca6b);
    n = (n ^ (n >> 15)).wrapping_mul(0xc2b2_ae35);
    n ^= n >> 16;
    n as f64 / u32::MAX as f64
}
