use wasm_bindgen::prelude::*;

/// Per-step timings and chunk counters (zeros when perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) kinematics_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) chunks_loaded: u32,
    pub(super) chunks_generated: u32,
    pub(super) dt_clamped: bool,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn kinematics_ms(&self) -> f64 { self.kinematics_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    /// Chunks cached after the step
    #[wasm_bindgen(getter)]
    pub fn chunks_loaded(&self) -> u32 { self.chunks_loaded }
    /// Chunks generated during the step
    #[wasm_bindgen(getter)]
    pub fn chunks_generated(&self) -> u32 { self.chunks_generated }
    /// Whether the host's frame delta exceeded `max_dt`
    #[wasm_bindgen(getter)]
    pub fn dt_clamped(&self) -> bool { self.dt_clamped }
}
