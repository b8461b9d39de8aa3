use wasm_bindgen::prelude::*;

/// Timing and counters for the last tick (zeros while perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) contain_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) eggs_ms: f64,
    pub(super) publish_ms: f64,
    pub(super) pairs_checked: u32,
    pub(super) contacts: u32,
    pub(super) impulses: u32,
    pub(super) wall_hits: u32,
    pub(super) egg_bounces: u32,
    pub(super) body_count: u32,
    pub(super) egg_count: u32,
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
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn contain_ms(&self) -> f64 { self.contain_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn eggs_ms(&self) -> f64 { self.eggs_ms }
    #[wasm_bindgen(getter)]
    pub fn publish_ms(&self) -> f64 { self.publish_ms }

    #[wasm_bindgen(getter)]
    pub fn pairs_checked(&self) -> u32 { self.pairs_checked }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn egg_bounces(&self) -> u32 { self.egg_bounces }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn egg_count(&self) -> u32 { self.egg_count }
}
