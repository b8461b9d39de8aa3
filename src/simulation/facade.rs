use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::perf_timer::now_ms;
use super::scheduler::FrameScheduler;
use super::EngineCore;

/// Scheduler backed by host JS functions, e.g.
/// `() => { handle = requestAnimationFrame(t => engine.frame_at(t)) }`.
struct JsScheduler {
    request: js_sys::Function,
    cancel: Option<js_sys::Function>,
}

impl FrameScheduler for JsScheduler {
    fn request_tick(&mut self) {
        if let Err(err) = self.request.call0(&JsValue::NULL) {
            console_warn!("frame request failed: {:?}", err);
        }
    }

    fn cancel_tick(&mut self) {
        if let Some(cancel) = &self.cancel {
            if let Err(err) = cancel.call0(&JsValue::NULL) {
                console_warn!("frame cancel failed: {:?}", err);
            }
        }
    }
}

#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine for a surface of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: EngineCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: f32, height: f32, config_json: String) -> Result<Engine, JsValue> {
        let core = EngineCore::from_config_json(width, height, &config_json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.surface().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.surface().height }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn egg_count(&self) -> usize { self.core.egg_count() }

    pub fn set_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .set_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    /// Install the host's frame hooks. `request` must eventually call
    /// `frame_at(now)`; `cancel` drops a pending request.
    #[wasm_bindgen(js_name = setScheduler)]
    pub fn set_scheduler(&mut self, request: js_sys::Function, cancel: Option<js_sys::Function>) {
        self.core.set_scheduler(Box::new(JsScheduler { request, cancel }));
    }

    // === BODY API ===

    /// Add a body with its measured footprint. Returns the body ID
    pub fn add_body(&mut self, width: f32, height: f32, eggs: u32) -> u32 {
        self.core.add_body(width, height, eggs as usize)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id)
    }

    pub fn set_body_size(&mut self, id: u32, width: f32, height: f32) -> bool {
        self.core.set_body_size(id, width, height)
    }

    pub fn set_egg_count(&mut self, id: u32, eggs: u32) -> bool {
        self.core.set_egg_count(id, eggs as usize)
    }

    // === HOST SIGNALS ===

    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    #[wasm_bindgen(js_name = setVisible)]
    pub fn set_visible(&mut self, visible: bool) {
        self.core.set_visible(visible);
    }

    #[wasm_bindgen(js_name = setReducedMotion)]
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.core.set_reduced_motion(reduced);
    }

    pub fn reseed(&mut self) {
        self.core.reseed();
    }

    // === FRAMES ===

    /// Frame callback (pass the `requestAnimationFrame` timestamp).
    /// Returns false when the engine was not expecting a frame.
    pub fn frame_at(&mut self, now_ms: f64) -> bool {
        self.core.on_frame(now_ms)
    }

    /// Frame callback using the engine's own clock
    pub fn tick(&mut self) -> bool {
        self.core.on_frame(now_ms())
    }

    /// Advance by `dt_ms` regardless of clock state
    pub fn step(&mut self, dt_ms: f32) {
        self.core.step(dt_ms);
    }

    // === RENDER OUTPUT ===

    pub fn body_transforms_ptr(&self) -> *const f32 {
        self.core.body_buffer().as_ptr()
    }

    pub fn body_transforms_len(&self) -> usize {
        self.core.body_buffer().len()
    }

    pub fn egg_transforms_ptr(&self) -> *const f32 {
        self.core.egg_buffer().as_ptr()
    }

    pub fn egg_transforms_len(&self) -> usize {
        self.core.egg_buffer().len()
    }

    pub fn egg_ranges_ptr(&self) -> *const u32 {
        self.core.egg_range_buffer().as_ptr()
    }

    pub fn egg_ranges_len(&self) -> usize {
        self.core.egg_range_buffer().len()
    }

    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }
}

impl Engine {
    /// Native hosts and tests reach the core directly.
    pub fn core(&self) -> &EngineCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut EngineCore {
        &mut self.core
    }
}
