//! Engine - owns the surface, the bodies and the frame clock
//!
//! The engine only orchestrates. Motion lives in systems/:
//! - containment.rs keeps bodies on the surface
//! - collision.rs separates and bounces pairs
//! - egg_roll.rs moves eggs inside their nest
//! - layout.rs seeds positions and velocities
//!
//! Hosts talk to it through commands (resize, visibility, reduced motion)
//! and a pluggable frame scheduler, never through callbacks registered here.

use crate::core::Rng;
use crate::domain::{Body, EngineConfig, Surface};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "clock/scheduler.rs"]
mod scheduler;
#[path = "clock/clock.rs"]
mod clock;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render;
mod facade;

pub use clock::{ClockState, NOMINAL_FRAME_MS};
pub use commands::Command;
pub use facade::Engine;
pub use perf_stats::PerfStats;
pub use render::{BodyTransform, EggTransform, BODY_STRIDE, EGG_RANGE_STRIDE, EGG_STRIDE};
pub use scheduler::{FrameScheduler, ManualScheduler};

use clock::SimulationClock;
use render::RenderBuffers;

/// The simulation context: everything a tick reads or writes
pub struct EngineCore {
    config: EngineConfig,
    surface: Surface,
    bodies: Vec<Body>,
    next_id: u32,
    rng: Rng,

    // Host signals
    visible: bool,
    reduced_motion: bool,

    clock: SimulationClock,
    scheduler: Box<dyn FrameScheduler>,
    frame: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EngineCore {
    /// Create an engine for a surface of the given size with default config
    pub fn new(width: f32, height: f32) -> Self {
        init::create_engine_core(width, height, EngineConfig::default())
    }

    pub fn with_config(width: f32, height: f32, config: EngineConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_engine_core(width, height, config))
    }

    pub fn from_config_json(width: f32, height: f32, json: &str) -> Result<Self, String> {
        let config = EngineConfig::from_json(json)?;
        Ok(init::create_engine_core(width, height, config))
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn surface(&self) -> Surface { self.surface }

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn egg_count(&self) -> usize {
        self.bodies.iter().map(|b| b.eggs.len()).sum()
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn clock_state(&self) -> ClockState { self.clock.state() }

    pub fn is_running(&self) -> bool {
        self.clock.state() == ClockState::Running
    }

    pub fn is_visible(&self) -> bool { self.visible }

    pub fn reduced_motion(&self) -> bool { self.reduced_motion }

    /// Replace the configuration and reseed
    pub fn set_config(&mut self, config: EngineConfig) -> Result<(), String> {
        settings::set_config(self, config)
    }

    pub fn set_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::set_config_json(self, json)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::perf_stats(self)
    }

    pub fn set_scheduler(&mut self, scheduler: Box<dyn FrameScheduler>) {
        settings::set_scheduler(self, scheduler);
    }

    // === BODY API ===

    /// Add a body with a measured footprint (0x0 if not measured yet).
    /// Returns its id.
    pub fn add_body(&mut self, width: f32, height: f32, eggs: usize) -> u32 {
        commands::add_body(self, width, height, eggs)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        commands::remove_body(self, id)
    }

    pub fn set_body_size(&mut self, id: u32, width: f32, height: f32) -> bool {
        commands::set_body_size(self, id, width, height)
    }

    /// Change how many eggs the host shows in a body; eggs are rebuilt only
    /// when the count actually changes.
    pub fn set_egg_count(&mut self, id: u32, eggs: usize) -> bool {
        commands::set_egg_count(self, id, eggs)
    }

    // === HOST SIGNALS ===

    pub fn apply(&mut self, command: Command) {
        commands::apply(self, command);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.apply(Command::Resize { width, height });
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.apply(Command::SetSuspended(!visible));
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.apply(Command::SetReducedMotion(reduced));
    }

    pub fn reseed(&mut self) {
        self.apply(Command::Reseed);
    }

    // === FRAMES ===

    /// Frame callback from the host scheduler. Runs one tick if the clock is
    /// running and a tick was requested; returns whether it ran.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        step::on_frame(self, now_ms)
    }

    /// Manual stepping: one tick of `dt_ms` (clamped), ignoring the clock.
    pub fn step(&mut self, dt_ms: f32) {
        step::step(self, dt_ms);
    }

    // === RENDER OUTPUT ===

    pub fn body_transform(&self, index: usize) -> Option<BodyTransform> {
        self.render.body_transform(index)
    }

    pub fn egg_transforms(&self, index: usize) -> Vec<EggTransform> {
        self.render.egg_transforms(index)
    }

    pub fn body_buffer(&self) -> &[f32] { &self.render.bodies }

    pub fn egg_buffer(&self) -> &[f32] { &self.render.eggs }

    pub fn egg_range_buffer(&self) -> &[u32] { &self.render.egg_ranges }

    /// Published state as JSON (debug overlays, snapshots)
    pub fn snapshot_json(&self) -> String {
        render::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

// Private engine methods
impl EngineCore {
    /// Start or suspend the clock to match the host signals
    fn sync_clock(&mut self) {
        let want_running = self.visible && !self.reduced_motion && self.surface.is_valid();
        if want_running {
            if self.clock.start(self.scheduler.as_mut()) {
                console_log!("nest engine running");
            }
        } else if self.clock.suspend(self.scheduler.as_mut()) {
            console_log!(
                "nest engine suspended (visible={}, reduced_motion={})",
                self.visible,
                self.reduced_motion
            );
        }
    }

    fn reseed_all(&mut self) {
        crate::systems::seed(
            &mut self.bodies,
            &self.surface,
            &self.config,
            self.reduced_motion,
            &mut self.rng,
        );
        render::publish(self);
    }
}
