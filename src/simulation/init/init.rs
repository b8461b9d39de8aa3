use crate::core::Rng;
use crate::domain::{EngineConfig, Surface};

use super::clock::SimulationClock;
use super::perf_stats::PerfStats;
use super::render::RenderBuffers;
use super::scheduler::ManualScheduler;
use super::EngineCore;

pub(super) fn create_engine_core(width: f32, height: f32, config: EngineConfig) -> EngineCore {
    let surface = Surface::new(width, height);
    if !surface.is_valid() {
        console_warn!("engine created with unusable surface {}x{}", width, height);
    }

    let mut engine = EngineCore {
        rng: Rng::new(config.seed),
        config,
        surface,
        bodies: Vec::with_capacity(8),
        next_id: 1,
        visible: true,
        reduced_motion: false,
        clock: SimulationClock::new(),
        scheduler: Box::new(ManualScheduler),
        frame: 0,
        render: RenderBuffers::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };

    engine.sync_clock();
    engine
}
