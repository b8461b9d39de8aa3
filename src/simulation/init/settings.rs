use crate::core::Rng;
use crate::domain::EngineConfig;

use super::perf_stats::PerfStats;
use super::scheduler::FrameScheduler;
use super::EngineCore;

pub(super) fn set_config(world: &mut EngineCore, config: EngineConfig) -> Result<(), String> {
    config.validate()?;
    if config.seed != world.config.seed {
        world.rng = Rng::new(config.seed);
    }
    world.config = config;
    world.reseed_all();
    Ok(())
}

pub(super) fn set_config_json(world: &mut EngineCore, json: &str) -> Result<(), String> {
    let config = EngineConfig::from_json(json).map_err(|e| {
        console_warn!("rejected engine config: {}", e);
        e
    })?;
    set_config(world, config)
}

pub(super) fn enable_perf_metrics(world: &mut EngineCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn perf_stats(world: &EngineCore) -> PerfStats {
    world.perf_stats.clone()
}

/// Swap the frame scheduler. A tick already owed to the host is re-requested
/// from the new scheduler so the loop doesn't stall.
pub(super) fn set_scheduler(world: &mut EngineCore, scheduler: Box<dyn FrameScheduler>) {
    if world.clock.is_tick_pending() {
        world.scheduler.cancel_tick();
    }
    world.scheduler = scheduler;
    if world.clock.is_tick_pending() {
        world.scheduler.request_tick();
    }
}
