use serde::Serialize;

use super::scheduler::FrameScheduler;

/// Elapsed time assumed for the first frame after (re)starting
pub const NOMINAL_FRAME_MS: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ClockState {
    Running,
    Suspended,
}

/// Two-state frame clock. Owns nothing but timing; the engine decides when
/// to start or suspend it.
#[derive(Debug)]
pub(crate) struct SimulationClock {
    state: ClockState,
    last_frame_ms: Option<f64>,
    tick_pending: bool,
}

impl SimulationClock {
    pub(crate) fn new() -> Self {
        Self {
            state: ClockState::Suspended,
            last_frame_ms: None,
            tick_pending: false,
        }
    }

    pub(crate) fn state(&self) -> ClockState {
        self.state
    }

    pub(crate) fn is_tick_pending(&self) -> bool {
        self.tick_pending
    }

    /// Suspended -> Running. Returns false if already running.
    pub(crate) fn start(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.state == ClockState::Running {
            return false;
        }
        self.state = ClockState::Running;
        self.last_frame_ms = None;
        self.tick_pending = true;
        scheduler.request_tick();
        true
    }

    /// Running -> Suspended. Returns false if already suspended.
    pub(crate) fn suspend(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.state == ClockState::Suspended {
            return false;
        }
        self.state = ClockState::Suspended;
        if self.tick_pending {
            scheduler.cancel_tick();
        }
        self.tick_pending = false;
        self.last_frame_ms = None;
        true
    }

    /// Consume the pending tick, if the clock is running and has one.
    pub(crate) fn take_tick(&mut self) -> bool {
        if self.state != ClockState::Running || !self.tick_pending {
            return false;
        }
        self.tick_pending = false;
        true
    }

    /// Clamped milliseconds since the previous frame
    pub(crate) fn elapsed(&mut self, now_ms: f64, max_frame_ms: f32) -> f32 {
        let dt = match self.last_frame_ms {
            Some(last) if now_ms.is_finite() => (now_ms - last) as f32,
            _ => NOMINAL_FRAME_MS,
        };
        if now_ms.is_finite() {
            self.last_frame_ms = Some(now_ms);
        }
        clamp_frame(dt, max_frame_ms)
    }

    /// Ask the host for the next frame
    pub(crate) fn schedule_next(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.state != ClockState::Running || self.tick_pending {
            return;
        }
        self.tick_pending = true;
        scheduler.request_tick();
    }
}

/// Clamp a frame step to `[0, max_frame_ms]`; NaN becomes 0.
#[inline]
pub(crate) fn clamp_frame(dt: f32, max_frame_ms: f32) -> f32 {
    if dt.is_nan() {
        return 0.0;
    }
    dt.clamp(0.0, max_frame_ms.max(0.0))
}
