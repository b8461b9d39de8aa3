/// Host hook that arranges for the next frame callback.
///
/// The engine calls `request_tick` at most once per pending frame; the host
/// answers by calling `EngineCore::on_frame` (animation frame, timer, or a
/// test loop). `cancel_tick` is called when the clock suspends.
pub trait FrameScheduler {
    fn request_tick(&mut self);

    fn cancel_tick(&mut self) {}
}

/// Scheduler for hosts that drive frames themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualScheduler;

impl FrameScheduler for ManualScheduler {
    fn request_tick(&mut self) {}
}
