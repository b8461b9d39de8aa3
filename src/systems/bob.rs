//! Idle bob: a slow vertical sway and tilt layered on top of each body's
//! position. Visual only, physics never reads it.

use std::f32::consts::TAU;

use crate::domain::{Body, BobMotion};

/// Advance the bob phase by `dt` milliseconds.
#[inline]
pub fn advance_bob(body: &mut Body, bob: &BobMotion, dt: f32) {
    if bob.period_ms <= 0.0 {
        return;
    }
    body.bob_phase = (body.bob_phase + dt * TAU / bob.period_ms).rem_euclid(TAU);
}

/// `(vertical offset px, tilt rad)` for the current phase
#[inline]
pub fn bob_offset(body: &Body, bob: &BobMotion) -> (f32, f32) {
    let y = bob.amplitude * body.bob_phase.sin();
    // Quarter period behind the sway, so the nest leans both ways.
    let tilt = bob.tilt * body.bob_phase.cos();
    (y, tilt)
}
