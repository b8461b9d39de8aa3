//! Boundary container - keeps every body's footprint inside the surface.
//!
//! Reflection by clamping, not a derived bounce: whatever the step size, a
//! processed body never renders past an edge.

use crate::domain::{Body, Surface};

/// Clamp one axis. Returns the corrected (center, velocity).
#[inline]
fn contain_axis(center: f32, velocity: f32, half: f32, dim: f32) -> (f32, f32) {
    if half * 2.0 >= dim {
        // Wider than the surface: pin to the middle so neither edge wins.
        return (dim * 0.5, 0.0);
    }
    if center - half < 0.0 {
        return (half, velocity.abs());
    }
    if center + half > dim {
        return (dim - half, -velocity.abs());
    }
    (center, velocity)
}

/// Contain a single body. Returns true if it touched an edge.
pub fn contain(body: &mut Body, surface: &Surface) -> bool {
    if !body.is_measured() || !surface.is_valid() {
        return false;
    }

    let before = (body.position, body.velocity);

    let (x, vx) = contain_axis(body.position.x, body.velocity.x, body.half_extent.x, surface.width);
    let (y, vy) = contain_axis(body.position.y, body.velocity.y, body.half_extent.y, surface.height);

    body.position.x = x;
    body.position.y = y;
    body.velocity.x = vx;
    body.velocity.y = vy;

    before != (body.position, body.velocity)
}

/// Contain every body. Returns how many touched an edge.
pub fn contain_all(bodies: &mut [Body], surface: &Surface) -> u32 {
    let mut hits = 0;
    for body in bodies.iter_mut() {
        if contain(body, surface) {
            hits += 1;
        }
    }
    hits
}

/// Position-only clamp for bodies a collision pushed past an edge. Velocity
/// is left for the next containment pass to reflect.
pub fn clamp_inside(body: &mut Body, surface: &Surface) -> bool {
    if !body.is_measured() || !surface.is_valid() {
        return false;
    }
    let before = body.position;
    let (x, _) = contain_axis(body.position.x, 0.0, body.half_extent.x, surface.width);
    let (y, _) = contain_axis(body.position.y, 0.0, body.half_extent.y, surface.height);
    body.position.x = x;
    body.position.y = y;
    before != body.position
}

pub fn clamp_all_inside(bodies: &mut [Body], surface: &Surface) {
    for body in bodies.iter_mut() {
        clamp_inside(body, surface);
    }
}
