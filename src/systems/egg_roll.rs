//! Egg roll - damped, lagging motion of eggs inside their nest
//!
//! Eggs feel a force opposite the nest's velocity, a constant pull towards
//! the bottom of the bowl and a little noise. They are kept inside a soft
//! ellipse scaled from the nest's footprint and kick off its rim slightly
//! harder than they hit it.

use std::f32::consts::TAU;

use crate::core::{normalize_or, Rng, Vec2};
use crate::domain::{Body, Egg, EggDynamics, SoftBound};

/// Projected eggs land just inside the rim so float error can't leave them out.
const RIM_INSET: f32 = 0.999;

/// Radii of the soft egg region for `body`
#[inline]
pub fn soft_bounds(body: &Body, bound: &SoftBound) -> Vec2 {
    body.size().mul_axes(Vec2::new(bound.x_scale, bound.y_scale))
}

/// `(dx/max_x)² + (dy/max_y)²`
#[inline]
pub fn normalized_radius_sq(offset: Vec2, max: Vec2) -> f32 {
    let n = offset.div_axes(max);
    n.dot(n)
}

/// Pull `egg` back onto the rim if it left the region. Returns true on a bounce.
pub fn confine(egg: &mut Egg, max: Vec2, dynamics: &EggDynamics, rng: &mut Rng) -> bool {
    let n2 = normalized_radius_sq(egg.offset, max);
    if n2 <= 1.0 {
        return false;
    }

    egg.offset = egg.offset * (RIM_INSET / n2.sqrt());

    // Outward normal of the ellipse at the projected point.
    let grad = egg.offset.div_axes(max.mul_axes(max));
    let (normal, _) = normalize_or(grad, egg.offset);

    let vn = egg.velocity.dot(normal);
    if vn > 0.0 {
        egg.velocity -= normal * (vn * (1.0 + dynamics.restitution));
    }
    egg.angular_velocity += rng.signed_unit() * dynamics.spin_impulse;
    true
}

/// Advance every egg of `body` by `dt` milliseconds. Returns the number of rim bounces.
pub fn advance_eggs(
    body: &mut Body,
    dynamics: &EggDynamics,
    bound: &SoftBound,
    dt: f32,
    rng: &mut Rng,
) -> u32 {
    if body.eggs.is_empty() || !body.is_measured() || dt <= 0.0 {
        return 0;
    }

    let max = soft_bounds(body, bound);
    if max.x <= 0.0 || max.y <= 0.0 {
        return 0;
    }

    let lag = body.velocity * -dynamics.lag;
    let damp = (dynamics.damping * dt).min(1.0);
    let angular_damp = (dynamics.angular_damping * dt).min(1.0);
    let mut bounces = 0;

    for egg in body.eggs.iter_mut() {
        let jitter = Vec2::new(rng.signed_unit(), rng.signed_unit()) * dynamics.jitter;
        let force = lag + Vec2::new(0.0, dynamics.gravity) + jitter;

        egg.velocity += force * dt;
        egg.velocity -= egg.velocity * damp;
        egg.offset += egg.velocity * (dt * dynamics.position_scale);

        if confine(egg, max, dynamics, rng) {
            bounces += 1;
        }

        egg.angular_velocity -= egg.angular_velocity * angular_damp;
        egg.rotation = (egg.rotation + egg.angular_velocity * dt).rem_euclid(TAU);
    }

    bounces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nest(vx: f32, vy: f32, eggs: usize) -> Body {
        let mut b = Body::new(1, 200.0, 120.0, eggs);
        b.velocity = Vec2::new(vx, vy);
        b.eggs = vec![Egg::default(); eggs];
        b
    }

    #[test]
    fn bounds_scale_with_footprint() {
        let b = nest(0.0, 0.0, 0);
        let max = soft_bounds(&b, &SoftBound::default());
        assert!((max.x - 44.0).abs() < 1e-4);
        assert!((max.y - 7.2).abs() < 1e-4);
    }

    #[test]
    fn eggs_lag_behind_parent_motion() {
        let dynamics = EggDynamics {
            jitter: 0.0,
            gravity: 0.0,
            ..EggDynamics::default()
        };
        let mut b = nest(0.05, 0.0, 1);
        let mut rng = Rng::new(1);
        advance_eggs(&mut b, &dynamics, &SoftBound::default(), 16.0, &mut rng);
        assert!(b.eggs[0].offset.x < 0.0);
        assert!(b.eggs[0].velocity.x < 0.0);
    }

    #[test]
    fn gravity_settles_eggs_downwards() {
        let dynamics = EggDynamics {
            jitter: 0.0,
            ..EggDynamics::default()
        };
        let mut b = nest(0.0, 0.0, 1);
        let mut rng = Rng::new(1);
        advance_eggs(&mut b, &dynamics, &SoftBound::default(), 16.0, &mut rng);
        assert!(b.eggs[0].offset.y > 0.0);
        assert_eq!(b.eggs[0].offset.x, 0.0);
    }

    #[test]
    fn soft_bound_holds_under_violent_parent_motion() {
        let dynamics = EggDynamics {
            lag: 0.05,
            ..EggDynamics::default()
        };
        let bound = SoftBound::default();
        let mut b = nest(0.5, -0.4, 4);
        let mut rng = Rng::new(99);

        for frame in 0..600 {
            if frame % 37 == 0 {
                b.velocity = b.velocity * -1.0;
            }
            advance_eggs(&mut b, &dynamics, &bound, 32.0, &mut rng);
            let max = soft_bounds(&b, &bound);
            for egg in &b.eggs {
                assert!(normalized_radius_sq(egg.offset, max) <= 1.0);
                assert!(egg.offset.is_finite());
            }
        }
    }

    #[test]
    fn rim_bounce_reverses_outward_velocity_and_spins() {
        let dynamics = EggDynamics::default();
        let max = Vec2::new(40.0, 10.0);
        let mut egg = Egg {
            offset: Vec2::new(50.0, 0.0),
            velocity: Vec2::new(0.1, 0.0),
            ..Egg::default()
        };
        let mut rng = Rng::new(3);
        assert!(confine(&mut egg, max, &dynamics, &mut rng));
        assert!(normalized_radius_sq(egg.offset, max) <= 1.0);
        // Outward speed comes back amplified.
        assert!(egg.velocity.x < -0.1);
        assert_ne!(egg.angular_velocity, 0.0);
    }

    #[test]
    fn unmeasured_parent_leaves_eggs_alone() {
        let mut b = nest(0.05, 0.0, 2);
        b.set_size(0.0, 0.0);
        let mut rng = Rng::new(1);
        assert_eq!(advance_eggs(&mut b, &EggDynamics::default(), &SoftBound::default(), 16.0, &mut rng), 0);
        assert!(b.eggs.iter().all(|e| *e == Egg::default()));
    }
}
