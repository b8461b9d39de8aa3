//! Pairwise collision resolver
//!
//! Bodies are equal-mass point centers; their extents only decide when two
//! of them touch. Resolution is a positional split along the line of
//! centers plus a 1-D elastic impulse on the normal component.

use crate::core::{directional_radius, normalize_or, Vec2, DEGENERATE_OFFSET};
use crate::domain::{Body, CollisionModel};

/// Geometry of an overlapping pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Unit vector from A's center towards B's
    pub normal: Vec2,
    pub distance: f32,
    /// Combined radius minus distance (> 0 when touching)
    pub overlap: f32,
}

/// What resolving one pair did
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactOutcome {
    pub overlap: f32,
    /// Closing speed removed along the normal (0 when already separating)
    pub impulse: f32,
}

/// Per-frame resolver counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_checked: u32,
    pub contacts: u32,
    pub impulses: u32,
}

#[inline]
fn radius_along(body: &Body, dir: Vec2, model: CollisionModel) -> f32 {
    match model {
        CollisionModel::Circle => body.half_extent.max_axis(),
        CollisionModel::Ellipse => directional_radius(body.half_extent, dir),
    }
}

/// Overlap test for one pair. `None` when either body is unmeasured or the
/// pair does not touch.
pub fn overlap(a: &Body, b: &Body, model: CollisionModel) -> Option<Contact> {
    if !a.is_measured() || !b.is_measured() {
        return None;
    }

    let (normal, distance) = normalize_or(b.position - a.position, Vec2::new(DEGENERATE_OFFSET, 0.0));
    let reach = radius_along(a, normal, model) + radius_along(b, -normal, model);
    let overlap = reach - distance;

    if overlap > 0.0 {
        Some(Contact { normal, distance, overlap })
    } else {
        None
    }
}

/// Separate and bounce one pair.
///
/// Each body moves `overlap / 2 + bias` along the normal. Velocities change
/// only while the pair is still closing; the tangential part is untouched.
pub fn resolve_pair(a: &mut Body, b: &mut Body, model: CollisionModel, bias: f32) -> Option<ContactOutcome> {
    let contact = overlap(a, b, model)?;
    let n = contact.normal;

    let push = contact.overlap * 0.5 + bias;
    a.position -= n * push;
    b.position += n * push;

    let rel = (b.velocity - a.velocity).dot(n);
    let mut impulse = 0.0;
    if rel < 0.0 {
        // Equal masses: swap the normal components.
        a.velocity += n * rel;
        b.velocity -= n * rel;
        impulse = -rel;
    }

    Some(ContactOutcome {
        overlap: contact.overlap,
        impulse,
    })
}

/// Resolve every unordered pair once, in insertion order.
pub fn resolve_all(bodies: &mut [Body], model: CollisionModel, bias: f32) -> CollisionStats {
    let mut stats = CollisionStats::default();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (left, right) = bodies.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];

            stats.pairs_checked += 1;
            if let Some(outcome) = resolve_pair(a, b, model, bias) {
                stats.contacts += 1;
                if outcome.impulse > 0.0 {
                    stats.impulses += 1;
                }
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIAS: f32 = 0.5;

    fn body(id: u32, x: f32, y: f32, w: f32, h: f32, vx: f32, vy: f32) -> Body {
        let mut b = Body::new(id, w, h, 0);
        b.position = Vec2::new(x, y);
        b.velocity = Vec2::new(vx, vy);
        b
    }

    fn distance(a: &Body, b: &Body) -> f32 {
        (b.position - a.position).length()
    }

    #[test]
    fn head_on_circles_separate_and_bounce() {
        for model in [CollisionModel::Ellipse, CollisionModel::Circle] {
            let mut a = body(1, 100.0, 300.0, 100.0, 100.0, 0.02, 0.0);
            let mut b = body(2, 140.0, 300.0, 100.0, 100.0, -0.02, 0.0);

            let out = resolve_pair(&mut a, &mut b, model, BIAS).unwrap();
            assert!((out.overlap - 60.0).abs() < 1e-3);
            assert!(distance(&a, &b) >= 100.0);
            assert!(a.velocity.x <= 0.0);
            assert!(b.velocity.x >= 0.0);
        }
    }

    #[test]
    fn aligned_equal_mass_collision_swaps_velocities() {
        let v = 0.03;
        let mut a = body(1, 200.0, 200.0, 80.0, 80.0, v, 0.0);
        let mut b = body(2, 270.0, 200.0, 80.0, 80.0, -v, 0.0);
        resolve_pair(&mut a, &mut b, CollisionModel::Ellipse, BIAS).unwrap();
        assert_eq!(a.velocity, Vec2::new(-v, 0.0));
        assert_eq!(b.velocity, Vec2::new(v, 0.0));
    }

    #[test]
    fn separating_pair_only_moves_positions() {
        let mut a = body(1, 200.0, 200.0, 80.0, 80.0, -0.01, 0.02);
        let mut b = body(2, 250.0, 200.0, 80.0, 80.0, 0.03, -0.01);
        let out = resolve_pair(&mut a, &mut b, CollisionModel::Ellipse, BIAS).unwrap();
        assert_eq!(out.impulse, 0.0);
        assert_eq!(a.velocity, Vec2::new(-0.01, 0.02));
        assert_eq!(b.velocity, Vec2::new(0.03, -0.01));
        assert!(a.position.x < 200.0 && b.position.x > 250.0);
    }

    #[test]
    fn tangential_velocity_survives_impulse() {
        let mut a = body(1, 200.0, 200.0, 80.0, 80.0, 0.02, 0.015);
        let mut b = body(2, 260.0, 200.0, 80.0, 80.0, -0.02, -0.005);
        resolve_pair(&mut a, &mut b, CollisionModel::Ellipse, BIAS).unwrap();
        assert_eq!(a.velocity.y, 0.015);
        assert_eq!(b.velocity.y, -0.005);
    }

    #[test]
    fn overlap_shrinks_every_pass_until_clear() {
        let mut a = body(1, 300.0, 300.0, 200.0, 90.0, 0.0, 0.0);
        let mut b = body(2, 330.0, 320.0, 120.0, 160.0, 0.0, 0.0);

        let mut last = overlap(&a, &b, CollisionModel::Ellipse).unwrap().overlap;
        for _ in 0..8 {
            if resolve_pair(&mut a, &mut b, CollisionModel::Ellipse, BIAS).is_none() {
                break;
            }
            match overlap(&a, &b, CollisionModel::Ellipse) {
                Some(c) => {
                    assert!(c.overlap < last);
                    last = c.overlap;
                }
                None => return,
            }
        }
        assert!(overlap(&a, &b, CollisionModel::Ellipse).is_none());
    }

    #[test]
    fn ellipses_use_directional_radius() {
        // Wide flat ellipses stacked vertically: 40 + 40 reach, 70 apart.
        let a = body(1, 300.0, 300.0, 300.0, 80.0, 0.0, 0.0);
        let b = body(2, 300.0, 370.0, 300.0, 80.0, 0.0, 0.0);
        assert!(overlap(&a, &b, CollisionModel::Ellipse).is_some());
        let b = body(2, 300.0, 390.0, 300.0, 80.0, 0.0, 0.0);
        assert!(overlap(&a, &b, CollisionModel::Ellipse).is_none());
        // Circle model inflates to rx and still sees contact.
        assert!(overlap(&a, &b, CollisionModel::Circle).is_some());
    }

    #[test]
    fn coincident_centers_do_not_produce_nan() {
        let mut a = body(1, 300.0, 300.0, 100.0, 100.0, 0.0, 0.0);
        let mut b = body(2, 300.0, 300.0, 100.0, 100.0, 0.0, 0.0);
        resolve_pair(&mut a, &mut b, CollisionModel::Ellipse, BIAS).unwrap();
        assert!(a.position.is_finite() && b.position.is_finite());
        assert!(b.position.x > a.position.x);
    }

    #[test]
    fn unmeasured_bodies_never_collide() {
        let mut a = body(1, 300.0, 300.0, 0.0, 0.0, 0.01, 0.0);
        let mut b = body(2, 300.0, 300.0, 100.0, 100.0, 0.0, 0.0);
        assert!(resolve_pair(&mut a, &mut b, CollisionModel::Ellipse, BIAS).is_none());
        assert_eq!(a.position, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn resolve_all_checks_each_pair_once() {
        let mut bodies = vec![
            body(1, 100.0, 100.0, 50.0, 50.0, 0.0, 0.0),
            body(2, 400.0, 100.0, 50.0, 50.0, 0.0, 0.0),
            body(3, 100.0, 400.0, 50.0, 50.0, 0.0, 0.0),
            body(4, 420.0, 100.0, 50.0, 50.0, -0.01, 0.0),
        ];
        let stats = resolve_all(&mut bodies, CollisionModel::Ellipse, BIAS);
        assert_eq!(stats.pairs_checked, 6);
        assert_eq!(stats.contacts, 1);
        assert_eq!(stats.impulses, 1);
    }

    #[test]
    fn resolve_all_on_empty_slice_is_noop() {
        let mut bodies: Vec<Body> = Vec::new();
        assert_eq!(resolve_all(&mut bodies, CollisionModel::Circle, BIAS), CollisionStats::default());
    }
}
