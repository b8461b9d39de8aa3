//! End-to-end checks of the motion rules on hand-placed bodies.

use nest_engine::core::Rng;
use nest_engine::domain::{Body, CollisionModel, EngineConfig, Surface};
use nest_engine::systems::collision::{overlap, resolve_pair};
use nest_engine::systems::egg_roll::{normalized_radius_sq, soft_bounds};
use nest_engine::systems::{advance_eggs, contain, contain_all, resolve_all, seed};
use nest_engine::Vec2;

const BIAS: f32 = 0.5;

fn body(id: u32, pos: (f32, f32), size: (f32, f32), vel: (f32, f32)) -> Body {
    let mut b = Body::new(id, size.0, size.1, 0);
    b.position = Vec2::new(pos.0, pos.1);
    b.velocity = Vec2::new(vel.0, vel.1);
    b
}

#[test]
fn wall_scenario_clamps_and_reflects() {
    let surface = Surface::new(800.0, 600.0);
    let mut b = body(1, (10.0, 300.0), (100.0, 100.0), (-0.01, 0.0));
    contain(&mut b, &surface);
    assert_eq!(b.position.x, 50.0);
    assert_eq!(b.velocity.x, 0.01);
}

#[test]
fn head_on_scenario_separates_and_bounces() {
    let mut a = body(1, (100.0, 300.0), (100.0, 100.0), (0.02, 0.0));
    let mut b = body(2, (140.0, 300.0), (100.0, 100.0), (-0.02, 0.0));

    resolve_pair(&mut a, &mut b, CollisionModel::Ellipse, BIAS);

    assert!((b.position - a.position).length() >= 100.0);
    assert!(a.velocity.x <= 0.0);
    assert!(b.velocity.x >= 0.0);
}

#[test]
fn repeated_resolution_converges_for_every_model() {
    for model in [CollisionModel::Ellipse, CollisionModel::Circle] {
        let mut a = body(1, (400.0, 300.0), (240.0, 100.0), (0.0, 0.0));
        let mut b = body(2, (420.0, 330.0), (100.0, 220.0), (0.0, 0.0));

        let mut last = f32::INFINITY;
        let mut passes = 0;
        while let Some(c) = overlap(&a, &b, model) {
            assert!(c.overlap < last);
            last = c.overlap;
            resolve_pair(&mut a, &mut b, model, BIAS);
            passes += 1;
            assert!(passes < 10);
        }
    }
}

#[test]
fn random_swarm_stays_contained() {
    let surface = Surface::new(1200.0, 800.0);
    let config = EngineConfig {
        speed: nest_engine::domain::SpeedBand { min: 0.2, max: 0.6 },
        ..EngineConfig::default()
    };
    let mut rng = Rng::new(2024);
    let mut bodies: Vec<Body> = (0..6)
        .map(|i| Body::new(i + 1, 140.0 + 15.0 * i as f32, 90.0 + 10.0 * i as f32, 2))
        .collect();
    seed(&mut bodies, &surface, &config, false, &mut rng);

    for _ in 0..3_000 {
        for b in bodies.iter_mut() {
            b.position += b.velocity * 32.0;
        }
        contain_all(&mut bodies, &surface);
        for b in &bodies {
            assert!(b.position.x >= b.half_extent.x);
            assert!(b.position.x <= surface.width - b.half_extent.x);
            assert!(b.position.y >= b.half_extent.y);
            assert!(b.position.y <= surface.height - b.half_extent.y);
        }
        resolve_all(&mut bodies, config.collision, config.separation_bias);
        for b in bodies.iter_mut() {
            advance_eggs(b, &config.eggs, &config.soft_bound, 32.0, &mut rng);
            let max = soft_bounds(b, &config.soft_bound);
            for egg in &b.eggs {
                assert!(normalized_radius_sq(egg.offset, max) <= 1.0);
            }
        }
    }
}

#[test]
fn reseed_is_idempotent() {
    let surface = Surface::new(1024.0, 768.0);
    let config = EngineConfig::default();
    let mut rng = Rng::new(8);
    let mut bodies: Vec<Body> = (0..4)
        .map(|i| Body::new(i + 1, 200.0, 120.0, i as usize))
        .collect();

    seed(&mut bodies, &surface, &config, false, &mut rng);
    seed(&mut bodies, &surface, &config, false, &mut rng);

    for b in &bodies {
        assert_eq!(b.eggs.len(), b.visible_eggs);
        assert!(b.position.x >= b.half_extent.x && b.position.x <= surface.width - b.half_extent.x);
        assert!(b.position.y >= b.half_extent.y && b.position.y <= surface.height - b.half_extent.y);
    }
}
