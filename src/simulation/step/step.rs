use crate::systems::{advance_eggs, bob, clamp_all_inside, contain_all, resolve_all};

use super::clock::clamp_frame;
use super::perf_timer::start_if;
use super::{render, EngineCore};

/// Host frame callback: clamp elapsed time, tick, ask for the next frame.
pub(super) fn on_frame(world: &mut EngineCore, now_ms: f64) -> bool {
    if !world.clock.take_tick() {
        return false;
    }

    let dt = world.clock.elapsed(now_ms, world.config.max_frame_ms);
    tick(world, dt);

    world.clock.schedule_next(world.scheduler.as_mut());
    true
}

pub(super) fn step(world: &mut EngineCore, dt_ms: f32) {
    let dt = clamp_frame(dt_ms, world.config.max_frame_ms);
    tick(world, dt);
}

/// One tick. Order is fixed: integrate, contain, collide, eggs, publish.
/// Collisions run on contained positions and eggs see the final parent
/// velocity of the frame.
pub(super) fn tick(world: &mut EngineCore, dt: f32) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let step_start = start_if(perf_on);

    // === INTEGRATE ===
    let t0 = start_if(perf_on);
    for body in world.bodies.iter_mut() {
        if !body.is_measured() {
            continue;
        }
        body.position += body.velocity * dt;
    }
    if let Some(t) = t0 {
        world.perf_stats.integrate_ms = t.elapsed_ms();
    }

    // === CONTAIN ===
    let t0 = start_if(perf_on);
    let wall_hits = contain_all(&mut world.bodies, &world.surface);
    if let Some(t) = t0 {
        world.perf_stats.contain_ms = t.elapsed_ms();
        world.perf_stats.wall_hits = wall_hits;
    }

    // === COLLIDE ===
    let t0 = start_if(perf_on);
    let stats = resolve_all(
        &mut world.bodies,
        world.config.collision,
        world.config.separation_bias,
    );
    // A separation push may cross an edge; pull back without touching velocity.
    clamp_all_inside(&mut world.bodies, &world.surface);
    if let Some(t) = t0 {
        world.perf_stats.collide_ms = t.elapsed_ms();
        world.perf_stats.pairs_checked = stats.pairs_checked;
        world.perf_stats.contacts = stats.contacts;
        world.perf_stats.impulses = stats.impulses;
    }

    // === EGGS + BOB ===
    let t0 = start_if(perf_on);
    let mut egg_bounces = 0;
    for body in world.bodies.iter_mut() {
        egg_bounces += advance_eggs(
            body,
            &world.config.eggs,
            &world.config.soft_bound,
            dt,
            &mut world.rng,
        );
        bob::advance_bob(body, &world.config.bob, dt);
    }
    if let Some(t) = t0 {
        world.perf_stats.eggs_ms = t.elapsed_ms();
        world.perf_stats.egg_bounces = egg_bounces;
        world.perf_stats.egg_count = world.bodies.iter().map(|b| b.eggs.len() as u32).sum();
    }

    // === PUBLISH ===
    let t0 = start_if(perf_on);
    render::publish(world);
    if let Some(t) = t0 {
        world.perf_stats.publish_ms = t.elapsed_ms();
    }

    world.frame += 1;

    if let Some(t) = step_start {
        world.perf_stats.step_ms = t.elapsed_ms();
    }
}
