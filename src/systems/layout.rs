//! Layout seeder - spreads bodies over a coarse grid and gives them a push.

use crate::core::{clamp_scalar, Rng, Vec2};
use crate::domain::{Body, EngineConfig, Egg, Surface};

use super::containment::contain;
use super::egg_roll::{confine, soft_bounds};

/// Rebuild `body.eggs` from `body.visible_eggs`.
///
/// Egg `i` of `n` starts at `((i - (n-1)/2) * stagger, 0)` with no motion.
pub fn reset_eggs(body: &mut Body, config: &EngineConfig, rng: &mut Rng) {
    let n = body.visible_eggs;
    body.eggs.clear();
    body.eggs.reserve(n);

    let center = (n as f32 - 1.0) * 0.5;
    for i in 0..n {
        let dx = (i as f32 - center) * config.eggs.stagger;
        body.eggs.push(Egg::at(Vec2::new(dx, 0.0)));
    }

    // Small nests can't fit the stagger; start those eggs on the rim.
    if body.is_measured() {
        let max = soft_bounds(body, &config.soft_bound);
        if max.x > 0.0 && max.y > 0.0 {
            for egg in body.eggs.iter_mut() {
                confine(egg, max, &config.eggs, rng);
                egg.angular_velocity = 0.0;
            }
        }
    }
}

/// Place one body in grid cell `index`.
fn place(body: &mut Body, index: usize, surface: &Surface, config: &EngineConfig, rng: &mut Rng) {
    let cols = config.grid.cols.max(1) as usize;
    let rows = config.grid.rows.max(1) as usize;
    let col = index % cols;
    let row = (index / cols) % rows;

    let cell_w = surface.width / cols as f32;
    let cell_h = surface.height / rows as f32;

    let x = (col as f32 + 0.5) * cell_w + rng.signed_unit() * cell_w * config.grid.jitter;
    let y = (row as f32 + 0.5) * cell_h + rng.signed_unit() * cell_h * config.grid.jitter;

    let hx = body.half_extent.x + config.padding;
    let hy = body.half_extent.y + config.padding;
    body.position = Vec2::new(
        clamp_scalar(x, hx, surface.width - hx),
        clamp_scalar(y, hy, surface.height - hy),
    );
}

/// Sign-symmetric per-axis velocity within the speed band.
fn launch(body: &mut Body, config: &EngineConfig, reduced_motion: bool, rng: &mut Rng) {
    let band = config.effective_speed(reduced_motion);
    let vx = rng.range(band.min, band.max) * rng.sign();
    let vy = rng.range(band.min, band.max) * rng.sign();
    body.velocity = Vec2::new(vx, vy);
}

/// Seed a single body as if it sat at `index` in the body list.
pub fn seed_one(
    body: &mut Body,
    index: usize,
    surface: &Surface,
    config: &EngineConfig,
    reduced_motion: bool,
    rng: &mut Rng,
) {
    if surface.is_valid() {
        place(body, index, surface, config, rng);
        launch(body, config, reduced_motion, rng);
        contain(body, surface);
    }
    body.bob_phase = rng.range(0.0, std::f32::consts::TAU);
    reset_eggs(body, config, rng);
}

/// Seed every body: position, velocity, eggs. Replaces all previous state.
pub fn seed(
    bodies: &mut [Body],
    surface: &Surface,
    config: &EngineConfig,
    reduced_motion: bool,
    rng: &mut Rng,
) {
    if !surface.is_valid() {
        return;
    }

    for (index, body) in bodies.iter_mut().enumerate() {
        seed_one(body, index, surface, config, reduced_motion, rng);
    }
}
