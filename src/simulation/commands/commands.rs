use crate::domain::{Body, Surface};
use crate::systems::{contain, layout, reset_eggs};

use super::{render, EngineCore};

/// Host events fed into the engine between ticks
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Viewport changed; reseeds every body
    Resize { width: f32, height: f32 },
    /// Visibility lost (`true`) or regained (`false`)
    SetSuspended(bool),
    /// Reduced-motion preference toggled
    SetReducedMotion(bool),
    Reseed,
}

pub(super) fn apply(world: &mut EngineCore, command: Command) {
    match command {
        Command::Resize { width, height } => resize(world, width, height),
        Command::SetSuspended(suspended) => {
            world.visible = !suspended;
            world.sync_clock();
        }
        Command::SetReducedMotion(reduced) => {
            world.reduced_motion = reduced;
            world.sync_clock();
        }
        Command::Reseed => {
            world.reseed_all();
            console_log!("reseeded {} bodies", world.bodies.len());
        }
    }
}

fn resize(world: &mut EngineCore, width: f32, height: f32) {
    let surface = Surface::new(width, height);
    if !surface.is_valid() {
        console_warn!("ignoring surface size {}x{}", width, height);
    }
    world.surface = surface;
    world.reseed_all();
    world.sync_clock();
}

pub(super) fn add_body(world: &mut EngineCore, width: f32, height: f32, eggs: usize) -> u32 {
    let id = world.next_id;
    world.next_id = world.next_id.saturating_add(1);

    let mut body = Body::new(id, width, height, eggs);
    let index = world.bodies.len();
    layout::seed_one(
        &mut body,
        index,
        &world.surface,
        &world.config,
        world.reduced_motion,
        &mut world.rng,
    );
    world.bodies.push(body);
    render::publish(world);
    id
}

pub(super) fn remove_body(world: &mut EngineCore, id: u32) -> bool {
    // Keep order stable for the renderer.
    let Some(idx) = world.bodies.iter().position(|b| b.id == id) else {
        return false;
    };
    world.bodies.remove(idx);
    render::publish(world);
    true
}

pub(super) fn set_body_size(world: &mut EngineCore, id: u32, width: f32, height: f32) -> bool {
    let Some(body) = world.bodies.iter_mut().find(|b| b.id == id) else {
        return false;
    };
    body.set_size(width, height);
    if body.is_measured() {
        contain(body, &world.surface);
    } else {
        console_warn!("body {} has no measurable size ({}x{})", id, width, height);
    }
    // A suspended clock won't publish for us.
    render::publish(world);
    true
}

pub(super) fn set_egg_count(world: &mut EngineCore, id: u32, eggs: usize) -> bool {
    let Some(body) = world.bodies.iter_mut().find(|b| b.id == id) else {
        return false;
    };
    if body.visible_eggs != eggs {
        body.visible_eggs = eggs;
        reset_eggs(body, &world.config, &mut world.rng);
        render::publish(world);
    }
    true
}
