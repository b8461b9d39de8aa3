//! Published transforms, laid out flat so JS can read them straight out of
//! wasm memory.
//!
//! - bodies: `[left, top, bob_y, tilt]` per body (top-left of the footprint)
//! - eggs: `[dx, dy, rotation]` per egg, all bodies back to back
//! - egg ranges: `[start, count]` per body, in eggs (not floats)

use serde::Serialize;

use crate::domain::Surface;
use crate::systems::bob::bob_offset;

use super::{ClockState, EngineCore};

pub const BODY_STRIDE: usize = 4;
pub const EGG_STRIDE: usize = 3;
pub const EGG_RANGE_STRIDE: usize = 2;

/// Where to draw a body: top-left corner plus the idle bob
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodyTransform {
    pub left: f32,
    pub top: f32,
    pub bob_y: f32,
    /// Radians
    pub tilt: f32,
}

/// Egg transform relative to its nest's visual center
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EggTransform {
    pub dx: f32,
    pub dy: f32,
    /// Radians
    pub rotation: f32,
}

pub(crate) struct RenderBuffers {
    pub(crate) bodies: Vec<f32>,
    pub(crate) eggs: Vec<f32>,
    pub(crate) egg_ranges: Vec<u32>,
}

impl RenderBuffers {
    pub(crate) fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(8 * BODY_STRIDE),
            eggs: Vec::with_capacity(16 * EGG_STRIDE),
            egg_ranges: Vec::with_capacity(8 * EGG_RANGE_STRIDE),
        }
    }

    pub(crate) fn body_transform(&self, index: usize) -> Option<BodyTransform> {
        let base = index * BODY_STRIDE;
        let t = self.bodies.get(base..base + BODY_STRIDE)?;
        Some(BodyTransform {
            left: t[0],
            top: t[1],
            bob_y: t[2],
            tilt: t[3],
        })
    }

    pub(crate) fn egg_transforms(&self, index: usize) -> Vec<EggTransform> {
        let base = index * EGG_RANGE_STRIDE;
        let Some(range) = self.egg_ranges.get(base..base + EGG_RANGE_STRIDE) else {
            return Vec::new();
        };
        let start = range[0] as usize * EGG_STRIDE;
        let end = start + range[1] as usize * EGG_STRIDE;
        self.eggs
            .get(start..end)
            .map(|floats| {
                floats
                    .chunks_exact(EGG_STRIDE)
                    .map(|e| EggTransform {
                        dx: e[0],
                        dy: e[1],
                        rotation: e[2],
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Rewrite every buffer from current body state.
pub(super) fn publish(world: &mut EngineCore) {
    let render = &mut world.render;
    render.bodies.clear();
    render.eggs.clear();
    render.egg_ranges.clear();

    let bob = &world.config.bob;
    let mut egg_cursor = 0u32;

    for body in world.bodies.iter() {
        let (bob_y, tilt) = bob_offset(body, bob);
        render.bodies.extend_from_slice(&[
            body.position.x - body.half_extent.x,
            body.position.y - body.half_extent.y,
            bob_y,
            tilt,
        ]);

        let count = body.eggs.len() as u32;
        render.egg_ranges.extend_from_slice(&[egg_cursor, count]);
        egg_cursor += count;

        for egg in body.eggs.iter() {
            render.eggs.extend_from_slice(&[egg.offset.x, egg.offset.y, egg.rotation]);
        }
    }
}

#[derive(Serialize)]
struct BodySnapshot {
    id: u32,
    #[serde(flatten)]
    transform: BodyTransform,
    eggs: Vec<EggTransform>,
}

#[derive(Serialize)]
struct Snapshot {
    frame: u64,
    clock: ClockState,
    surface: Surface,
    bodies: Vec<BodySnapshot>,
}

pub(super) fn snapshot_json(world: &EngineCore) -> String {
    let bodies = world
        .bodies
        .iter()
        .enumerate()
        .filter_map(|(i, body)| {
            Some(BodySnapshot {
                id: body.id,
                transform: world.render.body_transform(i)?,
                eggs: world.render.egg_transforms(i),
            })
        })
        .collect();

    let snapshot = Snapshot {
        frame: world.frame,
        clock: world.clock.state(),
        surface: world.surface,
        bodies,
    };
    serde_json::to_string(&snapshot).unwrap_or_else(|e| {
        console_warn!("snapshot serialization failed: {}", e);
        "{}".to_string()
    })
}
