//! Bodies ("nests"), their eggs, and the surface they drift on.

use serde::Serialize;

use crate::core::Vec2;

/// An egg nested in a parent body's local frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Egg {
    /// Displacement from the parent's visual center
    pub offset: Vec2,
    pub velocity: Vec2,
    /// Radians
    pub rotation: f32,
    /// Radians per millisecond
    pub angular_velocity: f32,
}

impl Egg {
    pub fn at(offset: Vec2) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }
}

/// A primary floating body
#[derive(Clone, Debug, Serialize)]
pub struct Body {
    pub id: u32,

    // === Physics State ===
    /// Center, surface-local pixels
    pub position: Vec2,
    /// Pixels per millisecond
    pub velocity: Vec2,
    /// Half width / half height of the measured footprint
    pub half_extent: Vec2,

    // === Contents ===
    /// Egg count the host currently shows for this body
    pub visible_eggs: usize,
    pub eggs: Vec<Egg>,

    // === Visual-only state ===
    pub bob_phase: f32,
}

impl Body {
    pub fn new(id: u32, width: f32, height: f32, visible_eggs: usize) -> Self {
        let mut body = Self {
            id,
            position: Vec2::zero(),
            velocity: Vec2::zero(),
            half_extent: Vec2::zero(),
            visible_eggs,
            eggs: Vec::with_capacity(visible_eggs),
            bob_phase: 0.0,
        };
        body.set_size(width, height);
        body
    }

    /// Update the half-extent from a measured footprint
    pub fn set_size(&mut self, width: f32, height: f32) {
        let w = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let h = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.half_extent = Vec2::new(w * 0.5, h * 0.5);
    }

    /// Full rendered footprint
    pub fn size(&self) -> Vec2 {
        self.half_extent * 2.0
    }

    /// Unmeasured bodies sit out containment, collisions and egg dynamics
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.half_extent.x > 0.0
            && self.half_extent.y > 0.0
            && self.half_extent.is_finite()
    }
}

/// The bounded rectangle bodies move within
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_derives_half_extent() {
        let b = Body::new(1, 160.0, 90.0, 2);
        assert_eq!(b.half_extent, Vec2::new(80.0, 45.0));
        assert!(b.is_measured());
    }

    #[test]
    fn bad_measurements_leave_body_unmeasured() {
        let mut b = Body::new(1, 0.0, 100.0, 0);
        assert!(!b.is_measured());
        b.set_size(f32::NAN, 40.0);
        assert!(!b.is_measured());
        b.set_size(100.0, 100.0);
        assert!(b.is_measured());
        assert_eq!(b.size(), Vec2::new(100.0, 100.0));
    }
}
