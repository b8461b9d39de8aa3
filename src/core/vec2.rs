//! Surface-space vector. Positions and half extents are pixels, velocities
//! are pixels per millisecond.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector, or zero for anything shorter than 1e-4
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0001 { self / len } else { Self::ZERO }
    }

    /// Component-wise product, e.g. a size scaled per axis
    #[inline]
    pub fn mul_axes(self, scale: Vec2) -> Self {
        Self::new(self.x * scale.x, self.y * scale.y)
    }

    /// Component-wise quotient; maps an offset into unit-ellipse space
    #[inline]
    pub fn div_axes(self, extent: Vec2) -> Self {
        Self::new(self.x / extent.x, self.y / extent.y)
    }

    #[inline]
    pub fn max_axis(self) -> f32 {
        self.x.max(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::Vec2;

    #[test]
    fn short_vectors_normalize_to_zero() {
        assert_eq!(Vec2::new(0.00001, 0.0).normalize(), Vec2::ZERO);
    }

    #[test]
    fn normalize_keeps_direction() {
        let n = Vec2::new(3.0, 4.0).normalize();
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn per_axis_scaling() {
        let size = Vec2::new(200.0, 100.0);
        assert_eq!(size.mul_axes(Vec2::new(0.25, 0.5)), Vec2::new(50.0, 50.0));
        assert_eq!(Vec2::new(50.0, -25.0).div_axes(Vec2::new(100.0, 50.0)), Vec2::new(0.5, -0.5));
        assert_eq!(size.max_axis(), 200.0);
    }
}
