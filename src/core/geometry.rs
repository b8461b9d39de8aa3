//! Geometry helpers shared by containment, collision and egg containment.

use super::vec2::Vec2;

/// Below this center distance two bodies are treated as coincident
pub const DEGENERATE_DISTANCE: f32 = 1e-4;

/// Substituted separation when centers coincide (pushes along +x)
pub const DEGENERATE_OFFSET: f32 = 0.01;

/// Distance from an ellipse center to its boundary along unit direction `dir`.
///
/// `r(u) = 1 / sqrt(ux²/rx² + uy²/ry²)`. Returns 0 for a degenerate extent.
#[inline]
pub fn directional_radius(half_extent: Vec2, dir: Vec2) -> f32 {
    if half_extent.x <= 0.0 || half_extent.y <= 0.0 {
        return 0.0;
    }
    let k = (dir.x * dir.x) / (half_extent.x * half_extent.x)
        + (dir.y * dir.y) / (half_extent.y * half_extent.y);
    if k <= 0.0 {
        // Zero direction: fall back to the smaller half-axis.
        return half_extent.x.min(half_extent.y);
    }
    1.0 / k.sqrt()
}

/// Unit vector and length of `v`.
///
/// When `v` is shorter than [`DEGENERATE_DISTANCE`], `fallback` is normalized
/// instead so callers never divide by zero.
#[inline]
pub fn normalize_or(v: Vec2, fallback: Vec2) -> (Vec2, f32) {
    let len = v.length();
    if len.is_finite() && len >= DEGENERATE_DISTANCE {
        return (v / len, len);
    }
    let fallback_len = fallback.length().max(DEGENERATE_DISTANCE);
    (fallback / fallback_len, fallback_len)
}

/// Clamp with an empty-interval fallback: when `lo > hi` the midpoint wins.
#[inline]
pub fn clamp_scalar(v: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi {
        return (lo + hi) * 0.5;
    }
    v.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_radius_on_axes() {
        let e = Vec2::new(80.0, 40.0);
        assert!((directional_radius(e, Vec2::new(1.0, 0.0)) - 80.0).abs() < 1e-4);
        assert!((directional_radius(e, Vec2::new(0.0, -1.0)) - 40.0).abs() < 1e-4);
    }

    #[test]
    fn directional_radius_of_circle_is_constant() {
        let c = Vec2::new(50.0, 50.0);
        let diag = Vec2::new(1.0, 1.0).normalize();
        assert!((directional_radius(c, diag) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn directional_radius_degenerate_extent() {
        assert_eq!(directional_radius(Vec2::new(0.0, 10.0), Vec2::new(1.0, 0.0)), 0.0);
    }

    #[test]
    fn normalize_or_uses_fallback_for_coincident_points() {
        let (u, len) = normalize_or(Vec2::zero(), Vec2::new(DEGENERATE_OFFSET, 0.0));
        assert_eq!(u, Vec2::new(1.0, 0.0));
        assert!(len > 0.0);
    }

    #[test]
    fn clamp_scalar_empty_interval_is_midpoint() {
        assert_eq!(clamp_scalar(5.0, 10.0, 20.0), 10.0);
        assert_eq!(clamp_scalar(5.0, 30.0, 10.0), 20.0);
    }
}
