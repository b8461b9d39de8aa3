//! Core math: vectors, geometry helpers, seedable randomness.

// Macros first so every later module can use them.
#[macro_use]
#[path = "utils/log.rs"]
pub mod log;

pub mod geometry;
pub mod random;
pub mod vec2;

pub use geometry::{clamp_scalar, directional_radius, normalize_or, DEGENERATE_DISTANCE, DEGENERATE_OFFSET};
pub use random::Rng;
pub use vec2::Vec2;
