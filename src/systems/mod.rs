//! Per-frame systems. Each one is a plain function over bodies so the
//! simulation step decides the order.

pub mod bob;
pub mod collision;
pub mod containment;
pub mod egg_roll;
pub mod layout;

pub use collision::{resolve_all, resolve_pair, CollisionStats, Contact, ContactOutcome};
pub use containment::{clamp_all_inside, contain, contain_all};
pub use egg_roll::{advance_eggs, soft_bounds};
pub use layout::{reset_eggs, seed, seed_one};
