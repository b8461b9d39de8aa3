//! Nest Engine - drifting nests and rolling eggs, compiled to WASM
//!
//! Architecture:
//! - core/        - Vectors, geometry helpers, seeded RNG, logging macros
//! - domain/      - Bodies, eggs, surface, configuration
//! - systems/     - Containment, collisions, egg roll, layout, bob
//! - simulation/  - Engine context, frame clock, commands, JS facade

// Logging macros must be first for macro export!
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

#[doc(hidden)]
pub use web_sys;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🪺 Nest engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Rng, Vec2};
pub use domain::{Body, Egg, EngineConfig, Surface};
pub use simulation::{ClockState, Command, Engine, EngineCore, FrameScheduler, ManualScheduler};
