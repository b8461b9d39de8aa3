pub mod body;
pub mod config;

pub use body::{Body, Egg, Surface};
pub use config::{
    BobMotion, CollisionModel, EggDynamics, EngineConfig, GridLayout, SoftBound, SpeedBand,
};
