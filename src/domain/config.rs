//! Engine configuration
//!
//! Every option has a default, so a host can pass `{}` or only the keys it
//! cares about. Parsed from JSON the same way content bundles are.

use serde::{Deserialize, Serialize};

/// Initial speed range per axis, pixels per millisecond
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedBand {
    pub min: f32,
    pub max: f32,
}

impl Default for SpeedBand {
    fn default() -> Self {
        Self { min: 0.02, max: 0.05 }
    }
}

impl SpeedBand {
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }
}

/// Coarse seeding grid
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub cols: u32,
    pub rows: u32,
    /// Max displacement from the cell center, as a fraction of the cell
    pub jitter: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { cols: 2, rows: 2, jitter: 0.15 }
    }
}

/// Which distance model the collision resolver uses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionModel {
    /// True directional radius of each ellipse
    #[default]
    Ellipse,
    /// `max(rx, ry)` per body
    Circle,
}

/// Egg roll force model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EggDynamics {
    /// Scale of the force opposing the parent's velocity
    pub lag: f32,
    /// Constant downward bias, px/ms²
    pub gravity: f32,
    /// Exponential damping per millisecond
    pub damping: f32,
    /// Max random force per axis, px/ms²
    pub jitter: f32,
    pub position_scale: f32,
    /// Rebound factor on the soft bound (> 1 slightly amplifies)
    pub restitution: f32,
    /// Max angular kick on a bounce, rad/ms
    pub spin_impulse: f32,
    pub angular_damping: f32,
    /// Spacing of freshly seeded eggs, px
    pub stagger: f32,
}

impl Default for EggDynamics {
    fn default() -> Self {
        Self {
            lag: 0.002,
            gravity: 0.000_02,
            damping: 0.004,
            jitter: 0.000_03,
            position_scale: 1.0,
            restitution: 1.08,
            spin_impulse: 0.004,
            angular_damping: 0.003,
            stagger: 6.0,
        }
    }
}

/// Soft egg region as a fraction of the parent's rendered size
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftBound {
    pub x_scale: f32,
    pub y_scale: f32,
}

impl Default for SoftBound {
    fn default() -> Self {
        Self { x_scale: 0.22, y_scale: 0.06 }
    }
}

/// Idle bob published alongside each body's position
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BobMotion {
    /// Vertical amplitude, px
    pub amplitude: f32,
    /// Max tilt, radians
    pub tilt: f32,
    pub period_ms: f32,
}

impl Default for BobMotion {
    fn default() -> Self {
        Self {
            amplitude: 3.0,
            tilt: 0.026,
            period_ms: 3200.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub speed: SpeedBand,
    /// Speed band multiplier while the reduced-motion preference is on
    pub reduced_motion_speed_scale: f32,
    pub grid: GridLayout,
    /// Gap kept between a freshly seeded body and the surface edge, px
    pub padding: f32,
    /// Upper bound on the elapsed time of one frame, ms
    pub max_frame_ms: f32,
    pub collision: CollisionModel,
    /// Extra push per body when separating an overlapping pair, px
    pub separation_bias: f32,
    pub eggs: EggDynamics,
    pub soft_bound: SoftBound,
    pub bob: BobMotion,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            speed: SpeedBand::default(),
            reduced_motion_speed_scale: 0.35,
            grid: GridLayout::default(),
            padding: 8.0,
            max_frame_ms: 32.0,
            collision: CollisionModel::default(),
            separation_bias: 0.5,
            eggs: EggDynamics::default(),
            soft_bound: SoftBound::default(),
            bob: BobMotion::default(),
            seed: 12345,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: EngineConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            self.speed.min,
            self.speed.max,
            self.reduced_motion_speed_scale,
            self.grid.jitter,
            self.padding,
            self.max_frame_ms,
            self.separation_bias,
            self.soft_bound.x_scale,
            self.soft_bound.y_scale,
            self.bob.amplitude,
            self.bob.tilt,
            self.bob.period_ms,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err("config contains a non-finite number".to_string());
        }
        if self.speed.min < 0.0 || self.speed.max < 0.0 {
            return Err(format!(
                "speed band must be non-negative (got {}..{})",
                self.speed.min, self.speed.max
            ));
        }
        if self.speed.min > self.speed.max {
            return Err(format!(
                "speed.min {} exceeds speed.max {}",
                self.speed.min, self.speed.max
            ));
        }
        if self.reduced_motion_speed_scale < 0.0 {
            return Err("reduced_motion_speed_scale must be non-negative".to_string());
        }
        if self.grid.cols == 0 || self.grid.rows == 0 {
            return Err(format!(
                "grid must have at least one cell (got {}x{})",
                self.grid.cols, self.grid.rows
            ));
        }
        if self.max_frame_ms <= 0.0 {
            return Err("max_frame_ms must be positive".to_string());
        }
        if self.separation_bias < 0.0 || self.padding < 0.0 {
            return Err("padding and separation_bias must be non-negative".to_string());
        }
        if self.soft_bound.x_scale <= 0.0 || self.soft_bound.y_scale <= 0.0 {
            return Err("soft_bound scales must be positive".to_string());
        }
        if self.eggs.restitution < 1.0 {
            return Err(format!(
                "eggs.restitution must be at least 1 (got {})",
                self.eggs.restitution
            ));
        }
        if self.eggs.damping < 0.0 || self.eggs.angular_damping < 0.0 {
            return Err("egg damping must be non-negative".to_string());
        }
        if self.bob.period_ms <= 0.0 {
            return Err("bob.period_ms must be positive".to_string());
        }
        Ok(())
    }

    /// Speed band actually used when seeding
    pub fn effective_speed(&self, reduced_motion: bool) -> SpeedBand {
        if reduced_motion {
            self.speed.scaled(self.reduced_motion_speed_scale)
        } else {
            self.speed
        }
    }
}
