//! Tunable physics constants, loadable from JSON

use serde::{Deserialize, Serialize};

use super::palette::{Rgba, DEFAULT_PALETTE, SETTLED};

/// Half-open `[min, max)` range used for random spawn defaults
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnRange {
    pub min: f64,
    pub max: f64,
}

impl SpawnRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsParams {
    /// Moves nested deeper than this inside one frame are dropped
    pub max_recursion_depth: u32,
    /// Below this speed a floor bounce becomes a rest
    pub rest_threshold: f64,
    /// Horizontal speeds below this snap to zero
    pub stop_threshold: f64,
    /// Per-tick multiplier on both axes while bouncing
    pub air_resistance: f64,
    /// Added to a nonzero vertical velocity every attenuation tick
    pub gravity: f64,
    /// Horizontal multiplier once vertical motion stopped
    pub ground_friction: f64,
    pub default_immunity: i32,
    /// Driver period between attenuation ticks
    pub attenuate_interval_ms: f64,
    pub spawn_speed_x: SpawnRange,
    pub spawn_speed_y: SpawnRange,
    /// Integer radii, positive only
    pub spawn_radius: SpawnRange,
    pub min_burst: u32,
    pub max_burst: u32,
    /// Fraction of the boundary area bodies may cover before bursts are refused
    pub fill_ratio: f64,
    pub palette: Vec<Rgba>,
    pub settled_color: Rgba,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            max_recursion_depth: 20,
            rest_threshold: 0.5,
            stop_threshold: 0.1,
            air_resistance: 0.99,
            gravity: 0.25,
            ground_friction: 0.5,
            default_immunity: 10,
            attenuate_interval_ms: 100.0,
            spawn_speed_x: SpawnRange::new(5.0, 10.0),
            spawn_speed_y: SpawnRange::new(1.0, 3.0),
            spawn_radius: SpawnRange::new(5.0, 15.0),
            min_burst: 1,
            max_burst: 10,
            fill_ratio: 0.3,
            palette: DEFAULT_PALETTE.to_vec(),
            settled_color: SETTLED,
        }
    }
}

impl PhysicsParams {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let params: PhysicsParams = serde_json::from_str(json).map_err(|e| e.to_string())?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("restThreshold", self.rest_threshold),
            ("stopThreshold", self.stop_threshold),
            ("airResistance", self.air_resistance),
            ("groundFriction", self.ground_friction),
            ("attenuateIntervalMs", self.attenuate_interval_ms),
            ("fillRatio", self.fill_ratio),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        if !self.gravity.is_finite() {
            return Err(format!("gravity must be finite, got {}", self.gravity));
        }

        let ranges = [
            ("spawnSpeedX", self.spawn_speed_x),
            ("spawnSpeedY", self.spawn_speed_y),
            ("spawnRadius", self.spawn_radius),
        ];
        for (name, range) in ranges {
            if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
                return Err(format!("{} range is invalid: [{}, {})", name, range.min, range.max));
            }
        }
        if self.spawn_radius.min < 1.0 {
            return Err("spawnRadius.min must be at least 1".to_string());
        }
        if self.min_burst > self.max_burst {
            return Err(format!(
                "minBurst ({}) exceeds maxBurst ({})",
                self.min_burst, self.max_burst
            ));
        }
        if self.palette.is_empty() {
            return Err("palette must contain at least one colour".to_string());
        }
        Ok(())
    }
}
