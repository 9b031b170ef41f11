//! Tuning parameters for both worlds.
//!
//! Every constant the simulations depend on is a named field here, with
//! defaults matching the original canvas toy. Configs round-trip through
//! JSON and are validated up front so a degenerate setup (zero tick length,
//! empty playfield) fails fast instead of looping forever.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters for the bouncing-shapes sandbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    /// Playfield width in pixels.
    pub width: f32,
    /// Playfield height in pixels.
    pub height: f32,
    /// Spawn lattice cell size; shapes start on distinct interior cells.
    pub grid: f32,
    /// Shape counts per kind.
    pub hexagons: usize,
    pub triangles: usize,
    pub circles: usize,
    /// Bounding radii per kind.
    pub hexagon_radius: f32,
    pub triangle_radius: f32,
    pub circle_radius: f32,
    /// Initial velocity components are uniform in [-max_speed, max_speed),
    /// in pixels per tick.
    pub max_speed: f32,
    /// Fixed simulation tick length in milliseconds.
    pub tick_length_ms: f64,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            grid: 20.0,
            hexagons: 600,
            triangles: 600,
            circles: 0,
            hexagon_radius: 5.0,
            triangle_radius: 5.0,
            circle_radius: 5.0,
            max_speed: 4.0,
            tick_length_ms: 15.0,
        }
    }
}

impl ShapesConfig {
    /// Total number of shapes this config spawns.
    pub fn shape_count(&self) -> usize {
        self.hexagons + self.triangles + self.circles
    }

    /// Number of interior spawn cells the lattice offers.
    pub fn spawn_capacity(&self) -> usize {
        let cols = (self.width / self.grid).floor() as usize;
        let rows = (self.height / self.grid).floor() as usize;
        cols.saturating_sub(2) * rows.saturating_sub(2)
    }

    pub fn validate(&self) -> Result<()> {
        check_tick_length(self.tick_length_ms)?;
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_positive("grid", self.grid)?;
        check_positive("hexagon_radius", self.hexagon_radius)?;
        check_positive("triangle_radius", self.triangle_radius)?;
        check_positive("circle_radius", self.circle_radius)?;
        check_positive("max_speed", self.max_speed)?;
        if self.shape_count() == 0 {
            return Err(Error::InvalidParam(
                "shape counts must add up to at least one entity".to_string(),
            ));
        }
        if self.shape_count() > self.spawn_capacity() {
            return Err(Error::InvalidParam(format!(
                "{} shapes exceed {} available spawn cells",
                self.shape_count(),
                self.spawn_capacity()
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parameters for the breakout game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutConfig {
    /// Playfield width in pixels.
    pub width: f32,
    /// Playfield height in pixels.
    pub height: f32,
    /// Fixed simulation tick length in milliseconds.
    pub tick_length_ms: f64,
    /// Paddle dimensions.
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// The paddle closes 1/damping of the gap to the pointer each tick.
    pub paddle_damping: f32,
    /// Ball radius and starting velocity in pixels per tick.
    pub ball_radius: f32,
    pub ball_start_vx: f32,
    pub ball_start_vy: f32,
    /// Ball velocity is multiplied by speed_up_factor on both axes once per
    /// speed_up_interval_ms of simulated time.
    pub speed_up_interval_ms: f64,
    pub speed_up_factor: f32,
    /// Score ticks up by one per interval of simulated time.
    pub score_interval_ms: f64,
    /// Bonus pickup lifecycle.
    pub bonus_interval_ms: f64,
    pub bonus_reward: u64,
    pub bonus_min_radius: f32,
    pub bonus_max_radius: f32,
    /// Bonus velocity components are drawn from [-bonus_max_speed,
    /// bonus_max_speed) horizontally and (0, bonus_max_speed] downward.
    pub bonus_max_speed: f32,
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            tick_length_ms: 15.0,
            paddle_width: 400.0,
            paddle_height: 50.0,
            paddle_damping: 10.0,
            ball_radius: 10.0,
            ball_start_vx: 3.0,
            ball_start_vy: -3.0,
            speed_up_interval_ms: 30_000.0,
            speed_up_factor: 1.1,
            score_interval_ms: 1_000.0,
            bonus_interval_ms: 15_000.0,
            bonus_reward: 15,
            bonus_min_radius: 10.0,
            bonus_max_radius: 30.0,
            bonus_max_speed: 3.0,
        }
    }
}

impl BreakoutConfig {
    pub fn validate(&self) -> Result<()> {
        check_tick_length(self.tick_length_ms)?;
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_positive("paddle_width", self.paddle_width)?;
        check_positive("paddle_height", self.paddle_height)?;
        check_positive("paddle_damping", self.paddle_damping)?;
        check_positive("ball_radius", self.ball_radius)?;
        check_positive("speed_up_factor", self.speed_up_factor)?;
        check_positive("bonus_min_radius", self.bonus_min_radius)?;
        check_positive("bonus_max_speed", self.bonus_max_speed)?;
        check_positive_ms("speed_up_interval_ms", self.speed_up_interval_ms)?;
        check_positive_ms("score_interval_ms", self.score_interval_ms)?;
        check_positive_ms("bonus_interval_ms", self.bonus_interval_ms)?;
        if self.bonus_max_radius < self.bonus_min_radius {
            return Err(Error::InvalidParam(
                "bonus_max_radius must be >= bonus_min_radius".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_positive(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParam(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}

fn check_positive_ms(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParam(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}

fn check_tick_length(tick_length_ms: f64) -> Result<()> {
    check_positive_ms("tick_length_ms", tick_length_ms)
}
