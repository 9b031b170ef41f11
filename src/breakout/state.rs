//! Breakout game state
//!
//! All entities are singletons created once at setup and mutated in place;
//! the bonus toggles between active and inactive instead of being destroyed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::BreakoutConfig;
use crate::error::Result;

/// Current phase of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    /// Ball reached the floor; the loop has been (or is about to be)
    /// cancelled. A normal terminal state, not an error.
    GameOver,
}

/// The player's paddle. `pos` is the top-left corner; only x moves, chasing
/// the pointer with exponential smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Vertical centre line; the one-sided paddle test rejects items whose
    /// top edge has already sunk past it.
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}

/// Last reported pointer position. The input collaborator overwrites this
/// asynchronously; the update step only reads the latest value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub pos: Vec2,
}

/// The bouncing ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per tick.
    pub vel: Vec2,
    pub radius: f32,
    /// Simulated time of the last speed ramp, in ms.
    pub last_speed_up: f64,
}

/// The single bonus slot. While inactive it is ignored by collision checks
/// and must not be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
    /// Simulated time of the last spawn, in ms; respawn eligibility is
    /// measured from here.
    pub last_spawned: f64,
}

/// Score counter plus its fixed HUD box (render-only geometry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub value: u64,
    /// Simulated time of the last per-second increment, in ms.
    pub last_scored: f64,
    pub box_pos: Vec2,
    pub box_size: Vec2,
}

/// The breakout world: singleton entities, phase, and the seeded RNG that
/// drives bonus spawns.
#[derive(Debug, Clone)]
pub struct BreakoutWorld {
    pub config: BreakoutConfig,
    pub phase: Phase,
    pub paddle: Paddle,
    pub pointer: Pointer,
    pub ball: Ball,
    pub bonus: Bonus,
    pub score: Score,
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl BreakoutWorld {
    /// Set up a new run. `start_ms` anchors the simulated-time ramps and
    /// should match the clock's starting timestamp.
    pub fn new(config: &BreakoutConfig, seed: u64, start_ms: f64) -> Result<Self> {
        config.validate()?;
        let paddle = Paddle {
            pos: Vec2::new(
                (config.width - config.paddle_width) / 2.0,
                config.height - config.paddle_height,
            ),
            width: config.paddle_width,
            height: config.paddle_height,
        };
        let ball = Ball {
            pos: Vec2::new(config.width / 2.0, config.height / 2.0),
            vel: Vec2::new(config.ball_start_vx, config.ball_start_vy),
            radius: config.ball_radius,
            last_speed_up: start_ms,
        };
        let bonus = Bonus {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.bonus_min_radius,
            active: false,
            last_spawned: start_ms,
        };
        let score = Score {
            value: 0,
            last_scored: start_ms,
            box_pos: Vec2::new(config.width - 130.0, 10.0),
            box_size: Vec2::new(120.0, 40.0),
        };

        log::info!(
            "breakout world: {}x{} field, paddle {}x{} (seed {})",
            config.width,
            config.height,
            config.paddle_width,
            config.paddle_height,
            seed
        );

        Ok(Self {
            config: config.clone(),
            phase: Phase::Playing,
            paddle,
            pointer: Pointer {
                pos: Vec2::new(config.width / 2.0, config.height / 2.0),
            },
            ball,
            bonus,
            score,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Record the latest pointer position; called by the input collaborator
    /// whenever the host reports movement.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.pos = Vec2::new(x, y);
    }

    /// Activate the bonus slot with random size, position, and velocity.
    pub(crate) fn spawn_bonus(&mut self, now_ms: f64) {
        let config = &self.config;
        let radius = self
            .rng
            .random_range(config.bonus_min_radius..=config.bonus_max_radius);
        let x = self.rng.random_range(radius..config.width - radius);
        let vx = self
            .rng
            .random_range(-config.bonus_max_speed..config.bonus_max_speed);
        // Downward speed in (0, max]: zero would leave the bonus hovering
        let vy = config.bonus_max_speed * (1.0 - self.rng.random::<f32>());

        self.bonus.pos = Vec2::new(x, radius);
        self.bonus.vel = Vec2::new(vx, vy);
        self.bonus.radius = radius;
        self.bonus.active = true;
        self.bonus.last_spawned = now_ms;
        log::debug!("bonus spawned at {:?} (r={radius:.1})", self.bonus.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_places_paddle_on_the_floor() {
        let config = BreakoutConfig::default();
        let world = BreakoutWorld::new(&config, 1, 0.0).unwrap();
        assert_eq!(world.paddle.top(), config.height - config.paddle_height);
        assert_eq!(world.paddle.width, 400.0);
        assert_eq!(world.paddle.height, 50.0);
        assert!(!world.bonus.active);
        assert_eq!(world.score.value, 0);
        assert_eq!(world.phase, Phase::Playing);
    }

    #[test]
    fn spawn_bonus_respects_configured_ranges() {
        let config = BreakoutConfig::default();
        let mut world = BreakoutWorld::new(&config, 9, 0.0).unwrap();
        for t in 0..50 {
            world.spawn_bonus(t as f64);
            let b = &world.bonus;
            assert!(b.active);
            assert!(b.radius >= config.bonus_min_radius && b.radius <= config.bonus_max_radius);
            assert!(b.pos.x >= b.radius && b.pos.x <= config.width - b.radius);
            assert!(b.vel.y > 0.0 && b.vel.y <= config.bonus_max_speed);
            assert!(b.vel.x.abs() <= config.bonus_max_speed);
            assert_eq!(b.last_spawned, t as f64);
        }
    }

    #[test]
    fn set_pointer_overwrites_latest_position() {
        let mut world = BreakoutWorld::new(&BreakoutConfig::default(), 1, 0.0).unwrap();
        world.set_pointer(42.0, 77.0);
        world.set_pointer(50.0, 80.0);
        assert_eq!(world.pointer.pos, Vec2::new(50.0, 80.0));
    }
}
