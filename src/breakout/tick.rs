//! Breakout update step
//!
//! Runs once per fixed tick with the simulated-time value of that tick.
//! All schedules (speed ramp, score, bonus respawn) are measured against
//! simulated time, so catch-up bursts after a long frame gap fire them at
//! the same points a smooth run would.

use super::collision::{surface_contact, SurfaceContact};
use super::state::{BreakoutWorld, Phase};
use crate::schedule::{Simulate, TickOutcome};
use glam::Vec2;

/// Advance the breakout world by one fixed timestep.
///
/// Returns `Stop` when the ball reaches the floor; the caller (the game
/// loop) cancels its frame registration on that outcome.
pub fn tick(world: &mut BreakoutWorld, now_ms: f64) -> TickOutcome {
    if world.phase == Phase::GameOver {
        return TickOutcome::Stop;
    }

    let bounds = Vec2::new(world.config.width, world.config.height);

    // Paddle chases the pointer, closing a fixed fraction of the gap per
    // tick (exponential smoothing, never a teleport).
    let gap = world.pointer.pos.x - world.paddle.pos.x;
    world.paddle.pos.x += gap / world.config.paddle_damping;

    // Ball motion and contact resolution.
    world.ball.pos += world.ball.vel;
    match surface_contact(world.ball.pos, world.ball.radius, bounds, &world.paddle) {
        SurfaceContact::Floor => {
            world.phase = Phase::GameOver;
            log::info!("ball hit the floor: game over with score {}", world.score.value);
            return TickOutcome::Stop;
        }
        SurfaceContact::Paddle => world.ball.vel.y = -world.ball.vel.y,
        SurfaceContact::Wall => world.ball.vel.x = -world.ball.vel.x,
        SurfaceContact::Ceiling => world.ball.vel.y = -world.ball.vel.y,
        SurfaceContact::None => {}
    }

    // Difficulty ramp: multiplicative speed-up on both axes, once per
    // interval of simulated time.
    if now_ms - world.ball.last_speed_up >= world.config.speed_up_interval_ms {
        world.ball.vel *= world.config.speed_up_factor;
        world.ball.last_speed_up = now_ms;
        log::debug!("ball speed ramped to {:?}", world.ball.vel);
    }

    // Survival score: one point per simulated second.
    if now_ms - world.score.last_scored >= world.config.score_interval_ms {
        world.score.value += 1;
        world.score.last_scored = now_ms;
    }

    // Bonus lifecycle: an active bonus moves and resolves contacts; an
    // inactive one becomes eligible for respawn one interval after its
    // last spawn.
    if world.bonus.active {
        world.bonus.pos += world.bonus.vel;
        match surface_contact(world.bonus.pos, world.bonus.radius, bounds, &world.paddle) {
            SurfaceContact::Floor => {
                // Vanishes without penalty
                world.bonus.active = false;
            }
            SurfaceContact::Paddle => {
                world.bonus.active = false;
                world.score.value += world.config.bonus_reward;
                log::debug!("bonus collected, +{} points", world.config.bonus_reward);
            }
            SurfaceContact::Wall => world.bonus.vel.x = -world.bonus.vel.x,
            SurfaceContact::Ceiling => world.bonus.vel.y = -world.bonus.vel.y,
            SurfaceContact::None => {}
        }
    } else if now_ms - world.bonus.last_spawned >= world.config.bonus_interval_ms {
        world.spawn_bonus(now_ms);
    }

    TickOutcome::Continue
}

impl Simulate for BreakoutWorld {
    fn tick(&mut self, now_ms: f64) -> TickOutcome {
        tick(self, now_ms)
    }
}
