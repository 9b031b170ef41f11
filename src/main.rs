//! Polybounce headless demo
//!
//! Drives both worlds with synthetic 60 Hz frame timestamps through the
//! fixed-step loop, with no renderer attached. Useful for eyeballing the
//! simulations via logs and as a smoke test of the full stack.

use polybounce::breakout::BreakoutWorld;
use polybounce::shapes::ShapeWorld;
use polybounce::{
    BreakoutConfig, GameLoop, ManualHost, NullRenderer, Result, ShapesConfig,
};

/// Synthetic display refresh interval in ms.
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB0BA);
    log::info!("polybounce demo, seed {seed}");

    run_shapes(seed)?;
    run_breakout(seed)?;
    Ok(())
}

/// Run the shapes sandbox for ten simulated seconds.
fn run_shapes(seed: u64) -> Result<()> {
    let config = ShapesConfig {
        hexagons: 60,
        triangles: 60,
        circles: 10,
        ..Default::default()
    };
    let world = ShapeWorld::new(&config, seed)?;
    let spawned = world.shapes.len();

    let mut host = ManualHost::new();
    let mut game = GameLoop::new(world, 0.0, config.tick_length_ms)?;
    game.start(&mut host);

    let mut t_frame = 0.0;
    while t_frame < 10_000.0 && game.is_running() {
        t_frame += FRAME_MS;
        game.frame(t_frame, &mut host, &mut NullRenderer);
    }

    log::info!(
        "shapes: {} of {} entities still alive after 10s",
        game.sim.shapes.len(),
        spawned
    );
    game.stop(&mut host);
    Ok(())
}

/// Run the breakout game with a pointer that slowly sweeps the field, until
/// game over or one simulated minute.
fn run_breakout(seed: u64) -> Result<()> {
    let config = BreakoutConfig::default();
    let world = BreakoutWorld::new(&config, seed, 0.0)?;

    let mut host = ManualHost::new();
    let mut game = GameLoop::new(world, 0.0, config.tick_length_ms)?;
    game.start(&mut host);

    let mut t_frame = 0.0;
    while t_frame < 60_000.0 && game.is_running() {
        t_frame += FRAME_MS;
        // Sweep the pointer back and forth across the playfield
        let sweep = ((t_frame / 4_000.0 * std::f64::consts::TAU).sin() as f32 + 1.0) / 2.0;
        let x = sweep * (config.width - config.paddle_width);
        game.sim.set_pointer(x, config.height);
        game.frame(t_frame, &mut host, &mut NullRenderer);
    }

    log::info!(
        "breakout: score {} after {:.1}s ({:?})",
        game.sim.score.value,
        game.clock.last_tick / 1000.0,
        game.sim.phase
    );
    game.stop(&mut host);
    Ok(())
}
