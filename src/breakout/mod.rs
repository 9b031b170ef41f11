//! Breakout-style paddle game
//!
//! Four singleton entities (paddle, ball, bonus, score) plus the latest
//! pointer position. The ball speeds up on a fixed simulated-time schedule,
//! the score ticks up once per simulated second, and an inactive bonus
//! respawns on its own interval. Ball-on-floor is the terminal state.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{surface_contact, SurfaceContact};
pub use state::{Ball, Bonus, BreakoutWorld, Paddle, Phase, Pointer, Score};
pub use tick::tick;
