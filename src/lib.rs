//! Polybounce - two fixed-timestep canvas toys
//!
//! Core modules:
//! - `shapes`: bouncing-polygon sandbox (pairwise collisions, lives, pruning)
//! - `breakout`: paddle/ball/bonus game with score and speed ramps
//! - `schedule`: fixed-step clock and frame loop shared by both worlds
//! - `config`: named tuning parameters with fail-fast validation
//! - `render`: renderer collaborator trait (painting stays outside the crate)
//!
//! Both worlds are deterministic: seeded RNG only, fixed timestep only, no
//! platform dependencies. The host drives the loop with monotonically
//! increasing frame timestamps in milliseconds.

pub mod breakout;
pub mod config;
pub mod error;
pub mod render;
pub mod schedule;
pub mod shapes;

pub use config::{BreakoutConfig, ShapesConfig};
pub use error::{Error, Result};
pub use render::{NullRenderer, Renderer};
pub use schedule::{Clock, FrameHandle, FrameHost, GameLoop, ManualHost, Simulate, TickOutcome};
