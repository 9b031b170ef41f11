//! Bouncing-shapes sandbox
//!
//! Hexagons, triangles, and circles move at constant velocity across a
//! rectangular playfield, swap velocities on confirmed pairwise collisions,
//! lose a life per collision, and are pruned at zero lives.

pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::{polygon_outline, segments_intersect};
pub use state::{Shape, ShapeKind, ShapeWorld};
pub use tick::tick;
