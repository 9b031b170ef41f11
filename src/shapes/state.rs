//! Shape entities and the shapes world registry
//!
//! All state is created up front from a seeded RNG; the update step only
//! mutates and prunes, so a fixed seed plus a fixed frame-timestamp sequence
//! reproduces the run bit for bit.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::polygon_outline;
use crate::config::ShapesConfig;
use crate::error::Result;

/// Display colors keyed to remaining lives.
pub const BASE_COLOR: &str = "#808080";
pub const WARNING_COLOR: &str = "#F8F32B";
pub const CRITICAL_COLOR: &str = "#991400";

/// Shape kind. Closed set; each variant knows its own outline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Hexagon,
    Triangle,
    Circle,
}

impl ShapeKind {
    /// Polygon side count, or `None` for the degenerate circle: circles
    /// carry an empty outline and can never pass the edge-intersection
    /// narrow phase.
    pub fn sides(self) -> Option<u32> {
        match self {
            ShapeKind::Hexagon => Some(6),
            ShapeKind::Triangle => Some(3),
            ShapeKind::Circle => None,
        }
    }
}

/// A single bouncing shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: u32,
    /// Centre position, top-left-origin pixel coordinates.
    pub pos: Vec2,
    /// Velocity in pixels per tick.
    pub vel: Vec2,
    /// Bounding radius for the broad phase.
    pub radius: f32,
    pub kind: ShapeKind,
    /// Closed ring of offsets from centre, precomputed at spawn.
    pub outline: Vec<Vec2>,
    /// Collisions left before pruning; starts at 3.
    pub lives: u8,
}

impl Shape {
    pub fn new(id: u32, kind: ShapeKind, pos: Vec2, vel: Vec2, radius: f32, base_angle: f32) -> Self {
        let outline = match kind.sides() {
            Some(sides) => polygon_outline(radius, base_angle, sides),
            None => Vec::new(),
        };
        Self {
            id,
            pos,
            vel,
            radius,
            kind,
            outline,
            lives: 3,
        }
    }

    /// Three-stage color ramp from remaining lives.
    pub fn color(&self) -> &'static str {
        match self.lives {
            2 => WARNING_COLOR,
            0 | 1 => CRITICAL_COLOR,
            _ => BASE_COLOR,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}

/// The shapes world: playfield bounds plus the live entity registry.
#[derive(Debug, Clone)]
pub struct ShapeWorld {
    pub width: f32,
    pub height: f32,
    pub seed: u64,
    /// Live entities. Shapes at zero lives are pruned at end of tick and
    /// never appear here between ticks.
    pub shapes: Vec<Shape>,
}

impl ShapeWorld {
    /// Spawn the configured population on a shuffled interior lattice, one
    /// shape per cell, with random base rotation and velocity.
    pub fn new(config: &ShapesConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);

        let cols = (config.width / config.grid).floor() as u32;
        let rows = (config.height / config.grid).floor() as u32;
        let mut cells: Vec<(u32, u32)> = Vec::new();
        for i in 1..cols.saturating_sub(1) {
            for j in 1..rows.saturating_sub(1) {
                cells.push((i, j));
            }
        }
        cells.shuffle(&mut rng);
        let mut cell_iter = cells.into_iter();

        let mut shapes = Vec::with_capacity(config.shape_count());
        let mut next_id = 0u32;
        let population = [
            (ShapeKind::Hexagon, config.hexagons, config.hexagon_radius),
            (ShapeKind::Triangle, config.triangles, config.triangle_radius),
            (ShapeKind::Circle, config.circles, config.circle_radius),
        ];
        for (kind, count, radius) in population {
            for _ in 0..count {
                // Capacity was checked in validate(); the iterator cannot
                // run out here.
                let Some((i, j)) = cell_iter.next() else { break };
                let pos = Vec2::new(i as f32 * config.grid, j as f32 * config.grid);
                let divisor: u32 = rng.random_range(1..10);
                let base_angle = std::f32::consts::TAU / divisor as f32;
                let vel = Vec2::new(
                    rng.random_range(-config.max_speed..config.max_speed),
                    rng.random_range(-config.max_speed..config.max_speed),
                );
                next_id += 1;
                shapes.push(Shape::new(next_id, kind, pos, vel, radius, base_angle));
            }
        }

        log::info!(
            "shapes world: {} entities on a {}x{} field (seed {})",
            shapes.len(),
            config.width,
            config.height,
            seed
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            seed,
            shapes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ShapesConfig {
        ShapesConfig {
            width: 400.0,
            height: 300.0,
            hexagons: 10,
            triangles: 10,
            circles: 5,
            ..Default::default()
        }
    }

    #[test]
    fn spawns_configured_population() {
        let world = ShapeWorld::new(&small_config(), 7).unwrap();
        assert_eq!(world.shapes.len(), 25);
        let hexes = world
            .shapes
            .iter()
            .filter(|s| s.kind == ShapeKind::Hexagon)
            .count();
        assert_eq!(hexes, 10);
    }

    #[test]
    fn spawn_cells_are_distinct() {
        let world = ShapeWorld::new(&small_config(), 7).unwrap();
        for (i, a) in world.shapes.iter().enumerate() {
            for b in &world.shapes[i + 1..] {
                assert!(a.pos != b.pos, "shapes {} and {} share a cell", a.id, b.id);
            }
        }
    }

    #[test]
    fn outlines_match_kind() {
        let world = ShapeWorld::new(&small_config(), 7).unwrap();
        for shape in &world.shapes {
            match shape.kind {
                ShapeKind::Hexagon => assert_eq!(shape.outline.len(), 7),
                ShapeKind::Triangle => assert_eq!(shape.outline.len(), 4),
                ShapeKind::Circle => assert!(shape.outline.is_empty()),
            }
        }
    }

    #[test]
    fn same_seed_same_world() {
        let a = ShapeWorld::new(&small_config(), 42).unwrap();
        let b = ShapeWorld::new(&small_config(), 42).unwrap();
        assert_eq!(a.shapes, b.shapes);

        let c = ShapeWorld::new(&small_config(), 43).unwrap();
        assert_ne!(a.shapes, c.shapes);
    }

    #[test]
    fn color_ramp_follows_lives() {
        let mut shape = Shape::new(
            1,
            ShapeKind::Triangle,
            Vec2::ZERO,
            Vec2::ZERO,
            5.0,
            0.0,
        );
        assert_eq!(shape.color(), BASE_COLOR);
        shape.lose_life();
        assert_eq!(shape.color(), WARNING_COLOR);
        shape.lose_life();
        assert_eq!(shape.color(), CRITICAL_COLOR);
        shape.lose_life();
        assert!(!shape.is_alive());
    }
}
