//! Shapes update step
//!
//! Each tick: detect all colliding pairs, then apply velocity swaps and life
//! loss, then integrate motion with wall bounces, then prune dead shapes.
//! Detection and mutation are separate passes so the outcome does not depend
//! on mutation order during iteration.

use super::geometry::segments_intersect;
use super::state::{Shape, ShapeWorld};
use crate::schedule::{Simulate, TickOutcome};

/// Broad phase: bounding circles overlap.
pub(crate) fn broad_phase(a: &Shape, b: &Shape) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// Narrow phase: any edge of `a` crosses any edge of `b`.
///
/// Circles carry empty outlines, so a pair involving a circle never
/// confirms here; only the polygon kinds collide precisely.
pub(crate) fn narrow_phase(a: &Shape, b: &Shape) -> bool {
    for ea in a.outline.windows(2) {
        let a0 = a.pos + ea[0];
        let a1 = a.pos + ea[1];
        for eb in b.outline.windows(2) {
            let b0 = b.pos + eb[0];
            let b1 = b.pos + eb[1];
            if segments_intersect(a0, a1, b0, b1) {
                return true;
            }
        }
    }
    false
}

/// Advance the shapes world by one fixed timestep.
pub fn tick(world: &mut ShapeWorld) {
    // Pass 1: collect confirmed collision pairs over all unordered pairs.
    let mut collisions: Vec<(usize, usize)> = Vec::new();
    let shapes = &world.shapes;
    for i in 0..shapes.len() {
        for j in (i + 1)..shapes.len() {
            if broad_phase(&shapes[i], &shapes[j]) && narrow_phase(&shapes[i], &shapes[j]) {
                collisions.push((i, j));
            }
        }
    }

    // Pass 2: mass-independent elastic response, applied in pair order.
    // Overlapping shapes are not separated; a slow pair may re-collide on
    // the next tick (accepted simplification).
    for (i, j) in collisions {
        let vi = world.shapes[i].vel;
        let vj = world.shapes[j].vel;
        world.shapes[i].vel = vj;
        world.shapes[j].vel = vi;
        world.shapes[i].lose_life();
        world.shapes[j].lose_life();
    }

    // Motion plus elastic wall bounce. The bounce is re-checked every tick
    // with no hysteresis; a shape resting on a boundary flips repeatedly.
    let (width, height) = (world.width, world.height);
    for shape in &mut world.shapes {
        shape.pos += shape.vel;
        if shape.pos.x - shape.radius < 0.0 || shape.pos.x + shape.radius > width {
            shape.vel.x = -shape.vel.x;
        }
        if shape.pos.y - shape.radius < 0.0 || shape.pos.y + shape.radius > height {
            shape.vel.y = -shape.vel.y;
        }
    }

    // A shape at zero lives must not survive into the next tick's registry.
    world.shapes.retain(|s| s.is_alive());
}

impl Simulate for ShapeWorld {
    fn tick(&mut self, _now_ms: f64) -> TickOutcome {
        tick(self);
        TickOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::state::ShapeKind;
    use glam::Vec2;

    fn triangle(id: u32, pos: Vec2, vel: Vec2) -> Shape {
        Shape::new(id, ShapeKind::Triangle, pos, vel, 10.0, 0.0)
    }

    fn world_with(shapes: Vec<Shape>) -> ShapeWorld {
        ShapeWorld {
            width: 800.0,
            height: 600.0,
            seed: 0,
            shapes,
        }
    }

    #[test]
    fn broad_phase_is_distance_vs_radius_sum() {
        let a = triangle(1, Vec2::new(0.0, 0.0), Vec2::ZERO);
        let b = triangle(2, Vec2::new(19.0, 0.0), Vec2::ZERO);
        let c = triangle(3, Vec2::new(21.0, 0.0), Vec2::ZERO);
        assert!(broad_phase(&a, &b));
        assert!(!broad_phase(&a, &c));
    }

    #[test]
    fn narrow_phase_confirms_overlapping_triangles() {
        let a = triangle(1, Vec2::new(100.0, 100.0), Vec2::ZERO);
        let b = triangle(2, Vec2::new(105.0, 100.0), Vec2::ZERO);
        assert!(narrow_phase(&a, &b));

        let far = triangle(3, Vec2::new(150.0, 100.0), Vec2::ZERO);
        assert!(!narrow_phase(&a, &far));
    }

    #[test]
    fn circles_never_pass_narrow_phase() {
        let circle =
            Shape::new(1, ShapeKind::Circle, Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, 0.0);
        let tri = triangle(2, Vec2::new(102.0, 100.0), Vec2::ZERO);
        assert!(broad_phase(&circle, &tri));
        assert!(!narrow_phase(&circle, &tri));
    }

    #[test]
    fn collision_swaps_velocities_and_costs_a_life() {
        let a = triangle(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0));
        let b = triangle(2, Vec2::new(105.0, 100.0), Vec2::new(-1.0, 0.5));
        let mut world = world_with(vec![a, b]);

        tick(&mut world);

        // Swapped velocities, then one integration step with the new values
        assert_eq!(world.shapes[0].vel, Vec2::new(-1.0, 0.5));
        assert_eq!(world.shapes[1].vel, Vec2::new(1.0, 0.0));
        assert_eq!(world.shapes[0].lives, 2);
        assert_eq!(world.shapes[1].lives, 2);
        assert_eq!(world.shapes[0].pos, Vec2::new(99.0, 100.5));
    }

    #[test]
    fn third_collision_prunes_the_pair() {
        // Stationary overlapping pair: velocity swap leaves both at rest, so
        // they re-collide every tick until their lives run out.
        let a = triangle(1, Vec2::new(100.0, 100.0), Vec2::ZERO);
        let b = triangle(2, Vec2::new(105.0, 100.0), Vec2::ZERO);
        let mut world = world_with(vec![a, b]);

        tick(&mut world);
        assert_eq!(world.shapes.len(), 2);
        assert_eq!(world.shapes[0].lives, 2);
        tick(&mut world);
        assert_eq!(world.shapes[0].lives, 1);
        tick(&mut world);
        assert!(world.shapes.is_empty());
    }

    #[test]
    fn wall_bounce_inverts_velocity_component() {
        let mut world = world_with(vec![triangle(
            1,
            Vec2::new(796.0, 300.0),
            Vec2::new(3.0, 0.0),
        )]);
        tick(&mut world);
        let s = &world.shapes[0];
        assert_eq!(s.vel, Vec2::new(-3.0, 0.0));
        assert_eq!(s.pos, Vec2::new(799.0, 300.0));
    }

    #[test]
    fn top_wall_bounce_inverts_vy_only() {
        let mut world = world_with(vec![triangle(
            1,
            Vec2::new(400.0, 12.0),
            Vec2::new(2.0, -4.0),
        )]);
        tick(&mut world);
        let s = &world.shapes[0];
        assert_eq!(s.vel, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn non_colliding_shapes_keep_velocities() {
        let a = triangle(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0));
        let b = triangle(2, Vec2::new(300.0, 300.0), Vec2::new(-1.0, 0.0));
        let mut world = world_with(vec![a, b]);
        tick(&mut world);
        assert_eq!(world.shapes[0].vel, Vec2::new(1.0, 1.0));
        assert_eq!(world.shapes[1].vel, Vec2::new(-1.0, 0.0));
        assert_eq!(world.shapes[0].lives, 3);
    }
}
