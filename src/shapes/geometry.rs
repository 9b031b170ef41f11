//! Polygon outlines and segment intersection
//!
//! The narrow-phase test works on precomputed local outlines: a closed ring
//! of offsets from the shape's centre, generated once at spawn from a random
//! base rotation.

use glam::Vec2;

/// Build a closed regular-polygon outline of `sides` vertices with the given
/// circumradius, rotated by `base_angle`.
///
/// Returns `sides + 1` points: the first vertex is repeated at the end so
/// consecutive pairs enumerate every edge.
pub fn polygon_outline(radius: f32, base_angle: f32, sides: u32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(sides as usize + 1);
    for i in 0..=sides {
        let angle = base_angle + (i as f32) * std::f32::consts::TAU / sides as f32;
        points.push(Vec2::new(radius * angle.cos(), radius * angle.sin()));
    }
    points
}

/// Parametric segment intersection test for (a->b) against (c->d).
///
/// Solves for parameters r, s such that the crossing point is a convex
/// combination on both segments; a hit requires both in [0, 1]. A near-zero
/// denominator means the segments are parallel (including collinear,
/// overlapping or not); by convention that reports no intersection instead
/// of propagating NaN.
pub fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let denom = (b.x - a.x) * (d.y - c.y) - (b.y - a.y) * (d.x - c.x);
    if denom.abs() <= f32::EPSILON {
        return false;
    }
    let r = ((a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y)) / denom;
    let s = ((a.y - c.y) * (b.x - a.x) - (a.x - c.x) * (b.y - a.y)) / denom;
    (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_closes_the_ring() {
        let hex = polygon_outline(5.0, 0.3, 6);
        assert_eq!(hex.len(), 7);
        assert!((hex[0] - hex[6]).length() < 1e-4);

        let tri = polygon_outline(5.0, 0.0, 3);
        assert_eq!(tri.len(), 4);
        // All vertices on the circumcircle
        for p in &tri {
            assert!((p.length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn crossing_segments_intersect() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 10.0);
        let c = Vec2::new(0.0, 10.0);
        let d = Vec2::new(10.0, 0.0);
        assert!(segments_intersect(a, b, c, d));
    }

    #[test]
    fn separated_segments_do_not_intersect() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);
        let c = Vec2::new(5.0, 5.0);
        let d = Vec2::new(6.0, 6.0);
        assert!(!segments_intersect(a, b, c, d));
    }

    #[test]
    fn lines_cross_but_segments_do_not() {
        // The infinite lines intersect at (5, 0), outside both segments
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);
        let c = Vec2::new(5.0, -1.0);
        let d = Vec2::new(5.0, -0.5);
        assert!(!segments_intersect(a, b, c, d));
    }

    #[test]
    fn parallel_segments_report_no_intersection() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(0.0, 1.0);
        let d = Vec2::new(10.0, 1.0);
        assert!(!segments_intersect(a, b, c, d));
    }

    #[test]
    fn collinear_overlapping_segments_report_no_intersection() {
        // Degenerate denominator: treated as no intersection, no NaN escape
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(5.0, 0.0);
        let d = Vec2::new(15.0, 0.0);
        assert!(!segments_intersect(a, b, c, d));
    }

    #[test]
    fn shared_endpoint_counts_as_intersection() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(10.0, 0.0);
        let d = Vec2::new(10.0, 10.0);
        assert!(segments_intersect(a, b, c, d));
    }
}
