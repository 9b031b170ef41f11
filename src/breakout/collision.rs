//! Boundary and paddle contact tests
//!
//! Checks return an explicit contact event for the caller to match on;
//! there is no callback-driven control flow. Ball and bonus share the same
//! contact rules and differ only in how the caller resolves each event.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Paddle;

/// Surface contact event for a circular item against the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceContact {
    None,
    /// Bottom edge of the playfield: terminal for the ball, despawn for the
    /// bonus.
    Floor,
    /// Left or right edge.
    Wall,
    /// Top edge.
    Ceiling,
    Paddle,
}

/// Classify the contact of a circular item at `pos` with bounding `radius`
/// against the playfield `bounds` (width, height) and the paddle.
///
/// Floor wins over everything (it is terminal); the paddle is checked before
/// the walls so a corner graze bounces instead of ending the run.
pub fn surface_contact(pos: Vec2, radius: f32, bounds: Vec2, paddle: &Paddle) -> SurfaceContact {
    if pos.y + radius >= bounds.y {
        return SurfaceContact::Floor;
    }
    if paddle_contact(pos, radius, paddle) {
        return SurfaceContact::Paddle;
    }
    if pos.x - radius <= 0.0 || pos.x + radius >= bounds.x {
        return SurfaceContact::Wall;
    }
    if pos.y - radius <= 0.0 {
        return SurfaceContact::Ceiling;
    }
    SurfaceContact::None
}

/// One-sided box overlap biased toward hits from above: the item's bottom
/// edge must have reached the paddle's top, its horizontal extent must
/// overlap the paddle's, and its top edge must still be above the paddle's
/// vertical centre. Approaches from below or the side are intentionally not
/// handled.
fn paddle_contact(pos: Vec2, radius: f32, paddle: &Paddle) -> bool {
    let bottom = pos.y + radius;
    let top = pos.y - radius;
    bottom >= paddle.top()
        && top <= paddle.center_y()
        && pos.x + radius >= paddle.left()
        && pos.x - radius <= paddle.right()
}
