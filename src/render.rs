//! Renderer collaborator seam
//!
//! Painting lives outside this crate. A renderer consumes the current world
//! state once per frame, after all pending ticks are applied, and must not
//! mutate it (enforced by the shared reference).

/// Per-frame renderer for a world of type `S`.
pub trait Renderer<S> {
    fn draw(&mut self, state: &S, t_frame: f64);
}

/// Renderer that paints nothing; used for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl<S> Renderer<S> for NullRenderer {
    fn draw(&mut self, _state: &S, _t_frame: f64) {}
}
