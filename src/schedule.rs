//! Fixed-step clock and frame loop
//!
//! Converts variable-rate frame callbacks into a deterministic number of
//! fixed-length simulation ticks. Rendering happens exactly once per frame,
//! after all pending ticks; updates always see simulated time (the advancing
//! tick counter), never the wall-clock frame timestamp.

use crate::error::{Error, Result};
use crate::render::Renderer;

/// Outcome of a single simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking.
    Continue,
    /// Terminal state reached; the loop must cancel its frame registration.
    Stop,
}

/// A world that can be advanced by one fixed timestep.
///
/// `now_ms` is the simulated-time value of the tick being applied, i.e. the
/// clock's `last_tick` after advancing by one tick length.
pub trait Simulate {
    fn tick(&mut self, now_ms: f64) -> TickOutcome;
}

/// Registration token returned by the host scheduler, needed to cancel the
/// pending frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub u64);

/// Host scheduler collaborator: supplies one callback per display refresh
/// and accepts registration/cancellation. Cancellation is synchronous.
pub trait FrameHost {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Simulation timing state.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Simulated time of the most recently applied tick, in ms.
    pub last_tick: f64,
    /// Frame timestamp of the most recent render, in ms.
    pub last_render: f64,
    /// Fixed tick length in ms.
    pub tick_length: f64,
}

impl Clock {
    pub fn new(start_ms: f64, tick_length_ms: f64) -> Result<Self> {
        if !tick_length_ms.is_finite() || tick_length_ms <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "tick length must be a positive finite number of ms, got {tick_length_ms}"
            )));
        }
        Ok(Self {
            last_tick: start_ms,
            last_render: start_ms,
            tick_length: tick_length_ms,
        })
    }

    /// Whole tick lengths elapsed since the last simulated tick.
    ///
    /// Zero unless `t_frame` is strictly past the next tick boundary. There
    /// is deliberately no upper clamp: a long pause produces a burst of
    /// catch-up ticks.
    pub fn pending_ticks(&self, t_frame: f64) -> u64 {
        let next_tick = self.last_tick + self.tick_length;
        if t_frame > next_tick {
            ((t_frame - self.last_tick) / self.tick_length).floor() as u64
        } else {
            0
        }
    }
}

/// Drives one simulation world: per frame, re-registers with the host,
/// applies pending fixed-step ticks in order, then renders once.
pub struct GameLoop<S> {
    pub clock: Clock,
    pub sim: S,
    handle: Option<FrameHandle>,
}

impl<S: Simulate> GameLoop<S> {
    pub fn new(sim: S, start_ms: f64, tick_length_ms: f64) -> Result<Self> {
        Ok(Self {
            clock: Clock::new(start_ms, tick_length_ms)?,
            sim,
            handle: None,
        })
    }

    /// Register the first frame callback with the host.
    pub fn start(&mut self, host: &mut dyn FrameHost) {
        if self.handle.is_none() {
            self.handle = Some(host.request_frame());
        }
    }

    /// One frame callback: re-register, catch up on ticks, render.
    ///
    /// A `Stop` outcome mid-burst cancels the just-registered frame and
    /// skips the remaining catch-up ticks; the final state still gets one
    /// render so the terminal frame is visible.
    pub fn frame<R: Renderer<S>>(
        &mut self,
        t_frame: f64,
        host: &mut dyn FrameHost,
        renderer: &mut R,
    ) {
        if self.handle.is_none() {
            return;
        }
        self.handle = Some(host.request_frame());

        let num_ticks = self.clock.pending_ticks(t_frame);
        for _ in 0..num_ticks {
            self.clock.last_tick += self.clock.tick_length;
            if self.sim.tick(self.clock.last_tick) == TickOutcome::Stop {
                self.stop(host);
                break;
            }
        }

        renderer.draw(&self.sim, t_frame);
        self.clock.last_render = t_frame;
    }

    /// Cancel the pending frame registration. After this, `frame` is a no-op
    /// until `start` is called again.
    pub fn stop(&mut self, host: &mut dyn FrameHost) {
        if let Some(handle) = self.handle.take() {
            host.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

/// A host scheduler for headless runs and tests: hands out sequential
/// handles and records cancellations.
#[derive(Debug, Default)]
pub struct ManualHost {
    next_handle: u64,
    cancelled: Vec<FrameHandle>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_cancelled(&self, handle: FrameHandle) -> bool {
        self.cancelled.contains(&handle)
    }

    pub fn cancel_count(&self) -> usize {
        self.cancelled.len()
    }
}

impl FrameHost for ManualHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_handle += 1;
        FrameHandle(self.next_handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}
