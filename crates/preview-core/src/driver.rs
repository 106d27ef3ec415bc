//! Timer-driven render loop.
//!
//! The driver turns fixed-interval ticks into redraw requests: on each tick
//! it snapshots the store and hands the snapshot to the surface's paint
//! callback. Pacing comes purely from the timer; vertical sync is off.

use crate::params::ParamStore;
use crate::state::RenderState;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    /// A tick fired before the viewport finished its one-time load.
    /// Recoverable: the frame is skipped, the loop keeps running.
    #[error("render surface not initialized yet")]
    UninitializedSurface,
}

/// The embeddable viewport seam. The core supplies frame content through
/// these callbacks only; the visual chrome lives behind them.
pub trait RenderSurface {
    /// One-time context initialization callback.
    fn load(&mut self);
    fn loaded(&self) -> bool;
    /// Per-frame redraw callback consuming the current snapshot.
    fn paint(&mut self, frame: &RenderState);
}

/// Periodic-tick primitive with a fixed interval set at construction.
///
/// While disabled the accumulator stays empty, so a long disabled span never
/// bursts on re-enable.
#[derive(Clone, Debug)]
pub struct FrameTimer {
    interval: Duration,
    enabled: bool,
    accum: Duration,
}

impl FrameTimer {
    /// Timers ship enabled; the preview runs without an explicit arm step.
    /// A zero interval is raised to one millisecond so `poll` always
    /// terminates.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            enabled: true,
            accum: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the enabled flag; any partial interval is discarded so the next
    /// tick starts from a clean phase.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.accum = Duration::ZERO;
        }
        self.enabled = enabled;
    }

    /// Advance by `dt` and return how many whole intervals elapsed.
    pub fn poll(&mut self, dt: Duration) -> u32 {
        if !self.enabled {
            return 0;
        }
        self.accum += dt;
        let mut fired = 0;
        while self.accum >= self.interval {
            self.accum -= self.interval;
            fired += 1;
        }
        fired
    }
}

/// Driver states: `Idle` until armed, `Armed` while the timer runs; each
/// tick passes through a redraw and returns to armed idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Armed,
}

/// Timer-driven tick source for the render surface.
pub struct RenderDriver {
    timer: FrameTimer,
}

impl RenderDriver {
    /// A new driver starts armed.
    pub fn new(interval: Duration) -> Self {
        Self {
            timer: FrameTimer::new(interval),
        }
    }

    pub fn state(&self) -> DriverState {
        if self.timer.enabled() {
            DriverState::Armed
        } else {
            DriverState::Idle
        }
    }

    pub fn arm(&mut self) {
        self.timer.set_enabled(true);
    }

    pub fn disarm(&mut self) {
        self.timer.set_enabled(false);
    }

    pub fn toggle(&mut self) {
        let enabled = self.timer.enabled();
        self.timer.set_enabled(!enabled);
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Advance the timer and, if at least one tick fired, paint one frame
    /// from a fresh snapshot. Several elapsed intervals coalesce into a
    /// single redraw. Returns the number of frames painted (0 or 1).
    pub fn pump(
        &mut self,
        dt: Duration,
        store: &ParamStore,
        surface: &mut dyn RenderSurface,
    ) -> Result<u32, DriverError> {
        if self.timer.poll(dt) == 0 {
            return Ok(0);
        }
        if !surface.loaded() {
            return Err(DriverError::UninitializedSurface);
        }
        let frame = store.snapshot();
        surface.paint(&frame);
        Ok(1)
    }
}
