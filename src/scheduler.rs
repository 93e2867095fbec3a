//! Fixed-timestep tick scheduler.
//!
//! The loop is driven by a host's per-frame callback rather than a timer:
//! each frame it invokes `draw` unconditionally (for smooth rendering) and
//! `update` only when a full tick interval has elapsed since the last
//! accepted tick. If more than one interval elapses between frames only one
//! tick is applied; skipped ticks are never replayed, which caps the
//! simulation rate instead of letting it burst after a stall.
//!
//! The binding to a concrete frame source is the host's concern: call
//! [`GameLoop::frame`] once per display refresh, or [`GameLoop::frame_at`]
//! with an explicit clock.

use std::time::{Duration, Instant};

use crate::constants::DEFAULT_TICK_INTERVAL;

/// Fixed-timestep driver around an `{update, draw}` callback pair.
pub struct GameLoop {
    update: Box<dyn FnMut()>,
    draw: Box<dyn FnMut()>,
    tick_interval: Duration,
    running: bool,
    last_tick: Instant,
}

impl GameLoop {
    /// Creates a loop with the default tick interval (5 ticks per second).
    pub fn new(update: Box<dyn FnMut()>, draw: Box<dyn FnMut()>) -> Self {
        Self::with_tick_interval(update, draw, DEFAULT_TICK_INTERVAL)
    }

    /// Creates a loop with a custom tick interval.
    pub fn with_tick_interval(update: Box<dyn FnMut()>, draw: Box<dyn FnMut()>, tick_interval: Duration) -> Self {
        Self {
            update,
            draw,
            tick_interval,
            running: false,
            last_tick: Instant::now(),
        }
    }

    /// Starts the loop. Idempotent: starting a running loop does not reset
    /// its tick timing.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Starts the loop against an explicit clock reading.
    pub fn start_at(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_tick = now;
    }

    /// Stops the loop. Idempotent and cooperative: a frame callback arriving
    /// after `stop` observes the running flag and does nothing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Processes one host frame using the current time.
    pub fn frame(&mut self) {
        self.frame_at(Instant::now());
    }

    /// Processes one host frame at an explicit clock reading: at most one
    /// `update` when a tick interval has elapsed, then one `draw`.
    pub fn frame_at(&mut self, now: Instant) {
        if !self.running {
            return;
        }

        if now.duration_since(self.last_tick) >= self.tick_interval {
            (self.update)();
            self.last_tick = now;
        }

        (self.draw)();
    }
}
