// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing hooks around the measured workload.
//!
//! On a bare-metal target a trigger usually toggles a GPIO pin that an
//! external probe watches. On a host it can simply read the clock.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

/// Marks the boundaries of the measured region.
///
/// The harness calls [`initialise`](Trigger::initialise) once, then
/// [`start`](Trigger::start) immediately before the workload and
/// [`stop`](Trigger::stop) immediately after it.
pub trait Trigger {
    /// Prepare the timing mechanism. Not part of the measured region.
    fn initialise(&mut self);
    /// The workload begins.
    fn start(&mut self);
    /// The workload is done.
    fn stop(&mut self);
}

impl<T: Trigger + ?Sized> Trigger for &mut T {
    fn initialise(&mut self) {
        (**self).initialise();
    }
    fn start(&mut self) {
        (**self).start();
    }
    fn stop(&mut self) {
        (**self).stop();
    }
}

/// A trigger that does nothing, for when timing happens outside the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTrigger;

impl Trigger for NoopTrigger {
    fn initialise(&mut self) {}
    fn start(&mut self) {}
    fn stop(&mut self) {}
}

/// A trigger that measures elapsed wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock {
    started: Option<Instant>,
    elapsed: Option<Duration>,
}

impl WallClock {
    /// A clock that has not measured anything yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time between the last `start` and `stop`, if both have happened.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }
}

impl Trigger for WallClock {
    fn initialise(&mut self) {
        *self = Self::default();
        debug!("wall clock trigger initialised");
    }

    fn start(&mut self) {
        self.elapsed = None;
        self.started = Some(Instant::now());
    }

    fn stop(&mut self) {
        let now = Instant::now();
        match self.started.take() {
            Some(started) => {
                let elapsed = now - started;
                self.elapsed = Some(elapsed);
                debug!(?elapsed, "wall clock trigger stopped");
            }
            None => warn!("wall clock trigger stopped without being started"),
        }
    }
}
