// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cubic-solver micro-benchmark.
//!
//! The workload solves a fixed set of cubic equations over and over, with
//! a [`Trigger`] fired immediately before and after. Only the time between
//! the triggers matters; the roots themselves are thrown away.
//!
//! ```
//! use cubic_bench::{run, HarnessConfig, WallClock};
//!
//! let mut clock = WallClock::new();
//! let summary = run(HarnessConfig::new(0), &mut clock);
//! assert_eq!(summary.iterations, 1);
//! assert!(clock.elapsed().is_some());
//! ```

mod config;
mod error;
mod trigger;
pub mod workload;

pub use config::{HarnessConfig, REPEAT_FACTOR};
pub use error::ConfigError;
pub use trigger::{NoopTrigger, Trigger, WallClock};

use tracing::debug;

/// What a run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Passes over the workload.
    pub iterations: u32,
    /// Solver calls, across all passes.
    pub solves: usize,
    /// Roots reported, across all calls.
    pub roots: usize,
}

/// Run the benchmark.
///
/// `trigger` is initialised, then started, then stopped once the last pass
/// is done. Nothing else happens between `start` and `stop`.
pub fn run<T: Trigger>(config: HarnessConfig, mut trigger: T) -> RunSummary {
    let iterations = config.outer_iterations();
    debug!(
        repeat_factor = config.repeat_factor,
        iterations, "starting cubic workload"
    );
    let mut out = [0.0; 3];
    let mut summary = RunSummary {
        iterations,
        ..RunSummary::default()
    };

    let mut work = workload::Workload::new();

    trigger.initialise();
    trigger.start();
    for _ in 0..iterations {
        let pass = work.run_pass(&mut out);
        summary.solves += pass.solves;
        summary.roots += pass.roots;
    }
    trigger.stop();

    summary
}
