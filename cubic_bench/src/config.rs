// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How much work a run does.

use crate::ConfigError;

/// The default repeat factor.
///
/// Each run performs `(REPEAT_FACTOR >> 7) + 1` passes over the workload.
pub const REPEAT_FACTOR: u32 = 4096;

/// Build-time override for [`REPEAT_FACTOR`].
///
/// Set `CUBIC_REPEAT_FACTOR` in the environment of `cargo build` to scale a
/// binary for a slower or faster target without editing the source.
const BUILD_REPEAT_FACTOR: Option<&str> = option_env!("CUBIC_REPEAT_FACTOR");

/// Configuration for a benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Scales the number of passes over the workload.
    pub repeat_factor: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(REPEAT_FACTOR)
    }
}

impl HarnessConfig {
    /// A configuration with the given repeat factor.
    pub const fn new(repeat_factor: u32) -> Self {
        Self { repeat_factor }
    }

    /// The configuration baked in at build time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepeatFactor`] if `CUBIC_REPEAT_FACTOR`
    /// was set when building but does not parse as a `u32`.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match BUILD_REPEAT_FACTOR {
            Some(value) => Self::parse(value),
            None => Ok(Self::default()),
        }
    }

    /// Parse a repeat factor written as a decimal integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepeatFactor`] if `value` is not a
    /// valid `u32`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        value
            .parse()
            .map(Self::new)
            .map_err(|source| ConfigError::invalid_repeat_factor(value, source))
    }

    /// Number of passes over the workload.
    ///
    /// Never zero: even a repeat factor of zero runs the workload once.
    pub const fn outer_iterations(self) -> u32 {
        (self.repeat_factor >> 7) + 1
    }
}
