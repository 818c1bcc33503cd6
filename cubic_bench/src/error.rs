// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::num::ParseIntError;

/// Errors from reading the harness configuration.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The build-time repeat factor is not a non-negative integer.
    #[error("invalid repeat factor {value:?}: {source}")]
    InvalidRepeatFactor {
        /// The offending text, trimmed.
        value: String,
        /// Why it failed to parse.
        source: ParseIntError,
    },
}

impl ConfigError {
    /// Creates a `ConfigError::InvalidRepeatFactor`.
    pub fn invalid_repeat_factor(value: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidRepeatFactor {
            value: value.into(),
            source,
        }
    }
}
