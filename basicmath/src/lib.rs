// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numerical kernels for CPU benchmarking.
//!
//! The main entry point is a closed-form cubic solver. It finds every real
//! root of `a x³ + b x² + c x + d = 0` with a fixed sequence of floating
//! point operations and one three-way branch, so its cost stays predictable
//! on small processors. There is also a bit-by-bit integer square root that
//! uses neither floating point nor division.
//!
//! ```
//! use basicmath::{solve_cubic, Cubic, RootKind};
//!
//! // (x - 2)(x - 2.5)(x - 6)
//! let mut roots = solve_cubic(1.0, -10.5, 32.0, -30.0);
//! roots.sort_by(f64::total_cmp);
//! assert_eq!(roots.len(), 3);
//! assert!((roots[0] - 2.0).abs() < 1e-9);
//! assert!((roots[2] - 6.0).abs() < 1e-9);
//!
//! let cubic = Cubic::new(1.0, -4.5, 17.0, -30.0);
//! assert_eq!(cubic.classify(), RootKind::OneReal);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` targets, which is where the benchmark usually runs.
//!
//! [`libm`]: https://docs.rs/libm

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod cubic;
mod isqrt;
#[cfg(feature = "libm")]
mod libm_polyfill;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("basicmath requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

pub use cubic::{solve_cubic, solve_cubic_into, Cubic, RootKind};
pub use isqrt::{usqrt, IntSqrt};
