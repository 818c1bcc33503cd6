// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cubic equations solved on every pass.

use std::hint::black_box;

use basicmath::{solve_cubic_into, Cubic};

/// Equations solved at the start of the first pass.
///
/// Only the last three come back unchanged on later passes; see
/// [`Workload`].
pub const FIXED_CUBICS: [Cubic; 4] = [
    // Three roots: 2, 6 and 2.5.
    Cubic::new(1.0, -10.5, 32.0, -30.0),
    // One root: 2.5.
    Cubic::new(1.0, -4.5, 17.0, -30.0),
    Cubic::new(1.0, -3.5, 22.0, -31.0),
    Cubic::new(1.0, -13.7, 1.0, -35.0),
];

/// The coefficients the sweep's loop counters stop at.
pub const SWEEP_EXIT: Cubic = Cubic::new(3.0, 8.0, 6.0, -3.0);

/// Number of equations in [`sweep`].
pub const SWEEP_LEN: usize = 16;

/// Solver calls per pass.
pub const SOLVES_PER_PASS: usize = FIXED_CUBICS.len() + SWEEP_LEN;

/// Call `f` with each equation of the coefficient sweep.
///
/// The coefficients are stepped as floats, so `c` takes the values 5 and
/// 5.5 while the others move in whole steps. Returns the values the loop
/// counters hold once every loop has finished, which is [`SWEEP_EXIT`].
pub fn sweep(mut f: impl FnMut(Cubic)) -> Cubic {
    let mut a = 1.0;
    let mut b = 10.0;
    let mut c = 5.0;
    let mut d = -1.0;
    while a < 3.0 {
        b = 10.0;
        while b > 8.0 {
            c = 5.0;
            while c < 6.0 {
                d = -1.0;
                while d > -3.0 {
                    f(Cubic::new(a, b, c, d));
                    d -= 1.0;
                }
                c += 0.5;
            }
            b -= 1.0;
        }
        a += 1.0;
    }
    Cubic::new(a, b, c, d)
}

/// Counts from one pass over the workload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Solver calls made.
    pub solves: usize,
    /// Roots reported, summed over all calls.
    pub roots: usize,
}

#[inline]
fn solve(cubic: Cubic, out: &mut [f64; 3]) -> usize {
    let Cubic { a, b, c, d } = black_box(cubic);
    let n = solve_cubic_into(a, b, c, d, out);
    black_box(&*out);
    n
}

/// The benchmark workload, carried from one pass to the next.
///
/// The first fixed equation shares its coefficients with the sweep's loop
/// counters. The first pass solves `FIXED_CUBICS[0]`; every later pass
/// starts from wherever the previous sweep left the counters, so from the
/// second pass on the leading equation is [`SWEEP_EXIT`], which has a
/// single real root.
#[derive(Clone, Copy, Debug)]
pub struct Workload {
    lead: Cubic,
}

impl Default for Workload {
    fn default() -> Self {
        Self::new()
    }
}

impl Workload {
    /// The workload as it stands before the first pass.
    pub const fn new() -> Self {
        Self {
            lead: FIXED_CUBICS[0],
        }
    }

    /// The equation the next pass solves first.
    pub fn lead(&self) -> Cubic {
        self.lead
    }

    /// Solve every equation once, using `out` as scratch space for the roots.
    pub fn run_pass(&mut self, out: &mut [f64; 3]) -> PassStats {
        let mut stats = PassStats {
            solves: 1,
            roots: solve(self.lead, out),
        };
        for cubic in &FIXED_CUBICS[1..] {
            stats.solves += 1;
            stats.roots += solve(*cubic, out);
        }
        self.lead = sweep(|cubic| {
            stats.solves += 1;
            stats.roots += solve(cubic, out);
        });
        stats
    }
}

#[cfg(test)]
mod tests {
    use basicmath::RootKind;

    use super::{
        sweep, PassStats, Workload, FIXED_CUBICS, SOLVES_PER_PASS, SWEEP_EXIT, SWEEP_LEN,
    };

    #[test]
    fn sweep_visits_every_combination() {
        let mut seen = Vec::new();
        let exit = sweep(|cubic| seen.push((cubic.a, cubic.b, cubic.c, cubic.d)));
        assert_eq!(seen.len(), SWEEP_LEN);
        assert_eq!(seen[0], (1.0, 10.0, 5.0, -1.0));
        assert_eq!(seen[1], (1.0, 10.0, 5.0, -2.0));
        assert_eq!(seen[2], (1.0, 10.0, 5.5, -1.0));
        assert_eq!(seen[15], (2.0, 9.0, 5.5, -2.0));
        assert_eq!(exit, SWEEP_EXIT);
    }

    #[test]
    fn sweep_equations_all_have_three_roots() {
        sweep(|cubic| assert_eq!(cubic.classify(), RootKind::ThreeReal, "{cubic:?}"));
    }

    #[test]
    fn fixed_equations() {
        let kinds = FIXED_CUBICS.map(|cubic| cubic.classify());
        assert_eq!(
            kinds,
            [
                RootKind::ThreeReal,
                RootKind::OneReal,
                RootKind::OneReal,
                RootKind::OneReal
            ]
        );
        assert_eq!(SWEEP_EXIT.classify(), RootKind::OneReal);
    }

    #[test]
    fn first_pass() {
        let mut workload = Workload::new();
        let mut out = [0.0; 3];
        let stats = workload.run_pass(&mut out);
        assert_eq!(
            stats,
            PassStats {
                solves: SOLVES_PER_PASS,
                roots: 3 + 1 + 1 + 1 + 3 * SWEEP_LEN,
            }
        );
        // The last equation solved is the final sweep entry.
        let last = basicmath::solve_cubic(2.0, 9.0, 5.5, -2.0);
        assert_eq!(&out[..], last.as_slice());
    }

    #[test]
    fn later_passes_lead_with_sweep_exit() {
        let mut workload = Workload::new();
        assert_eq!(workload.lead(), FIXED_CUBICS[0]);
        let mut out = [0.0; 3];
        workload.run_pass(&mut out);
        assert_eq!(workload.lead(), SWEEP_EXIT);
        for _ in 0..3 {
            let stats = workload.run_pass(&mut out);
            assert_eq!(
                stats,
                PassStats {
                    solves: SOLVES_PER_PASS,
                    roots: 1 + 1 + 1 + 1 + 3 * SWEEP_LEN,
                }
            );
            assert_eq!(workload.lead(), SWEEP_EXIT);
        }
    }
}
