// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use arrayvec::ArrayVec;

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "unused if libm and std are both around")]
use crate::libm_polyfill::FloatFuncs as _;

/// A cubic polynomial `a x³ + b x² + c x + d`.
///
/// The leading coefficient `a` is expected to be non-zero. Nothing checks
/// this: a zero `a` leads to divisions by zero inside the solver and the
/// resulting roots are not meaningful (see [`solve_cubic`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cubic {
    /// The coefficient of `x³`.
    pub a: f64,
    /// The coefficient of `x²`.
    pub b: f64,
    /// The coefficient of `x`.
    pub c: f64,
    /// The constant term.
    pub d: f64,
}

/// How the real roots of a cubic are distributed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the sign of the discriminant has exactly three outcomes"
)]
pub enum RootKind {
    /// Three distinct real roots, found with the trigonometric method.
    ThreeReal,
    /// One real root and a pair of complex conjugates, found with
    /// Cardano's formula.
    ///
    /// Inputs that produce a NaN discriminant also land here, so the NaN
    /// carries through to the single root.
    OneReal,
    /// The discriminant is exactly zero: a double or triple root.
    Repeated,
}

/// The depressed form of a normalized cubic.
///
/// Substituting `x = t - shift` into `x³ + a1 x² + a2 x + a3` gives
/// `t³ - 3 q t + 2 r`, and `disc = r² - q³` decides the shape of the roots.
#[derive(Clone, Copy, Debug)]
struct Depressed {
    shift: f64,
    q: f64,
    r: f64,
    disc: f64,
}

impl Depressed {
    #[inline]
    fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        let a1 = b / a;
        let a2 = c / a;
        let a3 = d / a;
        let q = (a1 * a1 - 3.0 * a2) / 9.0;
        let r = (2.0 * a1 * a1 * a1 - 9.0 * a1 * a2 + 27.0 * a3) / 54.0;
        Self {
            shift: a1 / 3.0,
            q,
            r,
            disc: r * r - q * q * q,
        }
    }

    #[inline]
    fn kind(&self) -> RootKind {
        if self.disc < 0.0 {
            RootKind::ThreeReal
        } else if self.disc == 0.0 {
            RootKind::Repeated
        } else {
            RootKind::OneReal
        }
    }

    #[inline]
    fn roots_into(&self, out: &mut [f64; 3]) -> usize {
        let Self { shift, q, r, disc } = *self;
        match self.kind() {
            RootKind::ThreeReal => {
                // q > 0 here, since r² < q³.
                let sqrt_q = q.sqrt();
                // Rounding can push the ratio just outside acos's domain.
                let theta = (r / (q * sqrt_q)).clamp(-1.0, 1.0).acos();
                let m = -2.0 * sqrt_q;
                out[0] = m * (theta / 3.0).cos() - shift;
                out[1] = m * ((theta + TAU) / 3.0).cos() - shift;
                out[2] = m * ((theta + 2.0 * TAU) / 3.0).cos() - shift;
                3
            }
            RootKind::OneReal => {
                let u = (disc.sqrt() + r.abs()).cbrt();
                let t = u + q / u;
                out[0] = (if r < 0.0 { t } else { -t }) - shift;
                1
            }
            RootKind::Repeated => {
                // r² == q³, so q is only negative through rounding.
                let s = q.max(0.0).sqrt().copysign(r);
                out[0] = -2.0 * s - shift;
                out[1] = s - shift;
                out[2] = s - shift;
                3
            }
        }
    }
}

impl Cubic {
    /// Create a new cubic from its coefficients, highest degree first.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The monic cubic `(x - r0)(x - r1)(x - r2)`.
    pub fn from_roots(r0: f64, r1: f64, r2: f64) -> Self {
        Self::new(
            1.0,
            -(r0 + r1 + r2),
            r0 * r1 + r0 * r2 + r1 * r2,
            -(r0 * r1 * r2),
        )
    }

    /// Evaluate the polynomial at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Determine which of the three root patterns this cubic falls into.
    ///
    /// This is the same branch that [`Cubic::roots`] takes.
    pub fn classify(&self) -> RootKind {
        self.depressed().kind()
    }

    /// Find the real roots of this cubic.
    ///
    /// See [`solve_cubic`].
    pub fn roots(&self) -> ArrayVec<f64, 3> {
        solve_cubic(self.a, self.b, self.c, self.d)
    }

    /// Find the real roots of this cubic, writing them into `out`.
    ///
    /// See [`solve_cubic_into`].
    pub fn roots_into(&self, out: &mut [f64; 3]) -> usize {
        self.depressed().roots_into(out)
    }

    #[inline]
    fn depressed(&self) -> Depressed {
        Depressed::new(self.a, self.b, self.c, self.d)
    }
}

/// Find real roots of a cubic equation.
///
/// Returns values of x for which a x³ + b x² + c x + d = 0.
///
/// The cubic is normalized and reduced to depressed form, and the sign of
/// the discriminant picks one of three closed forms:
///
/// - negative: three distinct roots from the trigonometric solution;
/// - positive: one root from Cardano's formula. A NaN discriminant also
///   takes this branch, so the single root comes out NaN;
/// - zero: a double or triple root. Three values are returned, with the
///   repeated root appearing more than once.
///
/// Roots come out in the order the formula produces them; they are not
/// sorted.
///
/// The leading coefficient must be non-zero. If it is zero, the result is
/// undefined: the solver divides by it and returns whatever non-finite
/// values IEEE arithmetic yields. It does not fall back to solving the
/// quadratic.
///
/// See: <https://en.wikipedia.org/wiki/Cubic_equation#Trigonometric_and_hyperbolic_solutions>
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> ArrayVec<f64, 3> {
    let mut buf = [0.0; 3];
    let n = solve_cubic_into(a, b, c, d, &mut buf);
    let mut result = ArrayVec::new();
    for &root in &buf[..n] {
        result.push(root);
    }
    result
}

/// Find real roots of a cubic equation without building a return value.
///
/// The roots are written to the front of `out` and their count (1 or 3) is
/// returned. Entries past the count are left untouched.
///
/// This computes the same thing as [`solve_cubic`], including the same
/// caveats about a zero leading coefficient.
#[inline]
pub fn solve_cubic_into(a: f64, b: f64, c: f64, d: f64, out: &mut [f64; 3]) -> usize {
    Depressed::new(a, b, c, d).roots_into(out)
}
