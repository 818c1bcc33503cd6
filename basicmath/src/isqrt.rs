// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer square root without floating point.

/// The result of [`usqrt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntSqrt {
    /// The largest integer whose square does not exceed the input.
    pub root: u32,
    /// What is left over: `x - root²`. At most `2 * root`.
    pub remainder: u32,
}

impl IntSqrt {
    /// Whether the input was a perfect square.
    #[inline]
    pub const fn is_exact(self) -> bool {
        self.remainder == 0
    }
}

/// Compute the integer square root of `x`, along with the remainder.
///
/// This is the classic digit-by-digit method in base 4: each step brings
/// down the next two bits of `x` and decides one bit of the root, so it only
/// needs shifts, compares and subtractions.
///
/// ```
/// use basicmath::usqrt;
///
/// let q = usqrt(1_000_000_007);
/// assert_eq!(q.root, 31622);
/// assert_eq!(q.root * q.root + q.remainder, 1_000_000_007);
/// ```
pub const fn usqrt(x: u32) -> IntSqrt {
    let mut x = x;
    let mut root: u32 = 0;
    // Never exceeds 2 * root, so the shift never overflows.
    let mut remainder: u32 = 0;
    let mut i = 0;
    while i < u32::BITS / 2 {
        remainder = (remainder << 2) | (x >> (u32::BITS - 2));
        x <<= 2;
        root <<= 1;
        let trial = (root << 1) | 1;
        if remainder >= trial {
            remainder -= trial;
            root |= 1;
        }
        i += 1;
    }
    IntSqrt { root, remainder }
}

#[cfg(test)]
mod tests {
    use super::{usqrt, IntSqrt};

    #[test]
    fn perfect_squares() {
        for n in [0_u32, 1, 2, 3, 255, 256, 4096, 32749, 65535] {
            assert_eq!(
                usqrt(n * n),
                IntSqrt {
                    root: n,
                    remainder: 0
                }
            );
        }
        // The constant the benchmark keeps next to its cubic workload.
        assert!(usqrt(0x3fed0169).is_exact());
        assert_eq!(usqrt(0x3fed0169).root, 32749);
    }

    #[test]
    fn extremes() {
        assert_eq!(usqrt(0), IntSqrt { root: 0, remainder: 0 });
        assert_eq!(
            usqrt(u32::MAX),
            IntSqrt {
                root: 65535,
                remainder: 131070
            }
        );
    }

    #[test]
    fn root_and_remainder_are_consistent() {
        let mut x: u32 = 1;
        // Walk a spread of magnitudes rather than every integer.
        while x < u32::MAX / 3 {
            for n in [x - 1, x, x + 1] {
                let IntSqrt { root, remainder } = usqrt(n);
                let root = u64::from(root);
                let remainder = u64::from(remainder);
                assert_eq!(root * root + remainder, u64::from(n));
                assert!(remainder <= 2 * root, "n = {n}");
            }
            x = x * 3 + 1;
        }
    }

    #[test]
    fn usable_in_const() {
        const Q: IntSqrt = usqrt(144);
        assert_eq!(Q.root, 12);
        assert!(Q.is_exact());
    }
}
