// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[expect(
    dead_code,
    reason = "unused if std and libm are both around; abs and copysign are inherent in core"
)]
pub(crate) trait FloatFuncs: Sized {
    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn cos(self) -> Self;
    fn acos(self) -> Self;
    fn abs(self) -> Self;
    fn copysign(self, sign: Self) -> Self;
}

impl FloatFuncs for f64 {
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn cbrt(self) -> Self {
        libm::cbrt(self)
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn acos(self) -> Self {
        libm::acos(self)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn copysign(self, sign: Self) -> Self {
        libm::copysign(self, sign)
    }
}
