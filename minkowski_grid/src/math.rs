// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating point helpers that need either `std` or `libm`.

#[cfg(feature = "std")]
pub(crate) fn log10(x: f64) -> f64 {
    x.log10()
}

#[cfg(not(feature = "std"))]
pub(crate) fn log10(x: f64) -> f64 {
    libm::log10(x)
}
