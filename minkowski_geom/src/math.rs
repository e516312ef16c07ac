// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feature-dispatched transcendental helpers.
//!
//! Algebraic float operations (`sqrt`, `abs`, and friends) are available in
//! `core`; the exponential is not, so no_std builds route through `libm`.

#[cfg(feature = "std")]
pub(crate) fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(not(feature = "std"))]
pub(crate) fn exp(x: f64) -> f64 {
    libm::exp(x)
}
