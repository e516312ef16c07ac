// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step rounding for grid planning.

use crate::math;

/// Rounds `x` to one significant decimal digit.
///
/// The mantissa is rounded half-up, so a tie moves toward positive
/// infinity: `75.0` becomes `80.0` and `-45.0` becomes `-40.0`.
/// Zero and non-finite inputs are returned unchanged.
///
/// ```
/// use minkowski_grid::round_to_one_sig_fig;
///
/// assert_eq!(round_to_one_sig_fig(73.0), 70.0);
/// assert_eq!(round_to_one_sig_fig(75.0), 80.0);
/// assert_eq!(round_to_one_sig_fig(0.0347), 0.03);
/// ```
#[must_use]
pub fn round_to_one_sig_fig(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let exponent = math::log10(x.abs()).floor();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the decimal exponent of a finite nonzero f64 is within [-324, 308]"
    )]
    let scale = 10.0_f64.powi(exponent as i32);
    let mantissa = x / scale;
    (mantissa + 0.5).floor() * scale
}

/// Returns the largest integer multiple of `step` that is less than or
/// equal to `x`.
///
/// `step` is expected to be positive and finite; other steps produce
/// non-finite results.
///
/// ```
/// use minkowski_grid::prev_step;
///
/// assert_eq!(prev_step(-3.0, 10.0), -10.0);
/// assert_eq!(prev_step(0.5, 80.0), 0.0);
/// assert_eq!(prev_step(-10.0, 5.0), -10.0);
/// ```
#[must_use]
pub fn prev_step(x: f64, step: f64) -> f64 {
    step * (x / step).floor()
}
