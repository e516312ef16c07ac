// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

use alloc::format;
use alloc::string::{String, ToString};

/// Formats a tick value for display next to its grid line.
///
/// The value is rounded to ten significant digits, which hides the
/// floating point noise that stepping accumulates, and anything that
/// rounds to within `1e-13` of zero is printed as `"0"`. The result
/// carries no unit; callers append their own.
///
/// ```
/// use minkowski_grid::format_tick;
///
/// assert_eq!(format_tick(75.0), "75");
/// assert_eq!(format_tick(1.0000000000000002e-14), "0");
/// assert_eq!(format_tick(3.14159265358979), "3.141592654");
/// ```
#[must_use]
pub fn format_tick(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // Ten significant digits, via the decimal representation rather
    // than arithmetic scaling, which would misround near exponent
    // boundaries.
    let rounded: f64 = format!("{value:.9e}").parse().unwrap_or(value);
    if rounded.abs() < 1e-13 {
        String::from("0")
    } else {
        rounded.to_string()
    }
}
