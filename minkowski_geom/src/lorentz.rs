// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lorentz boosts as affine maps, built in light-cone coordinates.
//!
//! A 1+1D boost is an anisotropic scale in the 45°-rotated basis: one null
//! direction stretches by the Doppler factor `k`, the other compresses by
//! `1/k`. Rotating into that basis, scaling, and rotating back produces the
//! familiar `[cosh φ, sinh φ; sinh φ, cosh φ]` matrix with `k = e^φ`.

use core::f64::consts::FRAC_1_SQRT_2;
use core::fmt;

use crate::{AffineMap, math};

/// Error returned when a boost factor is not a positive finite number.
///
/// Zero and negative factors are outside the group; non-finite factors would
/// build a frame with no inverse, which the session invariants forbid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidBoostFactor {
    /// The rejected factor.
    pub factor: f64,
}

impl fmt::Display for InvalidBoostFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lorentz boost factor must be positive and finite, got {}",
            self.factor
        )
    }
}

impl core::error::Error for InvalidBoostFactor {}

/// Builds the boost with Doppler factor `factor`.
///
/// `factor = e^rapidity`; `boost(1)` is the identity, factors above one boost
/// toward positive x. Construction composes three exact steps whose order is
/// load-bearing: rotate into the light-cone basis, scale the null directions
/// by `factor` and `1/factor`, rotate back.
///
/// ```
/// use minkowski_geom::{Vec2, boost};
///
/// let b = boost(2.0).unwrap();
/// // Null directions stay null; this one stretches by the factor.
/// let lit = b.apply(Vec2::new(1.0, 1.0));
/// assert!((lit.x - 2.0).abs() < 1e-12);
/// assert!((lit.y - 2.0).abs() < 1e-12);
/// ```
pub fn boost(factor: f64) -> Result<AffineMap, InvalidBoostFactor> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(InvalidBoostFactor { factor });
    }
    let c = FRAC_1_SQRT_2;
    Ok(AffineMap::IDENTITY
        .then(AffineMap::from_coeffs([c, -c, c, c, 0.0, 0.0]))
        .then(AffineMap::scale_non_uniform(factor, 1.0 / factor))
        .then(AffineMap::from_coeffs([c, c, -c, c, 0.0, 0.0])))
}

/// Builds the boost with rapidity `phi`, i.e. factor `e^phi`.
///
/// Fails only when `e^phi` overflows to infinity or `phi` is NaN.
pub fn boost_from_rapidity(phi: f64) -> Result<AffineMap, InvalidBoostFactor> {
    boost(math::exp(phi))
}

/// Builds the boost for a velocity `beta` in units of c, `|beta| < 1`.
///
/// The factor is the relativistic Doppler shift `sqrt((1+beta)/(1-beta))`.
/// Velocities at or beyond the speed of light make that expression zero,
/// infinite, or NaN, all of which are rejected.
pub fn boost_from_velocity(beta: f64) -> Result<AffineMap, InvalidBoostFactor> {
    boost(((1.0 + beta) / (1.0 - beta)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;

    fn assert_close(a: AffineMap, b: AffineMap, tol: f64) {
        let (a, b) = (a.coeffs(), b.coeffs());
        for i in 0..6 {
            assert!(
                (a[i] - b[i]).abs() < tol,
                "coefficient {i} differs: {} vs {}",
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn unit_factor_is_identity() {
        assert_close(boost(1.0).unwrap(), AffineMap::IDENTITY, 1e-12);
    }

    #[test]
    fn boost_matches_hyperbolic_closed_form() {
        // factor 2: cosh = (2 + 1/2)/2, sinh = (2 - 1/2)/2.
        let b = boost(2.0).unwrap();
        assert_close(
            b,
            AffineMap::from_coeffs([1.25, 0.75, 0.75, 1.25, 0.0, 0.0]),
            1e-12,
        );
    }

    #[test]
    fn boost_and_inverse_factor_cancel() {
        for f in [0.25, 0.5, 2.0, 3.0, 10.0] {
            let fwd = boost(f).unwrap();
            let back = boost(1.0 / f).unwrap();
            assert_close(fwd.then(back), AffineMap::IDENTITY, 1e-9);
            assert_close(back.then(fwd), AffineMap::IDENTITY, 1e-9);
        }
    }

    #[test]
    fn null_directions_are_eigenvectors() {
        let f = 3.0;
        let b = boost(f).unwrap();

        let lit = b.apply(Vec2::new(1.0, 1.0));
        assert!((lit.x - f).abs() < 1e-12);
        assert!((lit.y - f).abs() < 1e-12);

        let dim = b.apply(Vec2::new(1.0, -1.0));
        assert!((dim.x - 1.0 / f).abs() < 1e-12);
        assert!((dim.y + 1.0 / f).abs() < 1e-12);
    }

    #[test]
    fn boosts_preserve_area() {
        for f in [0.1, 0.5, 1.0, 4.0, 25.0] {
            let det = boost(f).unwrap().determinant();
            assert!((det - 1.0).abs() < 1e-9, "determinant for {f}: {det}");
        }
    }

    #[test]
    fn invalid_factors_are_rejected() {
        for f in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = boost(f).unwrap_err();
            assert!(err.factor == f || err.factor.is_nan());
        }
    }

    #[test]
    fn rapidity_is_log_of_factor() {
        assert_close(
            boost_from_rapidity(0.0).unwrap(),
            AffineMap::IDENTITY,
            1e-12,
        );
        assert_close(
            boost_from_rapidity(core::f64::consts::LN_2).unwrap(),
            boost(2.0).unwrap(),
            1e-9,
        );
        assert!(boost_from_rapidity(1e4).is_err());
        assert!(boost_from_rapidity(f64::NAN).is_err());
    }

    #[test]
    fn velocity_maps_to_doppler_factor() {
        assert_close(
            boost_from_velocity(0.0).unwrap(),
            AffineMap::IDENTITY,
            1e-12,
        );
        // beta = 0.6 gives factor sqrt(1.6/0.4) = 2 exactly.
        assert_close(boost_from_velocity(0.6).unwrap(), boost(2.0).unwrap(), 1e-12);
        assert_close(
            boost_from_velocity(-0.6).unwrap(),
            boost(0.5).unwrap(),
            1e-12,
        );
        assert!(boost_from_velocity(1.0).is_err());
        assert!(boost_from_velocity(-1.0).is_err());
        assert!(boost_from_velocity(2.0).is_err());
    }

    #[test]
    fn pivoted_preview_keeps_the_pivot_fixed() {
        // The frame-switching protocol: conjugate the boost by the pivot's
        // image under the committed frame.
        let committed = boost(1.5)
            .unwrap()
            .then_translate(Vec2::new(3.0, -2.0));
        let pivot = Vec2::new(2.0, 1.0);
        let pivot_in_committed = committed.apply(pivot);

        let preview = committed
            .then_translate(-pivot_in_committed)
            .then(boost(2.0).unwrap())
            .then_translate(pivot_in_committed);

        let moved = preview.apply(pivot);
        assert!((moved.x - pivot_in_committed.x).abs() < 1e-9);
        assert!((moved.y - pivot_in_committed.y).abs() < 1e-9);
    }
}
