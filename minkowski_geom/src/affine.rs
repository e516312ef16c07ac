// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine maps over the spacetime plane and their exact closed-form inversion.

use core::fmt;

use crate::Vec2;

/// 2D affine map stored as two basis images plus a translation.
///
/// The six coefficients `(ix, iy, jx, jy, kx, ky)` represent the map
///
/// ```text
/// p ↦ p.x·(ix, iy) + p.y·(jx, jy) + (kx, ky)
/// ```
///
/// that is, the linear part is given by the images of the two basis vectors
/// and `(kx, ky)` is the translation. The coefficient order matches
/// [`kurbo::Affine::new`], so the `From` conversions in either direction are
/// plain copies.
///
/// Composition reads left to right: `a.then(b)` applies `a` first, then `b`.
/// The session-level projection is built as `frame.then(nav).then(view)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineMap {
    ix: f64,
    iy: f64,
    jx: f64,
    jy: f64,
    kx: f64,
    ky: f64,
}

impl AffineMap {
    /// The identity map.
    pub const IDENTITY: Self = Self::from_coeffs([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Creates a map from raw coefficients `[ix, iy, jx, jy, kx, ky]`.
    #[must_use]
    pub const fn from_coeffs(c: [f64; 6]) -> Self {
        Self {
            ix: c[0],
            iy: c[1],
            jx: c[2],
            jy: c[3],
            kx: c[4],
            ky: c[5],
        }
    }

    /// Returns the raw coefficients `[ix, iy, jx, jy, kx, ky]`.
    ///
    /// This is the interop surface for rendering backends with their own
    /// transform representation; the layout equals `kurbo::Affine::as_coeffs`.
    #[must_use]
    pub const fn coeffs(self) -> [f64; 6] {
        [self.ix, self.iy, self.jx, self.jy, self.kx, self.ky]
    }

    /// A pure translation by `delta`.
    #[must_use]
    pub const fn translate(delta: Vec2) -> Self {
        Self::from_coeffs([1.0, 0.0, 0.0, 1.0, delta.x, delta.y])
    }

    /// A uniform scale about the origin.
    #[must_use]
    pub const fn scale(s: f64) -> Self {
        Self::scale_non_uniform(s, s)
    }

    /// An anisotropic scale about the origin.
    #[must_use]
    pub const fn scale_non_uniform(sx: f64, sy: f64) -> Self {
        Self::from_coeffs([sx, 0.0, 0.0, sy, 0.0, 0.0])
    }

    /// The translation component.
    #[must_use]
    pub const fn translation(self) -> Vec2 {
        Vec2::new(self.kx, self.ky)
    }

    /// Composes two maps, applying `self` first and `other` second.
    ///
    /// Each column of `self` is mapped through `other`: linearly for the two
    /// basis images, affinely for the translation. For all points `p`,
    /// `a.then(b).apply(p) == b.apply(a.apply(p))`.
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        Self {
            ix: self.ix * other.ix + self.iy * other.jx,
            iy: self.ix * other.iy + self.iy * other.jy,
            jx: self.jx * other.ix + self.jy * other.jx,
            jy: self.jx * other.iy + self.jy * other.jy,
            kx: self.kx * other.ix + self.ky * other.jx + other.kx,
            ky: self.kx * other.iy + self.ky * other.jy + other.ky,
        }
    }

    /// Adjusts the translation by `delta`, leaving the linear part alone.
    ///
    /// `delta` is expressed in the output space of `self`, which makes
    /// pivot-centered constructions read naturally:
    /// `map.then_translate(-pivot).then(op).then_translate(pivot)`.
    #[must_use]
    pub const fn then_translate(self, delta: Vec2) -> Self {
        Self {
            kx: self.kx + delta.x,
            ky: self.ky + delta.y,
            ..self
        }
    }

    /// Scales the mapped output, `sx` along x and `sy` along y.
    ///
    /// Every x-coefficient (`ix`, `jx`, `kx`) is multiplied by `sx` and every
    /// y-coefficient by `sy`.
    #[must_use]
    pub const fn then_scale(self, sx: f64, sy: f64) -> Self {
        Self {
            ix: self.ix * sx,
            iy: self.iy * sy,
            jx: self.jx * sx,
            jy: self.jy * sy,
            kx: self.kx * sx,
            ky: self.ky * sy,
        }
    }

    /// Forward-maps a point.
    #[must_use]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * self.ix + p.y * self.jx + self.kx,
            p.x * self.iy + p.y * self.jy + self.ky,
        )
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(self) -> f64 {
        self.ix * self.jy - self.iy * self.jx
    }

    /// Returns `true` when all six coefficients are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.ix.is_finite()
            && self.iy.is_finite()
            && self.jx.is_finite()
            && self.jy.is_finite()
            && self.kx.is_finite()
            && self.ky.is_finite()
    }

    /// Computes the exact inverse by undoing the linear part one elementary
    /// operation at a time.
    ///
    /// The linear part decomposes as rotation · shear · scale. Each step is
    /// applied to a working copy `t` and mirrored onto an accumulator `r`
    /// starting at identity; once `t`'s linear part has been reduced to
    /// identity, `t`'s translation is the image of the original translation
    /// and subtracting it from `r` finishes the inverse:
    ///
    /// 1. Tilt by the rotation aligning the i-basis with the x-axis.
    /// 2. Shear horizontally to zero the tilted j-basis' x-component.
    /// 3. Scale each axis by the reciprocal of the remaining diagonal.
    /// 4. Subtract `t`'s translation from `r`'s.
    ///
    /// Exact for every non-degenerate linear part. A zero-length i-basis or
    /// parallel i/j bases have no inverse and yield [`SingularTransform`].
    pub fn invert(self) -> Result<Self, SingularTransform> {
        let mut t = self;
        let mut r = Self::IDENTITY;

        let i_len = (t.ix * t.ix + t.iy * t.iy).sqrt();
        if i_len == 0.0 {
            return Err(SingularTransform {
                coeffs: self.coeffs(),
            });
        }
        let cos = t.ix / i_len;
        let sin = -t.iy / i_len;
        t = t.tilt(sin, cos);
        r = r.tilt(sin, cos);

        // The tilted i-basis is (i_len, 0); a j-basis with no vertical
        // component left is parallel to it.
        if t.jy == 0.0 {
            return Err(SingularTransform {
                coeffs: self.coeffs(),
            });
        }
        let shear = -t.jx / t.jy;
        t = t.horizontal_shear(shear);
        r = r.horizontal_shear(shear);

        let sx = 1.0 / t.ix;
        let sy = 1.0 / t.jy;
        t = t.then_scale(sx, sy);
        r = r.then_scale(sx, sy);

        r.kx -= t.kx;
        r.ky -= t.ky;
        Ok(r)
    }

    /// Rotates all three columns by the angle with the given sine and cosine.
    const fn tilt(self, sin: f64, cos: f64) -> Self {
        Self {
            ix: self.ix * cos - self.iy * sin,
            iy: self.iy * cos + self.ix * sin,
            jx: self.jx * cos - self.jy * sin,
            jy: self.jy * cos + self.jx * sin,
            kx: self.kx * cos - self.ky * sin,
            ky: self.ky * cos + self.kx * sin,
        }
    }

    /// Adds `shear` times each column's y-component to its x-component.
    const fn horizontal_shear(self, shear: f64) -> Self {
        Self {
            ix: self.ix + self.iy * shear,
            jx: self.jx + self.jy * shear,
            kx: self.kx + self.ky * shear,
            ..self
        }
    }
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AffineMap> for kurbo::Affine {
    fn from(m: AffineMap) -> Self {
        Self::new(m.coeffs())
    }
}

impl From<kurbo::Affine> for AffineMap {
    fn from(a: kurbo::Affine) -> Self {
        Self::from_coeffs(a.as_coeffs())
    }
}

/// Error returned by [`AffineMap::invert`] for a degenerate linear part.
///
/// Carries the coefficients of the offending map for diagnosis. Composition
/// and translation never fail; only inversion can observe degeneracy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingularTransform {
    /// Coefficients of the map that has no inverse.
    pub coeffs: [f64; 6],
}

impl fmt::Display for SingularTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "affine map {:?} has no inverse (degenerate linear part)",
            self.coeffs
        )
    }
}

impl core::error::Error for SingularTransform {}
