// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-major 4×4 rigid/affine transform.
//!
//! Covers what pose composition needs: translation, non-uniform scale,
//! rotations about X and Z, composition, and point transformation. The
//! translation, scale, and composition constructors are `const` so that rig
//! tables can be baked at compile time.

use core::ops::Mul;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A column-major 4×4 transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column*, matching the layout GPU APIs expect for
/// model matrices. Composition follows the usual convention: `a * b` applies
/// `b` first, then `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Creates a non-uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            cols: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a right-handed rotation around the X axis (radians).
    ///
    /// Positive angles tip +Y toward +Z.
    #[inline]
    #[must_use]
    pub fn from_rotation_x(radians: f64) -> Self {
        let (s, c) = sin_cos(radians);
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, s, 0.0],
                [0.0, -s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation around the Z axis (radians).
    #[inline]
    #[must_use]
    pub fn from_rotation_z(radians: f64) -> Self {
        let (s, c) = sin_cos(radians);
        Self {
            cols: [
                [c, s, 0.0, 0.0],
                [-s, c, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Composes two transforms: the result applies `rhs` first, then `self`.
    ///
    /// This is the `const` form of `self * rhs`.
    #[must_use]
    pub const fn concat(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        let mut j = 0;
        while j < 4 {
            let mut i = 0;
            while i < 4 {
                out[j][i] =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }

    /// Returns the translation component (column 3, without `w`).
    #[inline]
    #[must_use]
    pub const fn translation(self) -> [f64; 3] {
        let t = self.cols[3];
        [t[0], t[1], t[2]]
    }

    /// Transforms a point (implicit `w = 1`).
    #[must_use]
    pub fn transform_point(self, p: [f64; 3]) -> [f64; 3] {
        let c = &self.cols;
        let mut out = [0.0; 3];
        for (i, v) in out.iter_mut().enumerate() {
            *v = c[0][i] * p[0] + c[1][i] * p[1] + c[2][i] * p[2] + c[3][i];
        }
        out
    }

    /// Flattens to 16 `f32`s in column-major order, ready for a uniform or
    /// instance buffer.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "GPU model matrices are single precision"
    )]
    pub fn to_cols_array_f32(self) -> [f32; 16] {
        let mut out = [0.0_f32; 16];
        for (j, col) in self.cols.iter().enumerate() {
            for (i, v) in col.iter().enumerate() {
                out[j * 4 + i] = *v as f32;
            }
        }
        out
    }

    /// Is every element of this transform [finite]?
    ///
    /// [finite]: f64::is_finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.concat(rhs)
    }
}

#[inline]
fn sin_cos(radians: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    let sc = radians.sin_cos();
    #[cfg(not(feature = "std"))]
    let sc = (radians.sin(), radians.cos());
    sc
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_point_eq(a: [f64; 3], b: [f64; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < EPS, "expected {b:?}, got {a:?}");
        }
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform3d::default(), Transform3d::IDENTITY);
    }

    #[test]
    fn identity_multiply() {
        let t = Transform3d::from_translation(1.0, 2.0, 3.0);
        assert_eq!(Transform3d::IDENTITY * t, t);
        assert_eq!(t * Transform3d::IDENTITY, t);
    }

    #[test]
    fn concat_matches_mul() {
        let t = Transform3d::from_translation(1.0, -2.0, 0.5);
        let s = Transform3d::from_scale(0.2, 0.6, 0.8);
        assert_eq!(t.concat(s), t * s);
    }

    #[test]
    fn translate_then_scale_keeps_offset() {
        // Rig parts are `T * S`: scale about the part's own center, then offset.
        let local = Transform3d::from_translation(1.15, -0.4, -0.4)
            .concat(Transform3d::from_scale(0.2, 0.6, 0.8));
        assert_eq!(local.translation(), [1.15, -0.4, -0.4]);
        assert_point_eq(local.transform_point([1.0, 1.0, 1.0]), [1.35, 0.2, 0.4]);
    }

    #[test]
    fn rotation_x_quarter_turn() {
        let r = Transform3d::from_rotation_x(core::f64::consts::FRAC_PI_2);
        // +Y goes to +Z, +Z goes to -Y.
        assert_point_eq(r.transform_point([0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_point_eq(r.transform_point([0.0, 0.0, 1.0]), [0.0, -1.0, 0.0]);
        assert_point_eq(r.transform_point([1.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let r = Transform3d::from_rotation_z(core::f64::consts::FRAC_PI_2);
        assert_point_eq(r.transform_point([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn translation_after_rotation_is_unrotated() {
        let pose = Transform3d::from_translation(0.0, 2.0, 0.0)
            * Transform3d::from_rotation_x(0.3);
        assert_eq!(pose.translation(), [0.0, 2.0, 0.0]);
    }

    #[test]
    fn f32_flattening_is_column_major() {
        let t = Transform3d::from_translation(5.0, 6.0, 7.0);
        let flat = t.to_cols_array_f32();
        assert_eq!(&flat[12..16], &[5.0, 6.0, 7.0, 1.0]);
        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[1], 0.0);
    }

    #[test]
    fn non_finite_detected() {
        let mut t = Transform3d::IDENTITY;
        assert!(t.is_finite());
        t.cols[2][1] = f64::NAN;
        assert!(!t.is_finite());
        t.cols[2][1] = f64::INFINITY;
        assert!(!t.is_finite());
    }
}
