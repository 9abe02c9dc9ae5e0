// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal transform and bounding-box types for the host boundary.
//!
//! Scrim does no geometry of its own: transforms are composed parent-first
//! down the traversal and boxes are re-bounded after transformation, nothing
//! more. This module covers exactly that subset without pulling in a
//! linear-algebra crate.

use core::ops::Mul;

/// A column-major 4×4 affine transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix. The fourth row is assumed
/// affine (`[0, 0, 0, 1]`); hosts with projective transforms flatten them
/// before handing them over.
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

    /// Applies the transform to a point.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, p: [f64; 3]) -> [f64; 3] {
        let c = &self.cols;
        [
            c[0][0] * p[0] + c[1][0] * p[1] + c[2][0] * p[2] + c[3][0],
            c[0][1] * p[0] + c[1][1] * p[1] + c[2][1] * p[2] + c[3][1],
            c[0][2] * p[0] + c[1][2] * p[1] + c[2][2] * p[2] + c[3][2],
        ]
    }

    /// Is every element [finite](f64::is_finite)?
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cols
            .iter()
            .all(|col| col.iter().all(|v| v.is_finite()))
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
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        for j in 0..4 {
            for i in 0..4 {
                out[j][i] =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
            }
        }
        Self { cols: out }
    }
}

/// An axis-aligned box accumulated across component bounds.
///
/// The empty box has `min` above `max` in every axis, so `union` and
/// `include_point` need no special cases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Smallest corner.
    pub min: [f64; 3],
    /// Largest corner.
    pub max: [f64; 3],
}

impl BoundingBox {
    /// The empty box; the identity for [`union`](Self::union).
    pub const EMPTY: Self = Self {
        min: [f64::INFINITY; 3],
        max: [f64::NEG_INFINITY; 3],
    };

    /// Creates a box from its corners.
    #[must_use]
    pub const fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// Returns whether the box contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    /// Grows the box to contain `p`.
    pub fn include_point(&mut self, p: [f64; 3]) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(p[axis]);
            self.max[axis] = self.max[axis].max(p[axis]);
        }
    }

    /// Grows the box to contain `other`.
    pub fn union(&mut self, other: &Self) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(other.min[axis]);
            self.max[axis] = self.max[axis].max(other.max[axis]);
        }
    }

    /// Returns the axis-aligned box containing this box's eight transformed
    /// corners. The empty box stays empty.
    #[must_use]
    pub fn transformed(&self, transform: &Transform3d) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let mut out = Self::EMPTY;
        for corner in 0..8 {
            let p = [
                if corner & 1 == 0 { self.min[0] } else { self.max[0] },
                if corner & 2 == 0 { self.min[1] } else { self.max[1] },
                if corner & 4 == 0 { self.min[2] } else { self.max[2] },
            ];
            out.include_point(transform.transform_point(p));
        }
        out
    }

    /// Returns whether `p` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, p: [f64; 3]) -> bool {
        (0..3).all(|axis| self.min[axis] <= p[axis] && p[axis] <= self.max[axis])
    }
}

impl Default for BoundingBox {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}
