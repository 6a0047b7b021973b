// src/barycentric.rs

use crate::geometry::Vec3;

/// Per-triangle constants for the barycentric containment test.
///
/// Must be derived from the same vertices it is tested against; a basis from a
/// different triangle silently produces wrong containment results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarycentricBasis {
    pub bv0: Vec3,
    pub bv1: Vec3,
    pub d00: f32,
    pub d01: f32,
    pub d11: f32,
    pub inv_denom: f32,
}

impl BarycentricBasis {
    pub fn from_vertices(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let bv0 = v1 - v0;
        let bv1 = v2 - v0;
        let d00 = bv0.dot(bv0);
        let d01 = bv0.dot(bv1);
        let d11 = bv1.dot(bv1);
        let inv_denom = 1.0 / (d00 * d11 - d01 * d01);

        Self {
            bv0,
            bv1,
            d00,
            d01,
            d11,
            inv_denom,
        }
    }

    /// Zero-area triangles give a non-finite `inv_denom`.
    pub fn is_degenerate(&self) -> bool {
        !self.inv_denom.is_finite()
    }
}

/// Barycentric weights `(w0, w1, w2)` of an accepted point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub w0: f32,
    pub w1: f32,
    pub w2: f32,
}

impl Weights {
    pub fn sum(&self) -> f32 {
        self.w0 + self.w1 + self.w2
    }
}

/// Classifies `point` (assumed to lie in the triangle's plane) as inside or
/// outside the triangle anchored at `tri_v0`.
///
/// Rejects as soon as any weight is negative, checking `w1`, then `w2`, then `w0`.
#[inline]
pub fn compute_barycentric_weights(
    point: Vec3,
    tri_v0: Vec3,
    basis: &BarycentricBasis,
) -> Option<Weights> {
    let v2 = point - tri_v0;
    let d20 = v2.dot(basis.bv0);
    let d21 = v2.dot(basis.bv1);

    let w1 = (basis.d11 * d20 - basis.d01 * d21) * basis.inv_denom;
    if w1 < 0.0 {
        return None;
    }

    let w2 = (basis.d00 * d21 - basis.d01 * d20) * basis.inv_denom;
    if w2 < 0.0 {
        return None;
    }

    let w0 = 1.0 - w1 - w2;
    if w0 < 0.0 {
        return None;
    }

    Some(Weights { w0, w1, w2 })
}
