// src/triangle.rs

use crate::barycentric::BarycentricBasis;
use crate::geometry::{Vec2, Vec3};

/// World-space triangle as handed to the row rasterizer.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Per-vertex texture coordinates; `None` draws the flat `color`.
    pub uvs: Option<[Vec2; 3]>,
    pub basis: BarycentricBasis,
    /// Flat color used when no texel is sampled.
    pub color: u32,
    /// Flat per-channel darken applied to every drawn pixel before depth shading.
    pub darken_by: i32,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self::with_basis(v0, v1, v2, BarycentricBasis::from_vertices(v0, v1, v2))
    }

    /// Uses a basis precomputed by the caller. It is trusted as-is.
    pub fn with_basis(v0: Vec3, v1: Vec3, v2: Vec3, basis: BarycentricBasis) -> Self {
        Self {
            v0,
            v1,
            v2,
            uvs: None,
            basis,
            color: 0,
            darken_by: 0,
        }
    }

    pub fn with_uvs(mut self, uv0: Vec2, uv1: Vec2, uv2: Vec2) -> Self {
        self.uvs = Some([uv0, uv1, uv2]);
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_darken(mut self, darken_by: i32) -> Self {
        self.darken_by = darken_by;
        self
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn is_degenerate(&self) -> bool {
        self.basis.is_degenerate()
    }

    /// Rebuilds the basis after the vertices were moved.
    pub fn translated(&self, offset: Vec3) -> Self {
        let v0 = self.v0 + offset;
        let v1 = self.v1 + offset;
        let v2 = self.v2 + offset;
        Self {
            v0,
            v1,
            v2,
            basis: BarycentricBasis::from_vertices(v0, v1, v2),
            ..self.clone()
        }
    }
}
