// src/intersection.rs

use crate::geometry::Vec3;

/// Below this |normal · ray| the ray is treated as parallel to the plane.
pub const PLANE_EPSILON: f32 = 1e-6;

/// Unnormalized plane normal of the triangle `(v0, v1, v2)`.
#[inline]
pub fn plane_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0)
}

/// Intersects the line through `camera_pos` and `ray_point` with the plane of
/// the triangle `(v0, v1, v2)`.
///
/// Returns `None` when the line is parallel to the plane, and also when the
/// intersection parameter is positive: only hits on the `ray_point` side of the
/// camera are accepted. A degenerate triangle has a zero normal and never hits.
pub fn intersect_ray_with_triangle_plane(
    camera_pos: Vec3,
    ray_point: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<Vec3> {
    let normal = plane_normal(v0, v1, v2);
    let u = camera_pos - ray_point;
    let denom = normal.dot(u);

    if denom.abs() <= PLANE_EPSILON {
        return None;
    }

    let w = camera_pos - v0;
    let fac = -normal.dot(w) / denom;

    if fac > 0.0 {
        return None;
    }

    Some(camera_pos + u * fac)
}
